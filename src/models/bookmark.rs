use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Bookmark {
    pub id: String,
    pub user_id: String,
    pub meme_id: String,
    pub created_at: String,
}

impl Bookmark {
    pub fn new(user_id: String, meme_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            meme_id,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}
