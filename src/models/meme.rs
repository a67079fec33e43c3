use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Sort order for meme listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MemeSort {
    #[serde(rename = "trending")]
    #[default]
    Trending,
    #[serde(rename = "recent")]
    Recent,
}

impl std::fmt::Display for MemeSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemeSort::Trending => write!(f, "trending"),
            MemeSort::Recent => write!(f, "recent"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Meme {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub description: Option<String>,
    pub popularity: i64,
    pub created_at: String,
}

impl Meme {
    pub fn new(title: String, image_url: String, description: Option<String>, popularity: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            image_url,
            description,
            popularity,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}
