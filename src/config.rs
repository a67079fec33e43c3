use std::env;

/// Runtime configuration, resolved once at startup from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub secure_cookies: bool,
    /// When set, removing a bookmark also decrements the meme's
    /// popularity counter. Off by default: popularity counts all-time
    /// saves, so toggle-on followed by toggle-off nets +1.
    pub decrement_popularity_on_remove: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:data/memestash.db".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        Self {
            database_url,
            port,
            secure_cookies: env_flag("SECURE_COOKIES", false),
            decrement_popularity_on_remove: env_flag("DECREMENT_POPULARITY_ON_REMOVE", false),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:data/memestash.db".to_string(),
            port: 3000,
            secure_cookies: false,
            decrement_popularity_on_remove: false,
        }
    }
}

fn env_flag(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(v) => matches!(v.as_str(), "1" | "true" | "yes"),
        Err(_) => default,
    }
}
