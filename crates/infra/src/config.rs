use tracing::{info, warn};

const DEFAULT_MONGODB_URL: &str = "mongodb://localhost:27017";
const DEFAULT_MONGODB_DATABASE: &str = "chalets";

#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string of the MongoDB deployment holding the reservations
    pub mongodb_url: String,
    /// Name of the database the reservation collections live in
    pub mongodb_database: String,
}

impl Config {
    pub fn new() -> Self {
        let mongodb_url = match std::env::var("MONGODB_URL") {
            Ok(url) => url,
            Err(_) => {
                info!(
                    "Did not find MONGODB_URL environment variable. Falling back to: {}",
                    DEFAULT_MONGODB_URL
                );
                DEFAULT_MONGODB_URL.into()
            }
        };
        let mongodb_database = match std::env::var("MONGODB_DATABASE") {
            Ok(name) if !name.trim().is_empty() => name,
            Ok(name) => {
                warn!(
                    "The given MONGODB_DATABASE: {:?} is not valid, falling back to the default database: {}.",
                    name, DEFAULT_MONGODB_DATABASE
                );
                DEFAULT_MONGODB_DATABASE.into()
            }
            Err(_) => DEFAULT_MONGODB_DATABASE.into(),
        };
        Self {
            mongodb_url,
            mongodb_database,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
