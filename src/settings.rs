use config::{Config, Environment};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    /// Sessions older than this are rejected by the login guard.
    pub session_max_age_secs: u64,
    /// Bounds for the number of items drawn per outfit suggestion.
    pub outfit_min_items: usize,
    pub outfit_max_items: usize,
}

impl Settings {
    pub fn new() -> Self {
        Config::builder()
            .set_default("session_max_age_secs", 86400i64)
            .unwrap()
            .set_default("outfit_min_items", 2i64)
            .unwrap()
            .set_default("outfit_max_items", 3i64)
            .unwrap()
            .add_source(Environment::default())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }
}
