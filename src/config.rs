use crate::storage::resolve_data_path;
use std::{env, path::PathBuf};

pub const DEFAULT_LOCATIONS: [&str; 4] = ["Pattukkottai", "Thanjavur", "Mannargudi", "Chidambaram"];
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub port: u16,
    pub locations: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let locations = env::var("SALES_LOCATIONS")
            .map(|raw| parse_locations(&raw))
            .unwrap_or_default();

        Self {
            data_path: resolve_data_path(),
            port,
            locations: if locations.is_empty() {
                default_locations()
            } else {
                locations
            },
        }
    }
}

pub fn default_locations() -> Vec<String> {
    DEFAULT_LOCATIONS.iter().map(|loc| loc.to_string()).collect()
}

/// Comma-separated list; blanks and repeats are dropped.
pub fn parse_locations(raw: &str) -> Vec<String> {
    let mut locations: Vec<String> = Vec::new();
    for location in raw.split(',').map(str::trim).filter(|loc| !loc.is_empty()) {
        if !locations.iter().any(|known| known == location) {
            locations.push(location.to_string());
        }
    }
    locations
}
