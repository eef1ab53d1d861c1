use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::error::{configuration_error, Error};

pub const DEFAULT_API_BASE: &str = "https://api.mapbox.com";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_RESULT_LIMIT: usize = 5;
pub const DEFAULT_PLACE_TYPES: [&str; 4] = ["address", "place", "postcode", "neighborhood"];

#[derive(Clone, Debug)]
pub struct MapboxSettings {
    pub api_base: String,
    pub access_token: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchSettings {
    /// Quiet period after the last keystroke before the geocoder is called.
    pub debounce: Duration,
    pub limit: usize,
    pub types: Vec<String>,
    pub language: Option<String>,
    pub country: Option<String>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            limit: DEFAULT_RESULT_LIMIT,
            types: DEFAULT_PLACE_TYPES.iter().map(|t| t.to_string()).collect(),
            language: None,
            country: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub mapbox: MapboxSettings,
    pub search: SearchSettings,
    pub listen_addr: SocketAddr,
}

fn optional_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

impl Config {
    /// Reads the process environment, after loading `.env` if there is one.
    #[tracing::instrument(name = "Config::from_env")]
    pub fn from_env() -> Result<Self, Error> {
        if let Err(err) = dotenv::dotenv() {
            tracing::debug!("no .env file loaded: {}", err);
        }

        let mapbox = MapboxSettings {
            api_base: optional_var("MAPBOX_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.into()),
            access_token: env::var("MAPBOX_ACCESS_TOKEN")?,
        };

        let debounce = match optional_var("WAYFINDER_SEARCH_DEBOUNCE_MS") {
            Some(value) => Duration::from_millis(value.parse().map_err(configuration_error)?),
            None => Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        };

        let search = SearchSettings {
            debounce,
            language: optional_var("WAYFINDER_LANGUAGE"),
            country: optional_var("WAYFINDER_COUNTRY"),
            ..SearchSettings::default()
        };

        let listen_addr = optional_var("WAYFINDER_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.into())
            .parse()
            .map_err(configuration_error)?;

        Ok(Self {
            mapbox,
            search,
            listen_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_defaults() {
        let settings = SearchSettings::default();

        assert_eq!(settings.debounce, Duration::from_millis(500));
        assert_eq!(settings.limit, 5);
        assert_eq!(
            settings.types,
            vec!["address", "place", "postcode", "neighborhood"]
        );
        assert_eq!(settings.language, None);
    }

    #[test]
    fn default_listen_addr_parses() {
        let addr: SocketAddr = DEFAULT_LISTEN_ADDR.parse().unwrap();
        assert_eq!(addr.port(), 3000);
    }
}
