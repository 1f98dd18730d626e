//! Launcher settings.
//!
//! Every field has a default; each can be overridden by an environment
//! variable. Unparsable values are ignored with a warning.

use log::warn;
use std::path::PathBuf;

pub const HOST_VAR: &str = "PLANT_SHOP_HOST";
pub const PORT_VAR: &str = "PLANT_SHOP_PORT";
pub const DIST_VAR: &str = "PLANT_SHOP_DIST";
pub const NO_BROWSER_VAR: &str = "PLANT_SHOP_NO_BROWSER";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the built front end (`trunk build` output).
    pub dist_dir: PathBuf,
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            dist_dir: PathBuf::from("frontend/dist"),
            open_browser: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_VAR).filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        if let Some(port) = lookup(PORT_VAR) {
            match port.trim().parse::<u16>() {
                Ok(port) => config.port = port,
                Err(e) => warn!("Ignoring {}={:?}: {}", PORT_VAR, port, e),
            }
        }
        if let Some(dir) = lookup(DIST_VAR).filter(|d| !d.trim().is_empty()) {
            config.dist_dir = PathBuf::from(dir);
        }
        if let Some(flag) = lookup(NO_BROWSER_VAR) {
            match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => config.open_browser = false,
                "0" | "false" | "no" | "" => {}
                other => warn!("Ignoring {}={:?}", NO_BROWSER_VAR, other),
            }
        }

        config
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn reads_every_override() {
        let config = ServerConfig::from_lookup(lookup(&[
            (HOST_VAR, "0.0.0.0"),
            (PORT_VAR, "9000"),
            (DIST_VAR, "/srv/plants"),
            (NO_BROWSER_VAR, "true"),
        ]));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.dist_dir, PathBuf::from("/srv/plants"));
        assert!(!config.open_browser);
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[
            (PORT_VAR, "eighty"),
            (NO_BROWSER_VAR, "maybe"),
            (HOST_VAR, "  "),
        ]));
        assert_eq!(config, ServerConfig::default());
    }
}
