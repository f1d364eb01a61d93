use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

pub const DEFAULT_CONFIG_FILE: &str = include_str!("btl.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
    pub uploads: Option<Uploads>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u32,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    #[serde(default)]
    pub cors: bool,
    pub house_page_size: Option<u64>,
    pub max_page_size: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub token_valid_for: Option<Duration>,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Uploads {
    pub dir: PathBuf,
}

impl Default for Uploads {
    fn default() -> Self {
        Config::default().uploads.expect("Uploads configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.db.is_some());
        assert!(cfg.webserver.is_some());
        assert!(cfg.uploads.is_some());
    }

    #[test]
    fn default_webserver_config() {
        let cfg = WebServer::default();
        assert!(!cfg.cors);
        assert_eq!(Some(10), cfg.house_page_size);
        assert_eq!(Some(100), cfg.max_page_size);
        assert_eq!(Some(Duration::from_secs(24 * 60 * 60)), cfg.token_valid_for);
    }

    #[test]
    fn parse_partial_config() {
        let cfg: Config = toml::from_str(
            r#"
            [webserver]
            max-page-size = 20
            "#,
        )
        .unwrap();
        assert!(cfg.db.is_none());
        let webserver = cfg.webserver.unwrap();
        assert_eq!(Some(20), webserver.max_page_size);
        assert_eq!(None, webserver.house_page_size);
        assert_eq!(None, webserver.token_valid_for);
    }
}
