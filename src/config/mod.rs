use anyhow::{anyhow, Result};
use btl_core::pagination::PageLimits;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "btl.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

const DEFAULT_TOKEN_VALID_FOR: Duration = Duration::from_secs(24 * 60 * 60);

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub uploads: Uploads,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u32,
}

pub struct WebServer {
    pub enable_cors: bool,
    pub page_limits: PageLimits,
    pub token_valid_for: Duration,
}

pub struct Uploads {
    /// File system directory for uploaded files (avatars).
    pub dir: PathBuf,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            uploads,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();

        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer {
            cors,
            house_page_size,
            max_page_size,
            token_valid_for,
        } = webserver.unwrap_or_default();

        let defaults = PageLimits::default();
        let page_limits = PageLimits {
            default_page_size: house_page_size.unwrap_or(defaults.default_page_size),
            max_page_size: max_page_size.unwrap_or(defaults.max_page_size),
        };
        if page_limits.default_page_size == 0 || page_limits.max_page_size == 0 {
            return Err(anyhow!("Page sizes must be positive"));
        }
        if page_limits.default_page_size > page_limits.max_page_size {
            return Err(anyhow!(
                "The default page size ({}) exceeds the maximum page size ({})",
                page_limits.default_page_size,
                page_limits.max_page_size
            ));
        }
        let token_valid_for = token_valid_for.unwrap_or_else(|| {
            log::info!("No token lifetime configured => tokens are valid for one day");
            DEFAULT_TOKEN_VALID_FOR
        });

        let webserver = WebServer {
            enable_cors: cors,
            page_limits,
            token_valid_for,
        };

        let raw::Uploads { dir } = uploads.unwrap_or_default();
        let uploads = Uploads { dir };

        Ok(Self {
            db,
            webserver,
            uploads,
        })
    }
}
