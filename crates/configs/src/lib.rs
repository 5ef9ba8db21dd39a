use std::path::{Path, PathBuf};

use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4) }
    }
}

/// Locations of the two collection files.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_flights_file")]
    pub flights_file: String,
    #[serde(default = "default_cities_file")]
    pub cities_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            flights_file: default_flights_file(),
            cities_file: default_cities_file(),
        }
    }
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 3000 }
fn default_data_dir() -> PathBuf { PathBuf::from("data") }
fn default_flights_file() -> String { "db.json".into() }
fn default_cities_file() -> String { "cities.json".into() }

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

/// Build a config purely from environment variables, falling back to defaults.
pub fn from_env() -> AppConfig {
    let defaults = AppConfig::default();
    let server = ServerConfig {
        host: std::env::var("SERVER_HOST").unwrap_or(defaults.server.host),
        port: std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(defaults.server.port),
        worker_threads: std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .or(defaults.server.worker_threads),
    };
    let storage = StorageConfig {
        data_dir: std::env::var("DATA_DIR").map(PathBuf::from).unwrap_or(defaults.storage.data_dir),
        flights_file: std::env::var("FLIGHTS_FILE").unwrap_or(defaults.storage.flights_file),
        cities_file: std::env::var("CITIES_FILE").unwrap_or(defaults.storage.cities_file),
    };
    AppConfig { server, storage }
}

impl AppConfig {
    /// Load `config.toml` (or `CONFIG_PATH`); when absent, read the environment instead.
    pub fn load_and_validate() -> Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_and_validate_from(&path)
    }

    /// A file that exists but cannot be read or parsed is an error; only a
    /// missing file falls back to the environment.
    pub fn load_and_validate_from(path: &str) -> Result<Self> {
        let mut cfg = if Path::new(path).exists() {
            load_from_file(path).map_err(|e| anyhow!("invalid config file {path}: {e}"))?
        } else {
            from_env()
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.storage.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl StorageConfig {
    pub fn flights_path(&self) -> PathBuf {
        self.data_dir.join(&self.flights_file)
    }

    pub fn cities_path(&self) -> PathBuf {
        self.data_dir.join(&self.cities_file)
    }

    pub fn validate(&self) -> Result<()> {
        if self.flights_file.trim().is_empty() || self.cities_file.trim().is_empty() {
            return Err(anyhow!("storage.flights_file and storage.cities_file must not be empty"));
        }
        if self.flights_path() == self.cities_path() {
            return Err(anyhow!("flights and cities must be stored in different files"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.storage.flights_path(), PathBuf::from("data/db.json"));
        assert_eq!(cfg.storage.cities_path(), PathBuf::from("data/cities.json"));
    }

    #[test]
    fn partial_sections_are_filled_in() {
        let mut cfg = parse(
            r#"
            [server]
            port = 8088
            worker_threads = 0

            [storage]
            data_dir = "/var/lib/flightdesk"
            "#,
        )
        .unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8088);
        assert_eq!(cfg.server.worker_threads, Some(4));
        assert_eq!(cfg.storage.flights_path(), PathBuf::from("/var/lib/flightdesk/db.json"));
    }

    #[test]
    fn rejects_port_zero() {
        let mut cfg = parse("[server]\nport = 0\n").unwrap();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn rejects_shared_collection_file() {
        let mut cfg = parse("[storage]\nflights_file = \"all.json\"\ncities_file = \"all.json\"\n").unwrap();
        assert!(cfg.normalize_and_validate().is_err());
    }

    fn temp_config(content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("cfg_{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn malformed_file_is_an_error_not_a_fallback() {
        let path = temp_config("[server]\nport = \"not a number\"\n");
        let res = AppConfig::load_and_validate_from(path.to_str().unwrap());
        let _ = std::fs::remove_file(&path);
        assert!(res.is_err());
    }

    #[test]
    fn existing_file_is_used() {
        let path = temp_config("[server]\nport = 8123\n");
        let cfg = AppConfig::load_and_validate_from(path.to_str().unwrap()).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(cfg.server.port, 8123);
    }

    #[test]
    fn missing_file_falls_back_to_environment() {
        let path = std::env::temp_dir().join(format!("cfg_absent_{}.toml", uuid::Uuid::new_v4()));
        assert!(AppConfig::load_and_validate_from(path.to_str().unwrap()).is_ok());
    }
}
