use std::path::{Path, PathBuf};
use tamilmv_extractor_tamilmv::TamilMvConfig;

const DEFAULT_PATH: &str = "./config.toml";

#[derive(Debug, Default, serde::Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scraper: TamilMvConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Config {
    /// Reads the file named by `CONFIG_FILE`, falling back on `./config.toml`.
    ///
    /// A missing `./config.toml` gives the default configuration.
    pub fn from_env() -> Result<Self, String> {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::from_path(PathBuf::from(path)),
            Err(_) if Path::new(DEFAULT_PATH).exists() => {
                Self::from_path(PathBuf::from(DEFAULT_PATH))
            }
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn from_path(path: PathBuf) -> Result<Self, String> {
        std::fs::read_to_string(path)
            .map_err(|err| err.to_string())
            .and_then(|inner| Self::from_str(inner.as_str()))
    }

    pub fn from_str(inner: &str) -> Result<Self, String> {
        toml::from_str(inner).map_err(|err| err.to_string())
    }
}
