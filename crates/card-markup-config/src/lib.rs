use card_markup_engine::{ConvertOptions, Converter, UrlResolver};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid base_uri {base_uri:?}: {source}")]
    InvalidBaseUri {
        base_uri: String,
        source: url::ParseError,
    },
}

/// Host-side settings for markup conversion.
///
/// Every field is optional; an empty file gives the unbounded, any-scheme,
/// absolute-links-only behaviour of [`Converter::new`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_schemes: Option<Vec<String>>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/card-markup");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn options(&self) -> ConvertOptions {
        ConvertOptions {
            max_depth: self.max_depth,
        }
    }

    pub fn resolver(&self) -> Result<UrlResolver, ConfigError> {
        let mut resolver = UrlResolver::new();
        if let Some(base_uri) = &self.base_uri {
            let base = Url::parse(base_uri).map_err(|source| ConfigError::InvalidBaseUri {
                base_uri: base_uri.clone(),
                source,
            })?;
            resolver = resolver.with_base(base);
        }
        if let Some(schemes) = &self.allowed_schemes {
            resolver = resolver.with_allowed_schemes(schemes.iter().cloned());
        }
        Ok(resolver)
    }

    /// Builds a converter that applies these settings.
    pub fn converter(&self) -> Result<Converter<UrlResolver>, ConfigError> {
        Ok(Converter::new()
            .with_resolver(self.resolver()?)
            .with_options(self.options()))
    }
}
