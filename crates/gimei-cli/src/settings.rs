use std::path::{Path, PathBuf};

use gimei_generate::{Corpus, CorpusBuilder, GenerationError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
}

/// Optional corpus overrides, one YAML file per group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusPaths {
    pub names: Option<PathBuf>,
    pub addresses: Option<PathBuf>,
    pub postal_codes: Option<PathBuf>,
}

impl CorpusPaths {
    pub fn is_empty(&self) -> bool {
        self.names.is_none() && self.addresses.is_none() && self.postal_codes.is_none()
    }

    pub fn build_corpus(&self) -> Result<Corpus, GenerationError> {
        let mut builder = CorpusBuilder::default();
        if let Some(path) = &self.names {
            builder = builder.names_file(path);
        }
        if let Some(path) = &self.addresses {
            builder = builder.addresses_file(path);
        }
        if let Some(path) = &self.postal_codes {
            builder = builder.postal_codes_file(path);
        }
        builder.build()
    }
}

/// Defaults read from a TOML settings file. Command-line flags take
/// precedence over every value here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub separator: Option<String>,
    pub records: Option<usize>,
    pub seed: Option<u64>,
    pub json: Option<bool>,
    pub corpus: CorpusPaths,
}

impl Settings {
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }
}

pub fn load_settings(path: Option<&Path>) -> Result<Settings, SettingsError> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Settings::from_toml(&content)
}
