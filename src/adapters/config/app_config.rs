use std::path::Path;

use config::{Config, FileFormat};
use error_stack::{report, ResultExt};
use thiserror::Error;

use super::sheets_config::SpreadsheetConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file")]
    FailedToRead,
    #[error("Failed to deserialize config file")]
    FailedToDeserialize,
    #[error("No google_sheets source configured")]
    NoSheets,
}

#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct OtherDocsConfig {
    /// Google Docs document ids appended after the generated sections.
    #[serde(default, alias = "otherDocs", alias = "otherdocs")]
    pub docs: Vec<String>,
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub google_sheets: Vec<SpreadsheetConfig>,
    #[serde(default)]
    pub other_docs: OtherDocsConfig,
}

impl AppConfig {
    pub fn load(path: &Path) -> error_stack::Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(config::File::from(path).format(FileFormat::Toml))
            .build()
            .change_context(ConfigError::FailedToRead)
            .attach_printable_lazy(|| format!("config file: {}", path.display()))?;

        Self::from_config(config)
            .attach_printable_lazy(|| format!("config file: {}", path.display()))
    }

    pub fn from_toml_str(toml: &str) -> error_stack::Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()
            .change_context(ConfigError::FailedToRead)?;

        Self::from_config(config)
    }

    fn from_config(config: Config) -> error_stack::Result<Self, ConfigError> {
        let value = config
            .try_deserialize::<serde_json::Value>()
            .change_context(ConfigError::FailedToDeserialize)?;

        let app_config: AppConfig = serde_path_to_error::deserialize(value)
            .map_err(|err| {
                let field = err.path().to_string();
                report!(err.into_inner())
                    .change_context(ConfigError::FailedToDeserialize)
                    .attach_printable(format!("field path: {}", field))
            })?;

        app_config.validate()
    }

    fn validate(self) -> error_stack::Result<Self, ConfigError> {
        if self.google_sheets.is_empty() {
            return Err(report!(ConfigError::NoSheets));
        }
        Ok(self)
    }
}
