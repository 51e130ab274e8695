use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while building a field or loading settings
#[derive(Debug, Error)]
pub enum Error {
    /// Submitted text was empty or only whitespace
    #[error("text is empty")]
    EmptyText,
    /// No usable font was loaded on the surface
    #[error("no font available for text rasterization")]
    NoFont,
    /// The drawing backend refused a draw or read-back
    #[error("render backend failed: {0}")]
    Render(String),
    /// Settings file exists but could not be read
    #[error("cannot read settings file {path}: {source}")]
    SettingsIo {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Settings file is not valid JSON for [`crate::settings::Settings`]
    #[error("malformed settings file {path}: {source}")]
    SettingsParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
