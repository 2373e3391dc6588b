use super::Format;
use crate::sim::error::Error as ReactorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse {format} reactor description: {details}")]
    Parse { format: Format, details: String },

    #[error("cannot infer a reactor format from '{0}' (expected a .json or .toml file)")]
    UnsupportedFormat(String),

    #[error("failed to parse simulation config: {0}")]
    Config(toml::de::Error),

    #[error("invalid reactor description: {0}")]
    Reactor(#[from] ReactorError),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::parse(Format::Json, e.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::parse(Format::Toml, e.to_string())
    }
}

impl Error {
    pub fn parse(format: Format, details: impl Into<String>) -> Self {
        Self::Parse {
            format,
            details: details.into(),
        }
    }
}
