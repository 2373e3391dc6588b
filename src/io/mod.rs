//! Loading reactor descriptions from JSON and TOML documents.
//!
//! Both formats share the document shape in [`schema`]. Loading parses the
//! document, resolves every token, and validates the result through
//! [`Reactor::new`], so a successfully loaded reactor is ready to simulate.

use crate::sim::{Reactor, ReactorDescription, SimulationConfig};
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;

pub mod error;
pub mod schema;

pub use error::Error;
use schema::ReactorDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    /// Infers the format from a file extension, ignoring case.
    pub fn from_path(path: &Path) -> Option<Format> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Format::Json),
            "toml" => Some(Format::Toml),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => write!(f, "JSON"),
            Format::Toml => write!(f, "TOML"),
        }
    }
}

/// Parses a reactor description without validating it.
pub fn parse_description(text: &str, format: Format) -> Result<ReactorDescription, Error> {
    let document: ReactorDocument = match format {
        Format::Json => serde_json::from_str(text)?,
        Format::Toml => toml::from_str(text)?,
    };
    Ok(document.into_description()?)
}

/// Parses and validates a reactor from text.
pub fn parse_reactor(text: &str, format: Format) -> Result<Reactor, Error> {
    Ok(Reactor::new(parse_description(text, format)?)?)
}

pub fn read_reactor<R: Read>(mut reader: R, format: Format) -> Result<Reactor, Error> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_reactor(&text, format)
}

/// Loads a reactor from a file, inferring the format from its extension.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] for unknown extensions, and any
/// read, parse, or validation error otherwise.
pub fn load_reactor(path: impl AsRef<Path>) -> Result<Reactor, Error> {
    let path = path.as_ref();
    let format = Format::from_path(path)
        .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))?;
    let text = fs::read_to_string(path)?;
    parse_reactor(&text, format)
}

/// Loads a [`SimulationConfig`] from a TOML file.
pub fn load_config(path: impl AsRef<Path>) -> Result<SimulationConfig, Error> {
    let text = fs::read_to_string(path)?;
    SimulationConfig::from_toml_str(&text).map_err(Error::Config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::WaldoType;
    use crate::sim::error::Error as ReactorError;

    const TOML_REACTOR: &str = r#"
        [reactor]
        width = 10
        height = 8

        [reactor.starts.alpha]
        x = 5
        y = 5
        direction = "left"

        [reactor.starts.beta]
        x = 5
        y = 6
        direction = "up"

        [[reactor.tiles]]
        x = 0
        y = 3
        instruction = "grab"
        waldo = "beta"

        [[reactor.inputs.alpha]]
        probability = 1.0
        atoms = [
            { x = 2, y = 2, name = "h" },
            { x = 2, y = 3, name = "o" },
        ]
        bonds = [ { x1 = 2, y1 = 2, x2 = 2, y2 = 3, strength = 1 } ]
    "#;

    #[test]
    fn format_from_extension() {
        assert_eq!(Format::from_path(Path::new("a/b.json")), Some(Format::Json));
        assert_eq!(Format::from_path(Path::new("b.TOML")), Some(Format::Toml));
        assert_eq!(Format::from_path(Path::new("b.yaml")), None);
        assert_eq!(Format::from_path(Path::new("noext")), None);
    }

    #[test]
    fn toml_reactor_parses() {
        let reactor = parse_reactor(TOML_REACTOR, Format::Toml).unwrap();
        assert_eq!(reactor.width(), 10);
        assert_eq!(reactor.input_factory(WaldoType::Alpha).options().len(), 1);
        assert!(reactor.input_factory(WaldoType::Beta).is_empty());
        assert!(reactor.output(WaldoType::Alpha).is_none());
    }

    #[test]
    fn read_from_reader() {
        let reactor = read_reactor(TOML_REACTOR.as_bytes(), Format::Toml).unwrap();
        assert_eq!(reactor.height(), 8);
    }

    #[test]
    fn wrong_format_is_a_parse_error() {
        let err = parse_reactor(TOML_REACTOR, Format::Json).unwrap_err();
        assert!(matches!(
            err,
            Error::Parse {
                format: Format::Json,
                ..
            }
        ));
    }

    #[test]
    fn geometry_errors_surface_as_reactor_errors() {
        let text = TOML_REACTOR.replace("width = 10", "width = 6");
        let err = parse_reactor(&text, Format::Toml).unwrap_err();
        assert!(matches!(
            err,
            Error::Reactor(ReactorError::InvalidDimensions { width: 6, .. })
        ));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load_reactor("reactor.xml").unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }
}
