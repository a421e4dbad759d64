// SPDX-License-Identifier: MPL-2.0
//! Crate error type.
//!
//! The gesture engine itself never fails; errors come from reading settings
//! and gesture scripts.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Reading or writing a file failed.
    Io(String),
    /// `settings.toml` could not be parsed or serialized.
    Config(String),
    /// A gesture script is malformed.
    Script(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(message) => write!(f, "I/O Error: {message}"),
            Error::Config(message) => write!(f, "Config Error: {message}"),
            Error::Script(message) => write!(f, "Script Error: {message}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

// Script parsing maps its own toml errors to `Script`; these cover settings.
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_kind_has_its_prefix() {
        assert_eq!(
            Error::Io("settings.toml: permission denied".into()).to_string(),
            "I/O Error: settings.toml: permission denied"
        );
        assert_eq!(
            Error::Config("invalid type for snap_back_ms".into()).to_string(),
            "Config Error: invalid type for snap_back_ms"
        );
        assert_eq!(
            Error::Script("unknown kind `swipe`".into()).to_string(),
            "Script Error: unknown kind `swipe`"
        );
    }

    #[test]
    fn missing_file_becomes_io_error() {
        let err: Error = std::fs::read_to_string("/nonexistent/photo_lens/settings.toml")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn bad_settings_become_config_error() {
        let parsed: std::result::Result<crate::config::Config, _> =
            toml::from_str("[gestures]\nsnap_back_ms = \"fast\"\n");
        let err: Error = parsed.unwrap_err().into();
        match err {
            Error::Config(message) => assert!(message.contains("snap_back_ms")),
            other => panic!("expected Config variant, got {other:?}"),
        }
    }

    #[test]
    fn usable_as_boxed_std_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(Error::Script("empty".into()));
        assert_eq!(boxed.to_string(), "Script Error: empty");
    }
}
