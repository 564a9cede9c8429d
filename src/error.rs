use std::path::PathBuf;

use thiserror::Error;

/// Failures from the parts around the demo: config files and the terminal.
/// Flying and narrowing never fail.
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file {}: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("Invalid log level '{0}': expected one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

impl DemoError {
    pub fn config_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigParse {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parse_display() {
        let error = DemoError::config_parse("flying-objects.toml", "expected `=`");
        let display = error.to_string();
        assert!(display.contains("flying-objects.toml"));
        assert!(display.contains("expected `=`"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let error: DemoError = io.into();
        assert!(matches!(error, DemoError::Io(_)));
        assert!(error.to_string().contains("pipe closed"));
    }
}
