use thiserror::Error;

#[derive(Error, Debug)]
pub enum FragexError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid path: {path}")]
    InvalidPath { path: String },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for FragexError {
    fn user_message(&self) -> String {
        match self {
            FragexError::Io(source) => {
                format!("IO operation failed: {}", source)
            }
            FragexError::InputNotFound { path } => {
                format!("Input file not found: {}", path)
            }
            FragexError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            FragexError::InvalidPath { path } => {
                format!("Invalid file path: {}", path)
            }
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            FragexError::InputNotFound { .. } => Some(
                "Check that the source HTML document exists. By default fragex reads simulador.html from the current directory; pass a different path as the first argument.".to_string()
            ),
            FragexError::Config { .. } => Some(
                "Check your configuration file syntax. Run with --generate-config to produce a valid sample fragex.toml.".to_string()
            ),
            FragexError::InvalidPath { .. } => Some(
                "Ensure the output path points to a writable location and does not contain invalid characters.".to_string()
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for FragexError {
    fn from(error: toml::de::Error) -> Self {
        FragexError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FragexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_friendly_messages() {
        let error = FragexError::InputNotFound {
            path: "simulador.html".to_string(),
        };
        assert!(error.user_message().contains("Input file not found"));
        assert!(error.suggestion().is_some());
    }

    #[test]
    fn test_io_error_has_no_suggestion() {
        let error = FragexError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(error.user_message().contains("IO operation failed"));
        assert!(error.suggestion().is_none());
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_error = toml::from_str::<toml::Value>("not = = valid").unwrap_err();
        let error = FragexError::from(toml_error);
        assert!(matches!(error, FragexError::Config { .. }));
    }
}
