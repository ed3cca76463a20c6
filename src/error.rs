use thiserror::Error;

pub type ComponentResult<T> = Result<T, ComponentError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    #[error("Missing required field '{field}' for component '{component}'")]
    MissingField { component: String, field: String },

    #[error("Invalid heading level {level}: expected a value from 1 to 6")]
    InvalidHeadingLevel { level: i64 },

    #[error("Invalid options for component '{component}': {reason}")]
    InvalidOptions { component: String, reason: String },

    #[error("Unknown component '{name}'")]
    UnknownComponent { name: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Fixture error in '{path}': {reason}")]
    Fixture { path: String, reason: String },

    #[error("IO error: {0}")]
    Io(String),
}

impl ComponentError {
    pub(crate) fn missing(component: &str, field: &str) -> Self {
        ComponentError::MissingField {
            component: component.to_string(),
            field: field.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ComponentError {
    fn from(err: serde_yaml::Error) -> Self {
        ComponentError::Config(err.to_string())
    }
}

impl From<std::io::Error> for ComponentError {
    fn from(err: std::io::Error) -> Self {
        ComponentError::Io(err.to_string())
    }
}
