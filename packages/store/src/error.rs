use thiserror::Error;

/// Failures while reading or writing client-side state.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session encoding error: {0}")]
    Session(#[from] serde_json::Error),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("config encoding error: {0}")]
    ConfigEncode(#[from] toml::ser::Error),
}

/// A form rule that failed, tied to the field it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
