use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModalError>;

#[derive(Debug, Error)]
pub enum ModalError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not find {0} directory")]
    MissingDirectory(&'static str),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl ModalError {
    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom(message.into())
    }
}
