use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Channel name must not be empty")]
    EmptyName,
}
