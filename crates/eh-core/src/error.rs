use thiserror::Error;

#[derive(Error, Debug)]
pub enum EhError {
    #[error("Unknown value for {field}: {value}")]
    UnknownValue { field: &'static str, value: String },
    #[error("Session not found: {id}")]
    SessionNotFound { id: String },
    #[error("Message is empty")]
    EmptyMessage,
    #[error("Session {id} was restarted before the reply was ready")]
    SessionRestarted { id: String },
    #[error("Config error: {0}")]
    Config(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, EhError>;
