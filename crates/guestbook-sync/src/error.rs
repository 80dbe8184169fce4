use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("invalid wish: {0}")]
    Invalid(#[from] guestbook_core::CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid submission transition: {from} -> {to}")]
    Transition {
        from: &'static str,
        to: &'static str,
    },
}
