use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("transport error: {0}")]
    Transport(String),

    /// The request may still have been applied remotely.
    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("HTTP error status: {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("remote reported failure: {}", .0.as_deref().unwrap_or("no error given"))]
    Rejected(Option<String>),

    #[error("response is missing `{0}`")]
    MissingPayload(&'static str),

    #[error("request task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl RemoteError {
    /// Whether the remote could have stored the write even though we saw a
    /// failure. Resending in that case risks a duplicate entry.
    pub fn may_have_landed(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

impl From<ureq::Error> for RemoteError {
    fn from(err: ureq::Error) -> Self {
        match &err {
            ureq::Error::StatusCode(code) => Self::Status(*code),
            ureq::Error::Timeout(_) => Self::Timeout(err.to_string()),
            _ => Self::Transport(err.to_string()),
        }
    }
}
