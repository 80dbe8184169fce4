use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug)]
pub enum ProxyError {
    BadRequest(String),
    Upstream(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ProxyError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ProxyError::Upstream(msg) => {
                tracing::error!("upstream call failed: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Proxy failed".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<guestbook_remote::RemoteError> for ProxyError {
    fn from(e: guestbook_remote::RemoteError) -> Self {
        ProxyError::Upstream(e.to_string())
    }
}

impl From<tokio::task::JoinError> for ProxyError {
    fn from(e: tokio::task::JoinError) -> Self {
        ProxyError::Upstream(e.to_string())
    }
}
