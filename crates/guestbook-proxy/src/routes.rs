use std::collections::HashMap;

use axum::extract::{FromRequest, Query, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};

use crate::error::ProxyError;
use crate::state::ProxyState;

/// Forward a GET, query string included, and hand back the upstream body.
pub async fn fetch_wishes(
    State(state): State<ProxyState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, ProxyError> {
    let upstream = state.upstream.clone();
    let body = tokio::task::spawn_blocking(move || {
        let query: Vec<(&str, &str)> = params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        upstream.get_text(&query)
    })
    .await??;

    tracing::debug!(bytes = body.len(), "forwarded GET");
    Ok(passthrough(body))
}

/// Forward a submission as JSON, whether it arrived as JSON or as a form.
pub async fn submit_wish(
    State(state): State<ProxyState>,
    req: Request,
) -> Result<Response, ProxyError> {
    let is_form = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

    let payload: serde_json::Value = if is_form {
        let Form(fields) = Form::<HashMap<String, String>>::from_request(req, &())
            .await
            .map_err(|e| ProxyError::BadRequest(e.body_text()))?;
        serde_json::Value::Object(
            fields
                .into_iter()
                .map(|(k, v)| (k, serde_json::Value::String(v)))
                .collect(),
        )
    } else {
        let Json(value) = Json::<serde_json::Value>::from_request(req, &())
            .await
            .map_err(|e| ProxyError::BadRequest(e.body_text()))?;
        value
    };

    let upstream = state.upstream.clone();
    let json = payload.to_string();
    let body = tokio::task::spawn_blocking(move || upstream.post_json(&json)).await??;

    tracing::debug!(bytes = body.len(), form = is_form, "forwarded POST");
    Ok(passthrough(body))
}

pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({ "error": "Method not allowed" })),
    )
        .into_response()
}

fn passthrough(body: String) -> Response {
    (
        StatusCode::OK,
        [(CONTENT_TYPE, "application/json; charset=utf-8")],
        body,
    )
        .into_response()
}
