use std::time::Duration;

use guestbook_core::{ApiResponse, Wish, WishDraft};

use crate::endpoint::Endpoint;
use crate::error::RemoteError;
use crate::store::{BoxFuture, Encoding, RemoteStore};

/// [`RemoteStore`] backed by the spreadsheet endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRemote {
    endpoint: Endpoint,
}

impl HttpRemote {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: Endpoint::new(url, timeout),
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    async fn blocking<T, F>(&self, call: F) -> Result<T, RemoteError>
    where
        F: FnOnce(Endpoint) -> Result<T, RemoteError> + Send + 'static,
        T: Send + 'static,
    {
        let endpoint = self.endpoint.clone();
        tokio::task::spawn_blocking(move || call(endpoint)).await?
    }
}

impl RemoteStore for HttpRemote {
    fn fetch_wishes(&self) -> BoxFuture<'_, Result<Vec<Wish>, RemoteError>> {
        Box::pin(async move {
            // Cache buster: intermediaries must not serve a stale list.
            let t = jiff::Timestamp::now().as_millisecond().to_string();
            let text = self
                .blocking(move |ep| ep.get_text(&[("t", t.as_str())]))
                .await?;
            let wishes = decode_wishes(&text)?;
            tracing::debug!(count = wishes.len(), "fetched wishes from remote");
            Ok(wishes)
        })
    }

    fn submit_wish<'a>(
        &'a self,
        draft: &'a WishDraft,
        encoding: Encoding,
    ) -> BoxFuture<'a, Result<Wish, RemoteError>> {
        Box::pin(async move {
            let text = match encoding {
                Encoding::Json => {
                    let body = serde_json::to_string(draft)?;
                    self.blocking(move |ep| ep.post_json(&body)).await?
                }
                Encoding::Form => {
                    let draft = draft.clone();
                    self.blocking(move |ep| {
                        ep.post_form(&[("name", draft.name()), ("message", draft.message())])
                    })
                    .await?
                }
            };
            let wish = decode_wish(&text)?;
            tracing::debug!(id = %wish.id, %encoding, "remote stored wish");
            Ok(wish)
        })
    }

    fn ping(&self) -> BoxFuture<'_, Result<bool, RemoteError>> {
        Box::pin(async move {
            let text = self
                .blocking(|ep| ep.get_text(&[("test", "true")]))
                .await?;
            let envelope: ApiResponse = serde_json::from_str(&text)?;
            Ok(envelope.success)
        })
    }
}

/// Unwrap the list out of a fetch response.
pub fn decode_wishes(text: &str) -> Result<Vec<Wish>, RemoteError> {
    let envelope: ApiResponse = serde_json::from_str(text)?;
    if !envelope.success {
        return Err(RemoteError::Rejected(envelope.error));
    }
    envelope.wishes.ok_or(RemoteError::MissingPayload("wishes"))
}

/// Unwrap the stored entry out of a submit response.
pub fn decode_wish(text: &str) -> Result<Wish, RemoteError> {
    let envelope: ApiResponse = serde_json::from_str(text)?;
    if !envelope.success {
        return Err(RemoteError::Rejected(envelope.error));
    }
    envelope.wish.ok_or(RemoteError::MissingPayload("wish"))
}
