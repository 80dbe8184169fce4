use guestbook_remote::Endpoint;

use crate::settings::ProxySettings;

/// Shared state, injected into the handlers via Axum state.
#[derive(Debug, Clone)]
pub struct ProxyState {
    pub upstream: Endpoint,
}

impl ProxyState {
    pub fn new(settings: &ProxySettings) -> Self {
        Self {
            upstream: Endpoint::passthrough(settings.upstream_url.clone(), settings.timeout),
        }
    }
}
