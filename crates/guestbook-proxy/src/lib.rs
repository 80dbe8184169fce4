//! guestbook-proxy
//!
//! Stateless forwarding proxy in front of the guestbook endpoint. Browsers
//! talk to this; it talks to the spreadsheet script and adds the CORS
//! headers the script cannot send itself.

pub mod error;
pub mod routes;
pub mod settings;
pub mod state;

use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub use crate::settings::ProxySettings;
pub use crate::state::ProxyState;

pub fn router(state: ProxyState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    let wishes = get(routes::fetch_wishes)
        .post(routes::submit_wish)
        .options(routes::preflight)
        .fallback(routes::method_not_allowed);

    Router::new()
        .route("/", wishes.clone())
        .route("/api/wishes", wishes)
        .layer(cors)
        .with_state(state)
}
