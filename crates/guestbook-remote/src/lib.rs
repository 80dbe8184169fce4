//! guestbook-remote
//!
//! The remote wish store. `RemoteStore` is the seam the synchronizer talks
//! to; `HttpRemote` implements it against the spreadsheet-backed endpoint.

pub mod client;
pub mod endpoint;
pub mod error;
pub mod store;

pub use crate::client::HttpRemote;
pub use crate::endpoint::Endpoint;
pub use crate::error::RemoteError;
pub use crate::store::{BoxFuture, Encoding, RemoteStore};
