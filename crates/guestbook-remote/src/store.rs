use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use guestbook_core::{Wish, WishDraft};
use serde::{Deserialize, Serialize};

use crate::error::RemoteError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// How a submission body is encoded on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// `{"name": ..., "message": ...}`
    Json,
    /// `name=...&message=...`
    Form,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Form => f.write_str("form"),
        }
    }
}

/// The authoritative wish store, when it can be reached.
pub trait RemoteStore: Send + Sync {
    /// Read every wish, most recent first.
    fn fetch_wishes(&self) -> BoxFuture<'_, Result<Vec<Wish>, RemoteError>>;

    /// Write one wish and return the entry the remote stored.
    fn submit_wish<'a>(
        &'a self,
        draft: &'a WishDraft,
        encoding: Encoding,
    ) -> BoxFuture<'a, Result<Wish, RemoteError>>;

    /// Cheap reachability probe. `Ok(false)` means the remote answered but
    /// reported itself unhealthy.
    fn ping(&self) -> BoxFuture<'_, Result<bool, RemoteError>>;
}

impl<T: RemoteStore + ?Sized> RemoteStore for Arc<T> {
    fn fetch_wishes(&self) -> BoxFuture<'_, Result<Vec<Wish>, RemoteError>> {
        (**self).fetch_wishes()
    }

    fn submit_wish<'a>(
        &'a self,
        draft: &'a WishDraft,
        encoding: Encoding,
    ) -> BoxFuture<'a, Result<Wish, RemoteError>> {
        (**self).submit_wish(draft, encoding)
    }

    fn ping(&self) -> BoxFuture<'_, Result<bool, RemoteError>> {
        (**self).ping()
    }
}
