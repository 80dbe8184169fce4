//! guestbook-sync
//!
//! Keeps the displayed guestbook consistent across the remote store
//! (authoritative when reachable) and a local cache file (fallback when
//! not).
//!
//! Public API:
//! - `Synchronizer::hydrate()`: show the cached list without touching the network
//! - `Synchronizer::load()` / `refresh()`: pull the remote list, degrading to cache or defaults
//! - `Synchronizer::submit()`: optimistic insert, remote write with fallback encoding
//! - `GuestbookView`: a synchronizer plus its refresh and rotation timers

pub mod cache;
pub mod config;
pub mod error;
pub mod rotation;
pub mod schedule;
pub mod submission;
pub mod sync;
pub mod view;

pub use crate::cache::WishCache;
pub use crate::config::GuestbookConfig;
pub use crate::error::SyncError;
pub use crate::rotation::{Rotation, INDICATORS};
pub use crate::schedule::PeriodicTask;
pub use crate::submission::Submission;
pub use crate::sync::{GuestbookSnapshot, LoadReport, LoadSource, SubmitPolicy, Synchronizer};
pub use crate::view::{GuestbookView, ViewTimings};
