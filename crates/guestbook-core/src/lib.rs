//! guestbook-core
//!
//! Pure domain types for the engagement guestbook: wishes, drafts, the
//! remote wire envelope and the built-in default wishes.
//! No I/O here. This is the shared vocabulary of the other guestbook crates.

pub mod dates;
pub mod defaults;
pub mod error;
pub mod ids;
pub mod models;

pub use crate::error::CoreError;
pub use crate::models::connectivity::Connectivity;
pub use crate::models::envelope::ApiResponse;
pub use crate::models::list::WishList;
pub use crate::models::wish::{Wish, WishDraft};
