use guestbook_core::{Wish, WishList};

use crate::error::SyncError;

/// Lifecycle of one optimistic submission.
///
/// `Pending` moves to `Confirmed` when the remote stores the wish, or to
/// `UnconfirmedCached` when every encoding failed. Both are final.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Shown at the head of the list, remote answer outstanding.
    Pending { temp: Wish },
    /// The remote stored it; `wish` carries the server id.
    Confirmed { temp_id: String, wish: Wish },
    /// Never reached the remote. Kept locally so a refresh does not lose it.
    UnconfirmedCached { wish: Wish },
}

impl Submission {
    pub fn pending(temp: Wish) -> Self {
        Self::Pending { temp }
    }

    pub fn state_name(&self) -> &'static str {
        match self {
            Self::Pending { .. } => "pending",
            Self::Confirmed { .. } => "confirmed",
            Self::UnconfirmedCached { .. } => "unconfirmed_cached",
        }
    }

    pub fn confirm(self, wish: Wish) -> Result<Self, SyncError> {
        match self {
            Self::Pending { temp } => Ok(Self::Confirmed {
                temp_id: temp.id,
                wish,
            }),
            other => Err(SyncError::Transition {
                from: other.state_name(),
                to: "confirmed",
            }),
        }
    }

    pub fn keep_unconfirmed(self) -> Result<Self, SyncError> {
        match self {
            Self::Pending { temp } => Ok(Self::UnconfirmedCached { wish: temp }),
            other => Err(SyncError::Transition {
                from: other.state_name(),
                to: "unconfirmed_cached",
            }),
        }
    }

    /// The entry this submission puts on screen.
    pub fn wish(&self) -> &Wish {
        match self {
            Self::Pending { temp } => temp,
            Self::Confirmed { wish, .. } | Self::UnconfirmedCached { wish } => wish,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed { .. })
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Pending { .. })
    }

    /// Bring `list` in line with this state.
    pub fn apply(&self, list: &mut WishList) {
        match self {
            Self::Pending { temp } => list.prepend(temp.clone()),
            Self::Confirmed { temp_id, wish } => list.replace(temp_id, wish.clone()),
            Self::UnconfirmedCached { wish } => {
                if !list.contains(&wish.id) {
                    list.prepend(wish.clone());
                }
            }
        }
    }
}
