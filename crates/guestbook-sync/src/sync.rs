use guestbook_core::defaults::default_wishes;
use guestbook_core::ids::TempIdGenerator;
use guestbook_core::{Connectivity, Wish, WishDraft, WishList};
use guestbook_remote::{Encoding, RemoteError, RemoteStore};
use serde::{Deserialize, Serialize};
use tokio::sync::{watch, Mutex};

use crate::cache::WishCache;
use crate::config::GuestbookConfig;
use crate::error::SyncError;
use crate::submission::Submission;

/// Which encodings a submission tries, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitPolicy {
    pub primary: Encoding,
    pub fallback: Option<Encoding>,
}

impl Default for SubmitPolicy {
    fn default() -> Self {
        Self {
            primary: Encoding::Json,
            fallback: Some(Encoding::Form),
        }
    }
}

/// Where the displayed list came from after a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadSource {
    Remote,
    Cache,
    Defaults,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub source: LoadSource,
    /// False when a newer state made this result stale and it was dropped.
    pub applied: bool,
    /// Length of the displayed list afterwards.
    pub count: usize,
}

/// What a front end renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuestbookSnapshot {
    pub wishes: WishList,
    pub connectivity: Connectivity,
}

struct SyncState {
    wishes: WishList,
    connectivity: Connectivity,
    /// Bumped every time a load is issued.
    load_seq: u64,
    /// Bumped every time a submission settles, confirmed or not.
    settle_seq: u64,
    /// Optimistic entries whose submission has not settled, oldest first.
    in_flight: Vec<Wish>,
}

/// Reconciles the displayed list, the local cache and the remote store.
///
/// The list and the cache are only touched under `state`, which is never
/// held across a remote call, so writes land in call order.
pub struct Synchronizer<R> {
    remote: R,
    cache: WishCache,
    policy: SubmitPolicy,
    ids: TempIdGenerator,
    state: Mutex<SyncState>,
    updates: watch::Sender<GuestbookSnapshot>,
}

impl<R: RemoteStore> Synchronizer<R> {
    pub fn new(remote: R, cache: WishCache, policy: SubmitPolicy) -> Self {
        let (updates, _) = watch::channel(GuestbookSnapshot::default());
        Self {
            remote,
            cache,
            policy,
            ids: TempIdGenerator::new(),
            state: Mutex::new(SyncState {
                wishes: WishList::new(),
                connectivity: Connectivity::Offline,
                load_seq: 0,
                settle_seq: 0,
                in_flight: Vec::new(),
            }),
            updates,
        }
    }

    pub fn from_config(remote: R, config: &GuestbookConfig) -> Result<Self, SyncError> {
        let cache = WishCache::new(config.resolved_cache_path()?);
        Ok(Self::new(remote, cache, config.submit_policy()))
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub fn cache(&self) -> &WishCache {
        &self.cache
    }

    pub fn policy(&self) -> SubmitPolicy {
        self.policy
    }

    /// Change feed; a new value is published after every state change.
    pub fn subscribe(&self) -> watch::Receiver<GuestbookSnapshot> {
        self.updates.subscribe()
    }

    pub async fn snapshot(&self) -> GuestbookSnapshot {
        let state = self.state.lock().await;
        GuestbookSnapshot {
            wishes: state.wishes.clone(),
            connectivity: state.connectivity,
        }
    }

    pub async fn wishes(&self) -> WishList {
        self.state.lock().await.wishes.clone()
    }

    pub async fn wish_count(&self) -> usize {
        self.state.lock().await.wishes.len()
    }

    pub async fn connectivity(&self) -> Connectivity {
        self.state.lock().await.connectivity
    }

    /// Show whatever the cache holds (or the defaults) without any network
    /// traffic. Meant for startup, before the first `load()` returns.
    pub async fn hydrate(&self) -> LoadReport {
        let mut state = self.state.lock().await;
        let report = self.fall_back_to_local(&mut state);
        self.publish(&state);
        report
    }

    /// Replace the displayed list with the remote one, or degrade to the
    /// cache / defaults when the remote cannot be read.
    pub async fn load(&self) -> LoadReport {
        let (ticket, settled_before) = {
            let mut state = self.state.lock().await;
            state.load_seq += 1;
            (state.load_seq, state.settle_seq)
        };

        let fetched = self.remote.fetch_wishes().await;

        let mut state = self.state.lock().await;
        let superseded = state.load_seq != ticket;
        let report = match fetched {
            Ok(remote) => {
                state.connectivity = Connectivity::Online;
                if superseded || state.settle_seq != settled_before {
                    tracing::debug!(
                        superseded,
                        "discarding remote list that is older than the displayed state"
                    );
                    LoadReport {
                        source: LoadSource::Remote,
                        applied: false,
                        count: state.wishes.len(),
                    }
                } else {
                    let wishes = WishList::from(remote);
                    if let Err(e) = self.cache.write(&wishes) {
                        tracing::warn!(error = %e, path = %self.cache.path().display(), "failed to update local cache");
                    }
                    state.wishes = with_in_flight(wishes, &state.in_flight);
                    tracing::info!(count = state.wishes.len(), "loaded wishes from remote");
                    LoadReport {
                        source: LoadSource::Remote,
                        applied: true,
                        count: state.wishes.len(),
                    }
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load wishes from remote, falling back to local cache");
                state.connectivity = Connectivity::Offline;
                if superseded {
                    LoadReport {
                        source: LoadSource::Cache,
                        applied: false,
                        count: state.wishes.len(),
                    }
                } else {
                    self.fall_back_to_local(&mut state)
                }
            }
        };

        self.publish(&state);
        report
    }

    /// Periodic and user-requested reload.
    pub async fn refresh(&self) -> LoadReport {
        tracing::debug!("refreshing wishes");
        self.load().await
    }

    /// Optimistically add a wish, then try to store it remotely.
    ///
    /// Only validation fails this call. Remote failures leave the entry in
    /// place as [`Submission::UnconfirmedCached`].
    pub async fn submit(&self, name: &str, message: &str) -> Result<Submission, SyncError> {
        let draft = WishDraft::new(name, message)?;
        let temp = draft.to_temp_wish(self.ids.next(), &jiff::Zoned::now());
        let submission = Submission::pending(temp.clone());

        {
            let mut state = self.state.lock().await;
            submission.apply(&mut state.wishes);
            state.in_flight.push(temp.clone());
            self.publish(&state);
        }

        let result = self.send(&draft).await;

        let mut state = self.state.lock().await;
        state.in_flight.retain(|w| w.id != temp.id);
        state.settle_seq += 1;
        let settled = match result {
            Ok(stored) => {
                state.connectivity = Connectivity::Online;
                tracing::info!(temp_id = %temp.id, id = %stored.id, "wish confirmed by remote");
                submission.confirm(stored)?
            }
            Err(e) => {
                state.connectivity = Connectivity::Offline;
                tracing::warn!(error = %e, id = %temp.id, "wish not stored remotely, keeping it in the local cache");
                submission.keep_unconfirmed()?
            }
        };
        settled.apply(&mut state.wishes);
        if let Err(e) = self.cache.write(&state.wishes) {
            tracing::warn!(error = %e, path = %self.cache.path().display(), "failed to update local cache");
        }
        self.publish(&state);

        Ok(settled)
    }

    /// Probe the remote and record the result as connectivity.
    pub async fn ping(&self) -> bool {
        let healthy = match self.remote.ping().await {
            Ok(healthy) => healthy,
            Err(e) => {
                tracing::warn!(error = %e, "remote ping failed");
                false
            }
        };
        let mut state = self.state.lock().await;
        state.connectivity = if healthy {
            Connectivity::Online
        } else {
            Connectivity::Offline
        };
        self.publish(&state);
        healthy
    }

    /// Primary encoding first; the fallback only when the primary clearly
    /// did not store anything.
    async fn send(&self, draft: &WishDraft) -> Result<Wish, RemoteError> {
        let primary = self.policy.primary;
        let err = match self.remote.submit_wish(draft, primary).await {
            Ok(wish) => return Ok(wish),
            Err(err) => err,
        };

        let Some(fallback) = self.policy.fallback else {
            return Err(err);
        };
        if err.may_have_landed() {
            tracing::warn!(
                error = %err,
                encoding = %primary,
                "submission timed out; not retrying since the remote may already have it"
            );
            return Err(err);
        }

        tracing::warn!(error = %err, encoding = %primary, %fallback, "submission failed, retrying with fallback encoding");
        self.remote.submit_wish(draft, fallback).await
    }

    fn fall_back_to_local(&self, state: &mut SyncState) -> LoadReport {
        let cached = match self.cache.read() {
            Ok(cached) => cached,
            Err(e) => {
                tracing::warn!(error = %e, path = %self.cache.path().display(), "local cache unreadable, ignoring it");
                None
            }
        };

        let (wishes, source) = match cached {
            Some(wishes) if !wishes.is_empty() => (wishes, LoadSource::Cache),
            _ => {
                let defaults = WishList::from(default_wishes());
                if let Err(e) = self.cache.write(&defaults) {
                    tracing::warn!(error = %e, path = %self.cache.path().display(), "failed to seed local cache");
                }
                (defaults, LoadSource::Defaults)
            }
        };

        state.wishes = with_in_flight(wishes, &state.in_flight);
        tracing::info!(count = state.wishes.len(), ?source, "showing local wishes");
        LoadReport {
            source,
            applied: true,
            count: state.wishes.len(),
        }
    }

    fn publish(&self, state: &SyncState) {
        self.updates.send_replace(GuestbookSnapshot {
            wishes: state.wishes.clone(),
            connectivity: state.connectivity,
        });
    }
}

/// Keep unsettled optimistic entries on screen across a reload.
fn with_in_flight(mut wishes: WishList, in_flight: &[Wish]) -> WishList {
    for wish in in_flight {
        if !wishes.contains(&wish.id) {
            wishes.prepend(wish.clone());
        }
    }
    wishes
}
