use std::sync::Arc;
use std::time::Duration;

use guestbook_core::Wish;
use guestbook_remote::RemoteStore;
use tokio::sync::{watch, Mutex};

use crate::config::GuestbookConfig;
use crate::error::SyncError;
use crate::rotation::Rotation;
use crate::schedule::PeriodicTask;
use crate::submission::Submission;
use crate::sync::{GuestbookSnapshot, LoadReport, Synchronizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewTimings {
    pub refresh: Duration,
    pub rotation: Duration,
}

impl Default for ViewTimings {
    fn default() -> Self {
        Self {
            refresh: Duration::from_secs(30),
            rotation: Duration::from_secs(5),
        }
    }
}

impl From<&GuestbookConfig> for ViewTimings {
    fn from(config: &GuestbookConfig) -> Self {
        Self {
            refresh: config.refresh_interval(),
            rotation: config.rotation_interval(),
        }
    }
}

/// A guestbook on screen: the synchronizer plus the timers that live as
/// long as the view does. Dropping the view cancels both timers.
pub struct GuestbookView<R: RemoteStore + 'static> {
    sync: Arc<Synchronizer<R>>,
    rotation: Arc<Mutex<Rotation>>,
    featured: Arc<watch::Sender<usize>>,
    _refresh: PeriodicTask,
    _rotate: PeriodicTask,
}

impl<R: RemoteStore + 'static> GuestbookView<R> {
    /// Show the cache, pull the remote list once, then start refreshing and
    /// rotating.
    pub async fn open(sync: Arc<Synchronizer<R>>, timings: ViewTimings) -> Self {
        sync.hydrate().await;
        sync.load().await;

        let rotation = Arc::new(Mutex::new(Rotation::new()));
        let featured = Arc::new(watch::channel(0).0);

        let refresh = {
            let sync = Arc::clone(&sync);
            PeriodicTask::spawn("guestbook-refresh", timings.refresh, move || {
                let sync = Arc::clone(&sync);
                async move {
                    sync.refresh().await;
                }
            })
        };

        let rotate = {
            let sync = Arc::clone(&sync);
            let rotation = Arc::clone(&rotation);
            let featured = Arc::clone(&featured);
            PeriodicTask::spawn("guestbook-rotation", timings.rotation, move || {
                let sync = Arc::clone(&sync);
                let rotation = Arc::clone(&rotation);
                let featured = Arc::clone(&featured);
                async move {
                    let len = sync.wish_count().await;
                    let index = rotation.lock().await.advance(len);
                    featured.send_if_modified(|current| {
                        let changed = *current != index;
                        *current = index;
                        changed
                    });
                }
            })
        };

        tracing::info!(
            refresh_secs = timings.refresh.as_secs(),
            rotation_secs = timings.rotation.as_secs(),
            "guestbook view opened"
        );

        Self {
            sync,
            rotation,
            featured,
            _refresh: refresh,
            _rotate: rotate,
        }
    }

    pub fn synchronizer(&self) -> &Arc<Synchronizer<R>> {
        &self.sync
    }

    /// Manual refresh button.
    pub async fn refresh_now(&self) -> LoadReport {
        self.sync.refresh().await
    }

    /// Submit and jump back to the newest wish.
    pub async fn submit(&self, name: &str, message: &str) -> Result<Submission, SyncError> {
        self.rotation.lock().await.reset();
        self.featured.send_replace(0);
        self.sync.submit(name, message).await
    }

    /// Feature the wish behind indicator `index`. False when that indicator
    /// does not exist.
    pub async fn select(&self, index: usize) -> bool {
        let len = self.sync.wish_count().await;
        let Some(index) = self.rotation.lock().await.select(index, len) else {
            return false;
        };
        self.featured.send_if_modified(|current| {
            let changed = *current != index;
            *current = index;
            changed
        });
        true
    }

    pub async fn featured_index(&self) -> usize {
        let len = self.sync.wish_count().await;
        self.rotation.lock().await.current(len)
    }

    pub async fn featured(&self) -> Option<Wish> {
        let wishes = self.sync.wishes().await;
        let index = self.rotation.lock().await.current(wishes.len());
        wishes.get(index).cloned()
    }

    pub async fn snapshot(&self) -> GuestbookSnapshot {
        self.sync.snapshot().await
    }

    pub fn subscribe(&self) -> watch::Receiver<GuestbookSnapshot> {
        self.sync.subscribe()
    }

    /// Fires whenever the featured index moves.
    pub fn subscribe_featured(&self) -> watch::Receiver<usize> {
        self.featured.subscribe()
    }

    /// Consume the view; dropping its two tasks stops the timers.
    pub fn close(self) {
        tracing::info!("guestbook view closed");
    }
}
