//! Scripted stand-in for the remote store.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use guestbook_core::{Wish, WishDraft};
use guestbook_remote::{BoxFuture, Encoding, RemoteError, RemoteStore};
use guestbook_sync::{SubmitPolicy, Synchronizer, WishCache};
use tokio::sync::Semaphore;

pub fn wish(id: &str, name: &str, message: &str) -> Wish {
    Wish {
        id: id.to_string(),
        name: name.to_string(),
        message: message.to_string(),
        date: "18/10/2025".to_string(),
        timestamp: None,
    }
}

pub fn remote_list() -> Vec<Wish> {
    vec![
        wish("r3", "Nadia & Aiman", "Semoga bahagia"),
        wish("r2", "Amirul", "Tahniah korang"),
        wish("r1", "Zafirah", "Barakallah"),
    ]
}

/// A gate that holds a remote call until the test opens it.
pub fn gate() -> Arc<Semaphore> {
    Arc::new(Semaphore::new(0))
}

pub fn open(gate: &Semaphore) {
    gate.add_permits(1);
}

struct FetchStep {
    gate: Option<Arc<Semaphore>>,
    result: Result<Vec<Wish>, RemoteError>,
}

struct SubmitStep {
    gate: Option<Arc<Semaphore>>,
    result: Result<Wish, RemoteError>,
}

#[derive(Default)]
pub struct ScriptedRemote {
    fetch_steps: Mutex<VecDeque<FetchStep>>,
    /// Served once the fetch script runs out. `None` = unreachable.
    steady_list: Mutex<Option<Vec<Wish>>>,
    submit_steps: Mutex<VecDeque<SubmitStep>>,
    /// Store every unscripted submission as `srv-<n>`.
    echo_submits: Mutex<bool>,
    submit_gate: Mutex<Option<Arc<Semaphore>>>,
    healthy: Mutex<Option<bool>>,
    fetch_calls: AtomicUsize,
    submit_calls: Mutex<Vec<Encoding>>,
}

impl ScriptedRemote {
    pub fn online(wishes: Vec<Wish>) -> Self {
        let remote = Self::default();
        remote.set_list(Some(wishes));
        *remote.echo_submits.lock().unwrap() = true;
        *remote.healthy.lock().unwrap() = Some(true);
        remote
    }

    pub fn offline() -> Self {
        Self::default()
    }

    pub fn set_list(&self, wishes: Option<Vec<Wish>>) {
        *self.steady_list.lock().unwrap() = wishes;
    }

    pub fn push_fetch(&self, gate: Option<Arc<Semaphore>>, result: Result<Vec<Wish>, RemoteError>) {
        self.fetch_steps
            .lock()
            .unwrap()
            .push_back(FetchStep { gate, result });
    }

    pub fn push_submit(&self, gate: Option<Arc<Semaphore>>, result: Result<Wish, RemoteError>) {
        self.submit_steps
            .lock()
            .unwrap()
            .push_back(SubmitStep { gate, result });
    }

    /// Hold every unscripted submission until the gate opens.
    pub fn gate_submits(&self, gate: Arc<Semaphore>) {
        *self.submit_gate.lock().unwrap() = Some(gate);
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn submit_calls(&self) -> Vec<Encoding> {
        self.submit_calls.lock().unwrap().clone()
    }
}

async fn pass(gate: Option<Arc<Semaphore>>) {
    if let Some(gate) = gate {
        gate.acquire().await.unwrap().forget();
    }
}

impl RemoteStore for ScriptedRemote {
    fn fetch_wishes(&self) -> BoxFuture<'_, Result<Vec<Wish>, RemoteError>> {
        Box::pin(async move {
            self.fetch_calls.fetch_add(1, Ordering::SeqCst);
            let step = self.fetch_steps.lock().unwrap().pop_front();
            match step {
                Some(step) => {
                    pass(step.gate).await;
                    step.result
                }
                None => self
                    .steady_list
                    .lock()
                    .unwrap()
                    .clone()
                    .ok_or_else(|| RemoteError::Transport("connection refused".to_string())),
            }
        })
    }

    fn submit_wish<'a>(
        &'a self,
        draft: &'a WishDraft,
        encoding: Encoding,
    ) -> BoxFuture<'a, Result<Wish, RemoteError>> {
        Box::pin(async move {
            let n = {
                let mut calls = self.submit_calls.lock().unwrap();
                calls.push(encoding);
                calls.len()
            };
            let step = self.submit_steps.lock().unwrap().pop_front();
            if let Some(step) = step {
                pass(step.gate).await;
                return step.result;
            }
            let gate = self.submit_gate.lock().unwrap().clone();
            pass(gate).await;
            if *self.echo_submits.lock().unwrap() {
                Ok(Wish {
                    id: format!("srv-{n}"),
                    name: draft.name().to_string(),
                    message: draft.message().to_string(),
                    date: "19/10/2026".to_string(),
                    timestamp: Some("2026-10-19T02:00:00Z".to_string()),
                })
            } else {
                Err(RemoteError::Transport("connection refused".to_string()))
            }
        })
    }

    fn ping(&self) -> BoxFuture<'_, Result<bool, RemoteError>> {
        Box::pin(async move {
            self.healthy
                .lock()
                .unwrap()
                .ok_or_else(|| RemoteError::Transport("connection refused".to_string()))
        })
    }
}

pub fn synchronizer(
    remote: Arc<ScriptedRemote>,
    dir: &Path,
) -> Arc<Synchronizer<Arc<ScriptedRemote>>> {
    Arc::new(Synchronizer::new(
        remote,
        WishCache::new(dir.join("engagement_wishes.json")),
        SubmitPolicy::default(),
    ))
}
