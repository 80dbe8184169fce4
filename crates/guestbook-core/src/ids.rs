//! Client-side ids for optimistic entries.

use std::sync::atomic::{AtomicI64, Ordering};

pub const LOCAL_PREFIX: &str = "local-";

/// True for ids handed out by [`TempIdGenerator`], i.e. entries the remote
/// has not confirmed.
pub fn is_local(id: &str) -> bool {
    id.starts_with(LOCAL_PREFIX)
}

/// Hands out `local-<millis>` ids. Two requests in the same millisecond get
/// consecutive values so ids stay unique within a process.
#[derive(Debug, Default)]
pub struct TempIdGenerator {
    last: AtomicI64,
}

impl TempIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> String {
        self.next_at(jiff::Timestamp::now().as_millisecond())
    }

    pub fn next_at(&self, millis: i64) -> String {
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = millis.max(prev + 1);
            match self.last.compare_exchange_weak(
                prev,
                candidate,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return format!("{LOCAL_PREFIX}{candidate}"),
                Err(actual) => prev = actual,
            }
        }
    }
}
