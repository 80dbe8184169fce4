mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use common::{remote_list, synchronizer, wish, ScriptedRemote};
use guestbook_sync::{GuestbookView, PeriodicTask, ViewTimings};

fn timings(refresh: u64, rotation: u64) -> ViewTimings {
    ViewTimings {
        refresh: Duration::from_secs(refresh),
        rotation: Duration::from_secs(rotation),
    }
}

#[tokio::test(start_paused = true)]
async fn periodic_task_ticks_until_dropped() {
    let ticks = Arc::new(AtomicUsize::new(0));
    let task = PeriodicTask::spawn("test", Duration::from_secs(1), {
        let ticks = Arc::clone(&ticks);
        move || {
            let ticks = Arc::clone(&ticks);
            async move {
                ticks.fetch_add(1, Ordering::SeqCst);
            }
        }
    });

    tokio::time::sleep(Duration::from_millis(3500)).await;
    assert_eq!(ticks.load(Ordering::SeqCst), 3);
    assert!(task.is_running());

    task.cancel();
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(ticks.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn open_loads_remote_list() {
    let dir = tempfile::tempdir().unwrap();
    let remote = Arc::new(ScriptedRemote::online(remote_list()));
    let view = GuestbookView::open(synchronizer(Arc::clone(&remote), dir.path()), timings(30, 5)).await;

    assert_eq!(view.snapshot().await.wishes.into_vec(), remote_list());
    assert_eq!(remote.fetch_calls(), 1);
    assert_eq!(view.featured().await.unwrap().id, "r3");
}

#[tokio::test(start_paused = true)]
async fn refresh_picks_up_other_visitors_wishes() {
    let dir = tempfile::tempdir().unwrap();
    let remote = Arc::new(ScriptedRemote::online(remote_list()));
    let view = GuestbookView::open(synchronizer(Arc::clone(&remote), dir.path()), timings(30, 600)).await;

    let mut newer = remote_list();
    newer.insert(0, wish("r4", "Hafiz", "Tahniah dari Johor"));
    remote.set_list(Some(newer.clone()));

    tokio::time::sleep(Duration::from_secs(31)).await;

    assert_eq!(remote.fetch_calls(), 2);
    assert_eq!(view.snapshot().await.wishes.into_vec(), newer);
}

#[tokio::test(start_paused = true)]
async fn manual_refresh_loads_immediately() {
    let dir = tempfile::tempdir().unwrap();
    let remote = Arc::new(ScriptedRemote::online(remote_list()));
    let view = GuestbookView::open(synchronizer(Arc::clone(&remote), dir.path()), timings(300, 600)).await;

    view.refresh_now().await;

    assert_eq!(remote.fetch_calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_view_stops_its_timers() {
    let dir = tempfile::tempdir().unwrap();
    let remote = Arc::new(ScriptedRemote::online(remote_list()));
    let view = GuestbookView::open(synchronizer(Arc::clone(&remote), dir.path()), timings(10, 5)).await;

    tokio::time::sleep(Duration::from_secs(11)).await;
    assert_eq!(remote.fetch_calls(), 2);

    view.close();
    tokio::time::sleep(Duration::from_secs(120)).await;
    assert_eq!(remote.fetch_calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn rotation_walks_the_list_and_resets_on_submit() {
    let dir = tempfile::tempdir().unwrap();
    let remote = Arc::new(ScriptedRemote::online(remote_list()));
    let view = GuestbookView::open(synchronizer(Arc::clone(&remote), dir.path()), timings(600, 5)).await;
    let featured = view.subscribe_featured();

    tokio::time::sleep(Duration::from_secs(11)).await;
    assert_eq!(view.featured_index().await, 2);
    assert_eq!(*featured.borrow(), 2);
    assert_eq!(view.featured().await.unwrap().id, "r1");

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(view.featured_index().await, 0);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(view.featured_index().await, 1);

    let settled = view.submit("A", "B").await.unwrap();
    assert_eq!(view.featured_index().await, 0);
    assert_eq!(view.featured().await.unwrap().id, settled.wish().id);
}

#[tokio::test(start_paused = true)]
async fn selecting_an_indicator_features_that_wish() {
    let dir = tempfile::tempdir().unwrap();
    let remote = Arc::new(ScriptedRemote::online(remote_list()));
    let view = GuestbookView::open(synchronizer(Arc::clone(&remote), dir.path()), timings(600, 5)).await;
    let featured = view.subscribe_featured();

    assert!(view.select(2).await);
    assert_eq!(*featured.borrow(), 2);
    assert_eq!(view.featured().await.unwrap().id, "r1");

    assert!(!view.select(3).await);
    assert_eq!(view.featured_index().await, 2);

    tokio::time::sleep(Duration::from_secs(6)).await;
    assert_eq!(view.featured_index().await, 0);
}
