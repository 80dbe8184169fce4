use guestbook_core::{Wish, WishList};
use guestbook_sync::{Submission, SyncError};

fn wish(id: &str) -> Wish {
    Wish {
        id: id.to_string(),
        name: "A".to_string(),
        message: "B".to_string(),
        date: "19/10/2026".to_string(),
        timestamp: None,
    }
}

fn existing() -> WishList {
    WishList::from(vec![wish("1"), wish("2")])
}

#[test]
fn pending_goes_to_the_head() {
    let mut list = existing();
    let pending = Submission::pending(wish("local-1"));
    pending.apply(&mut list);

    assert_eq!(list.get(0).unwrap().id, "local-1");
    assert_eq!(pending.state_name(), "pending");
    assert!(!pending.is_settled());
}

#[test]
fn confirmation_swaps_temp_for_server_entry() {
    let mut list = existing();
    let pending = Submission::pending(wish("local-1"));
    pending.apply(&mut list);

    let confirmed = pending.confirm(wish("srv-7")).unwrap();
    confirmed.apply(&mut list);

    assert!(confirmed.is_confirmed());
    assert_eq!(confirmed.wish().id, "srv-7");
    assert!(!list.contains("local-1"));
    assert_eq!(list.get(0).unwrap().id, "srv-7");
    assert_eq!(list.len(), 3);
}

#[test]
fn unconfirmed_keeps_temp_in_place() {
    let mut list = existing();
    let pending = Submission::pending(wish("local-1"));
    pending.apply(&mut list);

    let kept = pending.keep_unconfirmed().unwrap();
    kept.apply(&mut list);

    assert_eq!(kept.state_name(), "unconfirmed_cached");
    assert!(kept.is_settled());
    assert_eq!(list.len(), 3);
    assert_eq!(list.get(0).unwrap().id, "local-1");
}

#[test]
fn unconfirmed_reinserts_a_temp_that_went_missing() {
    let mut list = existing();
    let kept = Submission::pending(wish("local-1"))
        .keep_unconfirmed()
        .unwrap();
    kept.apply(&mut list);
    assert!(list.contains("local-1"));
}

#[test]
fn settled_states_are_final() {
    let confirmed = Submission::pending(wish("local-1"))
        .confirm(wish("srv-1"))
        .unwrap();
    assert!(matches!(
        confirmed.clone().keep_unconfirmed(),
        Err(SyncError::Transition {
            from: "confirmed",
            to: "unconfirmed_cached"
        })
    ));
    assert!(matches!(
        confirmed.confirm(wish("srv-2")),
        Err(SyncError::Transition { .. })
    ));

    let kept = Submission::pending(wish("local-2"))
        .keep_unconfirmed()
        .unwrap();
    assert!(matches!(
        kept.confirm(wish("srv-3")),
        Err(SyncError::Transition {
            from: "unconfirmed_cached",
            to: "confirmed"
        })
    ));
}
