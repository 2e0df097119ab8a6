//! Screen UiState behaviour: error containment, retry, ordering, idempotence
//! and silence after destruction.

mod common;

use common::*;
use confetti::component::{callback, id_callback};
use confetti::data::{Conference, InMemoryRepository};
use confetti::error::NavError;
use confetti::navigation::AppChild;
use confetti::screens::{ConferencesComponent, LoadState, SessionsCallbacks, SessionsComponent};
use confetti::ui::dispatch::dispatch;
use confetti::ui::input::UiAction;
use confetti::ui::layout::WindowSizeClass;
use confetti::ui::view::{build, Affordance, Body};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

fn conference_list(host: &confetti::navigation::AppHost) -> ConferencesComponent {
    match host.root().stack().value().active().instance.clone() {
        AppChild::Conferences(list) => list,
        _ => panic!("conference list is not active"),
    }
}

fn record<T: Clone + Send + Sync + 'static>(
    flow: &confetti::component::StateFlow<LoadState<T>>,
) -> (Arc<Mutex<Vec<LoadState<T>>>>, confetti::component::Subscription) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let subscription = flow.subscribe(move |state| sink.lock().push(state.clone()));
    (log, subscription)
}

fn no_op_sessions() -> SessionsCallbacks {
    SessionsCallbacks {
        on_session_selected: id_callback(|_| {}),
        on_sign_in: callback(|| {}),
    }
}

#[tokio::test]
async fn failed_load_shows_error_with_retry_then_recovers() {
    let mut h = Harness::new();
    h.repository.set_offline(true);
    let host = h.host(None);
    h.settle().await;

    let list = conference_list(&host);
    assert_eq!(
        list.state().value(),
        LoadState::Error("network unavailable".to_string())
    );

    let view = build(host.root(), WindowSizeClass::Compact);
    assert!(view.offers(Affordance::Retry));
    assert_eq!(
        view.body,
        Body::Error {
            reason: "network unavailable".to_string()
        }
    );

    let (log, _subscription) = record(list.state());
    h.repository.set_offline(false);
    dispatch(host.root(), &view, UiAction::Refresh, 0).unwrap();
    h.settle().await;

    let log = log.lock();
    assert_eq!(log.len(), 3);
    assert!(matches!(log[0], LoadState::Error(_)));
    assert_eq!(log[1], LoadState::Loading);
    let ids: Vec<&str> = match &log[2] {
        LoadState::Success(list) => list.iter().map(|c: &Conference| c.id.as_str()).collect(),
        other => panic!("expected success, got {other:?}"),
    };
    assert_eq!(ids, vec!["devfest23", "kotlinconf24"]);
}

#[tokio::test]
async fn transitions_arrive_in_invocation_order() {
    let mut h = Harness::new();
    let ctx = h.context("sessions");
    let sessions = SessionsComponent::new(
        ctx,
        "devfest23",
        Arc::new(h.repository.clone()),
        h.auth.clone(),
        no_op_sessions(),
    );
    let (log, _subscription) = record(sessions.state());
    h.settle().await;

    h.repository.set_offline(true);
    sessions.refresh().unwrap();
    h.settle().await;
    h.repository.set_offline(false);
    sessions.refresh().unwrap();
    h.settle().await;

    let kinds: Vec<&str> = log
        .lock()
        .iter()
        .map(|s| match s {
            LoadState::Loading => "loading",
            LoadState::Success(_) => "success",
            LoadState::Error(_) => "error",
        })
        .collect();
    assert_eq!(
        kinds,
        vec!["loading", "success", "loading", "error", "loading", "success"]
    );
}

#[tokio::test]
async fn double_refresh_ends_where_a_single_refresh_does() {
    let mut h = Harness::new();
    h.repository = InMemoryRepository::sample().with_latency(Duration::from_millis(5));
    let repository = Arc::new(h.repository.clone());

    let once = ConferencesComponent::new(h.context("once"), repository.clone(), id_callback(|_| {}));
    h.settle().await;

    let twice = ConferencesComponent::new(h.context("twice"), repository, id_callback(|_| {}));
    let (log, _subscription) = record(twice.state());
    twice.refresh().unwrap();
    h.settle().await;

    assert_eq!(twice.state().value(), once.state().value());
    let successes = log
        .lock()
        .iter()
        .filter(|s| matches!(s, LoadState::Success(_)))
        .count();
    assert_eq!(successes, 1);
}

#[tokio::test]
async fn destroyed_screen_never_emits_again() {
    let mut h = Harness::new();
    h.repository = InMemoryRepository::sample().with_latency(Duration::from_millis(20));
    let ctx = h.context("sessions");
    let lifecycle = ctx.lifecycle().clone();
    let sessions = SessionsComponent::new(
        ctx,
        "devfest23",
        Arc::new(h.repository.clone()),
        h.auth.clone(),
        no_op_sessions(),
    );
    let (log, _subscription) = record(sessions.state());

    lifecycle.destroy();
    tokio::time::sleep(Duration::from_millis(60)).await;
    h.settle().await;

    assert_eq!(*log.lock(), vec![LoadState::Loading]);
    assert!(matches!(
        sessions.refresh(),
        Err(NavError::LifecycleViolation { .. })
    ));
}

#[tokio::test]
async fn rejected_bookmark_is_rolled_back() {
    let mut h = Harness::new();
    h.auth.set_signed_in(true);
    let sessions = SessionsComponent::new(
        h.context("schedule"),
        "devfest23",
        Arc::new(h.repository.clone()),
        h.auth.clone(),
        no_op_sessions(),
    );
    h.settle().await;

    let marks = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&marks);
    let _subscription = sessions.state().subscribe(move |state| {
        if let LoadState::Success(content) = state {
            sink.lock().push(content.is_bookmarked("df-keynote"));
        }
    });

    h.repository.set_offline(true);
    sessions.add_bookmark("df-keynote").unwrap();
    assert_eq!(*marks.lock(), vec![false, true]);

    h.settle().await;
    assert_eq!(*marks.lock(), vec![false, true, false]);
    assert!(!sessions
        .state()
        .value()
        .content()
        .is_some_and(|c| c.is_bookmarked("df-keynote")));
}
