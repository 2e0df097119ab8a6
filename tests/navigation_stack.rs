//! Navigation stack invariants and the push/pop scenario.

use confetti::component::{ComponentContext, Lifecycle, MainScheduler, StackNavigation, StateFlow};
use confetti::error::NavError;
use parking_lot::Mutex;
use proptest::prelude::*;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
enum Screen {
    ConferenceList,
    ConferenceDetail(String),
}

/// Child that listens to a shared feed for as long as its lifecycle lives.
#[derive(Clone)]
struct Listener {
    ctx: ComponentContext,
}

fn listening_stack(
    feed: &StateFlow<u32>,
    seen: &Arc<Mutex<Vec<String>>>,
) -> (Lifecycle, StackNavigation<Screen, Listener>) {
    let scheduler = MainScheduler::new();
    let lifecycle = Lifecycle::new("test");
    let ctx = ComponentContext::new(lifecycle.clone(), scheduler.handle());
    let feed = feed.clone();
    let seen = Arc::clone(seen);
    let stack = StackNavigation::new(&ctx, "root", Screen::ConferenceList, move |config, ctx, _| {
        let name = format!("{config:?}");
        let seen = Arc::clone(&seen);
        feed.subscribe_in(ctx.lifecycle(), move |v| seen.lock().push(format!("{name}:{v}")))
            .unwrap();
        Listener { ctx }
    });
    (lifecycle, stack)
}

#[test]
fn push_detail_then_pop_restores_list_without_residual_subscriptions() {
    let feed = StateFlow::new(0u32);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let (_lifecycle, stack) = listening_stack(&feed, &seen);
    assert_eq!(feed.subscriber_count(), 1);

    stack
        .push(Screen::ConferenceDetail("devfest23".to_string()))
        .unwrap();
    assert_eq!(feed.subscriber_count(), 2);
    let detail = stack.value().active().instance.clone();

    stack.pop().unwrap();
    assert_eq!(stack.value().active().configuration, Screen::ConferenceList);
    assert_eq!(stack.value().len(), 1);
    assert_eq!(feed.subscriber_count(), 1);
    assert!(detail.ctx.lifecycle().is_destroyed());

    seen.lock().clear();
    feed.publish(7);
    assert_eq!(*seen.lock(), vec!["ConferenceList:7".to_string()]);
}

#[test]
fn pop_of_last_entry_is_refused() {
    let feed = StateFlow::new(0u32);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let (_lifecycle, stack) = listening_stack(&feed, &seen);

    assert_eq!(stack.pop(), Err(NavError::EmptyStack));
    assert_eq!(stack.value().configurations(), vec![Screen::ConferenceList]);
}

#[test]
fn destroying_the_owner_releases_every_entry() {
    let feed = StateFlow::new(0u32);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let (lifecycle, stack) = listening_stack(&feed, &seen);
    stack.push(Screen::ConferenceDetail("a".into())).unwrap();
    stack.push(Screen::ConferenceDetail("b".into())).unwrap();
    assert_eq!(feed.subscriber_count(), 3);

    lifecycle.destroy();
    assert_eq!(feed.subscriber_count(), 0);
    assert!(matches!(
        stack.push(Screen::ConferenceList),
        Err(NavError::LifecycleViolation { .. })
    ));
}

#[derive(Debug, Clone)]
enum Op {
    Push(u8),
    Pop,
    ReplaceCurrent(u8),
    BringToFront(u8),
    ReplaceAll(Vec<u8>),
    Recreate,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..4).prop_map(Op::Push),
        Just(Op::Pop),
        (0u8..4).prop_map(Op::ReplaceCurrent),
        (0u8..4).prop_map(Op::BringToFront),
        prop::collection::vec(0u8..4, 0..4).prop_map(Op::ReplaceAll),
        Just(Op::Recreate),
    ]
}

fn detail(n: u8) -> Screen {
    Screen::ConferenceDetail(n.to_string())
}

/// Reference model of the stack as a plain vector.
fn apply(model: &mut Vec<Screen>, op: &Op) {
    match op {
        Op::Push(n) => model.push(detail(*n)),
        Op::Pop => {
            if model.len() > 1 {
                model.pop();
            }
        }
        Op::ReplaceCurrent(n) => {
            model.pop();
            model.push(detail(*n));
        }
        Op::BringToFront(n) => {
            let screen = detail(*n);
            if let Some(index) = model.iter().position(|s| *s == screen) {
                model.remove(index);
            }
            model.push(screen);
        }
        Op::ReplaceAll(ns) => {
            if !ns.is_empty() {
                *model = ns.iter().map(|n| detail(*n)).collect();
            }
        }
        Op::Recreate => {}
    }
}

proptest! {
    #[test]
    fn stack_is_never_empty_and_tracks_the_model(ops in prop::collection::vec(op(), 0..40)) {
        let feed = StateFlow::new(0u32);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let (_lifecycle, stack) = listening_stack(&feed, &seen);
        let mut model = vec![Screen::ConferenceList];

        for op in &ops {
            let result = match op.clone() {
                Op::Push(n) => stack.push(detail(n)),
                Op::Pop => stack.pop(),
                Op::ReplaceCurrent(n) => stack.replace_current(detail(n)),
                Op::BringToFront(n) => stack.bring_to_front(detail(n)),
                Op::ReplaceAll(ns) => stack.replace_all(ns.into_iter().map(detail).collect()),
                Op::Recreate => stack.recreate(),
            };
            if let Err(err) = result {
                prop_assert_eq!(err, NavError::EmptyStack);
            }
            apply(&mut model, op);

            let value = stack.value();
            prop_assert!(!value.is_empty());
            prop_assert_eq!(value.configurations(), model.clone());
            // One live subscription per entry: retired entries leave nothing behind.
            prop_assert_eq!(feed.subscriber_count(), model.len());
        }
    }
}
