//! Unidirectional screen state: intents go through a reducer, the result is
//! published on the screen's `StateFlow`, the view reads the flow.
//!
//! ```text
//! intent ──→ Reducer::reduce(current, intent) ──→ StateFlow ──→ view::build
//! ```

/// Snapshot of everything one screen shows. Replaced wholesale on change;
/// equal snapshots are never re-emitted.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// A user action or collaborator result addressed to one screen.
pub trait Intent: Send + 'static {}

/// Pure `(state, intent) -> state` transition. The only place screen state
/// changes.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Reduce `$intent` against the flow's current value and publish the result
/// if it differs. Evaluates to whether anything was published.
#[macro_export]
macro_rules! dispatch_mvi {
    ($flow:expr, $reducer:ty, $intent:expr) => {
        $flow.publish_if_changed(<$reducer as $crate::ui::mvi::Reducer>::reduce(
            $flow.value(),
            $intent,
        ))
    };
}
