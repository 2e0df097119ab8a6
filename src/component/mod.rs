//! Component runtime: lifecycles, main-thread scheduling, observable state
//! and navigation stacks.
//!
//! # Architecture
//!
//! ```text
//! AppHost ── Lifecycle (application)
//!    └─ AppComponent ── StackNavigation<AppConfig, AppChild>
//!          └─ ConferenceComponent ── StackNavigation<ConferenceConfig, ..>
//!                └─ HomeComponent ── StackNavigation<HomeConfig, ..>
//!                      └─ SessionsComponent ── StateFlow<LoadState<..>>
//! ```
//!
//! All component state is read and written on the main thread. Background
//! futures are started through [`Lifecycle::launch`] and come back through
//! the [`MainScheduler`].

mod context;
mod lifecycle;
mod scheduler;
mod stack;
mod value;

pub use context::ComponentContext;
pub use lifecycle::Lifecycle;
pub use scheduler::{MainHandle, MainScheduler, UiTask};
pub use stack::{Child, ChildStack, NavCommand, Navigator, StackNavigation};
pub use value::{StateFlow, Subscription};

use std::sync::Arc;

/// Zero-argument callback handed from a parent to a child.
pub type Callback = Arc<dyn Fn() + Send + Sync + 'static>;

/// Callback carrying the id of the item the user picked.
pub type IdCallback = Arc<dyn Fn(&str) + Send + Sync + 'static>;

pub fn callback(f: impl Fn() + Send + Sync + 'static) -> Callback {
    Arc::new(f)
}

pub fn id_callback(f: impl Fn(&str) + Send + Sync + 'static) -> IdCallback {
    Arc::new(f)
}
