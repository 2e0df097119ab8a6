use crate::component::lifecycle::Lifecycle;
use crate::component::scheduler::MainHandle;

/// What every component receives at construction: its own lifecycle node and
/// a way back onto the main thread.
#[derive(Clone)]
pub struct ComponentContext {
    lifecycle: Lifecycle,
    main: MainHandle,
}

impl ComponentContext {
    pub fn new(lifecycle: Lifecycle, main: MainHandle) -> Self {
        Self { lifecycle, main }
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub fn main(&self) -> &MainHandle {
        &self.main
    }

    /// Context for a sub-component whose lifecycle is nested under this one.
    pub fn child(&self, name: impl Into<String>) -> ComponentContext {
        ComponentContext {
            lifecycle: self.lifecycle.child(name),
            main: self.main.clone(),
        }
    }
}
