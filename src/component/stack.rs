//! Observable navigation stack of child components.
//!
//! The owning component holds a [`StackNavigation`]; children only ever get a
//! [`Navigator`], which is a weak handle and therefore never keeps the parent
//! alive. Each entry owns a child lifecycle of the owner: removing the entry
//! destroys it, and destroying the owner destroys every entry.

use std::fmt::Debug;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::component::context::ComponentContext;
use crate::component::lifecycle::Lifecycle;
use crate::component::value::StateFlow;
use crate::error::NavError;

/// One active entry as seen by observers.
#[derive(Debug, Clone)]
pub struct Child<C, T> {
    pub configuration: C,
    pub instance: T,
}

/// Immutable snapshot of a stack. Never empty.
#[derive(Debug, Clone)]
pub struct ChildStack<C, T> {
    items: Vec<Child<C, T>>,
}

impl<C, T> ChildStack<C, T> {
    pub fn active(&self) -> &Child<C, T> {
        // Non-empty by construction: every command keeps at least one entry.
        &self.items[self.items.len() - 1]
    }

    pub fn back_stack(&self) -> &[Child<C, T>] {
        &self.items[..self.items.len() - 1]
    }

    pub fn items(&self) -> &[Child<C, T>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<C: Clone, T> ChildStack<C, T> {
    pub fn configurations(&self) -> Vec<C> {
        self.items.iter().map(|c| c.configuration.clone()).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NavCommand<C> {
    Push(C),
    Pop,
    ReplaceCurrent(C),
    BringToFront(C),
    ReplaceAll(Vec<C>),
    Recreate,
}

trait Navigate<C>: Send + Sync {
    fn navigate(&self, command: NavCommand<C>) -> Result<(), NavError>;
}

struct Entry<C, T> {
    configuration: C,
    instance: T,
    lifecycle: Lifecycle,
}

type Factory<C, T> = Box<dyn Fn(C, ComponentContext, Navigator<C>) -> T + Send + Sync>;

struct StackCore<C, T> {
    name: String,
    ctx: ComponentContext,
    navigator: Navigator<C>,
    factory: Factory<C, T>,
    entries: Mutex<Vec<Entry<C, T>>>,
    state: StateFlow<ChildStack<C, T>>,
}

impl<C, T> StackCore<C, T>
where
    C: Clone + PartialEq + Debug + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    fn create(&self, configuration: C) -> Entry<C, T> {
        let ctx = self.ctx.child(format!("{configuration:?}"));
        let instance = (self.factory)(configuration.clone(), ctx.clone(), self.navigator.clone());
        Entry {
            configuration,
            instance,
            lifecycle: ctx.lifecycle().clone(),
        }
    }

    fn snapshot(&self) -> ChildStack<C, T> {
        let entries = self.entries.lock();
        ChildStack {
            items: entries
                .iter()
                .map(|e| Child {
                    configuration: e.configuration.clone(),
                    instance: e.instance.clone(),
                })
                .collect(),
        }
    }

    fn replace_all(&self, configurations: Vec<C>) -> Result<(), NavError> {
        if configurations.is_empty() {
            return Err(NavError::EmptyStack);
        }
        let retired = std::mem::take(&mut *self.entries.lock());
        for entry in retired.into_iter().rev() {
            entry.lifecycle.destroy();
        }
        let fresh: Vec<Entry<C, T>> = configurations
            .into_iter()
            .map(|c| self.create(c))
            .collect();
        *self.entries.lock() = fresh;
        Ok(())
    }
}

impl<C, T> Navigate<C> for StackCore<C, T>
where
    C: Clone + PartialEq + Debug + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    fn navigate(&self, command: NavCommand<C>) -> Result<(), NavError> {
        self.ctx.lifecycle().ensure_alive()?;
        tracing::debug!(stack = %self.name, ?command, "navigate");

        match command {
            NavCommand::Push(configuration) => {
                let entry = self.create(configuration);
                self.entries.lock().push(entry);
            }
            NavCommand::Pop => {
                let popped = {
                    let mut entries = self.entries.lock();
                    if entries.len() <= 1 {
                        return Err(NavError::EmptyStack);
                    }
                    entries.pop()
                };
                if let Some(entry) = popped {
                    entry.lifecycle.destroy();
                }
            }
            NavCommand::ReplaceCurrent(configuration) => {
                let old = self.entries.lock().pop();
                if let Some(entry) = old {
                    entry.lifecycle.destroy();
                }
                let entry = self.create(configuration);
                self.entries.lock().push(entry);
            }
            NavCommand::BringToFront(configuration) => {
                let moved = {
                    let mut entries = self.entries.lock();
                    match entries.iter().position(|e| e.configuration == configuration) {
                        Some(index) => {
                            let entry = entries.remove(index);
                            entries.push(entry);
                            true
                        }
                        None => false,
                    }
                };
                if !moved {
                    let entry = self.create(configuration);
                    self.entries.lock().push(entry);
                }
            }
            NavCommand::ReplaceAll(configurations) => self.replace_all(configurations)?,
            NavCommand::Recreate => {
                let current: Vec<C> = self
                    .entries
                    .lock()
                    .iter()
                    .map(|e| e.configuration.clone())
                    .collect();
                self.replace_all(current)?;
            }
        }

        self.state.publish(self.snapshot());
        Ok(())
    }
}

/// Owner side of a navigation stack.
pub struct StackNavigation<C, T> {
    core: Arc<StackCore<C, T>>,
}

impl<C, T> StackNavigation<C, T>
where
    C: Clone + PartialEq + Debug + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    /// Build a stack holding `initial` as its only entry.
    ///
    /// The factory receives the entry's context and a navigator for this
    /// stack, so children can request navigation without owning the parent.
    pub fn new(
        ctx: &ComponentContext,
        name: impl Into<String>,
        initial: C,
        factory: impl Fn(C, ComponentContext, Navigator<C>) -> T + Send + Sync + 'static,
    ) -> Self {
        let name = name.into();
        let stack_ctx = ctx.child(name.clone());

        let core = Arc::new_cyclic(|weak: &Weak<StackCore<C, T>>| {
            let target: Weak<dyn Navigate<C>> = weak.clone();
            let navigator = Navigator {
                name: name.clone(),
                target,
            };

            let first_ctx = stack_ctx.child(format!("{initial:?}"));
            let instance = factory(initial.clone(), first_ctx.clone(), navigator.clone());
            let first = Entry {
                configuration: initial.clone(),
                instance: instance.clone(),
                lifecycle: first_ctx.lifecycle().clone(),
            };

            StackCore {
                name,
                ctx: stack_ctx,
                navigator,
                factory: Box::new(factory),
                entries: Mutex::new(vec![first]),
                state: StateFlow::new(ChildStack {
                    items: vec![Child {
                        configuration: initial,
                        instance,
                    }],
                }),
            }
        });

        let weak = Arc::downgrade(&core);
        core.ctx.lifecycle().do_on_destroy(move || {
            if let Some(core) = weak.upgrade() {
                core.entries.lock().clear();
            }
        });

        Self { core }
    }

    pub fn state(&self) -> &StateFlow<ChildStack<C, T>> {
        &self.core.state
    }

    pub fn value(&self) -> ChildStack<C, T> {
        self.core.state.value()
    }

    pub fn navigator(&self) -> Navigator<C> {
        self.core.navigator.clone()
    }

    pub fn push(&self, configuration: C) -> Result<(), NavError> {
        self.core.navigate(NavCommand::Push(configuration))
    }

    pub fn pop(&self) -> Result<(), NavError> {
        self.core.navigate(NavCommand::Pop)
    }

    pub fn replace_current(&self, configuration: C) -> Result<(), NavError> {
        self.core.navigate(NavCommand::ReplaceCurrent(configuration))
    }

    pub fn bring_to_front(&self, configuration: C) -> Result<(), NavError> {
        self.core.navigate(NavCommand::BringToFront(configuration))
    }

    pub fn replace_all(&self, configurations: Vec<C>) -> Result<(), NavError> {
        self.core.navigate(NavCommand::ReplaceAll(configurations))
    }

    pub fn recreate(&self) -> Result<(), NavError> {
        self.core.navigate(NavCommand::Recreate)
    }
}

/// Weak command handle given to children so they can navigate their parent.
pub struct Navigator<C> {
    name: String,
    target: Weak<dyn Navigate<C>>,
}

impl<C> Clone for Navigator<C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            target: Weak::clone(&self.target),
        }
    }
}

impl<C: Debug> Navigator<C> {
    pub fn send(&self, command: NavCommand<C>) -> Result<(), NavError> {
        match self.target.upgrade() {
            Some(target) => target.navigate(command),
            None => {
                tracing::error!(stack = %self.name, ?command, "navigator outlived its stack");
                Err(NavError::violation(self.name.clone()))
            }
        }
    }

    pub fn push(&self, configuration: C) -> Result<(), NavError> {
        self.send(NavCommand::Push(configuration))
    }

    pub fn pop(&self) -> Result<(), NavError> {
        self.send(NavCommand::Pop)
    }

    pub fn replace_current(&self, configuration: C) -> Result<(), NavError> {
        self.send(NavCommand::ReplaceCurrent(configuration))
    }

    pub fn bring_to_front(&self, configuration: C) -> Result<(), NavError> {
        self.send(NavCommand::BringToFront(configuration))
    }

    pub fn replace_all(&self, configurations: Vec<C>) -> Result<(), NavError> {
        self.send(NavCommand::ReplaceAll(configurations))
    }

    pub fn recreate(&self) -> Result<(), NavError> {
        self.send(NavCommand::Recreate)
    }
}
