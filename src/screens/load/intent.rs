use crate::error::LoadError;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LoadIntent<T> {
    /// A fetch was started (first load, refresh or retry).
    Started,
    Loaded(T),
    Failed(LoadError),
}

impl<T: Send + 'static> Intent for LoadIntent<T> {}
