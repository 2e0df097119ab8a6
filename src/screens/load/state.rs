use crate::ui::mvi::UiState;

/// What a data-backed screen shows.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Success(T),
    /// Human-readable reason. The view offers a retry.
    Error(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T: Clone + PartialEq + Send + 'static> UiState for LoadState<T> {}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn content(&self) -> Option<&T> {
        match self {
            LoadState::Success(content) => Some(content),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(reason) => Some(reason),
            _ => None,
        }
    }
}
