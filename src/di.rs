//! Process-wide dependency container.
//!
//! The shell bootstraps it once before building any component. Components
//! never read it themselves: the shell clones what they need out of it.

use std::sync::{Arc, OnceLock};

use thiserror::Error;

use crate::data::{AuthState, ConferenceRepository, SelectionStore};

#[derive(Clone)]
pub struct AppDependencies {
    pub repository: Arc<dyn ConferenceRepository>,
    pub selection: Arc<dyn SelectionStore>,
    pub auth: AuthState,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiError {
    #[error("dependency container already initialized")]
    AlreadyInitialized,

    #[error("dependency container used before initialization")]
    NotInitialized,
}

static CONTAINER: OnceLock<AppDependencies> = OnceLock::new();

/// Install the container. Succeeds exactly once per process.
pub fn init_container(deps: AppDependencies) -> Result<&'static AppDependencies, DiError> {
    let mut installed = false;
    let deps = CONTAINER.get_or_init(|| {
        installed = true;
        deps
    });
    if !installed {
        tracing::error!("init_container called twice");
        return Err(DiError::AlreadyInitialized);
    }
    tracing::debug!("dependency container initialized");
    Ok(deps)
}

pub fn container() -> Result<&'static AppDependencies, DiError> {
    CONTAINER.get().ok_or(DiError::NotInitialized)
}
