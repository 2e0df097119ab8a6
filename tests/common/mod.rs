//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use confetti::component::{ComponentContext, Lifecycle, MainScheduler};
use confetti::data::{AuthState, InMemoryRepository, MemorySelectionStore};
use confetti::di::AppDependencies;
use confetti::navigation::{AppConfig, AppHost, AppOptions};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// How long the scheduler must stay idle before a test treats the tree as settled.
pub const QUIET: Duration = Duration::from_millis(30);

pub struct Harness {
    pub scheduler: MainScheduler,
    pub repository: InMemoryRepository,
    pub auth: AuthState,
    pub selection: Arc<MemorySelectionStore>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_selection(None)
    }

    pub fn with_selection(selected: Option<&str>) -> Self {
        Self {
            scheduler: MainScheduler::new(),
            repository: InMemoryRepository::sample(),
            auth: AuthState::default(),
            selection: Arc::new(MemorySelectionStore::new(selected)),
        }
    }

    pub fn deps(&self) -> AppDependencies {
        AppDependencies {
            repository: Arc::new(self.repository.clone()),
            selection: self.selection.clone(),
            auth: self.auth.clone(),
        }
    }

    pub fn host(&self, initial: Option<&str>) -> AppHost {
        self.host_with(AppOptions::default(), initial)
    }

    pub fn host_with(&self, options: AppOptions, initial: Option<&str>) -> AppHost {
        AppHost::new(
            self.deps(),
            self.scheduler.handle(),
            options,
            initial.map(str::to_string),
        )
    }

    /// Context on a fresh root lifecycle, for building screens directly.
    pub fn context(&self, name: &str) -> ComponentContext {
        ComponentContext::new(Lifecycle::new(name), self.scheduler.handle())
    }

    /// Run main-thread tasks until background work has gone quiet.
    pub async fn settle(&mut self) -> usize {
        self.scheduler.settle(QUIET).await
    }
}

pub fn active_app(host: &AppHost) -> AppConfig {
    host.root().stack().value().active().configuration.clone()
}

pub fn conference(id: &str) -> AppConfig {
    AppConfig::Conference {
        conference_id: id.to_string(),
    }
}

/// Write a config file into a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
