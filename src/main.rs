use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use confetti::cli::Cli;
use confetti::component::{callback, MainScheduler};
use confetti::config::Config;
use confetti::data::{
    AuthState, ConferenceRepository, FileSelectionStore, InMemoryRepository, SelectionStore,
};
use confetti::di::{container, init_container, AppDependencies};
use confetti::logging::init_tracing;
use confetti::navigation::{AppHost, AppOptions};
use confetti::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(source) = cli.data.clone() {
        config.data.source = Some(source);
    }
    if cli.multi_pane {
        config.ui.multi_pane = true;
    }

    let log_path = init_tracing(&config.logging)?;
    tracing::info!(log = %log_path.display(), "starting confetti");

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let _enter = rt.enter();

    let repository = match &config.data.source {
        Some(path) => InMemoryRepository::from_json_file(path)?,
        None => InMemoryRepository::sample(),
    }
    .with_latency(Duration::from_millis(config.data.latency_ms));
    let selection = FileSelectionStore::new(
        config
            .data
            .state_file
            .clone()
            .unwrap_or_else(FileSelectionStore::default_path),
    );
    tracing::debug!(state = %selection.path().display(), "selection store");

    let repository: Arc<dyn ConferenceRepository> = Arc::new(repository);
    let selection: Arc<dyn SelectionStore> = Arc::new(selection);
    init_container(AppDependencies {
        repository,
        selection,
        auth: AuthState::default(),
    })?;

    let options = AppOptions {
        multi_pane: config.ui.multi_pane,
        on_sign_in: callback(|| tracing::info!("sign-in requested")),
        on_sign_out: callback(|| tracing::info!("sign-out requested")),
    };

    let mut scheduler = MainScheduler::new();
    let mut host = AppHost::new(
        container()?.clone(),
        scheduler.handle(),
        options,
        cli.conference.clone(),
    );

    runtime::run(&mut host, &mut scheduler, &config.ui)?;
    tracing::info!("shutdown");
    Ok(())
}
