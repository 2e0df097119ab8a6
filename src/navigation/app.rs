use std::sync::Arc;

use crate::component::{
    callback, id_callback, Callback, ChildStack, ComponentContext, Navigator, StackNavigation,
    StateFlow,
};
use crate::data::SelectionStore;
use crate::di::AppDependencies;
use crate::error::NavError;
use crate::navigation::conference::{ConferenceComponent, ConferenceParams};
use crate::screens::ConferencesComponent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppConfig {
    Loading,
    Conferences,
    Conference { conference_id: String },
}

#[derive(Clone)]
pub enum AppChild {
    /// Persisted selection still being resolved.
    Loading,
    Conferences(ConferencesComponent),
    Conference(ConferenceComponent),
}

/// Shell-facing options for the root component.
#[derive(Clone)]
pub struct AppOptions {
    pub multi_pane: bool,
    /// Called before the session is reset by [`AppComponent::sign_in`].
    pub on_sign_in: Callback,
    /// Called before the session is reset by [`AppComponent::sign_out`].
    pub on_sign_out: Callback,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            multi_pane: false,
            on_sign_in: callback(|| {}),
            on_sign_out: callback(|| {}),
        }
    }
}

/// Root of the component tree.
#[derive(Clone)]
pub struct AppComponent {
    inner: Arc<AppInner>,
}

struct AppInner {
    stack: StackNavigation<AppConfig, AppChild>,
    deps: AppDependencies,
    options: AppOptions,
}

impl AppComponent {
    /// With `initial_conference_id` the tree opens straight on that
    /// conference. Otherwise it starts in `Loading` and resolves the
    /// persisted selection in the background.
    pub fn new(
        ctx: &ComponentContext,
        deps: AppDependencies,
        options: AppOptions,
        initial_conference_id: Option<String>,
    ) -> Self {
        let initial = match &initial_conference_id {
            Some(id) => {
                persist(deps.selection.as_ref(), Some(id.as_str()));
                AppConfig::Conference {
                    conference_id: id.clone(),
                }
            }
            None => AppConfig::Loading,
        };

        let factory_deps = deps.clone();
        let factory_options = options.clone();
        let stack = StackNavigation::new(
            ctx,
            "app",
            initial,
            move |config, child_ctx, nav: Navigator<AppConfig>| {
                build_child(config, child_ctx, nav, &factory_deps, &factory_options)
            },
        );

        Self {
            inner: Arc::new(AppInner {
                stack,
                deps,
                options,
            }),
        }
    }

    pub fn stack(&self) -> &StateFlow<ChildStack<AppConfig, AppChild>> {
        self.inner.stack.state()
    }

    pub fn is_signed_in(&self) -> bool {
        self.inner.deps.auth.is_signed_in()
    }

    pub fn select_conference(&self, conference_id: &str) -> Result<(), NavError> {
        open_conference(
            &self.inner.stack.navigator(),
            self.inner.deps.selection.as_ref(),
            conference_id,
        )
    }

    pub fn show_conferences(&self) -> Result<(), NavError> {
        open_conference_list(
            &self.inner.stack.navigator(),
            self.inner.deps.selection.as_ref(),
        )
    }

    pub fn sign_in(&self) -> Result<(), NavError> {
        reset_session(&self.inner.stack.navigator(), &self.inner.deps, &self.inner.options, true)
    }

    pub fn sign_out(&self) -> Result<(), NavError> {
        reset_session(&self.inner.stack.navigator(), &self.inner.deps, &self.inner.options, false)
    }
}

fn persist(selection: &dyn SelectionStore, conference_id: Option<&str>) {
    if let Err(err) = selection.save(conference_id) {
        tracing::warn!(error = %err, "could not persist conference selection");
    }
}

fn open_conference(
    nav: &Navigator<AppConfig>,
    selection: &dyn SelectionStore,
    conference_id: &str,
) -> Result<(), NavError> {
    persist(selection, Some(conference_id));
    nav.replace_all(vec![AppConfig::Conference {
        conference_id: conference_id.to_string(),
    }])
}

fn open_conference_list(
    nav: &Navigator<AppConfig>,
    selection: &dyn SelectionStore,
) -> Result<(), NavError> {
    persist(selection, None);
    nav.replace_all(vec![AppConfig::Conferences])
}

/// Notify the shell, flip the auth flag and rebuild every entry so no
/// component of the previous session survives.
fn reset_session(
    nav: &Navigator<AppConfig>,
    deps: &AppDependencies,
    options: &AppOptions,
    signed_in: bool,
) -> Result<(), NavError> {
    if signed_in {
        (options.on_sign_in)();
    } else {
        (options.on_sign_out)();
    }
    deps.auth.set_signed_in(signed_in);
    tracing::info!(signed_in, "session reset");
    nav.recreate()
}

fn build_child(
    config: AppConfig,
    ctx: ComponentContext,
    nav: Navigator<AppConfig>,
    deps: &AppDependencies,
    options: &AppOptions,
) -> AppChild {
    match config {
        AppConfig::Loading => {
            resolve_selection(&ctx, &nav, deps);
            AppChild::Loading
        }
        AppConfig::Conferences => {
            let selection = Arc::clone(&deps.selection);
            AppChild::Conferences(ConferencesComponent::new(
                ctx,
                Arc::clone(&deps.repository),
                id_callback(move |id| {
                    if let Err(err) = open_conference(&nav, selection.as_ref(), id) {
                        tracing::warn!(error = %err, "could not open conference");
                    }
                }),
            ))
        }
        AppConfig::Conference { conference_id } => {
            let on_switch_conference = {
                let nav = nav.clone();
                let selection = Arc::clone(&deps.selection);
                callback(move || {
                    if let Err(err) = open_conference_list(&nav, selection.as_ref()) {
                        tracing::warn!(error = %err, "could not switch conference");
                    }
                })
            };
            let on_sign_in = {
                let deps = deps.clone();
                let options = options.clone();
                callback(move || {
                    if let Err(err) = reset_session(&nav, &deps, &options, true) {
                        tracing::warn!(error = %err, "sign-in reset failed");
                    }
                })
            };
            AppChild::Conference(ConferenceComponent::new(
                &ctx,
                ConferenceParams {
                    conference_id,
                    repository: Arc::clone(&deps.repository),
                    auth: deps.auth.clone(),
                    multi_pane: options.multi_pane,
                    on_sign_in,
                    on_switch_conference,
                },
            ))
        }
    }
}

/// Read the stored selection off the main thread and leave `Loading`.
/// Runs in the `Loading` entry's lifecycle, so navigating away first cancels it.
fn resolve_selection(ctx: &ComponentContext, nav: &Navigator<AppConfig>, deps: &AppDependencies) {
    let selection = Arc::clone(&deps.selection);
    let nav = nav.clone();
    let read = async move { selection.load() };
    let launched = ctx.lifecycle().launch(ctx.main(), read, move |stored| {
        let target = match stored {
            Ok(Some(conference_id)) => AppConfig::Conference { conference_id },
            Ok(None) => AppConfig::Conferences,
            Err(err) => {
                tracing::warn!(error = %err, "stored selection unreadable");
                AppConfig::Conferences
            }
        };
        if let Err(err) = nav.replace_all(vec![target]) {
            tracing::warn!(error = %err, "could not leave loading state");
        }
    });
    if let Err(err) = launched {
        tracing::error!(error = %err, "loading entry created on a dead lifecycle");
    }
}
