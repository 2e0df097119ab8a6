use std::sync::Arc;

use crate::component::{
    callback, id_callback, Callback, ChildStack, ComponentContext, Navigator, StackNavigation,
    StateFlow,
};
use crate::data::{AuthState, ConferenceRepository};
use crate::error::NavError;
use crate::navigation::home::{HomeCallbacks, HomeComponent};
use crate::screens::{SessionDetailsComponent, SpeakerDetailsComponent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConferenceConfig {
    Home,
    SessionDetails { session_id: String },
    SpeakerDetails { speaker_id: String },
    Settings,
}

#[derive(Clone)]
pub enum ConferenceChild {
    Home(HomeComponent),
    SessionDetails(SessionDetailsComponent),
    SpeakerDetails(SpeakerDetailsComponent),
    /// Declared target without content.
    Settings,
}

/// Everything a conference needs from above.
#[derive(Clone)]
pub struct ConferenceParams {
    pub conference_id: String,
    pub repository: Arc<dyn ConferenceRepository>,
    pub auth: AuthState,
    pub multi_pane: bool,
    pub on_sign_in: Callback,
    pub on_switch_conference: Callback,
}

/// One open conference: its home tabs plus the detail screens pushed on top.
#[derive(Clone)]
pub struct ConferenceComponent {
    inner: Arc<ConferenceInner>,
}

struct ConferenceInner {
    conference_id: String,
    theme_color: StateFlow<Option<u32>>,
    stack: StackNavigation<ConferenceConfig, ConferenceChild>,
}

impl ConferenceComponent {
    pub fn new(ctx: &ComponentContext, params: ConferenceParams) -> Self {
        let conference_id = params.conference_id.clone();
        let theme_color = StateFlow::new(None);
        resolve_theme_color(ctx, &params, &theme_color);

        let stack = StackNavigation::new(
            ctx,
            "conference",
            ConferenceConfig::Home,
            move |config, child_ctx, nav: Navigator<ConferenceConfig>| {
                build_child(config, child_ctx, nav, &params)
            },
        );

        Self {
            inner: Arc::new(ConferenceInner {
                conference_id,
                theme_color,
                stack,
            }),
        }
    }

    pub fn conference_id(&self) -> &str {
        &self.inner.conference_id
    }

    /// `0xRRGGBB` accent of the conference, once known.
    pub fn theme_color(&self) -> &StateFlow<Option<u32>> {
        &self.inner.theme_color
    }

    pub fn stack(&self) -> &StateFlow<ChildStack<ConferenceConfig, ConferenceChild>> {
        self.inner.stack.state()
    }

    pub fn show_session(&self, session_id: &str) -> Result<(), NavError> {
        self.inner.stack.push(ConferenceConfig::SessionDetails {
            session_id: session_id.to_string(),
        })
    }

    pub fn show_speaker(&self, speaker_id: &str) -> Result<(), NavError> {
        self.inner.stack.push(ConferenceConfig::SpeakerDetails {
            speaker_id: speaker_id.to_string(),
        })
    }

    pub fn show_settings(&self) -> Result<(), NavError> {
        self.inner.stack.bring_to_front(ConferenceConfig::Settings)
    }

    /// Leave the top screen. Closing the home screen is a no-op.
    pub fn close(&self) -> Result<(), NavError> {
        close_top(&self.inner.stack.navigator())
    }
}

fn close_top(nav: &Navigator<ConferenceConfig>) -> Result<(), NavError> {
    match nav.pop() {
        Err(NavError::EmptyStack) => {
            tracing::debug!("close on conference home ignored");
            Ok(())
        }
        other => other,
    }
}

fn build_child(
    config: ConferenceConfig,
    ctx: ComponentContext,
    nav: Navigator<ConferenceConfig>,
    params: &ConferenceParams,
) -> ConferenceChild {
    let show_session = {
        let nav = nav.clone();
        id_callback(move |id| {
            let target = ConferenceConfig::SessionDetails {
                session_id: id.to_string(),
            };
            if let Err(err) = nav.push(target) {
                tracing::warn!(error = %err, "could not open session");
            }
        })
    };
    let show_speaker = {
        let nav = nav.clone();
        id_callback(move |id| {
            let target = ConferenceConfig::SpeakerDetails {
                speaker_id: id.to_string(),
            };
            if let Err(err) = nav.push(target) {
                tracing::warn!(error = %err, "could not open speaker");
            }
        })
    };
    let close = {
        let nav = nav.clone();
        callback(move || {
            if let Err(err) = close_top(&nav) {
                tracing::warn!(error = %err, "could not close screen");
            }
        })
    };

    match config {
        ConferenceConfig::Home => ConferenceChild::Home(HomeComponent::new(
            &ctx,
            &params.conference_id,
            Arc::clone(&params.repository),
            params.auth.clone(),
            params.multi_pane,
            HomeCallbacks {
                on_session_selected: show_session,
                on_speaker_selected: show_speaker,
                on_sign_in: Arc::clone(&params.on_sign_in),
                on_switch_conference: Arc::clone(&params.on_switch_conference),
            },
        )),
        ConferenceConfig::SessionDetails { session_id } => {
            ConferenceChild::SessionDetails(SessionDetailsComponent::new(
                ctx,
                params.conference_id.clone(),
                session_id,
                Arc::clone(&params.repository),
                show_speaker,
                close,
            ))
        }
        ConferenceConfig::SpeakerDetails { speaker_id } => {
            ConferenceChild::SpeakerDetails(SpeakerDetailsComponent::new(
                ctx,
                params.conference_id.clone(),
                speaker_id,
                Arc::clone(&params.repository),
                show_session,
                close,
            ))
        }
        ConferenceConfig::Settings => ConferenceChild::Settings,
    }
}

/// Look the conference up in the list and publish its accent color.
fn resolve_theme_color(
    ctx: &ComponentContext,
    params: &ConferenceParams,
    theme_color: &StateFlow<Option<u32>>,
) {
    let conferences = params.repository.conferences();
    let conference_id = params.conference_id.clone();
    let theme_color = theme_color.clone();
    let launched = ctx.lifecycle().launch(ctx.main(), conferences, move |result| match result {
        Ok(list) => {
            let color = list
                .into_iter()
                .find(|c| c.id == conference_id)
                .and_then(|c| c.theme_color);
            theme_color.publish_if_changed(color);
        }
        Err(err) => {
            tracing::warn!(conference = %conference_id, error = %err, "theme color unavailable");
        }
    });
    if let Err(err) = launched {
        tracing::error!(error = %err, "conference created on a dead lifecycle");
    }
}
