use std::sync::Arc;

use crate::component::{Callback, ComponentContext, IdCallback, StateFlow};
use crate::data::{ConferenceRepository, Session, Speaker};
use crate::error::{LoadError, NavError};
use crate::screens::load::{LoadState, ScreenModel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDetails {
    pub conference_name: String,
    pub session: Session,
    pub speakers: Vec<Speaker>,
}

#[derive(Clone)]
pub struct SessionDetailsComponent {
    model: ScreenModel<SessionDetails>,
    conference_id: String,
    session_id: String,
    repository: Arc<dyn ConferenceRepository>,
    on_speaker_selected: IdCallback,
    on_close: Callback,
}

impl SessionDetailsComponent {
    pub fn new(
        ctx: ComponentContext,
        conference_id: impl Into<String>,
        session_id: impl Into<String>,
        repository: Arc<dyn ConferenceRepository>,
        on_speaker_selected: IdCallback,
        on_close: Callback,
    ) -> Self {
        let component = Self {
            model: ScreenModel::new(ctx),
            conference_id: conference_id.into(),
            session_id: session_id.into(),
            repository,
            on_speaker_selected,
            on_close,
        };
        if let Err(err) = component.refresh() {
            tracing::error!(error = %err, "session details created on a dead lifecycle");
        }
        component
    }

    pub fn state(&self) -> &StateFlow<LoadState<SessionDetails>> {
        self.model.state()
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn refresh(&self) -> Result<(), NavError> {
        let data = self.repository.conference_data(&self.conference_id);
        let session_id = self.session_id.clone();
        self.model.load(async move {
            let data = data.await?;
            let session = data
                .session(&session_id)
                .cloned()
                .ok_or_else(|| LoadError::not_found("session", session_id.as_str()))?;
            Ok(SessionDetails {
                speakers: data.speakers_of(&session),
                conference_name: data.conference.name,
                session,
            })
        })
    }

    pub fn on_speaker_clicked(&self, speaker_id: &str) {
        (self.on_speaker_selected)(speaker_id);
    }

    pub fn on_close_clicked(&self) {
        (self.on_close)();
    }
}
