use std::sync::Arc;

use crate::component::{Callback, ComponentContext, IdCallback, StateFlow};
use crate::data::{ConferenceRepository, Session, Speaker};
use crate::error::{LoadError, NavError};
use crate::screens::load::{LoadState, ScreenModel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakerDetails {
    pub conference_name: String,
    pub speaker: Speaker,
    pub sessions: Vec<Session>,
}

#[derive(Clone)]
pub struct SpeakerDetailsComponent {
    model: ScreenModel<SpeakerDetails>,
    conference_id: String,
    speaker_id: String,
    repository: Arc<dyn ConferenceRepository>,
    on_session_selected: IdCallback,
    on_close: Callback,
}

impl SpeakerDetailsComponent {
    pub fn new(
        ctx: ComponentContext,
        conference_id: impl Into<String>,
        speaker_id: impl Into<String>,
        repository: Arc<dyn ConferenceRepository>,
        on_session_selected: IdCallback,
        on_close: Callback,
    ) -> Self {
        let component = Self {
            model: ScreenModel::new(ctx),
            conference_id: conference_id.into(),
            speaker_id: speaker_id.into(),
            repository,
            on_session_selected,
            on_close,
        };
        if let Err(err) = component.refresh() {
            tracing::error!(error = %err, "speaker details created on a dead lifecycle");
        }
        component
    }

    pub fn state(&self) -> &StateFlow<LoadState<SpeakerDetails>> {
        self.model.state()
    }

    pub fn speaker_id(&self) -> &str {
        &self.speaker_id
    }

    pub fn refresh(&self) -> Result<(), NavError> {
        let data = self.repository.conference_data(&self.conference_id);
        let speaker_id = self.speaker_id.clone();
        self.model.load(async move {
            let data = data.await?;
            let speaker = data
                .speaker(&speaker_id)
                .cloned()
                .ok_or_else(|| LoadError::not_found("speaker", speaker_id.as_str()))?;
            let mut sessions = data.sessions_of(&speaker);
            sessions.sort_by(|a, b| a.start.cmp(&b.start));
            Ok(SpeakerDetails {
                conference_name: data.conference.name,
                speaker,
                sessions,
            })
        })
    }

    pub fn on_session_clicked(&self, session_id: &str) {
        (self.on_session_selected)(session_id);
    }

    pub fn on_close_clicked(&self) {
        (self.on_close)();
    }
}
