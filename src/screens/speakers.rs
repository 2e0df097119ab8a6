use std::sync::Arc;

use crate::component::{ComponentContext, IdCallback, StateFlow};
use crate::data::{ConferenceRepository, Speaker};
use crate::error::NavError;
use crate::screens::load::{LoadState, ScreenModel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakersContent {
    pub conference_name: String,
    pub speakers: Vec<Speaker>,
}

#[derive(Clone)]
pub struct SpeakersComponent {
    model: ScreenModel<SpeakersContent>,
    conference_id: String,
    repository: Arc<dyn ConferenceRepository>,
    on_speaker_selected: IdCallback,
}

impl SpeakersComponent {
    pub fn new(
        ctx: ComponentContext,
        conference_id: impl Into<String>,
        repository: Arc<dyn ConferenceRepository>,
        on_speaker_selected: IdCallback,
    ) -> Self {
        let component = Self {
            model: ScreenModel::new(ctx),
            conference_id: conference_id.into(),
            repository,
            on_speaker_selected,
        };
        if let Err(err) = component.refresh() {
            tracing::error!(error = %err, "speakers created on a dead lifecycle");
        }
        component
    }

    pub fn state(&self) -> &StateFlow<LoadState<SpeakersContent>> {
        self.model.state()
    }

    pub fn refresh(&self) -> Result<(), NavError> {
        let data = self.repository.conference_data(&self.conference_id);
        self.model.load(async move {
            let data = data.await?;
            let mut speakers = data.speakers;
            speakers.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(SpeakersContent {
                conference_name: data.conference.name,
                speakers,
            })
        })
    }

    pub fn on_speaker_clicked(&self, speaker_id: &str) {
        (self.on_speaker_selected)(speaker_id);
    }
}
