use std::sync::Arc;

use crate::component::{ComponentContext, StateFlow};
use crate::data::{ConferenceRepository, Venue};
use crate::error::{LoadError, NavError};
use crate::screens::load::{LoadState, ScreenModel};

#[derive(Clone)]
pub struct VenueComponent {
    model: ScreenModel<Venue>,
    conference_id: String,
    repository: Arc<dyn ConferenceRepository>,
}

impl VenueComponent {
    pub fn new(
        ctx: ComponentContext,
        conference_id: impl Into<String>,
        repository: Arc<dyn ConferenceRepository>,
    ) -> Self {
        let component = Self {
            model: ScreenModel::new(ctx),
            conference_id: conference_id.into(),
            repository,
        };
        if let Err(err) = component.refresh() {
            tracing::error!(error = %err, "venue created on a dead lifecycle");
        }
        component
    }

    pub fn state(&self) -> &StateFlow<LoadState<Venue>> {
        self.model.state()
    }

    pub fn refresh(&self) -> Result<(), NavError> {
        let data = self.repository.conference_data(&self.conference_id);
        self.model.load(async move {
            data.await?.venue.ok_or(LoadError::Unavailable("venue"))
        })
    }
}
