use std::sync::Arc;

use crate::component::{ComponentContext, IdCallback, StateFlow};
use crate::data::{Conference, ConferenceRepository};
use crate::error::NavError;
use crate::screens::load::{LoadState, ScreenModel};

/// Conference picker shown when nothing is selected.
#[derive(Clone)]
pub struct ConferencesComponent {
    model: ScreenModel<Vec<Conference>>,
    repository: Arc<dyn ConferenceRepository>,
    on_selected: IdCallback,
}

impl ConferencesComponent {
    pub fn new(
        ctx: ComponentContext,
        repository: Arc<dyn ConferenceRepository>,
        on_selected: IdCallback,
    ) -> Self {
        let component = Self {
            model: ScreenModel::new(ctx),
            repository,
            on_selected,
        };
        if let Err(err) = component.refresh() {
            tracing::error!(error = %err, "conference list created on a dead lifecycle");
        }
        component
    }

    pub fn state(&self) -> &StateFlow<LoadState<Vec<Conference>>> {
        self.model.state()
    }

    pub fn refresh(&self) -> Result<(), NavError> {
        self.model.load(self.repository.conferences())
    }

    /// Ignored unless `id` is one of the listed conferences.
    pub fn on_conference_clicked(&self, id: &str) {
        let known = self
            .state()
            .value()
            .content()
            .is_some_and(|list| list.iter().any(|c| c.id == id));
        if !known {
            tracing::debug!(conference = id, "ignoring click on unknown conference");
            return;
        }
        (self.on_selected)(id);
    }
}
