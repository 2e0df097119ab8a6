use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::component::{ComponentContext, StateFlow};
use crate::dispatch_mvi;
use crate::error::{LoadError, NavError};
use crate::screens::load::intent::LoadIntent;
use crate::screens::load::reducer::LoadReducer;
use crate::screens::load::state::LoadState;

/// State holder shared by every data-backed screen.
///
/// Each `load` bumps a generation counter; a completion whose generation is
/// no longer current is dropped, so overlapping refreshes settle on the
/// result of the last one.
pub struct ScreenModel<T> {
    ctx: ComponentContext,
    state: StateFlow<LoadState<T>>,
    generation: Arc<AtomicU64>,
}

impl<T> Clone for ScreenModel<T> {
    fn clone(&self) -> Self {
        Self {
            ctx: self.ctx.clone(),
            state: self.state.clone(),
            generation: Arc::clone(&self.generation),
        }
    }
}

impl<T> ScreenModel<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new(ctx: ComponentContext) -> Self {
        Self {
            ctx,
            state: StateFlow::new(LoadState::Loading),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn state(&self) -> &StateFlow<LoadState<T>> {
        &self.state
    }

    pub fn context(&self) -> &ComponentContext {
        &self.ctx
    }

    pub fn load<F>(&self, fetch: F) -> Result<(), NavError>
    where
        F: Future<Output = Result<T, LoadError>> + Send + 'static,
    {
        self.ctx.lifecycle().ensure_alive()?;

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        dispatch_mvi!(self.state, LoadReducer<T>, LoadIntent::Started);

        let state = self.state.clone();
        let current = Arc::clone(&self.generation);
        let screen = self.ctx.lifecycle().name().to_string();
        self.ctx.lifecycle().launch(self.ctx.main(), fetch, move |result| {
            if current.load(Ordering::SeqCst) != generation {
                tracing::trace!(%screen, generation, "superseded load dropped");
                return;
            }
            let intent = match result {
                Ok(content) => LoadIntent::Loaded(content),
                Err(err) => {
                    tracing::warn!(%screen, error = %err, "load failed");
                    LoadIntent::Failed(err)
                }
            };
            dispatch_mvi!(state, LoadReducer<T>, intent);
        })
    }
}
