//! Data collaborators consumed by the screen components.

mod auth;
mod model;
mod repository;
mod sample;
mod selection;

pub use auth::AuthState;
pub use model::{Conference, ConferenceCatalog, ConferenceData, Session, Speaker, Venue};
pub use repository::{ConferenceRepository, InMemoryRepository, LoadFuture};
pub use sample::sample_catalog;
pub use selection::{FileSelectionStore, MemorySelectionStore, SelectionStore};
