//! Per-screen components.
//!
//! Each data-backed screen owns a [`ScreenModel`] and reports user choices
//! through callbacks supplied by its parent. Bookmarks, search,
//! recommendations and settings are declared navigation targets without
//! content and have no component of their own.

pub mod load;

mod conferences;
mod session_details;
mod sessions;
mod speaker_details;
mod speakers;
mod venue;

pub use conferences::ConferencesComponent;
pub use load::{LoadIntent, LoadReducer, LoadState, ScreenModel};
pub use session_details::{SessionDetails, SessionDetailsComponent};
pub use sessions::{
    BookmarkIntent, BookmarkReducer, SessionDay, SessionsCallbacks, SessionsComponent,
    SessionsContent,
};
pub use speaker_details::{SpeakerDetails, SpeakerDetailsComponent};
pub use speakers::{SpeakersComponent, SpeakersContent};
pub use venue::VenueComponent;
