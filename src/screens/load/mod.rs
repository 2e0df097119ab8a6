//! Loading/content/error state shared by the data-backed screens.

mod intent;
mod model;
mod reducer;
mod state;

pub use intent::LoadIntent;
pub use model::ScreenModel;
pub use reducer::LoadReducer;
pub use state::LoadState;
