//! Navigation levels of the component tree: application, conference, home.

mod app;
mod conference;
mod home;
mod host;

pub use app::{AppChild, AppComponent, AppConfig, AppOptions};
pub use conference::{ConferenceChild, ConferenceComponent, ConferenceConfig, ConferenceParams};
pub use home::{HomeCallbacks, HomeChild, HomeComponent, HomeConfig, HomeTab};
pub use host::AppHost;
