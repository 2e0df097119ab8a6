//! Terminal shell: turns the component tree into frames and key presses
//! into component intents.

pub mod dispatch;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod shell;
pub mod terminal_guard;
pub mod theme;
pub mod view;
