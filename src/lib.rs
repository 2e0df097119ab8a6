pub mod cli;
pub mod component;
pub mod config;
pub mod data;
pub mod di;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod screens;
pub mod ui;
