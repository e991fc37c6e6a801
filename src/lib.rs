//! Library entry for Tamatamaya exposing the storefront core for integration
//! tests and the binary.

pub mod app;
pub mod args;
pub mod audio;
pub mod chef;
pub mod config;
pub mod events;
pub mod i18n;
pub mod menu;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;
