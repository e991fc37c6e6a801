//! View-state for the storefront TUI.
//!
//! The [`AppState`] container holds every user-facing toggle (language, theme),
//! the cart, and the chef-request lifecycle. All mutation happens on the
//! single-threaded event loop; background work communicates through the
//! message types in [`types`].

pub mod app_state;
pub mod types;

pub use app_state::AppState;
pub use types::{ChefAsk, ChefReply};
