//! Storefront runtime: terminal lifecycle and the channel-driven event loop.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use runtime::{Options, run};
