//! Message types exchanged between the event loop and the chef worker.

use crate::i18n::Lang;

/// Request sent to the background chef worker.
#[derive(Clone, Debug)]
pub struct ChefAsk {
    /// Monotonic identifier used to correlate the reply.
    pub seq: u64,
    /// Language the recommendation should be written in.
    pub lang: Lang,
}

/// Reply corresponding to a prior [`ChefAsk`].
#[derive(Clone, Debug)]
pub struct ChefReply {
    /// Echoed identifier from the originating request.
    pub seq: u64,
    /// Recommendation text on success; a human-readable reason on failure.
    pub result: Result<String, String>,
}
