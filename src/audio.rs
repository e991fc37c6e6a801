//! Ambient audio playback capability.
//!
//! The storefront starts a background track on the first cart addition. The
//! player is an injectable collaborator with a no-op-on-failure contract:
//! `play` never reports an error to the caller, so the controller stays
//! testable without a real media subsystem and a missing player binary never
//! disturbs the UI.

use std::process::{Command, Stdio};

/// Remote ambient track started on the first cart addition.
pub const AMBIENT_TRACK: &str = "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3";

/// Playback capability injected into the event layer.
pub trait AudioPlayer {
    /// Start ambient playback. Failures are swallowed by the implementation.
    fn play(&self);
}

/// Player that shells out to a detached external media player.
#[derive(Debug, Default)]
pub struct CommandAudioPlayer;

impl CommandAudioPlayer {
    /// What: Locate an installed media player and its no-display arguments.
    ///
    /// Inputs: None (probes `PATH` via `which`).
    ///
    /// Output:
    /// - `Some((program, args))` for the first of `mpv`/`ffplay` found;
    ///   `None` when neither is installed.
    fn find_player() -> Option<(String, Vec<&'static str>)> {
        if which::which("mpv").is_ok() {
            return Some(("mpv".to_string(), vec!["--no-video", "--really-quiet"]));
        }
        if which::which("ffplay").is_ok() {
            return Some(("ffplay".to_string(), vec!["-nodisp", "-loglevel", "quiet", "-autoexit"]));
        }
        None
    }
}

impl AudioPlayer for CommandAudioPlayer {
    /// What: Spawn the ambient track in a detached player process.
    ///
    /// Inputs:
    /// - `self`: Player capability.
    ///
    /// Output:
    /// - None; a missing player or failed spawn is logged at debug level and
    ///   otherwise ignored.
    fn play(&self) {
        let Some((program, args)) = Self::find_player() else {
            tracing::debug!("no media player found; skipping ambient audio");
            return;
        };
        let spawned = Command::new(&program)
            .args(&args)
            .arg(AMBIENT_TRACK)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(child) => tracing::info!(player = %program, pid = child.id(), "ambient audio started"),
            Err(e) => tracing::debug!(player = %program, error = %e, "ambient audio failed to start"),
        }
    }
}

/// Player that does nothing; used for `--no-audio` and in tests.
#[derive(Debug, Default)]
pub struct NullAudioPlayer;

impl AudioPlayer for NullAudioPlayer {
    fn play(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: The null player satisfies the capability without side effects
    ///
    /// - Input: A `NullAudioPlayer`
    /// - Output: `play` returns without panicking
    #[test]
    fn audio_null_player_is_inert() {
        NullAudioPlayer.play();
    }

    /// What: Player discovery never panics regardless of installed binaries
    ///
    /// - Input: The host `PATH`
    /// - Output: Either a known program name or `None`
    #[test]
    fn audio_find_player_is_total() {
        if let Some((program, _)) = CommandAudioPlayer::find_player() {
            assert!(program == "mpv" || program == "ffplay");
        }
    }
}
