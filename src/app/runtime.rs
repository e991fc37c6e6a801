//! Channel-driven event loop and background workers.
//!
//! A dedicated thread blocks on crossterm events, a tokio task serves chef
//! requests one at a time, and the single-threaded `select!` loop owns the
//! only [`AppState`] instance. Every handled message triggers a redraw, so
//! state changes and rendering stay atomic relative to each other. Dropping
//! out of the loop abandons any in-flight chef request implicitly.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{select, sync::mpsc};

use crate::audio::{AudioPlayer, CommandAudioPlayer, NullAudioPlayer};
use crate::chef;
use crate::events::handle_event;
use crate::state::{AppState, ChefAsk, ChefReply};
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};

/// Result alias for runtime operations.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Startup options resolved from CLI flags and the settings file.
#[derive(Clone, Copy, Debug, Default)]
pub struct Options {
    /// Initial UI language.
    pub lang: crate::i18n::Lang,
    /// Initial presentation mode.
    pub theme: crate::theme::ThemeMode,
    /// Whether ambient audio may play.
    pub audio: bool,
    /// If `true`, chef requests are answered without network access.
    pub dry_run: bool,
}

/// Channel endpoints wiring the event loop to its background workers.
struct Channels {
    /// Terminal events from the reader thread.
    event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Cancellation flag observed by the reader thread.
    event_thread_cancelled: Arc<AtomicBool>,
    /// Requests to the chef worker.
    chef_ask_tx: mpsc::UnboundedSender<ChefAsk>,
    /// Replies from the chef worker.
    chef_reply_rx: mpsc::UnboundedReceiver<ChefReply>,
}

/// What: Create all channels and spawn the background workers.
///
/// Inputs:
/// - `dry_run`: Forwarded to the chef worker.
///
/// Output:
/// - [`Channels`] with the reader thread and chef worker already running.
fn start_workers(dry_run: bool) -> Channels {
    let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
    let (chef_ask_tx, chef_ask_rx) = mpsc::unbounded_channel::<ChefAsk>();
    let (chef_reply_tx, chef_reply_rx) = mpsc::unbounded_channel::<ChefReply>();
    let cancelled = Arc::new(AtomicBool::new(false));

    spawn_event_reader(event_tx, Arc::clone(&cancelled));
    spawn_chef_worker(chef_ask_rx, chef_reply_tx, dry_run);

    Channels {
        event_rx,
        event_thread_cancelled: cancelled,
        chef_ask_tx,
        chef_reply_rx,
    }
}

/// What: Spawn the blocking terminal-event reader thread.
///
/// Inputs:
/// - `tx`: Channel into the event loop.
/// - `cancelled`: Flag checked between polls so the thread winds down.
///
/// Output:
/// - None (thread runs until cancellation or channel closure).
fn spawn_event_reader(tx: mpsc::UnboundedSender<CEvent>, cancelled: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(Duration::from_millis(100)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "terminal event read failed");
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "terminal event poll failed");
                    break;
                }
            }
        }
    });
}

/// What: Spawn the chef worker task.
///
/// Inputs:
/// - `ask_rx`: Incoming correlated requests.
/// - `reply_tx`: Outgoing correlated replies.
/// - `dry_run`: Answer from the canned text instead of the network.
///
/// Output:
/// - None (task runs until the ask channel closes).
///
/// Details:
/// - Requests are served one at a time; overlapping user clicks queue up and
///   the state layer drops every reply but the newest by sequence number.
fn spawn_chef_worker(
    mut ask_rx: mpsc::UnboundedReceiver<ChefAsk>,
    reply_tx: mpsc::UnboundedSender<ChefReply>,
    dry_run: bool,
) {
    tokio::spawn(async move {
        while let Some(ask) = ask_rx.recv().await {
            let result = if dry_run {
                Ok(chef::dry_run_recommendation(ask.lang))
            } else {
                chef::recommend(ask.lang).await.map_err(|e| e.to_string())
            };
            if reply_tx.send(ChefReply { seq: ask.seq, result }).is_err() {
                break;
            }
        }
    });
}

/// What: Drive the event loop until the user quits.
///
/// Inputs:
/// - `app`: The single view-state instance.
/// - `channels`: Worker endpoints.
/// - `audio`: Injected playback capability.
///
/// Output:
/// - `Ok(())` on clean exit; terminal draw errors propagate.
async fn event_loop(
    app: &mut AppState,
    channels: &mut Channels,
    audio: &dyn AudioPlayer,
) -> Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;
    terminal.draw(|f| ui(f, app))?;
    loop {
        let exit = select! {
            Some(ev) = channels.event_rx.recv() => {
                handle_event(ev, app, &channels.chef_ask_tx, audio)
            }
            Some(reply) = channels.chef_reply_rx.recv() => {
                app.apply_chef_response(reply.seq, reply.result);
                false
            }
            else => true,
        };
        if exit {
            break;
        }
        terminal.draw(|f| ui(f, app))?;
    }
    Ok(())
}

/// What: Run the storefront TUI to completion.
///
/// Inputs:
/// - `opts`: Startup options resolved by the caller.
///
/// Output:
/// - `Ok(())` on clean exit.
///
/// # Errors
/// Returns terminal setup, draw, or restore failures; the terminal is
/// restored before any loop error propagates.
pub async fn run(opts: Options) -> Result<()> {
    let mut app = AppState {
        lang: opts.lang,
        theme_mode: opts.theme,
        audio_enabled: opts.audio,
        ..AppState::default()
    };
    let audio: Box<dyn AudioPlayer> = if opts.audio {
        Box::new(CommandAudioPlayer)
    } else {
        Box::new(NullAudioPlayer)
    };
    let mut channels = start_workers(opts.dry_run);

    setup_terminal()?;
    let res = event_loop(&mut app, &mut channels, audio.as_ref()).await;
    channels.event_thread_cancelled.store(true, Ordering::Relaxed);
    restore_terminal()?;
    res
}
