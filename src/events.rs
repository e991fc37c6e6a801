//! Key dispatch for the storefront TUI.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind};
use tokio::sync::mpsc;

use crate::audio::AudioPlayer;
use crate::state::{AppState, ChefAsk};

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event from crossterm.
/// - `app`: Application state to mutate.
/// - `chef_tx`: Channel to the background chef worker.
/// - `audio`: Ambient playback capability (no-op-on-failure contract).
///
/// Output:
/// - `true` to signal the application should exit; otherwise `false`.
///
/// Details:
/// - Toggles keep working while a chef request is outstanding; only the
///   event loop itself serializes state mutation.
/// - `Esc` closes the chef panel when it is open, otherwise quits.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    chef_tx: &mpsc::UnboundedSender<ChefAsk>,
    audio: &dyn AudioPlayer,
) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }

    match ke.code {
        KeyCode::Char('q') => return true,
        KeyCode::Esc => {
            if app.chef_open {
                app.chef_open = false;
            } else {
                return true;
            }
        }
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('l') => app.toggle_lang(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Enter | KeyCode::Char('a') => {
            if let Some(id) = app.selected_dish_id() {
                app.add_to_cart(id);
                if app.audio_enabled && !app.audio_started {
                    audio.play();
                    app.audio_started = true;
                }
            }
        }
        KeyCode::Char('c') => {
            let seq = app.begin_chef_request();
            let _ = chef_tx.send(ChefAsk { seq, lang: app.lang });
        }
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::NullAudioPlayer;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> CEvent {
        CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    /// What: Quit keys request exit while panel-closing Esc does not
    ///
    /// - Input: `q` with the panel closed; `Esc` with the panel open
    /// - Output: Exit for `q`; panel closed and no exit for `Esc`
    #[test]
    fn events_quit_and_panel_close() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = AppState::default();
        assert!(handle_event(press(KeyCode::Char('q')), &mut app, &tx, &NullAudioPlayer));

        app.chef_open = true;
        assert!(!handle_event(press(KeyCode::Esc), &mut app, &tx, &NullAudioPlayer));
        assert!(!app.chef_open);
        assert!(handle_event(press(KeyCode::Esc), &mut app, &tx, &NullAudioPlayer));
    }

    /// What: Enter adds the highlighted dish and marks audio started
    ///
    /// - Input: Two Enter presses on the first menu row
    /// - Output: Two cart entries for dish 1; audio flag set once
    #[test]
    fn events_enter_adds_selected_dish() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = AppState::default();
        assert!(!handle_event(press(KeyCode::Enter), &mut app, &tx, &NullAudioPlayer));
        assert!(!handle_event(press(KeyCode::Char('a')), &mut app, &tx, &NullAudioPlayer));
        assert_eq!(app.cart, vec![1, 1]);
        assert!(app.audio_started);
    }

    /// What: The chef key opens the panel and enqueues one correlated ask
    ///
    /// - Input: `c` pressed twice
    /// - Output: Two asks with increasing sequence numbers; panel open and
    ///   pending set
    #[test]
    fn events_chef_key_enqueues_request() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = AppState::default();
        handle_event(press(KeyCode::Char('c')), &mut app, &tx, &NullAudioPlayer);
        handle_event(press(KeyCode::Char('c')), &mut app, &tx, &NullAudioPlayer);
        assert!(app.chef_open);
        assert!(app.chef_pending);
        let first = rx.try_recv().expect("first ask queued");
        let second = rx.try_recv().expect("second ask queued");
        assert_eq!(first.seq, 1);
        assert_eq!(second.seq, 2);
        assert_eq!(app.chef_seq, 2);
    }

    /// What: Toggles stay responsive while a request is pending
    ///
    /// - Input: `c` then `t` and `l`
    /// - Output: Theme and language flipped with pending still set
    #[test]
    fn events_toggles_work_while_pending() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = AppState::default();
        let (lang0, theme0) = (app.lang, app.theme_mode);
        handle_event(press(KeyCode::Char('c')), &mut app, &tx, &NullAudioPlayer);
        handle_event(press(KeyCode::Char('t')), &mut app, &tx, &NullAudioPlayer);
        handle_event(press(KeyCode::Char('l')), &mut app, &tx, &NullAudioPlayer);
        assert!(app.chef_pending);
        assert_ne!(app.lang, lang0);
        assert_ne!(app.theme_mode, theme0);
    }

    /// What: Key releases are ignored
    ///
    /// - Input: A release event for the quit key
    /// - Output: No exit
    #[test]
    fn events_ignores_non_press_events() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = AppState::default();
        let mut ke = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        ke.kind = KeyEventKind::Release;
        assert!(!handle_event(CEvent::Key(ke), &mut app, &tx, &NullAudioPlayer));
    }
}
