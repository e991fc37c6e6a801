//! Central [`AppState`] container mutated by the event loop.

use ratatui::widgets::ListState;

use crate::i18n::{Lang, t};
use crate::menu;
use crate::theme::ThemeMode;

/// View-state shared by the event, networking, and UI layers.
///
/// Mutated exclusively on the event loop in response to key presses and chef
/// worker replies. Nothing here is persisted: the cart and both toggles live
/// and die with the process.
#[derive(Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppState {
    /// Active UI language.
    pub lang: Lang,
    /// Active presentation mode.
    pub theme_mode: ThemeMode,
    /// Cart line items as dish ids, one entry per unit added, in order of
    /// addition. Ids absent from the catalog are allowed and price at zero.
    pub cart: Vec<u32>,
    /// Whether the chef panel is visible.
    pub chef_open: bool,
    /// Whether a chef request is outstanding.
    pub chef_pending: bool,
    /// Last displayed chef text (recommendation or fallback).
    pub chef_response: String,
    /// Sequence number of the newest chef request issued. Replies carrying an
    /// older number are stale and must be dropped.
    pub chef_seq: u64,
    /// Index into the menu that is currently highlighted.
    pub selected: usize,
    /// List selection state for the menu pane.
    pub list_state: ListState,
    /// Whether ambient audio playback has been started this session.
    pub audio_started: bool,
    /// Whether ambient audio is enabled at all (config / `--no-audio`).
    pub audio_enabled: bool,
}

impl Default for AppState {
    fn default() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            lang: Lang::default(),
            theme_mode: ThemeMode::default(),
            cart: Vec::new(),
            chef_open: false,
            chef_pending: false,
            chef_response: String::new(),
            chef_seq: 0,
            selected: 0,
            list_state,
            audio_started: false,
            audio_enabled: true,
        }
    }
}

impl AppState {
    /// What: Flip the active language between English and Arabic.
    ///
    /// Inputs:
    /// - `self`: State to mutate.
    ///
    /// Output:
    /// - None (all localized labels re-derive on the next render).
    pub fn toggle_lang(&mut self) {
        self.lang = self.lang.flip();
        tracing::debug!(lang = self.lang.code(), dir = self.lang.dir(), "language toggled");
    }

    /// What: Flip the presentation mode between light and dark.
    ///
    /// Inputs:
    /// - `self`: State to mutate.
    ///
    /// Output:
    /// - None (the palette re-derives on the next render).
    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.flip();
        tracing::debug!(theme = ?self.theme_mode, "theme toggled");
    }

    /// What: Append one unit of a dish to the cart.
    ///
    /// Inputs:
    /// - `id`: Catalog identifier; ids absent from the catalog are accepted.
    ///
    /// Output:
    /// - None (the entry counts toward the item total; unknown ids price at
    ///   zero when the cart total is derived).
    pub fn add_to_cart(&mut self, id: u32) {
        self.cart.push(id);
        tracing::debug!(id, count = self.cart.len(), "dish added to cart");
    }

    /// What: Sum the prices of every cart entry.
    ///
    /// Inputs:
    /// - `self`: State holding the cart.
    ///
    /// Output:
    /// - Total in RM; entries with unknown ids contribute zero.
    #[must_use]
    pub fn cart_total(&self) -> f64 {
        self.cart.iter().map(|&id| menu::price_of(id)).sum()
    }

    /// Number of cart line items (one per unit added).
    #[must_use]
    pub fn cart_count(&self) -> usize {
        self.cart.len()
    }

    /// What: Start the chef-request lifecycle.
    ///
    /// Inputs:
    /// - `self`: State to mutate.
    ///
    /// Output:
    /// - Sequence number identifying this request.
    ///
    /// Details:
    /// - Opens the panel and sets the pending flag immediately, before any
    ///   network activity, so the UI shows the typing indicator right away.
    /// - Repeated invocations while a request is outstanding are allowed; the
    ///   newer sequence number supersedes the older request, whose reply will
    ///   be dropped as stale.
    pub fn begin_chef_request(&mut self) -> u64 {
        self.chef_open = true;
        self.chef_pending = true;
        self.chef_seq += 1;
        tracing::info!(seq = self.chef_seq, "chef request started");
        self.chef_seq
    }

    /// What: Settle a chef request with the worker's reply.
    ///
    /// Inputs:
    /// - `seq`: Sequence number echoed from [`Self::begin_chef_request`].
    /// - `result`: Recommendation text on success; failure reason otherwise.
    ///
    /// Output:
    /// - None (mutates the response slot and pending flag).
    ///
    /// Details:
    /// - Replies older than the newest issued request are discarded so an
    ///   earlier, slower request can never overwrite a later answer.
    /// - Empty successful text substitutes the localized "busy" fallback;
    ///   any failure substitutes the localized kitchen-error string. The
    ///   failure reason itself only reaches the log.
    pub fn apply_chef_response(&mut self, seq: u64, result: Result<String, String>) {
        if seq != self.chef_seq {
            tracing::debug!(seq, newest = self.chef_seq, "dropping stale chef reply");
            return;
        }
        self.chef_pending = false;
        self.chef_response = match result {
            Ok(text) if text.trim().is_empty() => t(self.lang, "chef_busy").to_string(),
            Ok(text) => text,
            Err(reason) => {
                tracing::warn!(seq, reason, "chef request failed");
                t(self.lang, "chef_error").to_string()
            }
        };
    }

    /// What: Move the menu highlight down by one row.
    ///
    /// Inputs:
    /// - `self`: State to mutate.
    ///
    /// Output:
    /// - None (clamped to the last menu row).
    pub fn select_next(&mut self) {
        let last = menu::menu().len().saturating_sub(1);
        self.selected = (self.selected + 1).min(last);
        self.list_state.select(Some(self.selected));
    }

    /// What: Move the menu highlight up by one row.
    ///
    /// Inputs:
    /// - `self`: State to mutate.
    ///
    /// Output:
    /// - None (clamped to the first menu row).
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.list_state.select(Some(self.selected));
    }

    /// Id of the currently highlighted dish, if the selection is valid.
    #[must_use]
    pub fn selected_dish_id(&self) -> Option<u32> {
        menu::menu().get(self.selected).map(|d| d.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: Cart total and count follow the catalog prices
    ///
    /// - Input: add(1), add(2), add(1) with catalog prices 8.50 and 7.00
    /// - Output: Count 3; total 24.00 at two-decimal precision
    #[test]
    fn state_cart_total_sums_catalog_prices() {
        let mut app = AppState::default();
        app.add_to_cart(1);
        app.add_to_cart(2);
        app.add_to_cart(1);
        assert_eq!(app.cart_count(), 3);
        assert_eq!(format!("{:.2}", app.cart_total()), "24.00");
    }

    /// What: Unknown ids count as items but price at zero
    ///
    /// - Input: add(1) then add(999) where 999 is not in the catalog
    /// - Output: Count increments; total equals the price of dish 1 alone
    #[test]
    fn state_unknown_id_counts_but_adds_nothing() {
        let mut app = AppState::default();
        app.add_to_cart(1);
        let before = app.cart_total();
        app.add_to_cart(999);
        assert_eq!(app.cart_count(), 2);
        assert!((app.cart_total() - before).abs() < f64::EPSILON);
    }

    /// What: Language and theme toggles are involutions
    ///
    /// - Input: Two consecutive toggles of each
    /// - Output: Original language and theme restored
    #[test]
    fn state_toggles_are_involutions() {
        let mut app = AppState::default();
        let (lang0, theme0) = (app.lang, app.theme_mode);
        app.toggle_lang();
        app.toggle_theme();
        assert_ne!(app.lang, lang0);
        assert_ne!(app.theme_mode, theme0);
        app.toggle_lang();
        app.toggle_theme();
        assert_eq!(app.lang, lang0);
        assert_eq!(app.theme_mode, theme0);
    }

    /// What: Starting a chef request opens the panel before any reply
    ///
    /// - Input: A fresh state; one `begin_chef_request` call
    /// - Output: Panel open and pending set; pending clears exactly once on
    ///   the matching reply
    #[test]
    fn state_chef_request_opens_panel_immediately() {
        let mut app = AppState::default();
        assert!(!app.chef_open);
        let seq = app.begin_chef_request();
        assert!(app.chef_open);
        assert!(app.chef_pending);
        app.apply_chef_response(seq, Ok("Try the Musakhan, only RM 28.00!".to_string()));
        assert!(!app.chef_pending);
        assert_eq!(app.chef_response, "Try the Musakhan, only RM 28.00!");
    }

    /// What: A failed chef request surfaces the localized error string
    ///
    /// - Input: Request settled with `Err` while Arabic is active
    /// - Output: Pending cleared; Arabic kitchen-error text displayed
    #[test]
    fn state_chef_failure_shows_localized_error() {
        let mut app = AppState::default();
        app.toggle_lang();
        let seq = app.begin_chef_request();
        app.apply_chef_response(seq, Err("connect timeout".to_string()));
        assert!(!app.chef_pending);
        assert_eq!(app.chef_response, t(Lang::Ar, "chef_error"));
    }

    /// What: Empty successful replies substitute the busy fallback
    ///
    /// - Input: Request settled with whitespace-only text
    /// - Output: Localized busy string displayed
    #[test]
    fn state_chef_empty_reply_uses_busy_fallback() {
        let mut app = AppState::default();
        let seq = app.begin_chef_request();
        app.apply_chef_response(seq, Ok("   ".to_string()));
        assert_eq!(app.chef_response, t(Lang::En, "chef_busy"));
    }

    /// What: Stale replies are dropped while a newer request is outstanding
    ///
    /// - Input: Two overlapping requests; the older one settles first
    /// - Output: Pending stays set and the text is untouched until the newer
    ///   request settles
    #[test]
    fn state_chef_stale_reply_is_dropped() {
        let mut app = AppState::default();
        let first = app.begin_chef_request();
        let second = app.begin_chef_request();
        app.apply_chef_response(first, Ok("stale answer".to_string()));
        assert!(app.chef_pending, "older reply must not settle the newer request");
        assert!(app.chef_response.is_empty());
        app.apply_chef_response(second, Ok("fresh answer".to_string()));
        assert!(!app.chef_pending);
        assert_eq!(app.chef_response, "fresh answer");
    }

    /// What: Menu selection clamps at both ends
    ///
    /// - Input: More moves than menu rows in each direction
    /// - Output: Selection stays within the catalog bounds
    #[test]
    fn state_selection_clamps_to_menu_bounds() {
        let mut app = AppState::default();
        app.select_prev();
        assert_eq!(app.selected, 0);
        for _ in 0..50 {
            app.select_next();
        }
        assert_eq!(app.selected, crate::menu::menu().len() - 1);
        assert_eq!(app.selected_dish_id(), Some(8));
    }
}
