//! Configuration directory resolution and the read-only settings file.
//!
//! Settings live in `~/.config/tamatamaya/settings.conf` (or the
//! `XDG_CONFIG_HOME` equivalent) as simple `key = value` lines. They supply
//! session defaults only: the language, theme, and audio preferences are read
//! once at startup and never written back, so toggles made inside the UI stay
//! local to the running session.

use std::env;
use std::path::PathBuf;

use crate::i18n::Lang;
use crate::theme::ThemeMode;

/// What: Resolve the application configuration directory, creating it.
///
/// Inputs: None (reads `XDG_CONFIG_HOME` and `HOME`).
///
/// Output:
/// - `$XDG_CONFIG_HOME/tamatamaya` when set, else `~/.config/tamatamaya`,
///   else a path under the system temp dir as a last resort.
#[must_use]
pub fn config_dir() -> PathBuf {
    let base = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
        .unwrap_or_else(env::temp_dir);
    let dir = base.join("tamatamaya");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Log directory under the configuration directory, created on demand.
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Session defaults loaded from `settings.conf`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Settings {
    /// Default language, when configured.
    pub lang: Option<Lang>,
    /// Default theme, when configured.
    pub theme: Option<ThemeMode>,
    /// Whether ambient audio is enabled (defaults to enabled).
    pub audio: Option<bool>,
}

/// What: Parse settings from `key = value` file content.
///
/// Inputs:
/// - `content`: Raw settings file text.
///
/// Output:
/// - [`Settings`] with recognized keys populated.
///
/// Details:
/// - Lines starting with `#` and unrecognized keys or values are ignored;
///   a malformed file never fails startup.
#[must_use]
pub fn parse_settings(content: &str) -> Settings {
    let mut out = Settings::default();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        match key.trim() {
            "language" => out.lang = Lang::from_config_key(value),
            "theme" => out.theme = ThemeMode::from_config_key(value),
            "audio" => {
                out.audio = match value.trim().to_lowercase().as_str() {
                    "true" | "on" | "yes" | "1" => Some(true),
                    "false" | "off" | "no" | "0" => Some(false),
                    _ => None,
                }
            }
            other => tracing::debug!(key = other, "ignoring unknown settings key"),
        }
    }
    out
}

/// What: Load session defaults from the settings file, if present.
///
/// Inputs: None (reads `settings.conf` under [`config_dir`]).
///
/// Output:
/// - Parsed [`Settings`]; all-default when the file is absent or unreadable.
#[must_use]
pub fn load_settings() -> Settings {
    let path = config_dir().join("settings.conf");
    match std::fs::read_to_string(&path) {
        Ok(content) => parse_settings(&content),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "no settings file; using defaults");
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: Well-formed settings lines populate every field
    ///
    /// - Input: File content with language, theme, and audio keys
    /// - Output: All three options set to the parsed values
    #[test]
    fn config_parse_settings_full_file() {
        let s = parse_settings("# storefront defaults\nlanguage = ar\ntheme = dark\naudio = off\n");
        assert_eq!(s.lang, Some(Lang::Ar));
        assert_eq!(s.theme, Some(ThemeMode::Dark));
        assert_eq!(s.audio, Some(false));
    }

    /// What: Malformed lines and unknown keys are skipped
    ///
    /// - Input: Comments, junk lines, unknown keys, bad values
    /// - Output: Default settings with nothing populated
    #[test]
    fn config_parse_settings_tolerates_garbage() {
        let s = parse_settings("nonsense\nlanguage = klingon\ncolor = red\naudio = maybe\n");
        assert_eq!(s.lang, None);
        assert_eq!(s.theme, None);
        assert_eq!(s.audio, None);
    }

    /// What: Config dir resolution prefers `XDG_CONFIG_HOME`
    ///
    /// - Input: `XDG_CONFIG_HOME` shimmed to a temp dir
    /// - Output: Returned path lives under that dir and exists
    #[test]
    fn config_dir_honors_xdg_config_home() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let orig = env::var_os("XDG_CONFIG_HOME");
        unsafe { env::set_var("XDG_CONFIG_HOME", tmp.path()) };

        let dir = config_dir();
        assert!(dir.starts_with(tmp.path()));
        assert!(dir.ends_with("tamatamaya"));
        assert!(dir.is_dir());

        unsafe {
            match orig {
                Some(v) => env::set_var("XDG_CONFIG_HOME", v),
                None => env::remove_var("XDG_CONFIG_HOME"),
            }
        }
    }
}
