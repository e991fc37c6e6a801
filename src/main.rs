//! Tamatamaya binary entrypoint kept minimal. The full runtime lives in `app`.

use std::sync::OnceLock;
use std::{fmt, time::SystemTime};

use clap::Parser;

use tamatamaya::{app, args, config};

/// Log timestamp formatter writing `YYYY-MM-DD-THH:MM:SS`.
struct StorefrontTimer;

impl tracing_subscriber::fmt::time::FormatTime for StorefrontTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let secs = match SystemTime::now().duration_since(std::time::UNIX_EPOCH) {
            Ok(d) => d.as_secs() as i64,
            Err(_) => 0,
        };
        let s = tamatamaya::util::ts_to_date(secs); // "YYYY-MM-DD HH:MM:SS"
        let ts = s.replacen(' ', "-T", 1);
        w.write_str(&ts)
    }
}

/// Keeps the non-blocking appender alive for the process lifetime.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing to a log file under the config dir.
///
/// Inputs:
/// - `level`: Default level when `RUST_LOG` is unset.
///
/// Output:
/// - None; falls back to a stderr logger when the file cannot be opened.
fn init_logging(level: &str) {
    let mut log_path = config::logs_dir();
    log_path.push("tamatamaya.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.to_string()))
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(StorefrontTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_timer(StorefrontTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();
    init_logging(&args::determine_log_level(&cli));

    // Settings supply session defaults; CLI flags override them.
    let settings = config::load_settings();
    let lang = cli
        .lang
        .as_deref()
        .and_then(tamatamaya::i18n::Lang::from_config_key)
        .or(settings.lang)
        .unwrap_or_default();
    let theme = cli
        .theme
        .as_deref()
        .and_then(tamatamaya::theme::ThemeMode::from_config_key)
        .or(settings.theme)
        .unwrap_or_default();
    let audio = !cli.no_audio && settings.audio.unwrap_or(true);

    if args::process_args(&cli, lang).await {
        return;
    }

    tracing::info!(
        lang = lang.code(),
        theme = ?theme,
        audio,
        dry_run = cli.dry_run,
        "Tamatamaya starting"
    );
    if let Err(err) = app::run(app::Options {
        lang,
        theme,
        audio,
        dry_run: cli.dry_run,
    })
    .await
    {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("Tamatamaya exited");
}

#[cfg(test)]
mod tests {
    /// What: FormatTime impl writes a non-empty timestamp without panicking
    ///
    /// - Input: Tracing writer buffer
    /// - Output: Buffer receives some content
    #[test]
    fn storefront_timer_formats_time_without_panic() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        let t = super::StorefrontTimer;
        let _ = t.format_time(&mut writer);
        assert!(!buf.is_empty());
    }
}
