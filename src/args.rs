//! Command-line argument parsing and one-shot CLI modes.

use clap::Parser;

use crate::chef;
use crate::i18n::Lang;
use crate::menu;
use crate::util::format_price;

/// Tamatamaya - a terminal storefront for the Zero Tamatamaya restaurant
#[derive(Parser, Debug)]
#[command(name = "tamatamaya")]
#[command(version)]
#[command(about = "A terminal storefront: browse the menu, fill a cart, ask the chef", long_about = None)]
pub struct Args {
    /// Start in this language (en or ar)
    #[arg(long)]
    pub lang: Option<String>,

    /// Start with this theme (light or dark)
    #[arg(long)]
    pub theme: Option<String>,

    /// Disable ambient audio playback
    #[arg(long)]
    pub no_audio: bool,

    /// Answer chef requests with canned text instead of calling the AI service
    #[arg(long)]
    pub dry_run: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the menu to stdout and exit
    #[arg(long)]
    pub menu: bool,

    /// Ask the chef for one recommendation, print it, and exit
    #[arg(long)]
    pub ask: bool,
}

/// What: Resolve the effective log level from the arguments.
///
/// Inputs:
/// - `args`: Parsed arguments.
///
/// Output:
/// - `"debug"` when `--verbose` is set; the `--log-level` value otherwise.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Render the catalog as plain stdout lines.
///
/// Inputs:
/// - `lang`: Language for the dish names.
///
/// Output:
/// - One formatted line per dish: id, localized name, category, price.
#[must_use]
pub fn render_menu(lang: Lang) -> String {
    let mut out = String::new();
    for d in menu::menu() {
        let name = match lang {
            Lang::En => d.name_en.as_str(),
            Lang::Ar => d.name_ar.as_str(),
        };
        out.push_str(&format!(
            "{:>2}  {}  ({})  {}\n",
            d.id,
            name,
            d.category,
            format_price(d.price)
        ));
    }
    out
}

/// What: Handle early-exit CLI modes (`--menu`, `--ask`).
///
/// Inputs:
/// - `args`: Parsed arguments.
/// - `lang`: Effective language after merging settings and flags.
///
/// Output:
/// - `true` when a mode was handled and the process should exit without
///   starting the TUI; `false` otherwise.
pub async fn process_args(args: &Args, lang: Lang) -> bool {
    if args.menu {
        print!("{}", render_menu(lang));
        return true;
    }
    if args.ask {
        let text = if args.dry_run {
            chef::dry_run_recommendation(lang)
        } else {
            match chef::recommend(lang).await {
                Ok(t) if t.trim().is_empty() => crate::i18n::t(lang, "chef_busy").to_string(),
                Ok(t) => t,
                Err(e) => {
                    tracing::warn!(error = %e, "one-shot chef request failed");
                    crate::i18n::t(lang, "chef_error").to_string()
                }
            }
        };
        println!("{text}");
        return true;
    }
    false
}
