//! Chef recommendation client for the Gemini generative-language API.
//!
//! One fire-and-forget request per invocation: the canned head-chef prompt
//! with the serialized catalog embedded is POSTed to `generateContent` and the
//! reply text is returned verbatim. There is no retry, no schema validation,
//! and a single collapsed error kind; callers translate any failure into the
//! localized kitchen-error string.

use std::sync::LazyLock;
use std::time::Duration;

use serde_json::{Value, json};

use crate::i18n::Lang;
use crate::menu;
use crate::util::s;

/// Result alias for chef client operations.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Generative model asked for recommendations.
pub const MODEL: &str = "gemini-3-flash-preview";

/// Environment variable supplying the API credential.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Base URL of the generative-language REST endpoint.
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Shared HTTP client with connection pooling for chef requests.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(15))
        .timeout(Duration::from_secs(30))
        .user_agent(format!("Tamatamaya/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
});

/// What: Build the canned head-chef prompt.
///
/// Inputs:
/// - `lang`: Language the answer should be written in.
///
/// Output:
/// - Prompt string embedding the serialized catalog, the target language,
///   and the currency-mention instruction.
#[must_use]
pub fn prompt(lang: Lang) -> String {
    let catalog = serde_json::to_string(menu::menu()).unwrap_or_else(|_| "[]".to_string());
    format!(
        "You are the head chef of \"Zero Tamatamaya\". Recommend a dish from this list: {catalog}. \
         Keep it short and answer in {}. Mention the RM currency.",
        lang.english_name()
    )
}

/// What: Extract the reply text from a `generateContent` response body.
///
/// Inputs:
/// - `v`: Parsed JSON response.
///
/// Output:
/// - Concatenated text of `candidates[0].content.parts[*].text`; empty when
///   the body carries no text (callers substitute the busy fallback).
#[must_use]
pub fn extract_text(v: &Value) -> String {
    let parts = v
        .get("candidates")
        .and_then(Value::as_array)
        .and_then(|c| c.first())
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(Value::as_array);
    let Some(parts) = parts else {
        return String::new();
    };
    parts.iter().map(|p| s(p, "text")).collect::<Vec<_>>().join("")
}

/// What: Request one chef recommendation from the AI collaborator.
///
/// Inputs:
/// - `lang`: Language the recommendation should be written in.
///
/// Output:
/// - The reply text (possibly empty) on success; one collapsed error kind for
///   a missing credential, network failure, non-success status, or a
///   malformed body.
///
/// # Errors
/// Returns an error when the `GEMINI_API_KEY` variable is unset or the HTTP
/// round trip fails in any way.
pub async fn recommend(lang: Lang) -> Result<String> {
    let key = std::env::var(API_KEY_VAR).map_err(|_| format!("{API_KEY_VAR} is not set"))?;
    let url = format!("{API_BASE}/{MODEL}:generateContent");
    let body = json!({
        "contents": [{ "parts": [{ "text": prompt(lang) }] }]
    });
    tracing::info!(model = MODEL, lang = lang.code(), "sending chef request");
    let resp = HTTP_CLIENT
        .post(&url)
        .header("x-goog-api-key", key)
        .json(&body)
        .send()
        .await?
        .error_for_status()?;
    let v: Value = resp.json().await?;
    Ok(extract_text(&v))
}

/// What: Produce a canned recommendation without touching the network.
///
/// Inputs:
/// - `lang`: Language for the canned text.
///
/// Output:
/// - A fixed recommendation for the first catalog dish, used by `--dry-run`.
#[must_use]
pub fn dry_run_recommendation(lang: Lang) -> String {
    let dish = &menu::menu()[0];
    match lang {
        Lang::En => format!(
            "Today I recommend the {} for RM {:.2}. Fresh from the kitchen!",
            dish.name_en, dish.price
        ),
        Lang::Ar => format!("أنصح اليوم بـ{} مقابل RM {:.2}. طازج من المطبخ!", dish.name_ar, dish.price),
    }
}
