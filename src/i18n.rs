//! Fixed two-language string table for the storefront UI.
//!
//! The storefront ships exactly two locales, English and Arabic, as a static
//! lookup keyed by short label names. There is no locale file loading and no
//! fallback chain: both columns are complete by construction, and an unknown
//! key is returned as-is so a missing label shows up in the UI instead of
//! crashing it.

/// Active UI language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Lang {
    /// English (left-to-right).
    #[default]
    En,
    /// Arabic (right-to-left).
    Ar,
}

impl Lang {
    /// What: Return the other supported language.
    ///
    /// Inputs:
    /// - `self`: Current language.
    ///
    /// Output:
    /// - `Ar` for `En` and vice versa; applying twice is the identity.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }

    /// BCP-47 style language tag for the active language.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Text direction tag (`ltr`/`rtl`) for the active language.
    #[must_use]
    pub const fn dir(self) -> &'static str {
        match self {
            Self::En => "ltr",
            Self::Ar => "rtl",
        }
    }

    /// English name of the language, as spelled in the chef prompt.
    #[must_use]
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ar => "Arabic",
        }
    }

    /// What: Parse a language from a settings or CLI value.
    ///
    /// Inputs:
    /// - `s`: Config string (case-insensitive; aliases accepted).
    ///
    /// Output:
    /// - `Some(Lang)` on a recognized value; `None` otherwise.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Some(Self::En),
            "ar" | "arabic" => Some(Self::Ar),
            _ => None,
        }
    }
}

/// Currency label, shared by both languages.
pub const CURRENCY: &str = "RM";

/// What: Look up a UI label in the active language.
///
/// Inputs:
/// - `lang`: Active language.
/// - `key`: Short label key (e.g., `"title"`, `"ask_chef"`).
///
/// Output:
/// - The localized label, or the key itself when the key is unknown.
#[must_use]
pub fn t(lang: Lang, key: &str) -> &str {
    let (en, ar) = match key {
        "title" => ("Zero Tamatamaya", "زيرو طماطماية"),
        "slogan" => ("Freshness in every bite", "نضارة في كل لقمة"),
        "hero" => ("Taste the Heritage", "تذوق التراث"),
        "add_to_cart" => ("Add to Cart", "أضف إلى السلة"),
        "ask_chef" => ("Ask our Chef", "اسأل الطباخ"),
        "cart" => ("Cart", "السلة"),
        "chef_heading" => ("Chef's Recommendation", "توصية الشيف"),
        "chef_placeholder" => ("What should I eat today?", "ماذا يجب أن آكل اليوم؟"),
        "checkout" => ("Checkout", "اتمام الطلب"),
        "menu" => ("Menu", "قائمة الطعام"),
        "typing" => (
            "Looking for the perfect spice...",
            "نبحث عن التوابل المثالية...",
        ),
        "chef_busy" => (
            "Sorry, I'm busy in the kitchen!",
            "عذراً، أنا مشغول في المطبخ!",
        ),
        "chef_error" => ("Kitchen error!", "خطأ في المطبخ!"),
        "theme_light" => ("Light", "فاتح"),
        "theme_dark" => ("Dark", "داكن"),
        _ => {
            tracing::debug!(key, "missing storefront label; returning key as-is");
            return key;
        }
    };
    match lang {
        Lang::En => en,
        Lang::Ar => ar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: Language flip is an involution
    ///
    /// - Input: Both languages
    /// - Output: Flipping twice restores the original value
    #[test]
    fn i18n_lang_flip_involution() {
        assert_eq!(Lang::En.flip(), Lang::Ar);
        assert_eq!(Lang::Ar.flip(), Lang::En);
        assert_eq!(Lang::En.flip().flip(), Lang::En);
    }

    /// What: Every known label has distinct non-empty text in both languages
    ///
    /// - Input: The full label key set
    /// - Output: Non-empty strings; English differs from Arabic except currency
    #[test]
    fn i18n_labels_present_in_both_languages() {
        let keys = [
            "title",
            "slogan",
            "hero",
            "add_to_cart",
            "ask_chef",
            "cart",
            "chef_heading",
            "chef_placeholder",
            "checkout",
            "menu",
            "typing",
            "chef_busy",
            "chef_error",
            "theme_light",
            "theme_dark",
        ];
        for key in keys {
            let en = t(Lang::En, key);
            let ar = t(Lang::Ar, key);
            assert!(!en.is_empty(), "empty English label for {key}");
            assert!(!ar.is_empty(), "empty Arabic label for {key}");
            assert_ne!(en, ar, "untranslated label for {key}");
        }
    }

    /// What: Unknown keys are echoed back instead of panicking
    ///
    /// - Input: A key absent from the table
    /// - Output: The key itself
    #[test]
    fn i18n_unknown_key_returned_as_is() {
        assert_eq!(t(Lang::En, "no_such_label"), "no_such_label");
    }

    /// What: Direction and code tags follow the language
    ///
    /// - Input: Both languages
    /// - Output: en/ltr and ar/rtl pairs
    #[test]
    fn i18n_codes_and_directions() {
        assert_eq!(Lang::En.code(), "en");
        assert_eq!(Lang::En.dir(), "ltr");
        assert_eq!(Lang::Ar.code(), "ar");
        assert_eq!(Lang::Ar.dir(), "rtl");
        assert_eq!(Lang::Ar.english_name(), "Arabic");
    }
}
