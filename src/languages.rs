//! Static language catalog.
//!
//! The set of languages offered by the source and target selectors. Fixed at
//! startup, never mutated at runtime.

/// A selectable language: ISO-ish code plus display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub label: &'static str,
}

/// The full catalog, in selector display order.
pub const LANGUAGES: &[Language] = &[
    Language { code: "en", label: "English" },
    Language { code: "uz", label: "Uzbek" },
    Language { code: "ru", label: "Russian" },
    Language { code: "fr", label: "French" },
    Language { code: "es", label: "Spanish" },
    Language { code: "de", label: "German" },
    Language { code: "it", label: "Italian" },
    Language { code: "tr", label: "Turkish" },
    Language { code: "zh-CN", label: "Chinese (Simplified)" },
    Language { code: "ja", label: "Japanese" },
    Language { code: "ko", label: "Korean" },
    Language { code: "ar", label: "Arabic" },
    Language { code: "hi", label: "Hindi" },
    Language { code: "pt", label: "Portuguese" },
    Language { code: "id", label: "Indonesian" },
    Language { code: "fa", label: "Persian" },
    Language { code: "pl", label: "Polish" },
    Language { code: "uk", label: "Ukrainian" },
    Language { code: "kk", label: "Kazakh" },
];

/// All selectable languages, in display order.
pub fn all() -> &'static [Language] {
    LANGUAGES
}

/// Look up a language by code.
pub fn find(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|l| l.code == code)
}

/// Check if a code is in the catalog.
pub fn is_supported(code: &str) -> bool {
    find(code).is_some()
}

/// Get the display name for a code, falling back to the code itself.
pub fn label(code: &str) -> &str {
    find(code).map(|l| l.label).unwrap_or(code)
}

/// Position of a code within the catalog (for selector state).
pub fn position(code: &str) -> Option<usize> {
    LANGUAGES.iter().position(|l| l.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size() {
        assert_eq!(all().len(), 19);
    }

    #[test]
    fn test_codes_unique() {
        let codes: HashSet<&str> = all().iter().map(|l| l.code).collect();
        assert_eq!(codes.len(), all().len());
    }

    #[test]
    fn test_find_and_label() {
        assert_eq!(find("en").unwrap().label, "English");
        assert_eq!(find("zh-CN").unwrap().label, "Chinese (Simplified)");
        assert!(find("xyz").is_none());
        assert_eq!(label("uz"), "Uzbek");
        assert_eq!(label("xyz"), "xyz"); // fallback to code
    }

    #[test]
    fn test_is_supported() {
        assert!(is_supported("kk"));
        assert!(!is_supported("EN")); // codes are case-sensitive catalog keys
    }

    #[test]
    fn test_position_matches_order() {
        assert_eq!(position("en"), Some(0));
        assert_eq!(position("uz"), Some(1));
        assert_eq!(position("kk"), Some(18));
        assert_eq!(position("nope"), None);
    }
}
