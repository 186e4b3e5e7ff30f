// src/locale.rs
//
// Active runtime locale and the matching rule for record locale patterns.
//
// Matching rule: a hyphenated pattern ("en-US") must match both the active
// language and region, case-insensitively. A bare pattern ("US") matches the
// active REGION only, ignoring language entirely. The bare form is an
// intentional quirk of the wire format and is kept exactly as shipped.

use std::env;

const ENV_LOCALE: &str = "BULLETIN_LOCALE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveLocale {
    pub language: String,
    pub region: String,
}

impl ActiveLocale {
    pub fn new(language: impl Into<String>, region: impl Into<String>) -> Self {
        ActiveLocale {
            language: language.into(),
            region: region.into(),
        }
    }

    /// Detect the active locale from the environment:
    /// 1) $BULLETIN_LOCALE ("en-US" form)
    /// 2) $LC_ALL, then $LANG (POSIX "en_US.UTF-8" forms)
    /// 3) "en-US"
    pub fn from_env() -> Self {
        if let Ok(tag) = env::var(ENV_LOCALE) {
            if let Some(locale) = Self::parse(&tag) {
                return locale;
            }
        }
        for var in ["LC_ALL", "LANG"] {
            if let Ok(tag) = env::var(var) {
                if let Some(locale) = Self::parse(&tag) {
                    return locale;
                }
            }
        }
        ActiveLocale::new("en", "US")
    }

    /// Parse "en-US", "en_US", or "en_US.UTF-8" forms. "C"/"POSIX" and tags
    /// with no language part are treated as undetectable.
    fn parse(tag: &str) -> Option<Self> {
        let tag = tag.split(['.', '@']).next().unwrap_or_default();
        if tag.is_empty() || tag.eq_ignore_ascii_case("c") || tag.eq_ignore_ascii_case("posix") {
            return None;
        }
        let (language, region) = match tag.split_once(['-', '_']) {
            Some((lang, region)) => (lang, region),
            None => (tag, ""),
        };
        if language.is_empty() {
            return None;
        }
        Some(ActiveLocale::new(language, region))
    }

    /// Apply the record-locale matching rule to `pattern`.
    pub fn matches(&self, pattern: &str) -> bool {
        match pattern.split_once('-') {
            Some((language, region)) => {
                language.eq_ignore_ascii_case(&self.language)
                    && region.eq_ignore_ascii_case(&self.region)
            }
            // Bare pattern: region-only comparison, language ignored.
            None => pattern.eq_ignore_ascii_case(&self.region),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphenated_pattern_needs_both_parts() {
        let us = ActiveLocale::new("en", "US");
        assert!(us.matches("en-US"));
        assert!(!us.matches("en-GB"));
        assert!(!us.matches("fr-US"));
    }

    #[test]
    fn comparison_is_case_insensitive() {
        let us = ActiveLocale::new("en", "US");
        assert!(us.matches("EN-us"));
        assert!(us.matches("us"));
    }

    // The bare form matches the region and ignores the language entirely.
    // This is a long-standing quirk of the wire format, kept on purpose:
    // a bare "US" matches en/US, fr/US, and anything else with region US.
    #[test]
    fn bare_pattern_ignores_language_quirk() {
        assert!(ActiveLocale::new("en", "US").matches("US"));
        assert!(ActiveLocale::new("fr", "US").matches("US"));
        assert!(!ActiveLocale::new("en", "GB").matches("US"));
        // Even a bare language code is compared against the region.
        assert!(!ActiveLocale::new("en", "US").matches("en"));
    }

    #[test]
    fn parses_posix_tags() {
        assert_eq!(
            ActiveLocale::parse("en_US.UTF-8"),
            Some(ActiveLocale::new("en", "US"))
        );
        assert_eq!(
            ActiveLocale::parse("cs_CZ"),
            Some(ActiveLocale::new("cs", "CZ"))
        );
        assert_eq!(ActiveLocale::parse("en"), Some(ActiveLocale::new("en", "")));
        assert_eq!(ActiveLocale::parse("C"), None);
        assert_eq!(ActiveLocale::parse("POSIX"), None);
        assert_eq!(ActiveLocale::parse(""), None);
    }

    #[serial_test::serial]
    #[test]
    fn explicit_env_override_wins() {
        env::set_var(ENV_LOCALE, "cs-CZ");
        let locale = ActiveLocale::from_env();
        env::remove_var(ENV_LOCALE);
        assert_eq!(locale, ActiveLocale::new("cs", "CZ"));
    }
}
