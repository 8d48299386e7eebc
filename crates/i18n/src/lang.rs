//! Supported locales and language negotiation

use fluent_langneg::{
    negotiate_languages, LanguageIdentifier as NegotiationId, NegotiationStrategy,
};
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

/// Locales bundled with the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Kazakh
    #[default]
    Kk,
    /// English
    En,
}

impl Locale {
    /// All bundled locales
    pub fn all() -> [Locale; 2] {
        [Locale::Kk, Locale::En]
    }

    /// BCP 47 language code
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Kk => "kk",
            Locale::En => "en",
        }
    }

    /// Language identifier for Fluent
    pub fn langid(&self) -> LanguageIdentifier {
        self.code().parse().unwrap_or_default()
    }

    /// Pick the best bundled locale for a list of requested language tags
    ///
    /// Unparseable tags are skipped. Falls back to the default locale.
    pub fn negotiate<S: AsRef<str>>(requested: &[S]) -> Locale {
        let requested: Vec<NegotiationId> = requested
            .iter()
            .filter_map(|tag| tag.as_ref().parse().ok())
            .collect();
        let available: Vec<NegotiationId> = Self::all()
            .iter()
            .filter_map(|locale| locale.code().parse().ok())
            .collect();
        let default: Option<NegotiationId> = Locale::default().code().parse().ok();

        let supported = negotiate_languages(
            &requested,
            &available,
            default.as_ref(),
            NegotiationStrategy::Lookup,
        );

        supported
            .first()
            .and_then(|langid| {
                let code = langid.to_string();
                Self::all().into_iter().find(|l| l.code() == code)
            })
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kk" => Ok(Locale::Kk),
            "en" => Ok(Locale::En),
            _ => Err(format!("Unknown locale: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_kazakh() {
        assert_eq!(Locale::default(), Locale::Kk);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("KK".parse::<Locale>().unwrap(), Locale::Kk);
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn test_negotiate_exact() {
        assert_eq!(Locale::negotiate(&["en"]), Locale::En);
        assert_eq!(Locale::negotiate(&["kk"]), Locale::Kk);
    }

    #[test]
    fn test_negotiate_region_variant() {
        assert_eq!(Locale::negotiate(&["en-US"]), Locale::En);
        assert_eq!(Locale::negotiate(&["kk-KZ", "en"]), Locale::Kk);
    }

    #[test]
    fn test_negotiate_fallback() {
        assert_eq!(Locale::negotiate(&["de", "fr"]), Locale::Kk);
        assert_eq!(Locale::negotiate::<&str>(&[]), Locale::Kk);
        assert_eq!(Locale::negotiate(&["not a tag!!"]), Locale::Kk);
    }

    #[test]
    fn test_negotiate_skips_bad_tags() {
        assert_eq!(Locale::negotiate(&["!!", "en-GB"]), Locale::En);
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&Locale::En).unwrap(), "\"en\"");
        let parsed: Locale = serde_json::from_str("\"kk\"").unwrap();
        assert_eq!(parsed, Locale::Kk);
    }
}
