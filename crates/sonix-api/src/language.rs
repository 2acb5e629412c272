//! Language codes accepted by the Sonix API.
//!
//! See <https://sonix.ai/docs/api#languages>.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SonixError;

macro_rules! languages {
    ($($variant:ident => $code:literal),+ $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Language {
            $($variant),+
        }

        impl Language {
            pub const ALL: &[Language] = &[$(Language::$variant),+];

            /// Wire code sent to the API.
            #[must_use]
            pub fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => $code),+
                }
            }
        }

        impl FromStr for Language {
            type Err = SonixError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($code => Ok(Self::$variant),)+
                    other => Err(SonixError::UnsupportedLanguage(other.to_owned())),
                }
            }
        }
    };
}

languages! {
    English => "en",
    French => "fr",
    German => "de",
    Spanish => "es",
    Arabic => "ar",
    Armenian => "hy-AM",
    Bulgarian => "bg",
    Catalan => "ca",
    Croatian => "hr",
    Cantonese => "yue-Hant-HK",
    Mandarin => "cmn-Hans-CN",
    Czech => "cs",
    Danish => "da",
    Dutch => "nl",
    Finnish => "fi",
    Greek => "el",
    Hebrew => "he-IL",
    Hindi => "hi",
    Hungarian => "hu",
    Indonesian => "id-ID",
    Italian => "it",
    Japanese => "ja",
    Korean => "ko",
    Latvian => "lv",
    Lithuanian => "lt",
    Malay => "ms-MY",
    Norwegian => "nb-NO",
    Polish => "pl",
    Portuguese => "pt",
    Romanian => "ro",
    Russian => "ru",
    Slovak => "sk",
    Slovenian => "sl",
    Swedish => "sv",
    Thai => "th-TH",
    Turkish => "tr-TR",
    Vietnamese => "vi-VN",
    Ukrainian => "uk",
}

impl Default for Language {
    fn default() -> Self {
        Self::English
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_has_every_language() {
        assert_eq!(Language::ALL.len(), 38);
    }

    #[test]
    fn region_tagged_codes_parse() {
        assert_eq!("yue-Hant-HK".parse::<Language>().unwrap(), Language::Cantonese);
        assert_eq!("nb-NO".parse::<Language>().unwrap(), Language::Norwegian);
        assert_eq!(Language::Mandarin.to_string(), "cmn-Hans-CN");
    }

    #[test]
    fn codes_are_case_sensitive() {
        let err = "EN".parse::<Language>().unwrap_err();
        assert!(matches!(err, SonixError::UnsupportedLanguage(ref c) if c == "EN"));
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<_> = Language::ALL.iter().map(|l| l.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), Language::ALL.len());
    }

    #[test]
    fn serde_uses_wire_code() {
        let json = serde_json::to_string(&Language::Hebrew).unwrap();
        assert_eq!(json, "\"he-IL\"");
        let back: Language = serde_json::from_str("\"uk\"").unwrap();
        assert_eq!(back, Language::Ukrainian);
        assert!(serde_json::from_str::<Language>("\"xx\"").is_err());
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Language::default(), Language::English);
    }
}
