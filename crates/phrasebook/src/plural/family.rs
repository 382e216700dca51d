//! Plural families and the static table of locales that use them.
//!
//! A plural family groups languages sharing the same count-to-variant rule.
//! The table below is the single source of truth for which locale tag belongs
//! to which family; [`FamilyResolver`](super::FamilyResolver) flattens it into
//! a lookup map once and shares it afterwards.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// A class of languages sharing one pluralization rule.
///
/// The set is closed: every locale resolves to exactly one of these, with
/// [`PluralFamily::German`] (singular for 1, plural otherwise) as the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PluralFamily {
    /// Zero/one/two/few/many/other, six forms.
    Arabic,
    /// Bosnian and Serbian: one/few/other.
    BosnianSerbian,
    /// No plural distinction.
    Chinese,
    /// Croatian: one/few/other.
    Croatian,
    /// Zero and one share the singular.
    French,
    /// One is singular, everything else plural. Used for English too.
    German,
    /// East Slavic: one/few/other.
    Russian,
    Lithuanian,
    /// Czech and Slovak: one/few(2-4)/other.
    Czech,
    Polish,
    /// Icelandic and Macedonian: last digit 1 (except 11) is singular.
    Icelandic,
    /// Singular/dual/paucal/other by the last two digits.
    Slovenian,
}

impl PluralFamily {
    /// Every family, in declaration order.
    pub const ALL: [PluralFamily; 12] = [
        PluralFamily::Arabic,
        PluralFamily::BosnianSerbian,
        PluralFamily::Chinese,
        PluralFamily::Croatian,
        PluralFamily::French,
        PluralFamily::German,
        PluralFamily::Russian,
        PluralFamily::Lithuanian,
        PluralFamily::Czech,
        PluralFamily::Polish,
        PluralFamily::Icelandic,
        PluralFamily::Slovenian,
    ];

    /// Number of distinct variant indices this family's rule can produce.
    ///
    /// A phrase with fewer variants than this still translates, but the
    /// missing forms fall back to variant 0.
    pub fn form_count(self) -> usize {
        match self {
            PluralFamily::Arabic => 6,
            PluralFamily::Slovenian => 4,
            PluralFamily::BosnianSerbian
            | PluralFamily::Croatian
            | PluralFamily::Russian
            | PluralFamily::Lithuanian
            | PluralFamily::Czech
            | PluralFamily::Polish => 3,
            PluralFamily::French | PluralFamily::German | PluralFamily::Icelandic => 2,
            PluralFamily::Chinese => 1,
        }
    }

    /// Stable lowercase name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            PluralFamily::Arabic => "arabic",
            PluralFamily::BosnianSerbian => "bosnian_serbian",
            PluralFamily::Chinese => "chinese",
            PluralFamily::Croatian => "croatian",
            PluralFamily::French => "french",
            PluralFamily::German => "german",
            PluralFamily::Russian => "russian",
            PluralFamily::Lithuanian => "lithuanian",
            PluralFamily::Czech => "czech",
            PluralFamily::Polish => "polish",
            PluralFamily::Icelandic => "icelandic",
            PluralFamily::Slovenian => "slovenian",
        }
    }
}

impl Display for PluralFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

/// The invariant locale tag. Maps to [`PluralFamily::German`].
pub const INVARIANT_LOCALE: &str = "";

/// Built-in locale table, one row per family.
///
/// Each tag appears in exactly one row.
pub const FAMILY_TABLE: &[(PluralFamily, &[&str])] = &[
    (
        PluralFamily::Arabic,
        &[
            "ar", "ar-AE", "ar-BH", "ar-DZ", "ar-EG", "ar-IQ", "ar-JO", "ar-KW", "ar-LB", "ar-LY",
            "ar-MA", "ar-OM", "ar-QA", "ar-SA", "ar-SY", "ar-TN", "ar-YE",
        ],
    ),
    (
        PluralFamily::BosnianSerbian,
        &[
            "bs", "bs-Cyrl", "bs-Cyrl-BA", "bs-Latn", "bs-Latn-BA", "sr", "sr-Cyrl", "sr-Cyrl-BA",
            "sr-Cyrl-ME", "sr-Cyrl-RS", "sr-Latn", "sr-Latn-BA", "sr-Latn-ME", "sr-Latn-RS",
        ],
    ),
    (
        PluralFamily::Chinese,
        &[
            "az", "az-Cyrl-AZ", "az-Latn-AZ", "fa", "fa-IR", "id", "id-ID", "ja", "ja-JP", "ka",
            "ka-GE", "kk", "kk-KZ", "ko", "ko-KR", "ky", "ky-KG", "ms", "ms-BN", "ms-MY", "th",
            "th-TH", "tr", "tr-TR", "tt", "tt-RU", "uz", "uz-Cyrl-UZ", "uz-Latn-UZ", "vi",
            "vi-VN", "zh", "zh-CN", "zh-HK", "zh-Hans", "zh-Hant", "zh-MO", "zh-SG", "zh-TW",
        ],
    ),
    (PluralFamily::Croatian, &["hr", "hr-BA", "hr-HR"]),
    (
        PluralFamily::French,
        &[
            "fr", "fr-BE", "fr-CA", "fr-CH", "fr-FR", "fr-LU", "fr-MC", "hy", "hy-AM", "pt-BR",
        ],
    ),
    (
        PluralFamily::German,
        &[
            INVARIANT_LOCALE,
            "af", "af-ZA", "bg", "bg-BG", "ca", "ca-ES", "da", "da-DK", "de", "de-AT", "de-CH",
            "de-DE", "de-LI", "de-LU", "el", "el-GR", "en", "en-AU", "en-CA", "en-GB", "en-IE",
            "en-IN", "en-NZ", "en-US", "en-ZA", "es", "es-AR", "es-CL", "es-CO", "es-ES",
            "es-MX", "es-PE", "es-US", "et", "et-EE", "eu", "eu-ES", "fi", "fi-FI", "gl",
            "gl-ES", "he", "he-IL", "hu", "hu-HU", "it", "it-CH", "it-IT", "nb", "nb-NO", "nl",
            "nl-BE", "nl-NL", "nn", "nn-NO", "no", "pt", "pt-PT", "sq", "sq-AL", "sv", "sv-FI",
            "sv-SE",
        ],
    ),
    (
        PluralFamily::Russian,
        &["be", "be-BY", "ru", "ru-RU", "ru-UA", "uk", "uk-UA"],
    ),
    (PluralFamily::Lithuanian, &["lt", "lt-LT"]),
    (PluralFamily::Czech, &["cs", "cs-CZ", "sk", "sk-SK"]),
    (PluralFamily::Polish, &["pl", "pl-PL"]),
    (PluralFamily::Icelandic, &["is", "is-IS", "mk", "mk-MK"]),
    (PluralFamily::Slovenian, &["sl", "sl-SI"]),
];
