//! Locale tag to plural family resolution.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use icu_locale_core::LanguageIdentifier;
use thiserror::Error;
use tracing::trace;

use super::family::{FAMILY_TABLE, INVARIANT_LOCALE};
use super::PluralFamily;

/// The built-in table, flattened once on first use and never mutated.
///
/// `FAMILY_TABLE` lists every tag once, so no duplicate check is needed here.
static STANDARD: LazyLock<FamilyResolver> = LazyLock::new(|| FamilyResolver {
    map: Arc::new(flatten(FAMILY_TABLE.iter().copied())),
});

/// Errors building a resolver from a custom table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolverError {
    /// The same tag was listed under two families.
    #[error("locale '{tag}' is listed under both {first} and {second}")]
    DuplicateLocale {
        tag: String,
        first: PluralFamily,
        second: PluralFamily,
    },
}

/// Immutable locale tag to [`PluralFamily`] map.
///
/// Cloning is cheap; clones share the same underlying map. Resolution never
/// fails: unknown tags fall back to their primary language subtag and then to
/// the family of the invariant locale `""`.
///
/// # Example
///
/// ```
/// use phrasebook::{FamilyResolver, PluralFamily};
///
/// let resolver = FamilyResolver::standard();
/// assert_eq!(resolver.resolve("ru-RU"), PluralFamily::Russian);
/// assert_eq!(resolver.resolve("ru-KZ"), PluralFamily::Russian);
/// assert_eq!(resolver.resolve("xx-YY"), PluralFamily::German);
/// ```
#[derive(Debug, Clone)]
pub struct FamilyResolver {
    map: Arc<HashMap<String, PluralFamily>>,
}

impl Default for FamilyResolver {
    fn default() -> Self {
        Self::standard()
    }
}

impl FamilyResolver {
    /// Returns a handle to the built-in table.
    pub fn standard() -> Self {
        STANDARD.clone()
    }

    /// Builds a resolver from `(family, tags)` rows.
    ///
    /// If no row lists the invariant tag `""`, it is added under
    /// [`PluralFamily::German`].
    pub fn from_table<'a, I>(rows: I) -> Result<Self, ResolverError>
    where
        I: IntoIterator<Item = (PluralFamily, &'a [&'a str])>,
    {
        let rows: Vec<_> = rows.into_iter().collect();
        let mut seen = HashMap::<&str, PluralFamily>::new();
        for &(family, tags) in &rows {
            for &tag in tags {
                if let Some(&first) = seen.get(tag) {
                    return Err(ResolverError::DuplicateLocale {
                        tag: tag.to_string(),
                        first,
                        second: family,
                    });
                }
                seen.insert(tag, family);
            }
        }
        Ok(Self {
            map: Arc::new(flatten(rows)),
        })
    }

    /// Resolves `locale` to its plural family.
    ///
    /// Tries the exact tag, then its primary language subtag, then the
    /// invariant locale.
    pub fn resolve(&self, locale: &str) -> PluralFamily {
        if let Some(&family) = self.map.get(locale) {
            trace!(locale, %family, "resolved plural family by exact tag");
            return family;
        }
        if let Some(language) = primary_language(locale) {
            if let Some(&family) = self.map.get(&language) {
                trace!(locale, %language, %family, "resolved plural family by language");
                return family;
            }
        }
        let family = self.invariant_family();
        trace!(locale, %family, "resolved plural family by invariant fallback");
        family
    }

    /// Family of the invariant locale.
    pub fn invariant_family(&self) -> PluralFamily {
        self.map
            .get(INVARIANT_LOCALE)
            .copied()
            .unwrap_or(PluralFamily::German)
    }

    /// Returns true if `locale` is registered verbatim.
    pub fn contains(&self, locale: &str) -> bool {
        self.map.contains_key(locale)
    }

    /// All tags registered for `family`, sorted.
    pub fn locales_for(&self, family: PluralFamily) -> Vec<&str> {
        let mut tags: Vec<&str> = self
            .map
            .iter()
            .filter(|&(_, f)| *f == family)
            .map(|(tag, _)| tag.as_str())
            .collect();
        tags.sort_unstable();
        tags
    }

    /// Number of registered tags, including the invariant locale.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Builds the tag map from `rows`, adding the invariant tag under German when
/// absent. Later rows win on duplicate tags.
fn flatten<'a, I>(rows: I) -> HashMap<String, PluralFamily>
where
    I: IntoIterator<Item = (PluralFamily, &'a [&'a str])>,
{
    let mut map = HashMap::new();
    for (family, tags) in rows {
        for &tag in tags {
            map.insert(tag.to_string(), family);
        }
    }
    map.entry(INVARIANT_LOCALE.to_string())
        .or_insert(PluralFamily::German);
    map
}

/// Extracts the primary language subtag of `locale`, lowercased.
///
/// Returns `None` when there is nothing before the first separator. Tags that
/// are not valid BCP-47 are split on `-` or `_` by hand.
fn primary_language(locale: &str) -> Option<String> {
    if let Ok(id) = LanguageIdentifier::try_from_str(locale) {
        let language = id.language.as_str();
        return (!language.is_empty() && language != "und").then(|| language.to_string());
    }
    locale
        .split(['-', '_'])
        .next()
        .filter(|s| !s.is_empty())
        .map(str::to_ascii_lowercase)
}
