//! The user-facing translation API.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use bon::Builder;
use strsim::levenshtein;
use tracing::{Level, debug, enabled, trace, warn};

use crate::plural::{Count, FamilyResolver, INVARIANT_LOCALE, PluralFamily, clamp_index};
use crate::template::{interpolate, parse_template};
use crate::translator::bank::{PhraseBank, Variants};
use crate::translator::error::{LintWarning, PhraseError};
use crate::translator::phrase_set::PhraseSet;
use crate::types::Value;

/// Translates phrase keys for one culture.
///
/// A translator owns a [`PhraseBank`] mapping keys to variant lists. When
/// translating, it picks a variant by the plural rule of its culture and
/// interpolates positional arguments into it. Lookups never fail: a missing
/// key translates to itself, and a template that cannot be interpolated is
/// returned as written.
///
/// All methods take `&self`; a translator can be shared across threads and
/// mutated while it is being read.
///
/// # Example
///
/// ```
/// use phrasebook::{Translator, Value};
///
/// let translator = Translator::builder().culture("en-US").build();
/// translator.extend([("items", ["{0} item", "{0} items"])]).unwrap();
///
/// assert_eq!(translator.translate("items", &[Value::from(1)]), "1 item");
/// assert_eq!(translator.translate("items", &[Value::from(3)]), "3 items");
/// assert_eq!(translator.translate("no.such.key", &[]), "no.such.key");
/// ```
#[derive(Debug, Builder)]
#[builder(on(String, into))]
pub struct Translator {
    /// Locale tag used to pick plural rules (e.g., "en", "pl-PL").
    ///
    /// Defaults to the system locale, or the invariant locale `""` when the
    /// system locale is unavailable.
    #[builder(default = ambient_culture())]
    culture: String,

    /// Locale tag to plural family lookup.
    #[builder(default)]
    resolver: FamilyResolver,

    #[builder(skip)]
    family: OnceLock<PluralFamily>,

    #[builder(skip)]
    bank: PhraseBank,
}

impl Default for Translator {
    fn default() -> Self {
        Translator::builder().build()
    }
}

impl Translator {
    /// Create a translator for the system locale with no phrases.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a translator for `culture` with no phrases.
    pub fn with_culture(culture: impl Into<String>) -> Self {
        Translator::builder().culture(culture.into()).build()
    }

    /// Create a translator for `culture` seeded with `phrases`.
    pub fn with_phrases<I, K, V, S>(
        culture: impl Into<String>,
        phrases: I,
    ) -> Result<Self, PhraseError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let translator = Self::with_culture(culture);
        translator.extend(phrases)?;
        Ok(translator)
    }

    // =========================================================================
    // Culture
    // =========================================================================

    /// The culture this translator was built for.
    pub fn culture(&self) -> &str {
        &self.culture
    }

    /// The plural family of [`culture`](Self::culture), resolved on first use.
    pub fn family(&self) -> PluralFamily {
        *self
            .family
            .get_or_init(|| self.resolver.resolve(&self.culture))
    }

    pub fn resolver(&self) -> &FamilyResolver {
        &self.resolver
    }

    // =========================================================================
    // Phrase Bank
    // =========================================================================

    /// Adds phrases, overwriting any existing entry for the same key.
    ///
    /// Fails with [`PhraseError::InvalidPhrase`] if any entry has no variants,
    /// in which case no entry from this call is applied.
    pub fn extend<I, K, V, S>(&self, entries: I) -> Result<(), PhraseError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let count = self.bank.extend(entries)?;
        debug!(culture = %self.culture, count, "extended phrases");
        Ok(())
    }

    /// Parses a JSON phrase document and adds its entries.
    ///
    /// Returns the number of entries added. See [`PhraseSet::from_json`] for
    /// the accepted format.
    pub fn load_json(&self, json: &str) -> Result<usize, PhraseError> {
        let set = PhraseSet::from_json(json)?;
        let count = set.len();
        self.extend(set)?;
        Ok(count)
    }

    /// Removes each of `keys`. Absent keys are ignored.
    pub fn unset<I, K>(&self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let removed = self.bank.remove(keys);
        debug!(culture = %self.culture, removed, "unset phrases");
    }

    /// Removes every phrase.
    pub fn clear(&self) {
        let removed = self.bank.clear();
        debug!(culture = %self.culture, removed, "cleared phrases");
    }

    /// Replaces every phrase with `entries`.
    ///
    /// Validation happens first; on error the existing phrases are kept.
    pub fn replace<I, K, V, S>(&self, entries: I) -> Result<(), PhraseError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let count = self.bank.replace(entries)?;
        debug!(culture = %self.culture, count, "replaced phrases");
        Ok(())
    }

    /// A read-only, ordered snapshot of the current phrases.
    pub fn phrases(&self) -> BTreeMap<String, Variants> {
        self.bank.snapshot()
    }

    /// The variants stored for `key`.
    pub fn get(&self, key: &str) -> Option<Variants> {
        self.bank.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.bank.contains(key)
    }

    pub fn len(&self) -> usize {
        self.bank.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bank.is_empty()
    }

    // =========================================================================
    // Translation
    // =========================================================================

    /// Translates `key`, interpolating `args` as `{0}`, `{1}`, ...
    ///
    /// If the first argument is a [`Value::Integer`], it selects the plural
    /// variant; otherwise variant 0 is used. Floats and numeric strings never
    /// pluralize here; use [`translate_count`](Self::translate_count) for
    /// fractional counts.
    pub fn translate(&self, key: &str, args: &[Value]) -> String {
        let count = args.first().and_then(Value::plural_count);
        self.translate_inner(key, count, args)
    }

    /// Translates `key` with an explicit plural `count`.
    ///
    /// The count is interpolated as `{0}` and `args` follow as `{1}`, `{2}`,
    /// ... Fractional counts are supported.
    ///
    /// # Example
    ///
    /// ```
    /// use phrasebook::{Translator, Value};
    ///
    /// let translator = Translator::with_culture("fr");
    /// translator
    ///     .extend([("apples", ["{0} pomme de {1}", "{0} pommes de {1}"])])
    ///     .unwrap();
    ///
    /// let text = translator.translate_count("apples", 1.5, &[Value::from("Marie")]);
    /// assert_eq!(text, "1.5 pommes de Marie");
    /// ```
    pub fn translate_count(&self, key: &str, count: impl Into<Count>, args: &[Value]) -> String {
        let count = count.into();
        let mut all = Vec::with_capacity(args.len() + 1);
        all.push(Value::from(count));
        all.extend_from_slice(args);
        self.translate_inner(key, Some(count), &all)
    }

    fn translate_inner(&self, key: &str, count: Option<Count>, args: &[Value]) -> String {
        let Some(variants) = self.bank.get(key) else {
            if enabled!(Level::DEBUG) {
                debug!(
                    culture = %self.culture,
                    key,
                    suggestions = ?self.suggest(key),
                    "phrase not found, returning key"
                );
            }
            return key.to_string();
        };

        let index = match count {
            Some(count) => {
                let family = self.family();
                let selected = family.select_index(count);
                let index = clamp_index(selected, variants.len());
                trace!(key, %family, %count, selected, index, "selected plural variant");
                index
            }
            None => 0,
        };
        let source = &variants[index];

        match interpolate(source, args) {
            Ok(text) => text,
            Err(error) => {
                warn!(key, variant = index, %error, "interpolation failed, returning template");
                source.clone()
            }
        }
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Known keys close to `key`, closest first.
    ///
    /// Matches are within edit distance 1 for keys of up to 3 characters and
    /// 2 otherwise, limited to 3 suggestions.
    pub fn suggest(&self, key: &str) -> Vec<String> {
        compute_suggestions(key, &self.bank.keys())
    }

    /// Checks stored phrases against this translator's plural family.
    ///
    /// Single-variant phrases are treated as non-plural and only checked for
    /// template syntax.
    pub fn lint(&self) -> Vec<LintWarning> {
        let family = self.family();
        let expected = family.form_count();
        let mut warnings = Vec::new();

        for (key, variants) in self.bank.snapshot() {
            if variants.len() > 1 && variants.len() < expected {
                warnings.push(LintWarning::MissingForms {
                    key: key.clone(),
                    family,
                    variants: variants.len(),
                    expected,
                });
            } else if variants.len() > expected {
                warnings.push(LintWarning::UnreachableForms {
                    key: key.clone(),
                    family,
                    variants: variants.len(),
                    expected,
                });
            }

            for (variant, source) in variants.iter().enumerate() {
                if let Err(error) = parse_template(source) {
                    warnings.push(LintWarning::MalformedTemplate {
                        key: key.clone(),
                        variant,
                        error,
                    });
                }
            }
        }
        warnings
    }
}

/// Detects the system locale, falling back to the invariant locale.
fn ambient_culture() -> String {
    sys_locale::get_locale().unwrap_or_else(|| INVARIANT_LOCALE.to_string())
}

/// Compute typo suggestions for `name` among `available`.
fn compute_suggestions(name: &str, available: &[String]) -> Vec<String> {
    let max_distance = if name.chars().count() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, &String)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            (dist <= max_distance && dist > 0).then_some((dist, candidate))
        })
        .collect();

    suggestions.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
    suggestions
        .into_iter()
        .take(3)
        .map(|(_, s)| s.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn suggestions_rank_by_distance() {
        let available = keys(&["menu.open", "menu.opens", "menu.close"]);
        assert_eq!(
            compute_suggestions("menu.open", &available),
            vec!["menu.opens".to_string()]
        );
        assert_eq!(
            compute_suggestions("menu.opn", &available),
            vec!["menu.open".to_string(), "menu.opens".to_string()]
        );
    }

    #[test]
    fn short_keys_allow_one_edit() {
        let available = keys(&["ok", "no", "yes"]);
        // "no" is a transposition, two edits away.
        assert_eq!(compute_suggestions("on", &available), vec!["ok".to_string()]);
        assert!(compute_suggestions("xyz", &available).is_empty());
    }

    #[test]
    fn suggestions_limit_to_three() {
        let available: Vec<String> = (0..10).map(|i| format!("item{i}")).collect();
        assert_eq!(compute_suggestions("item", &available).len(), 3);
    }
}
