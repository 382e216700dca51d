//! Phrase documents: batches of key to variant-list entries.

use std::collections::BTreeMap;
use std::collections::btree_map::IntoIter;

use serde::Serialize;

use crate::translator::error::PhraseError;

/// An ordered batch of phrase entries, ready to pass to
/// [`Translator::extend`](crate::Translator::extend) or
/// [`Translator::replace`](crate::Translator::replace).
///
/// # Example
///
/// ```
/// use phrasebook::PhraseSet;
///
/// let set = PhraseSet::from_json(r#"{ "items": ["{0} item", "{0} items"] }"#).unwrap();
/// assert_eq!(set.get("items"), Some(&["{0} item".to_string(), "{0} items".to_string()][..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PhraseSet {
    entries: BTreeMap<String, Vec<String>>,
}

type RawDocument = Option<BTreeMap<String, Option<Vec<Option<String>>>>>;

impl PhraseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object mapping each key to an array of template strings.
    ///
    /// A `null` document, a `null` array, or a `null` element is rejected, as
    /// is an empty array.
    pub fn from_json(json: &str) -> Result<Self, PhraseError> {
        let raw: RawDocument =
            serde_json::from_str(json).map_err(|source| PhraseError::Json { source })?;
        let raw = raw.ok_or(PhraseError::NullInput)?;

        let mut entries = BTreeMap::new();
        for (key, variants) in raw {
            let Some(variants) = variants else {
                return Err(PhraseError::NullVariants { key });
            };
            let Some(variants) = variants.into_iter().collect::<Option<Vec<String>>>() else {
                return Err(PhraseError::NullVariants { key });
            };
            if variants.is_empty() {
                return Err(PhraseError::InvalidPhrase { key });
            }
            entries.insert(key, variants);
        }
        Ok(Self { entries })
    }

    /// Adds or overwrites one entry.
    pub fn insert<S: Into<String>>(
        &mut self,
        key: impl Into<String>,
        variants: impl IntoIterator<Item = S>,
    ) {
        self.entries
            .insert(key.into(), variants.into_iter().map(Into::into).collect());
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes the set back to a JSON object.
    pub fn to_json(&self) -> Result<String, PhraseError> {
        serde_json::to_string_pretty(self).map_err(|source| PhraseError::Json { source })
    }
}

impl IntoIterator for PhraseSet {
    type Item = (String, Vec<String>);
    type IntoIter = IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K, V, S> FromIterator<(K, V)> for PhraseSet
where
    K: Into<String>,
    V: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut set = Self::new();
        for (key, variants) in iter {
            set.insert(key, variants);
        }
        set
    }
}
