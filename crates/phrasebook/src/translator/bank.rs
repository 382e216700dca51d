//! Concurrent phrase storage.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::translator::error::PhraseError;

/// The variant list stored for one key. Variant 0 is the default form.
pub type Variants = Arc<[String]>;

/// A thread-safe map from phrase key to its variant list.
///
/// Each variant list is immutable once stored and replaced as a whole, so a
/// reader sees either the old list or the new one for any key. Batch writes
/// take the lock once, so a batch is also applied as a unit.
#[derive(Debug, Default)]
pub struct PhraseBank {
    phrases: RwLock<HashMap<String, Variants>>,
}

impl PhraseBank {
    /// Create a new empty bank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the variant list for `key`.
    pub fn get(&self, key: &str) -> Option<Variants> {
        self.phrases.read().get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.phrases.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.phrases.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.read().is_empty()
    }

    /// Validates `entries` and inserts them, overwriting existing keys.
    ///
    /// Nothing is inserted if any entry is invalid. Returns the number of
    /// entries written.
    pub fn extend<I, K, V, S>(&self, entries: I) -> Result<usize, PhraseError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prepared = prepare(entries)?;
        let count = prepared.len();
        self.phrases.write().extend(prepared);
        Ok(count)
    }

    /// Removes each key that is present. Returns the number removed.
    pub fn remove<I, K>(&self, keys: I) -> usize
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut phrases = self.phrases.write();
        let mut removed = 0;
        for key in keys {
            if phrases.remove(key.as_ref()).is_some() {
                removed += 1;
            }
        }
        removed
    }

    /// Removes every key. Returns the number removed.
    pub fn clear(&self) -> usize {
        let mut phrases = self.phrases.write();
        let count = phrases.len();
        phrases.clear();
        count
    }

    /// Validates `entries`, then swaps them in for the whole bank.
    ///
    /// On error the bank is left untouched.
    pub fn replace<I, K, V, S>(&self, entries: I) -> Result<usize, PhraseError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let replacement: HashMap<String, Variants> = prepare(entries)?.into_iter().collect();
        let count = replacement.len();
        *self.phrases.write() = replacement;
        Ok(count)
    }

    /// An ordered copy of the current contents.
    ///
    /// Variant lists are shared with the bank, not cloned.
    pub fn snapshot(&self) -> BTreeMap<String, Variants> {
        self.phrases
            .read()
            .iter()
            .map(|(key, variants)| (key.clone(), Arc::clone(variants)))
            .collect()
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.phrases.read().keys().cloned().collect();
        keys.sort_unstable();
        keys
    }
}

/// Converts caller entries into stored form, rejecting empty variant lists.
fn prepare<I, K, V, S>(entries: I) -> Result<Vec<(String, Variants)>, PhraseError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: IntoIterator<Item = S>,
    S: Into<String>,
{
    entries
        .into_iter()
        .map(|(key, variants)| {
            let key = key.into();
            let variants: Vec<String> = variants.into_iter().map(Into::into).collect();
            if variants.is_empty() {
                return Err(PhraseError::InvalidPhrase { key });
            }
            Ok((key, Variants::from(variants)))
        })
        .collect()
}
