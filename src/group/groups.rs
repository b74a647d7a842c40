//! Letter-group map built from a clean word list.

use crate::group::key::sorted_unique;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// One grouped word: its sorted letter form plus the original word.
///
/// Serializes as a two-element JSON array, `["aet", "tea"]`.
pub type GroupEntry = (String, String);

/// Maps each unique-sorted letter key to the words that reduce to it.
///
/// A group is created the first time its key is seen and holds
/// `(sorted_form, word)` pairs in the order the words were inserted.
/// Keys iterate in first-occurrence order, so grouping the same input
/// twice serializes byte-identically. Words are not deduplicated: a word
/// inserted twice appears twice in its group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordGroups {
    /// Maps key -> slot in `keys` and `groups`.
    key_to_slot: HashMap<String, usize>,
    /// Keys in first-occurrence order.
    keys: Vec<String>,
    /// Group entries, parallel to `keys`.
    groups: Vec<Vec<GroupEntry>>,
}

impl WordGroups {
    /// Creates an empty letter-group map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups an entire word sequence in input order.
    ///
    /// The words are assumed to be clean already; no re-validation
    /// happens here.
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut groups = Self::new();
        for word in words {
            groups.insert(word.into());
        }
        groups
    }

    /// Adds one word to the group for its unique-letter key.
    pub fn insert(&mut self, word: String) {
        let (key, sorted) = sorted_unique(&word);
        let slot = match self.key_to_slot.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.keys.len();
                self.key_to_slot.insert(key.clone(), slot);
                self.keys.push(key);
                self.groups.push(Vec::new());
                slot
            }
        };
        self.groups[slot].push((sorted, word));
    }

    /// Returns the group for a key, if any word produced it.
    pub fn get(&self, key: &str) -> Option<&[GroupEntry]> {
        self.key_to_slot
            .get(key)
            .map(|&slot| self.groups[slot].as_slice())
    }

    /// Returns true if any word produced this key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.key_to_slot.contains_key(key)
    }

    /// Iterates keys in first-occurrence order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Iterates `(key, group)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[GroupEntry])> {
        self.keys
            .iter()
            .zip(&self.groups)
            .map(|(key, group)| (key.as_str(), group.as_slice()))
    }

    /// Returns the number of groups.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Checks if the map has no groups.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the total number of grouped words across all groups.
    pub fn word_count(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Returns statistics about the grouping.
    pub fn stats(&self) -> GroupStats {
        let num_words = self.word_count();
        let largest_group = self.groups.iter().map(Vec::len).max().unwrap_or(0);
        let avg_group_size = if self.keys.is_empty() {
            0.0
        } else {
            num_words as f64 / self.keys.len() as f64
        };

        GroupStats {
            num_groups: self.keys.len(),
            num_words,
            largest_group,
            avg_group_size,
        }
    }

    /// Appends a whole group under a key, merging into an existing group
    /// if the key is already present. Used when reading a serialized map.
    fn push_group(&mut self, key: String, entries: Vec<GroupEntry>) {
        match self.key_to_slot.get(&key) {
            Some(&slot) => self.groups[slot].extend(entries),
            None => {
                self.key_to_slot.insert(key.clone(), self.keys.len());
                self.keys.push(key);
                self.groups.push(entries);
            }
        }
    }
}

impl Serialize for WordGroups {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.keys.len()))?;
        for (key, group) in self.keys.iter().zip(&self.groups) {
            map.serialize_entry(key, group)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for WordGroups {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct GroupsVisitor;

        impl<'de> Visitor<'de> for GroupsVisitor {
            type Value = WordGroups;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of letter keys to [sorted, word] pairs")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<WordGroups, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut groups = WordGroups::new();
                while let Some((key, entries)) = access.next_entry::<String, Vec<GroupEntry>>()? {
                    groups.push_group(key, entries);
                }
                Ok(groups)
            }
        }

        deserializer.deserialize_map(GroupsVisitor)
    }
}

/// Statistics about a letter-group map.
#[derive(Debug, Clone)]
pub struct GroupStats {
    /// Number of distinct letter keys.
    pub num_groups: usize,
    /// Total words across all groups.
    pub num_words: usize,
    /// Size of the largest group.
    pub largest_group: usize,
    /// Average words per group.
    pub avg_group_size: f64,
}
