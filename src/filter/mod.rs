//! Filter stage: turns raw word streams into clean word lists.

use crate::config::FilterConfig;
use crate::text::{normalize, Validator};
use rayon::prelude::*;
use std::collections::HashSet;

/// Filters raw dictionary lines into clean words.
///
/// A clean word is the normalized form of a raw line that passes
/// validation and is absent from the blocklist.
#[derive(Debug, Clone)]
pub struct DictionaryFilter {
    validator: Validator,
}

impl DictionaryFilter {
    /// Creates a new filter with the given configuration.
    pub fn new(config: FilterConfig) -> Self {
        Self {
            validator: Validator::new(config),
        }
    }

    /// Creates a filter with default configuration.
    pub fn default_config() -> Self {
        Self::new(FilterConfig::default())
    }

    /// Builds the blocklist set from raw lines.
    ///
    /// Each line is normalized then validated; only valid words are kept.
    /// Invalid and duplicate entries are silently dropped.
    pub fn build_blocklist<I>(&self, lines: I) -> HashSet<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        lines
            .into_iter()
            .filter_map(|line| {
                let word = normalize(line.as_ref());
                self.validator.is_valid(&word).then_some(word)
            })
            .collect()
    }

    /// Filters raw dictionary lines against the blocklist.
    ///
    /// Clean words come out in encounter order. Duplicates in the raw
    /// source are kept: a word listed twice stays listed twice.
    pub fn filter_dictionary<I>(&self, lines: I, blocklist: &HashSet<String>) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        lines
            .into_iter()
            .filter_map(|line| self.clean_word(line.as_ref(), blocklist))
            .collect()
    }

    /// Parallel variant of [`filter_dictionary`] over an in-memory slice.
    ///
    /// Produces exactly the same output as the sequential version:
    /// rayon's indexed collect merges shards back in original order.
    pub fn filter_dictionary_par(
        &self,
        lines: &[String],
        blocklist: &HashSet<String>,
    ) -> Vec<String> {
        lines
            .par_iter()
            .filter_map(|line| self.clean_word(line, blocklist))
            .collect()
    }

    fn clean_word(&self, line: &str, blocklist: &HashSet<String>) -> Option<String> {
        let word = normalize(line);
        (self.validator.is_valid(&word) && !blocklist.contains(&word)).then_some(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> DictionaryFilter {
        DictionaryFilter::default_config()
    }

    #[test]
    fn test_build_blocklist_normalizes_and_validates() {
        let blocklist = filter().build_blocklist(["Damn ", "ca7", "ox", "damn"]);
        assert_eq!(blocklist, HashSet::from(["damn".to_string()]));
    }

    #[test]
    fn test_filter_normalizes_and_preserves_duplicates() {
        let clean = filter().filter_dictionary(["Cat", "ca7", "cat", "CAT "], &HashSet::new());
        assert_eq!(clean, ["cat", "cat", "cat"]);
    }

    #[test]
    fn test_filter_excludes_blocklisted_words() {
        let blocklist = HashSet::from(["damn".to_string()]);
        let clean = filter().filter_dictionary(["tea", "Damn", "tree"], &blocklist);
        assert_eq!(clean, ["tea", "tree"]);
    }

    #[test]
    fn test_filter_preserves_encounter_order() {
        let clean = filter().filter_dictionary(["tree", "ox", "tea", "eat", "a1b"], &HashSet::new());
        assert_eq!(clean, ["tree", "tea", "eat"]);
    }

    #[test]
    fn test_filter_rejects_out_of_bounds_lengths() {
        let clean = filter().filter_dictionary(["ox", "cat", "satchel", "satchels"], &HashSet::new());
        assert_eq!(clean, ["cat", "satchel"]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let lines: Vec<String> = (0..500)
            .flat_map(|i| {
                [
                    format!("Word{}", i), // invalid: digits
                    "Tea ".to_string(),
                    "damn".to_string(),
                    "tree".to_string(),
                ]
            })
            .collect();
        let blocklist = HashSet::from(["damn".to_string()]);

        let sequential = filter().filter_dictionary(&lines, &blocklist);
        let parallel = filter().filter_dictionary_par(&lines, &blocklist);
        assert_eq!(sequential, parallel);
        assert_eq!(sequential.len(), 1000);
    }

    #[test]
    fn test_variant_bounds() {
        let board_filter = DictionaryFilter::new(FilterConfig::with_bounds(4, 7));
        let clean = board_filter.filter_dictionary(["cat", "cats"], &HashSet::new());
        assert_eq!(clean, ["cats"]);
    }
}
