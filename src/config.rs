//! Configuration for the Wordforge dataset builder.

use crate::error::{Result, WordforgeError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for a pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Word filtering configuration.
    pub filter: FilterConfig,

    /// Default file locations for pipeline inputs and outputs.
    pub paths: PathsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filter: FilterConfig::default(),
            paths: PathsConfig::default(),
        }
    }
}

/// Word filtering configuration.
///
/// The length bounds are configuration rather than constants so that
/// variants with different bounds can coexist: the dictionary builder
/// keeps 3–7 letter words by default, while board-style consumers work
/// from a 4–7 letter dictionary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Minimum clean-word length, in characters.
    /// Default: 3.
    pub min_word_length: usize,

    /// Maximum clean-word length, in characters.
    /// Default: 7.
    pub max_word_length: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_word_length: crate::DEFAULT_MIN_WORD_LENGTH,
            max_word_length: crate::DEFAULT_MAX_WORD_LENGTH,
        }
    }
}

impl FilterConfig {
    /// Creates a configuration with explicit length bounds.
    pub fn with_bounds(min_word_length: usize, max_word_length: usize) -> Self {
        Self {
            min_word_length,
            max_word_length,
        }
    }

    /// Checks that the length bounds are usable.
    pub fn validate(&self) -> Result<()> {
        if self.min_word_length == 0 {
            return Err(WordforgeError::Config(
                "min_word_length must be at least 1".to_string(),
            ));
        }
        if self.min_word_length > self.max_word_length {
            return Err(WordforgeError::Config(format!(
                "min_word_length ({}) exceeds max_word_length ({})",
                self.min_word_length, self.max_word_length
            )));
        }
        Ok(())
    }
}

/// Default file locations for pipeline inputs and outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Raw dictionary, one word per line.
    /// Default: `assets/base_dictionary.txt`.
    pub base_dictionary: PathBuf,

    /// Words to exclude from the clean dictionary, one per line.
    /// Default: `assets/bad_words_to_exclude.txt`.
    pub blocklist: PathBuf,

    /// Filtered word list produced by the clean stage.
    /// Default: `assets/clean_dictionary.txt`.
    pub clean_dictionary: PathBuf,

    /// Letter-group map produced by the group stage.
    /// Default: `assets/sorted_uniques.json`.
    pub letter_groups: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            base_dictionary: PathBuf::from("assets/base_dictionary.txt"),
            blocklist: PathBuf::from("assets/bad_words_to_exclude.txt"),
            clean_dictionary: PathBuf::from("assets/clean_dictionary.txt"),
            letter_groups: PathBuf::from("assets/sorted_uniques.json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.filter.min_word_length, 3);
        assert_eq!(config.filter.max_word_length, 7);
        assert_eq!(
            config.paths.letter_groups,
            PathBuf::from("assets/sorted_uniques.json")
        );
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(FilterConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_board_variant() {
        // The four-to-seven variant used by board-style consumers.
        assert!(FilterConfig::with_bounds(4, 7).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_min() {
        let err = FilterConfig::with_bounds(0, 7).validate().unwrap_err();
        assert!(matches!(err, WordforgeError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let err = FilterConfig::with_bounds(8, 7).validate().unwrap_err();
        assert!(matches!(err, WordforgeError::Config(_)));
    }
}
