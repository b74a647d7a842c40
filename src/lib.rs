//! # Wordforge - Word-Puzzle Dataset Builder
//!
//! Wordforge turns a raw word list into the derived datasets a word game
//! needs: a "clean" dictionary of playable words, and a letter-group map
//! that answers "which words can be spelled from this set of letters?".
//!
//! ## Overview
//!
//! The pipeline has two batch stages:
//!
//! 1. **Clean** - every raw line is normalized (trimmed, lowercased) and
//!    validated (length bounds, all-alphabetic), and words on a blocklist
//!    are dropped. The survivors form the clean dictionary, in source
//!    order, duplicates included.
//! 2. **Group** - every clean word is reduced to its unique-sorted letter
//!    key (the sorted set of distinct letters it uses), and words sharing
//!    a key are grouped together with their sorted letter forms.
//!
//! The stages are pure functions over in-memory values; the [`storage`]
//! module handles files, and the two stages can run in separate processes
//! with the clean dictionary persisted in between.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wordforge::{storage, DictionaryFilter, WordGroups};
//!
//! // Stage 1: filter the raw dictionary
//! let filter = DictionaryFilter::default_config();
//! let blocklist = filter.build_blocklist(storage::read_raw_lines(&blocklist_path)?);
//! let clean = filter.filter_dictionary(storage::read_raw_lines(&base_path)?, &blocklist);
//! storage::write_word_list(&clean_path, &clean)?;
//!
//! // Stage 2: group by unique-letter key
//! let groups = WordGroups::from_words(storage::read_word_list(&clean_path)?);
//! storage::write_groups(&groups_path, &groups)?;
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`text`] - word normalization and validation
//! - [`filter`] - the blocklist builder and dictionary filter
//! - [`group`] - letter-key derivation and the letter-group map
//! - [`storage`] - word-list and JSON persistence
//! - [`config`] - pipeline configuration
//! - [`error`] - the error taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod filter;
pub mod group;
pub mod storage;
pub mod text;

// Re-export commonly used types
pub use config::{Config, FilterConfig, PathsConfig};
pub use error::{Result, WordforgeError};
pub use filter::DictionaryFilter;
pub use group::{sorted_letters, sorted_unique, GroupEntry, GroupStats, WordGroups};
pub use text::{normalize, Validator};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default minimum clean-word length, in characters.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

/// Default maximum clean-word length, in characters.
pub const DEFAULT_MAX_WORD_LENGTH: usize = 7;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_default_bounds() {
        assert_eq!(DEFAULT_MIN_WORD_LENGTH, 3);
        assert_eq!(DEFAULT_MAX_WORD_LENGTH, 7);
        assert!(DEFAULT_MIN_WORD_LENGTH <= DEFAULT_MAX_WORD_LENGTH);
    }
}
