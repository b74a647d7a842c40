//! Word validation against length and character constraints.

use crate::config::FilterConfig;

/// Decides whether a normalized token qualifies as a dictionary word.
#[derive(Debug, Clone)]
pub struct Validator {
    config: FilterConfig,
}

impl Validator {
    /// Creates a new validator with the given configuration.
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    /// Creates a validator with default configuration.
    pub fn default_config() -> Self {
        Self::new(FilterConfig::default())
    }

    /// Returns true iff the word's length (in characters, not bytes) is
    /// within the configured bounds and every character is a letter.
    ///
    /// Letter means the Unicode letter category, so accented and
    /// non-Latin letters pass while digits, punctuation, symbols, and
    /// bare combining marks do not.
    pub fn is_valid(&self, word: &str) -> bool {
        let length = word.chars().count();
        if length < self.config.min_word_length || length > self.config.max_word_length {
            return false;
        }

        word.chars().all(char::is_alphabetic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_bounds() {
        let validator = Validator::default_config();
        assert!(!validator.is_valid("ox")); // below minimum
        assert!(validator.is_valid("cat")); // at minimum
        assert!(validator.is_valid("satchel")); // at maximum
        assert!(!validator.is_valid("satchels")); // above maximum
    }

    #[test]
    fn test_rejects_non_letters() {
        let validator = Validator::default_config();
        assert!(!validator.is_valid("a1b"));
        assert!(!validator.is_valid("don't"));
        assert!(!validator.is_valid("ca-t"));
        assert!(!validator.is_valid("cat "));
        assert!(!validator.is_valid(""));
    }

    #[test]
    fn test_accepts_unicode_letters() {
        let validator = Validator::default_config();
        assert!(validator.is_valid("éclair"));
        assert!(validator.is_valid("привет"));
    }

    #[test]
    fn test_length_is_characters_not_bytes() {
        let validator = Validator::default_config();
        // Seven accented characters is fourteen bytes but still in bounds.
        assert!(validator.is_valid("ééééééé"));
        assert!(!validator.is_valid("éééééééé"));
    }

    #[test]
    fn test_configurable_bounds() {
        let validator = Validator::new(FilterConfig::with_bounds(4, 7));
        assert!(!validator.is_valid("cat"));
        assert!(validator.is_valid("cats"));
    }
}
