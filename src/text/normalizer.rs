//! Word normalization for preprocessing.

/// Canonicalizes a raw dictionary token.
///
/// Strips leading and trailing whitespace and lowercases the rest
/// (Unicode-aware). Total over all inputs, including the empty string,
/// and idempotent: normalizing twice yields the same result.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_lowercases() {
        assert_eq!(normalize("  Hello\n"), "hello");
        assert_eq!(normalize("WORLD"), "world");
        assert_eq!(normalize("\tCat "), "cat");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_idempotent() {
        for raw in ["  Hello\n", "CAT ", "straße", "ÉCLAIR", "a1b!"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_unicode_lowercase() {
        assert_eq!(normalize("ÉCLAIR"), "éclair");
        assert_eq!(normalize("ПРИВЕТ"), "привет");
    }
}
