//! Canonical letter keys for grouping words.

/// Returns the word's characters sorted into non-decreasing code-point
/// order, retaining duplicates.
pub fn sorted_letters(word: &str) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    letters.sort_unstable();
    letters.into_iter().collect()
}

/// Computes the `(unique_key, sorted_form)` pair for a word.
///
/// The sorted form is the word's letters in non-decreasing order. The
/// unique key collapses runs of duplicate letters in the sorted form,
/// leaving the sorted sequence of distinct letters: two words share a key
/// exactly when they use the same set of distinct letters, ignoring
/// repetition and order. The empty word yields `("", "")`.
pub fn sorted_unique(word: &str) -> (String, String) {
    let sorted = sorted_letters(word);

    let mut unique = String::with_capacity(sorted.len());
    let mut last: Option<char> = None;
    for letter in sorted.chars() {
        if last != Some(letter) {
            unique.push(letter);
            last = Some(letter);
        }
    }

    (unique, sorted)
}
