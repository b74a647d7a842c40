//! Reading and writing pipeline inputs and outputs.
//!
//! All persistence goes through this module so the filter and grouping
//! stages stay pure. Failures carry the offending path; the caller
//! decides whether to abort the run.

use crate::error::{Result, WordforgeError};
use crate::group::WordGroups;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Reads a raw text source, one word per line.
///
/// Lines are returned verbatim; normalization happens downstream.
pub fn read_raw_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|source| WordforgeError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| WordforgeError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        lines.push(line);
    }

    Ok(lines)
}

/// Reads a previously written clean word list, skipping empty lines.
pub fn read_word_list(path: &Path) -> Result<Vec<String>> {
    let words = read_raw_lines(path)?
        .into_iter()
        .filter(|line| !line.is_empty())
        .collect();
    Ok(words)
}

/// Writes a word list as newline-joined text, one word per line.
pub fn write_word_list(path: &Path, words: &[String]) -> Result<()> {
    let sink_err = |source| WordforgeError::SinkUnwritable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(sink_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(words.join("\n").as_bytes()).map_err(sink_err)?;
    writer.flush().map_err(sink_err)?;

    Ok(())
}

/// Writes the letter-group map as a JSON object.
///
/// Keys appear verbatim as member names in first-occurrence order; each
/// group is an array of two-element `[sorted_form, word]` arrays.
pub fn write_groups(path: &Path, groups: &WordGroups) -> Result<()> {
    let json = serde_json::to_string(groups)?;

    std::fs::write(path, json).map_err(|source| WordforgeError::SinkUnwritable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}

/// Reads a letter-group map written by [`write_groups`], preserving the
/// document's key order.
pub fn read_groups(path: &Path) -> Result<WordGroups> {
    let file = File::open(path).map_err(|source| WordforgeError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let groups = serde_json::from_reader(BufReader::new(file))?;
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_word_list_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("clean_dictionary.txt");
        let words = vec!["cat".to_string(), "tea".to_string(), "tree".to_string()];

        write_word_list(&path, &words).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "cat\ntea\ntree");
        assert_eq!(read_word_list(&path).unwrap(), words);
    }

    #[test]
    fn test_read_word_list_skips_empty_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("clean_dictionary.txt");
        std::fs::write(&path, "cat\n\ntea\n").unwrap();

        assert_eq!(read_word_list(&path).unwrap(), ["cat", "tea"]);
    }

    #[test]
    fn test_missing_source_is_fatal_with_path() {
        let err = read_raw_lines(Path::new("no/such/dictionary.txt")).unwrap_err();
        assert!(matches!(err, WordforgeError::SourceUnavailable { .. }));
        assert!(err.to_string().contains("no/such/dictionary.txt"));
    }

    #[test]
    fn test_unwritable_sink_is_fatal_with_path() {
        let words = vec!["cat".to_string()];
        let err = write_word_list(Path::new("no/such/dir/clean.txt"), &words).unwrap_err();
        assert!(matches!(err, WordforgeError::SinkUnwritable { .. }));
    }

    #[test]
    fn test_groups_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sorted_uniques.json");
        let groups = WordGroups::from_words(["tea", "eat", "tree"]);

        write_groups(&path, &groups).unwrap();
        let reloaded = read_groups(&path).unwrap();

        assert_eq!(reloaded, groups);
        assert_eq!(reloaded.keys().collect::<Vec<_>>(), ["aet", "ert"]);
    }
}
