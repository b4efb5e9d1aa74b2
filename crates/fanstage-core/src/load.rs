//! JSON loading for letter collections and platform history

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{Letter, PlatformHistoryEntry, Result};

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load a JSON array of letters
pub fn load_letters(path: impl AsRef<Path>) -> Result<Vec<Letter>> {
    load_json(path.as_ref())
}

/// Load a single letter object
pub fn load_letter(path: impl AsRef<Path>) -> Result<Letter> {
    load_json(path.as_ref())
}

/// Load a JSON array of platform history entries
pub fn load_history(path: impl AsRef<Path>) -> Result<Vec<PlatformHistoryEntry>> {
    load_json(path.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CoreError, PlatformId};

    #[test]
    fn test_load_letters_and_history() {
        let dir = tempfile::tempdir().unwrap();
        let letters_path = dir.path().join("letters.json");
        std::fs::write(
            &letters_path,
            r#"[{"id":"a","trackCount":2},{"id":"b","playCount":9}]"#,
        )
        .unwrap();
        let letters = load_letters(&letters_path).unwrap();
        assert_eq!(letters.len(), 2);
        assert_eq!(letters[1].play_count(), 9);

        let history_path = dir.path().join("history.json");
        std::fs::write(&history_path, r#"[{"platform":"apple","count":4}]"#).unwrap();
        let history = load_history(&history_path).unwrap();
        assert_eq!(history[0].platform, PlatformId::Apple);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_letter(dir.path().join("missing.json")),
            Err(CoreError::Io(_))
        ));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{not json").unwrap();
        assert!(matches!(load_letter(&bad), Err(CoreError::Serialization(_))));
    }
}
