// src/store.rs
//
// Flat-file persistence for the set of already-shown message UUIDs, one per
// line, UTF-8, no header. All failures are soft: a load that goes wrong in
// any way yields an empty set, a save that goes wrong is abandoned. Neither
// ever surfaces an error to the caller.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::StoreError;

pub type SeenSet = HashSet<Uuid>;

/// Load the seen set. Missing file means first run (empty set, debug log);
/// any read error or malformed line drops the whole file (empty set, warn).
/// Partial recovery is deliberately not attempted.
pub fn load(path: &Path) -> SeenSet {
    match try_load(path) {
        Ok(set) => set,
        Err(StoreError::NotFound { path }) => {
            debug!(path = %path.display(), "seen file not found, starting empty");
            SeenSet::new()
        }
        Err(e) => {
            warn!(error = %e, "unable to read seen file, starting empty");
            SeenSet::new()
        }
    }
}

/// Persist the seen set, creating the parent directory if needed. Write
/// errors are logged and swallowed; persistence must never break the run.
pub fn save(path: &Path, seen: &SeenSet) {
    if let Err(e) = try_save(path, seen) {
        warn!(error = %e, "could not save seen messages");
    }
}

fn try_load(path: &Path) -> Result<SeenSet, StoreError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            StoreError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            StoreError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let mut set = SeenSet::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let id = Uuid::parse_str(line).map_err(|source| StoreError::BadLine {
            path: path.to_path_buf(),
            line: line.to_string(),
            source,
        })?;
        set.insert(id);
    }
    Ok(set)
}

fn try_save(path: &Path, seen: &SeenSet) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut content = String::new();
    for id in seen {
        content.push_str(&id.to_string());
        content.push('\n');
    }
    // Direct overwrite; atomicity is not a goal here.
    fs::write(path, content).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uuid(s: &str) -> Uuid {
        s.parse().unwrap()
    }

    #[test]
    fn missing_file_yields_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let set = load(&dir.path().join("nope.txt"));
        assert!(set.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("seen-messages.txt");
        let mut set = SeenSet::new();
        set.insert(uuid("11111111-1111-1111-1111-111111111111"));
        set.insert(uuid("22222222-2222-2222-2222-222222222222"));
        save(&path, &set);
        assert_eq!(load(&path), set);
    }

    #[test]
    fn blank_lines_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seen.txt");
        fs::write(
            &path,
            "\n11111111-1111-1111-1111-111111111111\n\n   \n",
        )
        .unwrap();
        let set = load(&path);
        assert_eq!(set.len(), 1);
        assert!(set.contains(&uuid("11111111-1111-1111-1111-111111111111")));
    }

    #[test]
    fn malformed_line_drops_the_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seen.txt");
        fs::write(
            &path,
            "11111111-1111-1111-1111-111111111111\nnot-a-uuid\n",
        )
        .unwrap();
        // All-or-nothing: one bad line means an empty set, not a partial one.
        assert!(load(&path).is_empty());
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("seen.txt");
        let mut set = SeenSet::new();
        set.insert(uuid("33333333-3333-3333-3333-333333333333"));
        save(&path, &set);
        assert!(path.exists());
    }
}
