//! Content collection storage
//!
//! Each editable collection persists to its own JSON file, keyed by
//! collection name. A missing, unreadable or unparseable file is not an
//! error at this layer; the caller substitutes the built-in defaults.

use crate::storage::StorageError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const PROJECTS_KEY: &str = "projects";
pub const VENTURES_KEY: &str = "ventures";
pub const SERVICES_KEY: &str = "services";
pub const TESTIMONIALS_KEY: &str = "testimonials";
pub const SKILLS_KEY: &str = "skills";

/// Every key the store persists under. Reset clears exactly these.
pub const COLLECTION_KEYS: [&str; 5] = [
    PROJECTS_KEY,
    VENTURES_KEY,
    SERVICES_KEY,
    TESTIMONIALS_KEY,
    SKILLS_KEY,
];

fn collection_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{key}.json"))
}

/// Load one collection from disk
///
/// Returns `None` when the file is absent or corrupted so the caller can
/// fall back to defaults without affecting the other collections.
pub fn load_collection<T: DeserializeOwned>(dir: &Path, key: &str) -> Option<Vec<T>> {
    let path = collection_path(dir, key);

    if !path.exists() {
        tracing::debug!("no persisted {key} collection, using defaults");
        return None;
    }

    let json = match fs::read_to_string(&path) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!("failed to read {key} collection, using defaults: {e}");
            return None;
        }
    };

    match serde_json::from_str(&json) {
        Ok(items) => {
            tracing::debug!("loaded {key} collection from disk");
            Some(items)
        }
        Err(e) => {
            tracing::warn!("failed to parse {key} collection, using defaults: {e}");
            None
        }
    }
}

/// Save one collection to disk as a JSON array
pub fn save_collection<T: Serialize>(dir: &Path, key: &str, items: &[T]) -> Result<(), StorageError> {
    fs::create_dir_all(dir)?;

    let json = serde_json::to_string_pretty(items)?;
    fs::write(collection_path(dir, key), json)?;

    tracing::debug!("saved {key} collection");
    Ok(())
}

/// Remove every persisted collection file. Used by factory reset.
pub fn clear_collections(dir: &Path) -> Result<(), StorageError> {
    for key in COLLECTION_KEYS {
        let path = collection_path(dir, key);
        if path.exists() {
            fs::remove_file(path)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::content::Testimonial;

    fn sample() -> Vec<Testimonial> {
        vec![Testimonial {
            name: "Dana Wells".into(),
            role: "CTO, Meridian".into(),
            text: "Delivered ahead of schedule.".into(),
        }]
    }

    #[test]
    fn test_save_then_load_roundtrips() {
        let tmp = tempfile::tempdir().unwrap();
        let items = sample();

        save_collection(tmp.path(), TESTIMONIALS_KEY, &items).unwrap();
        let loaded: Vec<Testimonial> = load_collection(tmp.path(), TESTIMONIALS_KEY).unwrap();

        assert_eq!(items, loaded);
    }

    #[test]
    fn test_missing_file_loads_none() {
        let tmp = tempfile::tempdir().unwrap();
        let loaded: Option<Vec<Testimonial>> = load_collection(tmp.path(), TESTIMONIALS_KEY);
        assert!(loaded.is_none());
    }

    #[test]
    fn test_corrupt_file_loads_none() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(collection_path(tmp.path(), SKILLS_KEY), "{not json").unwrap();

        let loaded: Option<Vec<Testimonial>> = load_collection(tmp.path(), SKILLS_KEY);
        assert!(loaded.is_none());
    }

    #[test]
    fn test_clear_removes_all_keys() {
        let tmp = tempfile::tempdir().unwrap();
        for key in COLLECTION_KEYS {
            save_collection(tmp.path(), key, &sample()).unwrap();
        }

        clear_collections(tmp.path()).unwrap();

        for key in COLLECTION_KEYS {
            assert!(!collection_path(tmp.path(), key).exists());
        }
    }
}
