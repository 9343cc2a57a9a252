//! Key-value stores the planner data can be persisted to

use std::path::{Path, PathBuf};
use std::error::Error;
use std::collections::HashMap;
#[cfg(test)]
use std::{cell::Cell, rc::Rc};

use crate::traits::KeyValueStore;


/// A store that only lives in memory (useful for tests, or when persistence is not wanted)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), Box<dyn Error>> {
        self.items.remove(key);
        Ok(())
    }
}


/// A [`MemoryStore`] whose writes can be made to fail (e.g. to mimic a full disk) through the returned switch
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub(crate) struct FlakyStore {
    inner: MemoryStore,
    fail_writes: Rc<Cell<bool>>,
}

#[cfg(test)]
impl FlakyStore {
    pub fn new() -> (Self, Rc<Cell<bool>>) {
        let store = Self::default();
        let switch = store.fail_writes.clone();
        (store, switch)
    }

    pub fn with_items(items: &[(&str, &str)]) -> (Self, Rc<Cell<bool>>) {
        let (mut store, switch) = Self::new();
        for (key, value) in items {
            store.inner.items.insert(key.to_string(), value.to_string());
        }
        (store, switch)
    }
}

#[cfg(test)]
impl KeyValueStore for FlakyStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        if self.fail_writes.get() {
            return Err(format!("Unable to write {}: disk full", key).into());
        }
        self.inner.set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), Box<dyn Error>> {
        if self.fail_writes.get() {
            return Err(format!("Unable to remove {}: disk full", key).into());
        }
        self.inner.remove_item(key)
    }
}


/// A store that keeps every key in its own file inside a folder
#[derive(Clone, Debug, PartialEq)]
pub struct FolderStore {
    backing_folder: PathBuf,
}

impl FolderStore {
    /// Use (and create if needed) the given folder
    pub fn new(folder: &Path) -> Result<Self, Box<dyn Error>> {
        if let Err(err) = std::fs::create_dir_all(folder) {
            return Err(format!("Unable to create folder {:?}: {}", folder, err).into());
        }
        Ok(Self {
            backing_folder: PathBuf::from(folder),
        })
    }

    pub fn folder(&self) -> &Path {
        &self.backing_folder
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file_name = sanitize_filename::sanitize(key) + ".json";
        self.backing_folder.join(file_name)
    }
}

impl KeyValueStore for FolderStore {
    fn get_item(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                log::warn!("Unable to read file {:?}: {}", path, err);
                None
            },
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        let path = self.path_for(key);
        // Write aside then rename, so that a reader never sees a half-written value
        let tmp_path = path.with_extension("json.tmp");
        if let Err(err) = std::fs::write(&tmp_path, value) {
            return Err(format!("Unable to save file {:?}: {}", tmp_path, err).into());
        }
        std::fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), Box<dyn Error>> {
        let path = self.path_for(key);
        match std::fs::remove_file(&path) {
            Err(err) if err.kind() != std::io::ErrorKind::NotFound => {
                Err(format!("Unable to remove file {:?}: {}", path, err).into())
            },
            _ => Ok(()),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_store_round_trip() {
        let folder = std::env::temp_dir().join(format!("planner-store-{}", uuid::Uuid::new_v4()));
        let mut store = FolderStore::new(&folder).unwrap();

        assert_eq!(store.get_item("udb_materias"), None);
        store.set_item("udb_materias", "[]").unwrap();
        assert_eq!(store.get_item("udb_materias").as_deref(), Some("[]"));

        // A second store on the same folder sees the same data
        let other = FolderStore::new(&folder).unwrap();
        assert_eq!(other.get_item("udb_materias").as_deref(), Some("[]"));

        store.remove_item("udb_materias").unwrap();
        store.remove_item("udb_materias").unwrap();
        assert_eq!(store.get_item("udb_materias"), None);

        let _ = std::fs::remove_dir_all(&folder);
    }

    #[test]
    fn keys_cannot_escape_the_folder() {
        let folder = std::env::temp_dir().join(format!("planner-store-{}", uuid::Uuid::new_v4()));
        let store = FolderStore::new(&folder).unwrap();
        assert_eq!(store.path_for("../../etc/passwd").parent(), Some(folder.as_path()));
        let _ = std::fs::remove_dir_all(&folder);
    }
}
