//! Durable per-window geometry.
//!
//! All records live in one JSON object under a single key of a host-provided
//! key-value area. The aggregate is re-read on every access so a partially
//! applied earlier write never leaves stale state in memory.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::layout::{DockZone, FloatRect};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Volatile store. Clones share the same map, which lets a test drop a
/// manager and build a new one over the same "durable" area.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// One `<key>.json` file per key inside `dir`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{name}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedGeometry {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
    #[serde(default)]
    pub docked: Option<DockZone>,
    #[serde(
        rename = "preDockState",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub pre_dock: Option<FloatRect>,
}

impl PersistedGeometry {
    pub fn rect(&self) -> FloatRect {
        FloatRect::new(self.x, self.y, self.width, self.height)
    }
}

pub type PersistedState = BTreeMap<String, PersistedGeometry>;

pub struct PersistenceStore {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl std::fmt::Debug for PersistenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceStore")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl PersistenceStore {
    pub fn new(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn try_load_all(&self) -> Result<PersistedState> {
        match self.store.get(&self.key)? {
            Some(text) if !text.trim().is_empty() => Ok(serde_json::from_str(&text)?),
            _ => Ok(PersistedState::new()),
        }
    }

    fn try_write_all(&mut self, state: &PersistedState) -> Result<()> {
        let text = serde_json::to_string(state)?;
        self.store.set(&self.key, &text)
    }

    /// Aggregate read; a corrupt or unreadable record is treated as empty.
    pub fn load_all(&self) -> PersistedState {
        self.try_load_all().unwrap_or_else(|err| {
            tracing::warn!(key = %self.key, error = %err, "cannot read persisted windows");
            PersistedState::new()
        })
    }

    pub fn load(&self, id: &str) -> Option<PersistedGeometry> {
        self.load_all().get(id).copied()
    }

    pub fn save(&mut self, id: &str, record: PersistedGeometry) {
        let mut state = self.load_all();
        state.insert(id.to_string(), record);
        if let Err(err) = self.try_write_all(&state) {
            tracing::warn!(window_id = %id, error = %err, "cannot persist window geometry");
        }
    }

    pub fn remove(&mut self, id: &str) {
        let mut state = self.load_all();
        if state.remove(id).is_none() {
            return;
        }
        if let Err(err) = self.try_write_all(&state) {
            tracing::warn!(window_id = %id, error = %err, "cannot drop persisted window");
        }
    }

    pub fn clear(&mut self) {
        if let Err(err) = self.store.remove(&self.key) {
            tracing::warn!(key = %self.key, error = %err, "cannot clear persisted windows");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(x: i32) -> PersistedGeometry {
        PersistedGeometry {
            x,
            y: 20,
            width: 400,
            height: 300,
            docked: None,
            pre_dock: None,
        }
    }

    #[test]
    fn save_load_remove_through_aggregate_key() {
        let memory = MemoryStore::new();
        let mut store = PersistenceStore::new(Box::new(memory.clone()), "wm");
        store.save("a", record(1));
        store.save("b", record(2));
        assert_eq!(store.load("a"), Some(record(1)));
        assert_eq!(store.load_all().len(), 2);
        store.remove("a");
        assert_eq!(store.load("a"), None);
        assert!(memory.raw("wm").is_some());
        store.clear();
        assert!(memory.raw("wm").is_none());
    }

    #[test]
    fn wire_format_uses_pre_dock_state_name() {
        let rec = PersistedGeometry {
            docked: Some(DockZone::TopLeft),
            pre_dock: Some(FloatRect::new(5, 6, 300, 200)),
            ..record(0)
        };
        let json = serde_json::to_value(rec).unwrap();
        assert_eq!(json["docked"], "top-left");
        assert_eq!(json["preDockState"]["width"], 300);

        let plain = serde_json::to_value(record(0)).unwrap();
        assert!(plain["docked"].is_null());
        assert!(plain.get("preDockState").is_none());
    }

    #[test]
    fn corrupt_aggregate_reads_as_empty() {
        let mut memory = MemoryStore::new();
        memory.set("wm", "{ broken").unwrap();
        let mut store = PersistenceStore::new(Box::new(memory), "wm");
        assert!(store.load_all().is_empty());
        store.save("a", record(3));
        assert_eq!(store.load("a"), Some(record(3)));
    }

    #[test]
    fn file_store_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut files = FileStore::new(dir.path().join("state"));
        assert_eq!(files.get("panels").unwrap(), None);
        files.set("panels", "{}").unwrap();
        assert_eq!(files.get("panels").unwrap().as_deref(), Some("{}"));
        files.remove("panels").unwrap();
        files.remove("panels").unwrap();
        assert_eq!(files.get("panels").unwrap(), None);
    }
}
