//! Session persistence.
//!
//! A session is stored under three independent keys: the raw document, the
//! serialized schema model, and the collapse map. Each key is read on its
//! own; a missing key means the built-in default, and a key that cannot be
//! decoded is logged, dropped and treated as missing.

use crate::models::SchemaModel;
use crate::services::session::{CollapseMap, EditorSession};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Logical keys of the session store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// Raw template text
    Document,
    /// Serialized schema model
    Schema,
    /// Collapse flags of the front end
    Collapsed,
}

impl StoreKey {
    /// Every key, in load order.
    pub const ALL: [Self; 3] = [Self::Document, Self::Schema, Self::Collapsed];

    /// Stable name of the key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Schema => "schema",
            Self::Collapsed => "collapsed",
        }
    }

    const fn file_name(self) -> &'static str {
        match self {
            Self::Document => "document.liquid",
            Self::Schema => "schema.json",
            Self::Collapsed => "collapsed.json",
        }
    }
}

/// Key-value storage for session snapshots.
pub trait SessionStore {
    /// Reads a key; `Ok(None)` when it was never written.
    fn read(&self, key: StoreKey) -> Result<Option<String>>;

    /// Writes a key, replacing any previous value.
    fn write(&mut self, key: StoreKey, value: &str) -> Result<()>;

    /// Deletes a key. Deleting a missing key is not an error.
    fn remove(&mut self, key: StoreKey) -> Result<()>;
}

/// Store keeping one file per key in a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the store files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: StoreKey) -> PathBuf {
        self.dir.join(key.file_name())
    }
}

impl SessionStore for FileStore {
    fn read(&self, key: StoreKey) -> Result<Option<String>> {
        let path = self.path(key);
        if !path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&path)
            .map(Some)
            .with_context(|| format!("Failed to read session file: {}", path.display()))
    }

    /// Uses temp file + rename so a snapshot is never half written.
    fn write(&mut self, key: StoreKey, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).with_context(|| {
            format!("Failed to create session directory: {}", self.dir.display())
        })?;

        let path = self.path(key);
        let temp_path = path.with_extension("tmp");

        fs::write(&temp_path, value).with_context(|| {
            format!("Failed to write temp session file: {}", temp_path.display())
        })?;
        fs::rename(&temp_path, &path).with_context(|| {
            format!("Failed to rename temp session file to: {}", path.display())
        })?;

        Ok(())
    }

    fn remove(&mut self, key: StoreKey) -> Result<()> {
        let path = self.path(key);
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove session file: {}", path.display()))?;
        }
        Ok(())
    }
}

/// In-memory store, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<StoreKey, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn read(&self, key: StoreKey) -> Result<Option<String>> {
        Ok(self.entries.get(&key).cloned())
    }

    fn write(&mut self, key: StoreKey, value: &str) -> Result<()> {
        self.entries.insert(key, value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: StoreKey) -> Result<()> {
        self.entries.remove(&key);
        Ok(())
    }
}

/// Loads a session, falling back to defaults key by key.
///
/// # Errors
///
/// Only I/O failures of the store are errors; missing or corrupt entries are not.
pub fn load_session(store: &mut impl SessionStore) -> Result<EditorSession> {
    let document = store.read(StoreKey::Document)?.unwrap_or_default();
    let schema: SchemaModel = read_json(store, StoreKey::Schema)?.unwrap_or_default();
    let collapsed: CollapseMap = read_json(store, StoreKey::Collapsed)?.unwrap_or_default();

    tracing::debug!(
        document_bytes = document.len(),
        settings = schema.settings.len(),
        "loaded session"
    );

    Ok(EditorSession::new(document, schema, collapsed))
}

fn read_json<T: DeserializeOwned>(store: &mut impl SessionStore, key: StoreKey) -> Result<Option<T>> {
    let Some(raw) = store.read(key)? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::warn!(key = key.as_str(), error = %e, "discarding unreadable session entry");
            store.remove(key)?;
            Ok(None)
        }
    }
}

/// Writes all three keys of `session`.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn save_session(store: &mut impl SessionStore, session: &EditorSession) -> Result<()> {
    let schema = serde_json::to_string(&session.schema).context("Failed to serialize schema")?;
    let collapsed =
        serde_json::to_string(&session.collapsed).context("Failed to serialize collapse map")?;

    store.write(StoreKey::Document, &session.document)?;
    store.write(StoreKey::Schema, &schema)?;
    store.write(StoreKey::Collapsed, &collapsed)?;

    tracing::info!(settings = session.schema.settings.len(), "saved session");
    Ok(())
}
