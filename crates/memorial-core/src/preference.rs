//! The one durable setting: the landing page theme.
//!
//! Stored under the key `theme` with the values `light` / `dark` in a redb
//! table. [`MemoryPreferences`] stands in when the database cannot be
//! opened.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use redb::{Database, ReadableTable, TableDefinition};

use crate::error::MemorialResult;

const PREFERENCES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("preferences");

/// Key of the theme preference.
pub const THEME_KEY: &str = "theme";

/// A string key/value preference store.
pub trait PreferenceBackend: Send + Sync {
    fn get(&self, key: &str) -> MemorialResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> MemorialResult<()>;
}

/// Preferences persisted in a redb database.
#[derive(Clone)]
pub struct PreferenceStore {
    db: Arc<RwLock<Database>>,
}

impl PreferenceStore {
    /// Open or create the database at `path`, creating parent directories.
    pub fn open(path: impl AsRef<Path>) -> MemorialResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFERENCES_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }
}

impl PreferenceBackend for PreferenceStore {
    fn get(&self, key: &str) -> MemorialResult<Option<String>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PREFERENCES_TABLE)?;
        let value = table.get(key)?.map(|v| v.value().to_string());
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> MemorialResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

/// In-memory preferences, lost on exit.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: Mutex<HashMap<String, String>>,
}

impl PreferenceBackend for MemoryPreferences {
    fn get(&self, key: &str) -> MemorialResult<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> MemorialResult<()> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Landing page color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Anything other than `light` reads as dark.
    pub fn parse(value: &str) -> Self {
        if value == "light" {
            ThemePreference::Light
        } else {
            ThemePreference::Dark
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Class put on the landing page root.
    pub fn root_class(self) -> &'static str {
        match self {
            ThemePreference::Light => "theme-light",
            ThemePreference::Dark => "theme-dark",
        }
    }

    /// Read the stored theme, defaulting to dark when unset or unreadable.
    pub fn load(backend: &dyn PreferenceBackend) -> Self {
        match backend.get(THEME_KEY) {
            Ok(Some(value)) => Self::parse(&value),
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!("Failed to read theme preference: {}", e);
                Self::default()
            }
        }
    }

    pub fn save(self, backend: &dyn PreferenceBackend) -> MemorialResult<()> {
        backend.set(THEME_KEY, self.as_str())?;
        tracing::info!(theme = self.as_str(), "theme preference saved");
        Ok(())
    }
}
