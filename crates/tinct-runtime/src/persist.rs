#![forbid(unsafe_code)]

//! Theme preference persistence.
//!
//! One small record survives restarts: the active theme id and mode. Store
//! failures are never fatal to the applier; it logs and falls back to
//! defaults.

use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::{error, fmt, fs, io};

use serde::{Deserialize, Serialize};

use crate::mode::ThemeMode;

/// The persisted preference record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPreference {
    /// Id of the active theme.
    pub theme_id: String,
    /// The selected mode.
    pub mode: ThemeMode,
}

/// A preference store failed to read or write.
#[derive(Debug)]
pub enum PersistError {
    /// Filesystem failure.
    Io(io::Error),
    /// The stored record did not parse.
    Format(serde_json::Error),
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistError::Io(_) => write!(f, "preference store I/O failed"),
            PersistError::Format(_) => write!(f, "stored preference is malformed"),
        }
    }
}

impl error::Error for PersistError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            PersistError::Io(err) => Some(err),
            PersistError::Format(err) => Some(err),
        }
    }
}

impl From<io::Error> for PersistError {
    fn from(err: io::Error) -> Self {
        PersistError::Io(err)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(err: serde_json::Error) -> Self {
        PersistError::Format(err)
    }
}

/// Loads and saves the preference record.
pub trait PreferenceStore {
    /// The stored record, or `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<StoredPreference>, PersistError>;

    /// Persist the record, replacing any previous one.
    fn save(&self, preference: &StoredPreference) -> Result<(), PersistError>;
}

/// JSON-file-backed store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PreferenceStore for JsonFileStore {
    fn load(&self) -> Result<Option<StoredPreference>, PersistError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&json)?))
    }

    fn save(&self, preference: &StoredPreference) -> Result<(), PersistError> {
        let json = serde_json::to_string_pretty(preference)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store, with a save counter for idempotence tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<StoredPreference>>,
    saves: Cell<usize>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with one record.
    #[must_use]
    pub fn with(preference: StoredPreference) -> Self {
        Self {
            slot: RefCell::new(Some(preference)),
            saves: Cell::new(0),
        }
    }

    /// Number of `save` calls since construction.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<StoredPreference>, PersistError> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, preference: &StoredPreference) -> Result<(), PersistError> {
        self.saves.set(self.saves.get() + 1);
        *self.slot.borrow_mut() = Some(preference.clone());
        Ok(())
    }
}

/// A store whose writes always fail. Exercises the non-fatal failure path.
#[cfg(test)]
pub(crate) struct FailingStore;

#[cfg(test)]
impl PreferenceStore for FailingStore {
    fn load(&self) -> Result<Option<StoredPreference>, PersistError> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied").into())
    }

    fn save(&self, _preference: &StoredPreference) -> Result<(), PersistError> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied").into())
    }
}
