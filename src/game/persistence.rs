//! Saving and loading the game record
//!
//! The record is the camelCase JSON form of [`GameState`]. File writes go
//! through a temp file in the same directory and are renamed into place, so a
//! crash never leaves a half-written save behind.

use super::state::GameState;
use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed save: {0}")]
    Json(#[from] serde_json::Error),
}

/// Storage for the single saved game
pub trait StateStore {
    /// Load the saved game, `Ok(None)` if there is none
    ///
    /// # Errors
    ///
    /// Returns an error if a save exists but cannot be read or parsed.
    fn load(&self) -> Result<Option<GameState>, PersistError>;

    /// Replace the saved game
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    fn save(&self, state: &GameState) -> Result<(), PersistError>;
}

/// JSON file on disk
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for FileStore {
    fn load(&self) -> Result<Option<GameState>, PersistError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let state = serde_json::from_reader(BufReader::new(file))?;
        Ok(Some(state))
    }

    fn save(&self, state: &GameState) -> Result<(), PersistError> {
        let parent = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let temp = NamedTempFile::new_in(parent)?;
        {
            let mut writer = BufWriter::new(&temp);
            serde_json::to_writer(&mut writer, state)?;
            writer.flush()?;
        }
        temp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// In-memory store, holding the serialized record
#[derive(Debug, Default)]
pub struct MemoryStore {
    record: RefCell<Option<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw JSON of the current save
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.record.borrow().clone()
    }

    /// Overwrite the raw JSON, valid or not
    pub fn set_raw(&self, json: impl Into<String>) {
        *self.record.borrow_mut() = Some(json.into());
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<Option<GameState>, PersistError> {
        self.record
            .borrow()
            .as_deref()
            .map(serde_json::from_str::<GameState>)
            .transpose()
            .map_err(PersistError::from)
    }

    fn save(&self, state: &GameState) -> Result<(), PersistError> {
        let json = serde_json::to_string(state)?;
        *self.record.borrow_mut() = Some(json);
        Ok(())
    }
}
