pub mod hide;
pub mod history;
pub mod preview;
pub mod synthesize;
pub mod unveil;
pub mod unveil_raw;

use std::path::{Path, PathBuf};

use log::warn;
use stegobmp_core::history::{Category, History, HistoryStore, JsonFileStore};

/// Who is working and where their history lives, handed to every command explicitly.
pub struct Session {
    store: Option<JsonFileStore>,
    user: String,
}

impl Session {
    pub fn new(history: Option<PathBuf>, user: String) -> Self {
        Self {
            store: history.map(JsonFileStore::new),
            user,
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn store(&self) -> Option<&JsonFileStore> {
        self.store.as_ref()
    }

    /// the recorded history, empty when no history file is configured or readable
    pub fn history(&self) -> History {
        let Some(store) = &self.store else {
            return History::default();
        };
        store.load(&self.user).unwrap_or_else(|e| {
            warn!("Could not read history from {:?}: {e}", store.path());
            History::default()
        })
    }

    /// A broken history never fails the command that produced the entry.
    pub fn record(&mut self, category: Category, value: &str) {
        let Some(store) = self.store.as_mut() else {
            return;
        };
        if let Err(e) = store.record(&self.user, category, value) {
            warn!("Could not record {category} in {:?}: {e}", store.path());
        }
    }

    pub fn record_file(&mut self, file: &Path) {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.display().to_string());
        self.record(Category::Files, &name);
    }
}
