//! The most recent activity per user, kept outside of the codec.
//!
//! Nothing in the codec or the steganography engine records anything here,
//! the caller records outcomes after a core operation returned.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::StegoError;
use crate::media::PatternChoice;
use crate::result::Result;

/// entries kept per category
pub const HISTORY_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Files,
    Patterns,
    HiddenMessages,
    ExtractedMessages,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Files,
        Category::Patterns,
        Category::HiddenMessages,
        Category::ExtractedMessages,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Files => "files",
            Category::Patterns => "patterns",
            Category::HiddenMessages => "hidden messages",
            Category::ExtractedMessages => "extracted messages",
        })
    }
}

/// Newest first, at most [`HISTORY_LIMIT`] entries per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct History {
    files: VecDeque<String>,
    patterns: VecDeque<String>,
    hidden_messages: VecDeque<String>,
    extracted_messages: VecDeque<String>,
}

impl History {
    pub fn record<S: Into<String>>(&mut self, category: Category, value: S) -> &mut Self {
        let list = self.list_mut(category);
        list.push_front(value.into());
        list.truncate(HISTORY_LIMIT);
        self
    }

    pub fn entries(&self, category: Category) -> &VecDeque<String> {
        match category {
            Category::Files => &self.files,
            Category::Patterns => &self.patterns,
            Category::HiddenMessages => &self.hidden_messages,
            Category::ExtractedMessages => &self.extracted_messages,
        }
    }

    /// the most recent pattern label that still parses
    pub fn last_pattern(&self) -> Option<PatternChoice> {
        self.patterns
            .front()
            .and_then(|label| PatternChoice::from_label(label))
    }

    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.entries(*c).is_empty())
    }

    fn list_mut(&mut self, category: Category) -> &mut VecDeque<String> {
        match category {
            Category::Files => &mut self.files,
            Category::Patterns => &mut self.patterns,
            Category::HiddenMessages => &mut self.hidden_messages,
            Category::ExtractedMessages => &mut self.extracted_messages,
        }
    }
}

/// Key-value persistence of one [`History`] per identity.
pub trait HistoryStore {
    fn load(&self, identity: &str) -> Result<History>;

    fn save(&mut self, identity: &str, history: &History) -> Result<()>;

    /// load, record and save in one go, returns the updated history
    fn record(&mut self, identity: &str, category: Category, value: &str) -> Result<History> {
        let mut history = self.load(identity)?;
        history.record(category, value);
        self.save(identity, &history)?;

        Ok(history)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    histories: HashMap<String, History>,
}

impl HistoryStore for MemoryStore {
    fn load(&self, identity: &str) -> Result<History> {
        Ok(self.histories.get(identity).cloned().unwrap_or_default())
    }

    fn save(&mut self, identity: &str, history: &History) -> Result<()> {
        self.histories.insert(identity.to_owned(), history.clone());
        Ok(())
    }
}

/// All histories in one JSON document, keyed by identity.
///
/// A missing file is an empty store. The whole document is rewritten on every save,
/// concurrent writers are not coordinated.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

type Document = BTreeMap<String, History>;

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Document> {
        match File::open(&self.path) {
            Ok(f) => Ok(serde_json::from_reader(BufReader::new(f))?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no history at {:?} yet", self.path);
                Ok(Document::new())
            }
            Err(source) => Err(StegoError::ReadError { source }),
        }
    }
}

impl HistoryStore for JsonFileStore {
    fn load(&self, identity: &str) -> Result<History> {
        Ok(self
            .read_document()?
            .remove(identity)
            .unwrap_or_default())
    }

    fn save(&mut self, identity: &str, history: &History) -> Result<()> {
        let mut document = self.read_document()?;
        document.insert(identity.to_owned(), history.clone());

        let f = File::create(&self.path).map_err(|source| StegoError::WriteError { source })?;
        let mut writer = BufWriter::new(f);
        serde_json::to_writer_pretty(&mut writer, &document)?;
        writer
            .flush()
            .map_err(|source| StegoError::WriteError { source })
    }
}
