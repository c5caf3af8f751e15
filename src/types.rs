//! Core types for the gallery viewer.

use serde::{Deserialize, Serialize};

/// A single file in the gallery: a `/`-separated path and its textual content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: String,
    pub content: String,
}

impl FileRecord {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Gallery payload as produced by the page generator: `{ "files": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    #[serde(default)]
    pub files: Vec<FileRecord>,
}

impl Payload {
    pub fn new(files: Vec<FileRecord>) -> Self {
        Self { files }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
