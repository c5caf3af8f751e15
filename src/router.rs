//! Hash Router
//!
//! Maps the selected path to and from the location fragment `#file=<path>`.
//! The path is percent-encoded as one opaque component with the same rules as
//! `encodeURIComponent`, so links are interchangeable with the browser viewer.

use crate::tree::TreeNode;
use crate::types::FileRecord;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::debug;

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const FILE_KEY: &str = "file=";

/// Encode `path` as a location fragment, including the leading `#`.
pub fn encode_fragment(path: &str) -> String {
    format!("#{}{}", FILE_KEY, utf8_percent_encode(path, COMPONENT))
}

/// Decode a fragment (with or without the leading `#`).
///
/// Any shape other than `file=<path>` means no path was requested, as does an
/// encoding that does not decode to UTF-8. `file=` decodes to the empty
/// path, which is a valid node name, so every fragment produced by
/// [`encode_fragment`] reads back.
pub fn parse_fragment(hash: &str) -> Option<String> {
    let content = hash.strip_prefix('#').unwrap_or(hash);
    let encoded = content.strip_prefix(FILE_KEY)?;
    let decoded = percent_decode_str(encoded).decode_utf8().ok()?;
    Some(decoded.into_owned())
}

/// Browser location seam.
pub trait Location {
    /// Current fragment including `#`, or empty.
    fn hash(&self) -> String;
    /// Overwrite the current history entry's fragment.
    fn replace_hash(&mut self, hash: &str);
    /// Navigate to a new fragment, adding a history entry.
    fn push_hash(&mut self, hash: &str);
}

/// In-memory location with a back/forward history.
#[derive(Debug, Clone)]
pub struct MemoryLocation {
    entries: Vec<String>,
    cursor: usize,
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryLocation {
    pub fn new() -> Self {
        Self::with_hash("")
    }

    pub fn with_hash(hash: &str) -> Self {
        Self {
            entries: vec![hash.to_string()],
            cursor: 0,
        }
    }

    /// Go back one entry; false at the start of history.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Go forward one entry; false at the end of history.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn history_len(&self) -> usize {
        self.entries.len()
    }
}

impl Location for MemoryLocation {
    fn hash(&self) -> String {
        self.entries[self.cursor].clone()
    }

    fn replace_hash(&mut self, hash: &str) {
        self.entries[self.cursor] = hash.to_string();
    }

    fn push_hash(&mut self, hash: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(hash.to_string());
        self.cursor += 1;
    }
}

/// Initial selection rule when the location names no valid file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultFilePolicy {
    /// Matched case-insensitively against the whole path or its last segment.
    /// Empty means no preference.
    pub file_name: String,
}

impl Default for DefaultFilePolicy {
    fn default() -> Self {
        Self::new("readme.md")
    }
}

impl DefaultFilePolicy {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into().to_lowercase(),
        }
    }

    /// First record matching the file name, else the first record in input
    /// order. Records that do not resolve to a file node are skipped.
    pub fn choose<'a>(&self, root: &TreeNode, records: &'a [FileRecord]) -> Option<&'a str> {
        let resolvable = |record: &&FileRecord| root.find_file(&record.path).is_some();
        let preferred = if self.file_name.is_empty() {
            None
        } else {
            let suffix = format!("/{}", self.file_name);
            records.iter().filter(resolvable).find(|record| {
                let lower = record.path.to_lowercase();
                lower == self.file_name || lower.ends_with(&suffix)
            })
        };
        preferred
            .or_else(|| records.iter().find(|record| resolvable(record)))
            .map(|record| record.path.as_str())
    }
}

/// Reads and writes the selected path through a [`Location`].
#[derive(Debug)]
pub struct HashRouter<L: Location> {
    location: L,
}

impl<L: Location> HashRouter<L> {
    pub fn new(location: L) -> Self {
        Self { location }
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    pub fn parse_current_hash(&self) -> Option<String> {
        parse_fragment(&self.location.hash())
    }

    /// Path to select on load: the fragment's path when it names a file,
    /// otherwise the default-file policy. `None` only for an empty gallery.
    pub fn initial_selection(
        &self,
        root: &TreeNode,
        records: &[FileRecord],
        policy: &DefaultFilePolicy,
    ) -> Option<String> {
        if let Some(path) = self.parse_current_hash() {
            if root.find_file(&path).is_some() {
                return Some(path);
            }
            debug!(path = %path, "Location names no file; applying default-file policy");
        }
        policy.choose(root, records).map(str::to_string)
    }

    /// Handle an external location change. `apply` runs only when the
    /// fragment names an existing file; otherwise nothing happens.
    pub fn on_external_change<R>(
        &self,
        root: &TreeNode,
        apply: impl FnOnce(String) -> R,
    ) -> Option<R> {
        let path = self.parse_current_hash()?;
        if root.find_file(&path).is_none() {
            debug!(path = %path, "Ignoring location change to unknown path");
            return None;
        }
        Some(apply(path))
    }

    /// Reflect `path` into the location without adding a history entry.
    /// Returns false when the fragment already matched.
    pub fn reflect(&mut self, path: &str) -> bool {
        let hash = encode_fragment(path);
        if self.location.hash() == hash {
            return false;
        }
        self.location.replace_hash(&hash);
        true
    }
}
