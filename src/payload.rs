//! Gallery payload loading and collection.
//!
//! Payloads are `{ "files": [ { "path", "content" } ] }` documents. A payload
//! that cannot be parsed degrades to an empty gallery at the viewer boundary;
//! the error is still surfaced to the operator through logging.

use crate::error::ApiError;
use crate::types::{FileRecord, Payload};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

pub fn parse(json: &str) -> Result<Payload, ApiError> {
    serde_json::from_str(json)
        .map_err(|e| ApiError::PayloadError(format!("Failed to parse gallery data: {}", e)))
}

/// Parse `json`, falling back to an empty payload on failure.
pub fn parse_or_empty(json: &str) -> Payload {
    match parse(json) {
        Ok(payload) => payload,
        Err(e) => {
            warn!("{}; starting with an empty gallery", e);
            Payload::default()
        }
    }
}

pub fn read(path: &Path) -> Result<Payload, ApiError> {
    let json = fs::read_to_string(path).map_err(|e| {
        ApiError::PayloadError(format!("Failed to read payload {}: {}", path.display(), e))
    })?;
    parse(&json)
}

pub fn write(payload: &Payload, path: &Path) -> Result<(), ApiError> {
    let json = to_json(payload)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, json)?;
    Ok(())
}

pub fn to_json(payload: &Payload) -> Result<String, ApiError> {
    serde_json::to_string_pretty(payload)
        .map_err(|e| ApiError::PayloadError(format!("Failed to serialize payload: {}", e)))
}

/// Collect every file under `dir` into a payload.
///
/// Entries whose name starts with `.` are skipped at every depth, along with
/// everything beneath them. Paths are relative and `/`-separated, in name
/// order. Files that are not UTF-8 text get a placeholder noting their size.
pub fn collect_dir(dir: &Path) -> Result<Payload, ApiError> {
    let root = dunce::canonicalize(dir).map_err(|e| {
        ApiError::PayloadError(format!("Failed to resolve {}: {}", dir.display(), e))
    })?;

    let mut files = Vec::new();
    let walker = WalkDir::new(&root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !entry.file_name().to_string_lossy().starts_with('.'));

    for entry in walker {
        let entry = entry.map_err(|e| {
            ApiError::PayloadError(format!("Failed to walk {}: {}", root.display(), e))
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(&root).map_err(|e| {
            ApiError::PayloadError(format!("Unexpected path outside {}: {}", root.display(), e))
        })?;
        let path = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        let bytes = fs::read(entry.path())?;
        let content = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                let size = e.as_bytes().len();
                debug!(path = %path, size, "Collected binary file as placeholder");
                format!("[Binary file: {} bytes]", size)
            }
        };
        files.push(FileRecord { path, content });
    }

    debug!(root = %root.display(), files = files.len(), "Collected gallery files");
    Ok(Payload::new(files))
}
