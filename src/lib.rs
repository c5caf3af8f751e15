//! Code Gallery: browsable file gallery viewer core
//!
//! Reconstructs a directory hierarchy from a flat list of file records, renders
//! it as a collapsible tree, and keeps the content panel, the location fragment
//! and keyboard focus synchronized to a single selected file.

pub mod config;
pub mod error;
pub mod gallery;
pub mod keyboard;
pub mod logging;
pub mod panel;
pub mod payload;
pub mod router;
pub mod selection;
pub mod tooling;
pub mod tree;
pub mod types;
pub mod views;

pub use error::{ApiError, SelectError};
pub use gallery::{Gallery, Message, Outcome};
pub use types::{FileRecord, Payload};
