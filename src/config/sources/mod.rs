//! Configuration sources.

pub mod environment;
pub mod global_file;
pub mod local_file;
