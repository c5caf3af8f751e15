//! Tooling & Integration Layer
//!
//! Command-line host for the gallery viewer: one-shot rendering commands, an
//! interactive browse session, and payload collection.

pub mod cli;
pub mod format;
pub mod session;

pub use cli::{Cli, CliContext, Commands, PayloadArgs};
pub use session::{Session, SessionCommand};
