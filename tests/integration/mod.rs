//! Integration tests for the gallery viewer

mod cli_contracts;
mod properties;
mod scenarios;
