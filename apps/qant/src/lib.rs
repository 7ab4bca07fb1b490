//! qant core library.
//!
//! Validates that Quarto documents declare only categories listed in a
//! project allow-list (`_qant.yml`).
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Project discovery, allow-list loading, effective settings.
//! - `inspect`: The `Inspector` seam and the subprocess implementation.
//! - `validate`: Pure category membership check.
//! - `lint`: Runs config -> inspect -> validate.
//! - `models`: Allow-list, inspection result and report structs.
//! - `output`: Human/JSON printers.
//! - `error`: Fatal error type.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod error;
pub mod inspect;
pub mod lint;
pub mod models;
pub mod output;
pub mod utils;
pub mod validate;
