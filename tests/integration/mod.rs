//! Integration test suite for hydrate
//!
//! End-to-end tests that run the real `hydrate` binary against documents in
//! temporary directories.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! - **cli**: argument handling, output targets, overwrite protection, config
//! - **embedding**: recursive embedding, table conversion, failure reporting

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod cli;
mod embedding;
