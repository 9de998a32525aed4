//! Tooling for a coding-challenge practice collection.
//!
//! `add-problem` fetches LeetCode metadata and starter code, synthesizes a
//! typed TypeScript scaffold, and writes it without ever overwriting an
//! existing solution. The `harness` and `solutions` modules hold the
//! self-test runner and the worked solutions it checks.

pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod harness;
pub mod models;
pub mod scaffold;
pub mod solutions;
pub mod synth;

pub use error::{Error, ScaffoldError};
