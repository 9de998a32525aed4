//! Starter-to-scaffold synthesis.
//!
//! `extract` pulls a best-effort signature out of a JavaScript starter and
//! `template` renders the TypeScript files the scaffolder writes.

pub mod extract;
pub mod template;

pub use extract::extract_signature;
pub use template::{render_hackerrank, render_leetcode_fallback, render_starter};
