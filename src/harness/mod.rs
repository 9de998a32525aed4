//! Minimal self-test harness for solution functions.
//!
//! Values travel as `serde_json::Value`, so a case reads the same way it would
//! in a generated TypeScript scaffold: `{ input: [[2,7,11,15], 9], expected: [0,1] }`.

pub mod assert;
pub mod run;

pub use assert::{assert_equal, canonical, is_deep_equal};
pub use run::{run_tests, CaseFailure, TestCase, TestReport};
