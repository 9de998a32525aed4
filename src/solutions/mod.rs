//! Worked solutions, each with the self-test cases it ships with.
//!
//! `self_tests` runs every suite through the harness, the way each generated
//! TypeScript file runs its own `// TESTS` block.

pub mod hackerrank;
pub mod leetcode;
pub mod theory;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::harness::TestReport;

/// Decodes positional argument `index`, or `None` if absent or mistyped.
pub(crate) fn arg<T: DeserializeOwned>(args: &[Value], index: usize) -> Option<T> {
    serde_json::from_value(args.get(index)?.clone()).ok()
}

pub fn self_tests() -> Vec<TestReport> {
    vec![
        leetcode::self_test(),
        hackerrank::self_test(),
        theory::palindrome_self_test(),
        theory::remove_duplicates_self_test(),
        theory::linked_list_self_test(),
    ]
}
