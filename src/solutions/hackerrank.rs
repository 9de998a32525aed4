use std::collections::HashMap;

use serde_json::{json, Value};

use crate::harness::{run_tests, TestCase, TestReport};

use super::arg;

/// HackerRank Sparse Arrays: how many times each query occurs in `strings`.
pub fn matching_strings<S: AsRef<str>>(strings: &[S], queries: &[S]) -> Vec<usize> {
    let mut count: HashMap<&str, usize> = HashMap::new();
    for s in strings {
        *count.entry(s.as_ref()).or_insert(0) += 1;
    }
    queries
        .iter()
        .map(|q| count.get(q.as_ref()).copied().unwrap_or(0))
        .collect()
}

pub fn matching_strings_json(args: &[Value]) -> Value {
    let strings: Vec<String> = arg(args, 0).unwrap_or_default();
    let queries: Vec<String> = arg(args, 1).unwrap_or_default();
    json!(matching_strings(&strings, &queries))
}

pub fn cases() -> Vec<TestCase> {
    vec![TestCase::new(
        json!([["aba", "baba", "aba", "xzxb"], ["aba", "xzxb", "ab"]]),
        json!([2, 1, 0]),
    )]
}

pub fn self_test() -> TestReport {
    run_tests("HackerRank Sparse Arrays", &cases(), matching_strings_json)
}
