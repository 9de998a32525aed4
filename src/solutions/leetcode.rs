use std::collections::HashMap;

use serde_json::{json, Value};

use crate::harness::{run_tests, TestCase, TestReport};

use super::arg;

/// LeetCode #1 Two Sum: indices of the two numbers adding up to `target`.
pub fn two_sum(nums: &[i64], target: i64) -> Option<[usize; 2]> {
    let mut pos: HashMap<i64, usize> = HashMap::new();
    for (i, &n) in nums.iter().enumerate() {
        // No i64 complement exists when the subtraction overflows.
        if let Some(&j) = target.checked_sub(n).and_then(|want| pos.get(&want)) {
            return Some([j, i]);
        }
        pos.insert(n, i);
    }
    None
}

pub fn cases() -> Vec<TestCase> {
    vec![
        TestCase::new(json!([[2, 7, 11, 15], 9]), json!([0, 1])),
        TestCase::new(json!([[3, 2, 4], 6]), json!([1, 2])),
        TestCase::new(json!([[3, 3], 6]), json!([0, 1])),
    ]
}

pub fn self_test() -> TestReport {
    run_tests("LeetCode #1 Two Sum", &cases(), two_sum_json)
}

/// Positional JSON adapter; a missing pair reads as `[-1, -1]`.
pub fn two_sum_json(args: &[Value]) -> Value {
    let nums: Vec<i64> = arg(args, 0).unwrap_or_default();
    let target: i64 = arg(args, 1).unwrap_or_default();
    two_sum(&nums, target).map_or_else(|| json!([-1, -1]), |pair| json!(pair))
}
