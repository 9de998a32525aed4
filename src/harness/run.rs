use serde::Deserialize;
use serde_json::Value;

use super::assert::{assert_equal, canonical};

/// One labeled case. An array `input` is spread into positional arguments.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TestCase {
    pub input: Value,
    pub expected: Value,
    #[serde(default)]
    pub label: Option<String>,
}

impl TestCase {
    pub fn new(input: Value, expected: Value) -> Self {
        Self {
            input,
            expected,
            label: None,
        }
    }

    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    fn display_label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| canonical(&self.input))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseFailure {
    pub label: String,
    pub expected: Value,
    pub actual: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestReport {
    pub name: String,
    pub passed: usize,
    pub failed: usize,
    pub total: usize,
    pub failures: Vec<CaseFailure>,
}

impl TestReport {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Runs every case against `f`, in order, without stopping at failures.
pub fn run_tests<F>(name: &str, cases: &[TestCase], mut f: F) -> TestReport
where
    F: FnMut(&[Value]) -> Value,
{
    println!("\n— {} —", name);

    let mut report = TestReport {
        name: name.to_string(),
        passed: 0,
        failed: 0,
        total: 0,
        failures: Vec::new(),
    };

    for case in cases {
        let actual = match &case.input {
            Value::Array(args) => f(args.as_slice()),
            single => f(std::slice::from_ref(single)),
        };

        let label = case.display_label();
        report.total += 1;
        if assert_equal(&actual, &case.expected, &label) {
            report.passed += 1;
        } else {
            report.failed += 1;
            report.failures.push(CaseFailure {
                label,
                expected: case.expected.clone(),
                actual,
            });
        }
    }

    tracing::debug!(
        suite = name,
        passed = report.passed,
        failed = report.failed,
        "suite finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn array_input_is_spread() {
        let cases = [TestCase::new(json!([2, 3]), json!(5))];
        let report = run_tests("add", &cases, |args| {
            assert_eq!(args.len(), 2);
            json!(args[0].as_i64().unwrap() + args[1].as_i64().unwrap())
        });
        assert!(report.is_success());
        assert_eq!(report.passed, 1);
    }

    #[test]
    fn scalar_input_is_single_argument() {
        let cases = [TestCase::new(json!("abc"), json!(3))];
        let report = run_tests("len", &cases, |args| {
            assert_eq!(args.len(), 1);
            json!(args[0].as_str().unwrap().len())
        });
        assert!(report.is_success());
    }

    #[test]
    fn failures_do_not_stop_the_run() {
        let cases = [
            TestCase::new(json!([1]), json!(1)),
            TestCase::new(json!([2]), json!(99)).labeled("wrong on purpose"),
            TestCase::new(json!([3]), json!(3)),
        ];
        let mut calls = 0;
        let report = run_tests("identity", &cases, |args| {
            calls += 1;
            args[0].clone()
        });

        assert_eq!(calls, 3);
        assert_eq!(report.total, 3);
        assert_eq!(report.passed, 2);
        assert_eq!(report.failed, 1);
        assert!(!report.is_success());
        assert_eq!(report.failures[0].label, "wrong on purpose");
        assert_eq!(report.failures[0].actual, json!(2));
    }

    #[test]
    fn label_defaults_to_encoded_input() {
        let cases = [TestCase::new(json!([[1, 2], 3]), json!(0))];
        let report = run_tests("label", &cases, |_| json!(1));
        assert_eq!(report.failures[0].label, "[[1,2],3]");
    }

    #[test]
    fn cases_deserialize_from_json() {
        let cases: Vec<TestCase> = serde_json::from_str(
            r#"[{ "input": [[3,3], 6], "expected": [0,1] },
                { "input": ["x"], "expected": true, "label": "single" }]"#,
        )
        .unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].label, None);
        assert_eq!(cases[1].label.as_deref(), Some("single"));
    }
}
