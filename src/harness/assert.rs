use serde_json::Value;

/// Canonical encoding used for equality. Object keys come out sorted.
pub fn canonical(value: &Value) -> String {
    value.to_string()
}

/// Two values are equal iff their canonical encodings are identical.
pub fn is_deep_equal(a: &Value, b: &Value) -> bool {
    canonical(a) == canonical(b)
}

/// Compares `actual` with `expected` and reports the outcome on the console.
///
/// A mismatch is never a panic; the caller decides what a failure means.
pub fn assert_equal(actual: &Value, expected: &Value, message: &str) -> bool {
    if is_deep_equal(actual, expected) {
        println!("✓ {}", if message.is_empty() { "OK" } else { message });
        true
    } else {
        eprintln!(
            "✗ {}",
            if message.is_empty() { "Assertion failed" } else { message }
        );
        eprintln!("  expected: {}", canonical(expected));
        eprintln!("  actual  : {}", canonical(actual));
        false
    }
}
