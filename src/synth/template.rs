use crate::models::signature::ARGS_PLACEHOLDER;
use crate::models::{ExtractedSignature, Platform, StarterTemplate};
use crate::scaffold::safe_name;

use super::extract::{extract_body, extract_problem_url, extract_signature, BODY_PLACEHOLDER};

const RUNNER_IMPORT: &str = r#"import { runTests } from "../utils/run";"#;

/// Escapes text for a double-quoted TypeScript string literal.
fn ts_string(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

pub fn signature_line(sig: &ExtractedSignature) -> String {
    format!(
        "export function {}({}): {} {{",
        sig.function_name,
        sig.typed_params(),
        sig.return_type.ts_name()
    )
}

/// Placeholder for the `input` slot of the generated self-test.
///
/// One parameter gets a single-slot array; two or more get one positional
/// tuple wrapped in an outer array so the runner spreads it.
pub fn args_placeholder(sig: &ExtractedSignature) -> String {
    if sig.has_placeholder_params() {
        return format!("[ {} ]", ARGS_PLACEHOLDER);
    }
    match sig.parameters.as_slice() {
        [only] => format!("[ /* {} */ ]", only),
        params => {
            let slots: Vec<String> = params.iter().map(|p| format!("/* {} */", p)).collect();
            format!("[[ {} ]]", slots.join(", "))
        }
    }
}

fn tests_block(suite: &str, args: &str, function_name: &str) -> String {
    format!(
        r#"
// TESTS
if (require.main === module) {{
  runTests("{}", [
    {{ input: {}, expected: /* result */ }}
  ], {});
}}
"#,
        ts_string(suite),
        args,
        function_name
    )
}

/// Turns a JavaScript starter into a typed TypeScript solution file.
pub fn render_starter(starter: &StarterTemplate, title: &str, id: Option<&str>) -> String {
    let src = starter.raw_source.as_str();
    let sig = extract_signature(src);
    let body = extract_body(src).unwrap_or_else(|| BODY_PLACEHOLDER.to_string());
    let url = extract_problem_url(src).unwrap_or_default();
    let id_prefix = id.map(|i| format!("{}. ", i)).unwrap_or_default();

    let header = format!(
        r#"{}

/**
 * {}{}
 * {}
 */
{}
  {}
}}
"#,
        RUNNER_IMPORT,
        id_prefix,
        title,
        url,
        signature_line(&sig),
        body
    );

    let suite = format!(
        "{} #{} {}",
        Platform::LeetCode.display_name(),
        id.unwrap_or("?"),
        title
    );
    header + &tests_block(&suite, &args_placeholder(&sig), &sig.function_name)
}

/// Placeholder file for a LeetCode problem whose starter could not be fetched.
pub fn render_leetcode_fallback(number: u32, title: &str, slug: Option<&str>) -> String {
    let url = slug
        .map(|s| format!("https://leetcode.com/problems/{}/", s))
        .unwrap_or_default();
    let header = format!(
        r#"{}

/**
 * {}. {}
 * {}
 */
export function solve({}): any {{
  {}
  return null;
}}
"#,
        RUNNER_IMPORT, number, title, url, ARGS_PLACEHOLDER, BODY_PLACEHOLDER
    );

    let suite = format!("{} #{} {}", Platform::LeetCode.display_name(), number, title);
    header + &tests_block(&suite, &format!("[ {} ]", ARGS_PLACEHOLDER), "solve")
}

/// Placeholder file for a HackerRank challenge. The function is named after
/// the sanitized title.
pub fn render_hackerrank(title: &str, slug: Option<&str>) -> String {
    let function_name = safe_name(title);
    let url = slug
        .map(|s| format!("https://www.hackerrank.com/challenges/{}/problem", s))
        .unwrap_or_else(|| "https://www.hackerrank.com/".to_string());
    let header = format!(
        r#"{}

/**
 * {} - {}
 * {}
 */
export function {}({}): any {{
  {}
  return null;
}}
"#,
        RUNNER_IMPORT,
        Platform::HackerRank.display_name(),
        title,
        url,
        function_name,
        ARGS_PLACEHOLDER,
        BODY_PLACEHOLDER
    );

    let suite = format!("{} {}", Platform::HackerRank.display_name(), title);
    header + &tests_block(&suite, &format!("[ {} ]", ARGS_PLACEHOLDER), &function_name)
}
