//! Best-effort extraction from JavaScript starter snippets.
//!
//! This is pattern matching, not parsing. Each rule returns `Option` and the
//! callers supply the placeholder when nothing matches.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::signature::{ARGS_PLACEHOLDER, DEFAULT_FUNCTION_NAME};
use crate::models::{ExtractedSignature, TypeTag};

pub const BODY_PLACEHOLDER: &str = "// TODO";

// Tried in order against comment-free source; the first match supplies the
// name, the parameter list and the body position.
static HEADER_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"var\s+(?P<name>[A-Za-z_$][\w$]*)\s*=\s*function\s*\((?P<params>[^)]*)\)",
        r"const\s+(?P<name>[A-Za-z_$][\w$]*)\s*=\s*function\s*\((?P<params>[^)]*)\)",
        r"let\s+(?P<name>[A-Za-z_$][\w$]*)\s*=\s*function\s*\((?P<params>[^)]*)\)",
        r"function\s+(?P<name>[A-Za-z_$][\w$]*)\s*\((?P<params>[^)]*)\)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

static PARAM_DOC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@param\s*\{([^}]+)\}\s*([A-Za-z_$][\w$]*)").expect("valid regex")
});
static RETURN_DOC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@returns?\s*\{([^}]+)\}").expect("valid regex"));
static PROBLEM_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://leetcode\.com/problems/[^\s*]+").expect("valid regex")
});

/// A function header: its name, the parameter text and the byte offset just
/// past `)`.
struct Header<'a> {
    name: &'a str,
    params: &'a str,
    end: usize,
}

fn push_blank(out: &mut String, c: char) {
    if c == '\n' {
        out.push('\n');
    } else {
        out.extend(std::iter::repeat(' ').take(c.len_utf8()));
    }
}

/// Blanks out `/* */` and `//` comments. Every byte keeps its offset, so
/// positions found in the result index straight into `src`.
fn mask_comments(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    let mut chars = src.chars().peekable();
    let mut in_block = false;
    let mut in_line = false;

    while let Some(c) = chars.next() {
        if in_block {
            if c == '*' && chars.peek() == Some(&'/') {
                chars.next();
                in_block = false;
                out.push_str("  ");
            } else {
                push_blank(&mut out, c);
            }
        } else if in_line {
            if c == '\n' {
                in_line = false;
            }
            push_blank(&mut out, c);
        } else if c == '/' && chars.peek() == Some(&'*') {
            chars.next();
            in_block = true;
            out.push_str("  ");
        } else if c == '/' && chars.peek() == Some(&'/') {
            chars.next();
            in_line = true;
            out.push_str("  ");
        } else {
            out.push(c);
        }
    }
    out
}

fn find_header<'a>(src: &'a str, code: &str) -> Option<Header<'a>> {
    HEADER_RULES.iter().find_map(|re| {
        let caps = re.captures(code)?;
        Some(Header {
            name: &src[caps.name("name")?.range()],
            params: &src[caps.name("params")?.range()],
            end: caps.get(0)?.end(),
        })
    })
}

pub fn extract_function_name(src: &str) -> Option<String> {
    let code = mask_comments(src);
    find_header(src, &code).map(|h| h.name.to_string())
}

pub fn extract_params(src: &str) -> Option<Vec<String>> {
    let code = mask_comments(src);
    let header = find_header(src, &code)?;
    let params: Vec<String> = header
        .params
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();
    (!params.is_empty()).then_some(params)
}

/// `@param {T} name` annotations, keyed by parameter name.
pub fn extract_param_types(src: &str) -> HashMap<String, TypeTag> {
    PARAM_DOC_REGEX
        .captures_iter(src)
        .map(|caps| (caps[2].to_string(), TypeTag::from_doc_type(&caps[1])))
        .collect()
}

pub fn extract_return_type(src: &str) -> Option<TypeTag> {
    RETURN_DOC_REGEX
        .captures(src)
        .map(|caps| TypeTag::from_doc_type(&caps[1]))
}

/// Text between the first `{` after the function header and the last `}`
/// outside comments.
pub fn extract_body(src: &str) -> Option<String> {
    let code = mask_comments(src);
    let header = find_header(src, &code)?;
    let open = header.end + code[header.end..].find('{')?;
    let close = code.rfind('}')?;
    if close <= open {
        return None;
    }
    let body = src[open + 1..close].trim();
    (!body.is_empty()).then(|| body.to_string())
}

pub fn extract_problem_url(src: &str) -> Option<String> {
    PROBLEM_URL_REGEX.find(src).map(|m| m.as_str().to_string())
}

/// Runs every rule, substituting placeholders for misses.
pub fn extract_signature(src: &str) -> ExtractedSignature {
    ExtractedSignature {
        function_name: extract_function_name(src)
            .unwrap_or_else(|| DEFAULT_FUNCTION_NAME.to_string()),
        parameters: extract_params(src).unwrap_or_else(|| vec![ARGS_PLACEHOLDER.to_string()]),
        parameter_types: extract_param_types(src),
        return_type: extract_return_type(src).unwrap_or(TypeTag::Unknown),
    }
}
