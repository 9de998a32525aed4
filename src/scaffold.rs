use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;
use crate::models::{GeneratedFile, Platform};

pub fn pad4(n: u32) -> String {
    format!("{:04}", n)
}

/// Reduces a title to an identifier-safe token.
///
/// Every run of non-alphanumeric characters becomes one `_`; leading and
/// trailing `_` are dropped. Empty input or output gives `Problem`.
pub fn safe_name(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_sep = false;
    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(c);
        } else {
            pending_sep = true;
        }
    }

    if out.is_empty() {
        "Problem".to_string()
    } else {
        out
    }
}

/// `balanced-brackets` -> `Balanced Brackets`.
pub fn title_from_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn leetcode_file_name(number: u32, title: &str) -> String {
    format!(
        "{}_{}_{}.{}",
        Platform::LeetCode.file_prefix(),
        pad4(number),
        safe_name(title),
        Platform::LeetCode.extension()
    )
}

pub fn hackerrank_file_name(title: &str) -> String {
    format!(
        "{}_{}.{}",
        Platform::HackerRank.file_prefix(),
        safe_name(title),
        Platform::HackerRank.extension()
    )
}

pub fn output_path(root: &Path, platform: Platform, file_name: &str) -> PathBuf {
    root.join(platform.dir_name()).join(file_name)
}

/// Creates `file.output_path` with `file.content`, refusing to touch an
/// existing file. The platform directory is created when missing.
pub fn write_if_absent(file: &GeneratedFile) -> Result<PathBuf, ScaffoldError> {
    let path = &file.output_path;
    if path.exists() {
        return Err(ScaffoldError::AlreadyExists { path: path.clone() });
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ScaffoldError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    // create_new closes the gap between the exists() check and the write.
    let mut handle = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| match source.kind() {
            ErrorKind::AlreadyExists => ScaffoldError::AlreadyExists { path: path.clone() },
            _ => ScaffoldError::Write {
                path: path.clone(),
                source,
            },
        })?;

    handle
        .write_all(file.content.as_bytes())
        .map_err(|source| ScaffoldError::Write {
            path: path.clone(),
            source,
        })?;

    tracing::debug!(path = %path.display(), bytes = file.content.len(), "scaffold written");
    Ok(path.clone())
}
