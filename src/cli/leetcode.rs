use std::path::PathBuf;

use crate::error::Error;
use crate::fetch::LeetCodeClient;
use crate::models::{GeneratedFile, Platform};
use crate::scaffold::{leetcode_file_name, output_path, write_if_absent};
use crate::synth::{render_leetcode_fallback, render_starter};

use super::Settings;

/// Accepts positive integers only.
pub fn parse_problem_number(arg: Option<&str>) -> Option<u32> {
    arg?.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

/// Scaffolds `LeetCode/LC_<number>_<title>.ts`.
///
/// `--title`/`--slug` skip the listing lookup for whichever they provide. A
/// starter that cannot be fetched yields the `solve` placeholder instead.
pub async fn add_problem(
    number_arg: Option<&str>,
    mut title: Option<String>,
    mut slug: Option<String>,
    settings: &Settings,
) -> Result<PathBuf, Error> {
    let number = parse_problem_number(number_arg).ok_or(Error::MissingProblemNumber)?;
    let client = LeetCodeClient::from_config(&settings.config);

    if title.is_none() || slug.is_none() {
        match client.problem_by_number(number).await {
            Some(meta) => {
                title = title.or(Some(meta.title));
                slug = slug.or(meta.slug);
            }
            None => tracing::warn!(number, "no listing metadata; continuing without it"),
        }
    }

    let starter = match slug.as_deref() {
        Some(s) => client
            .starter_by_slug(s)
            .await
            .filter(|st| !st.raw_source.is_empty()),
        None => None,
    };

    let content = match starter {
        Some(st) => {
            let id = st
                .frontend_id
                .clone()
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| number.to_string());
            let title = title.get_or_insert_with(|| st.title.clone());
            render_starter(&st, title, Some(id.as_str()))
        }
        None => {
            tracing::warn!(number, "starter code unavailable; writing placeholder");
            let display_title = title
                .clone()
                .unwrap_or_else(|| format!("Problem {}", number));
            render_leetcode_fallback(number, &display_title, slug.as_deref())
        }
    };

    let name_title = title.unwrap_or_else(|| format!("Problem_{}", number));
    let path = output_path(
        &settings.root,
        Platform::LeetCode,
        &leetcode_file_name(number, &name_title),
    );
    Ok(write_if_absent(&GeneratedFile::new(path, content))?)
}
