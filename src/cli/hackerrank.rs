use std::path::PathBuf;

use crate::error::Error;
use crate::models::{GeneratedFile, Platform};
use crate::scaffold::{hackerrank_file_name, output_path, title_from_slug, write_if_absent};
use crate::synth::render_hackerrank;

use super::Settings;

/// `--title`, else the title-cased slug, else `Problem`.
pub fn resolve_title(title: Option<String>, slug: Option<&str>) -> String {
    title
        .or_else(|| slug.map(title_from_slug).filter(|t| !t.is_empty()))
        .unwrap_or_else(|| "Problem".to_string())
}

/// Scaffolds `HackerRank/HR_<title>.ts`. Needs no network.
pub fn add_challenge(
    title: Option<String>,
    slug: Option<String>,
    settings: &Settings,
) -> Result<PathBuf, Error> {
    let title = resolve_title(title, slug.as_deref());
    let content = render_hackerrank(&title, slug.as_deref());
    let path = output_path(
        &settings.root,
        Platform::HackerRank,
        &hackerrank_file_name(&title),
    );
    Ok(write_if_absent(&GeneratedFile::new(path, content))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tempfile::tempdir;

    #[test]
    fn title_resolution() {
        assert_eq!(resolve_title(Some("Custom".into()), Some("sparse-arrays")), "Custom");
        assert_eq!(resolve_title(None, Some("sparse-arrays")), "Sparse Arrays");
        assert_eq!(resolve_title(None, Some("")), "Problem");
        assert_eq!(resolve_title(None, None), "Problem");
    }

    #[test]
    fn writes_placeholder_and_refuses_second_run() {
        let dir = tempdir().unwrap();
        let settings = Settings {
            root: dir.path().to_path_buf(),
            config: Config::default(),
        };

        let path = add_challenge(None, Some("sparse-arrays".into()), &settings).unwrap();
        assert_eq!(path, dir.path().join("HackerRank").join("HR_Sparse_Arrays.ts"));
        let first = std::fs::read_to_string(&path).unwrap();
        assert!(first.contains("export function Sparse_Arrays(/* args */): any {"));

        let err = add_challenge(Some("Sparse Arrays".into()), None, &settings).unwrap_err();
        assert!(matches!(err, Error::Scaffold(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), first);
    }
}
