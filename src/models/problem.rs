/// Title and slug of a LeetCode problem, as listed by the problem index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemMetadata {
    pub numeric_id: u32,
    pub title: String,
    pub slug: Option<String>,
}

/// Vendor starter code for one problem in the configured starter language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarterTemplate {
    pub raw_source: String,
    pub title: String,
    pub frontend_id: Option<String>,
}

/// A file the scaffolder is about to create. Never overwrites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub output_path: std::path::PathBuf,
    pub content: String,
}

impl GeneratedFile {
    pub fn new(output_path: impl Into<std::path::PathBuf>, content: String) -> Self {
        Self {
            output_path: output_path.into(),
            content,
        }
    }
}
