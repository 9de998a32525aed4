mod hackerrank;
mod leetcode;

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::config::{self, Config};
use crate::error::Error;
use crate::models::Platform;

pub use hackerrank::add_challenge;
pub use leetcode::{add_problem, parse_problem_number};

#[derive(Parser, Debug)]
#[command(name = "add-problem")]
#[command(about = "Scaffold LeetCode / HackerRank TypeScript solution files", long_about = None)]
#[command(after_help = "Examples:\n  add-problem lc 27\n  add-problem hr --slug balanced-brackets --title \"Balanced Brackets\"")]
pub struct Cli {
    /// Target platform: lc (leetcode) or hr (hackerrank)
    #[arg(value_enum, ignore_case = true)]
    pub platform: Option<Platform>,

    /// Positional arguments; for lc the first one is the problem number
    pub args: Vec<String>,

    /// Problem title, skips the title lookup
    #[arg(long)]
    pub title: Option<String>,

    /// Problem slug, skips the slug lookup
    #[arg(long)]
    pub slug: Option<String>,

    /// Practice root holding the LeetCode/ and HackerRank/ directories
    #[arg(long, env = "PRACTICE_KIT_ROOT")]
    pub root: Option<PathBuf>,

    /// LeetCode base URL
    #[arg(long, env = "PRACTICE_KIT_LEETCODE_URL")]
    pub leetcode_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Config file values with command-line overrides applied.
#[derive(Debug, Clone)]
pub struct Settings {
    pub root: PathBuf,
    pub config: Config,
}

impl Settings {
    pub fn resolve(cli: &Cli, mut config: Config) -> Result<Self, Error> {
        if let Some(url) = &cli.leetcode_url {
            config.leetcode_url = url.clone();
        }
        let root = match cli.root.clone().or_else(|| config.root.clone()) {
            Some(root) => root,
            None => std::env::current_dir().map_err(Error::CurrentDir)?,
        };
        Ok(Self { root, config })
    }
}

/// Runs one generation. `Ok(None)` means no platform was given and usage was
/// printed instead.
pub async fn run(cli: Cli) -> Result<Option<PathBuf>, Error> {
    let Some(platform) = cli.platform else {
        // Printing help only fails when stdout is gone.
        let _ = Cli::command().print_help();
        return Ok(None);
    };

    let settings = Settings::resolve(&cli, config::load_config())?;
    tracing::debug!(?platform, root = %settings.root.display(), "resolved settings");

    let path = match platform {
        Platform::LeetCode => {
            add_problem(
                cli.args.first().map(String::as_str),
                cli.title,
                cli.slug,
                &settings,
            )
            .await?
        }
        Platform::HackerRank => add_challenge(cli.title, cli.slug, &settings)?,
    };
    Ok(Some(path))
}
