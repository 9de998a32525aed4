use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Platform {
    #[value(name = "lc", alias = "leetcode")]
    LeetCode,
    #[value(name = "hr", alias = "hackerrank")]
    HackerRank,
}

impl Platform {
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::LeetCode => "LeetCode",
            Platform::HackerRank => "HackerRank",
        }
    }

    /// Directory under the practice root that holds this platform's solutions.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Platform::LeetCode => "LeetCode",
            Platform::HackerRank => "HackerRank",
        }
    }

    pub fn file_prefix(&self) -> &'static str {
        match self {
            Platform::LeetCode => "LC",
            Platform::HackerRank => "HR",
        }
    }

    pub fn extension(&self) -> &'static str {
        "ts"
    }
}
