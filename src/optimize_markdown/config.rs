use crate::error::{OptimizeError, Result};
use crate::filter::LineFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".optimize-markdown.json";
pub const DEFAULT_POSTS_DIR: &str = "_posts/zmediumtomarkdown";
pub const DEFAULT_PATTERN: &str = "*.md";

/// Where to look for posts and what to do with them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptimizeConfig {
    /// Directory holding the exported posts, relative to the working directory
    #[serde(default = "default_posts_dir")]
    pub posts_dir: PathBuf,

    /// Glob matched against file names inside `posts_dir`
    #[serde(default = "default_pattern")]
    pub pattern: String,

    #[serde(default)]
    pub filter: LineFilter,
}

fn default_posts_dir() -> PathBuf {
    PathBuf::from(DEFAULT_POSTS_DIR)
}

fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self {
            posts_dir: default_posts_dir(),
            pattern: default_pattern(),
            filter: LineFilter::default(),
        }
    }
}

impl OptimizeConfig {
    /// Load config from the given file, or return defaults if it does not exist
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(config_path).map_err(|e| OptimizeError::io(config_path, e))?;
        let config: OptimizeConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn with_posts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.posts_dir = dir.into();
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn with_filter(mut self, filter: LineFilter) -> Self {
        self.filter = filter;
        self
    }

    /// The full glob, e.g. `_posts/zmediumtomarkdown/*.md`
    pub fn target_glob(&self) -> String {
        self.posts_dir.join(&self.pattern).to_string_lossy().into_owned()
    }
}
