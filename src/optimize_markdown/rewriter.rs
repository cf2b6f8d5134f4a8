//! The rewrite pass: list the posts, rewrite each in place, report progress.
//!
//! Failures are not isolated per file. The first I/O error ends the run, and
//! files rewritten before it stay rewritten.

use crate::config::OptimizeConfig;
use crate::error::{OptimizeError, Result};
use crate::filter::LineFilter;
use crate::lines::{join_lines, split_lines};
use crate::report::{CmdMessage, Reporter};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub lines_read: usize,
    pub lines_written: usize,
}

impl FileOutcome {
    pub fn truncated(&self) -> bool {
        self.lines_written < self.lines_read
    }
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub files: Vec<FileOutcome>,
}

impl RunSummary {
    pub fn truncated_count(&self) -> usize {
        self.files.iter().filter(|f| f.truncated()).count()
    }
}

/// Paths matching `pattern` inside `dir`, in the order glob yields them.
///
/// A missing directory is not an error: there is simply nothing to do.
/// `dir` is taken literally, only `pattern` is a glob. Wildcards do not match
/// a leading dot, so hidden files are skipped. Matching entries are not
/// checked for being regular files, so a directory named `*.md` fails later
/// when it is read.
pub fn list_targets(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "posts directory not found");
        return Ok(Vec::new());
    }

    let escaped_dir = glob::Pattern::escape(&dir.to_string_lossy());
    let full_pattern = Path::new(&escaped_dir).join(pattern);
    let options = glob::MatchOptions {
        require_literal_leading_dot: true,
        ..glob::MatchOptions::new()
    };

    glob::glob_with(&full_pattern.to_string_lossy(), options)?
        .map(|entry| {
            entry.map_err(|e| {
                let path = e.path().to_path_buf();
                OptimizeError::io(path, e.into())
            })
        })
        .collect()
}

/// Reads `path`, keeps the lines `filter` lets through, and overwrites the
/// file with them.
pub fn rewrite_file(path: &Path, filter: &LineFilter) -> Result<FileOutcome> {
    let content = fs::read(path).map_err(|e| OptimizeError::io(path, e))?;
    let lines = split_lines(&content);
    let lines_read = lines.len();

    let kept = filter.apply(lines);
    let lines_written = kept.len();

    fs::write(path, join_lines(&kept)).map_err(|e| OptimizeError::io(path, e))?;

    debug!(path = %path.display(), lines_read, lines_written, "rewrote file");
    Ok(FileOutcome {
        path: path.to_path_buf(),
        lines_read,
        lines_written,
    })
}

pub fn run<R: Reporter + ?Sized>(config: &OptimizeConfig, reporter: &mut R) -> Result<RunSummary> {
    info!(
        target_glob = %config.target_glob(),
        filter_enabled = config.filter.is_enabled(),
        "optimizing markdown"
    );

    let targets = list_targets(&config.posts_dir, &config.pattern)?;
    let mut summary = RunSummary::default();

    for path in targets {
        let outcome = rewrite_file(&path, &config.filter)?;

        if outcome.truncated() {
            reporter.report(CmdMessage::warning(format!(
                "{} dropped {} line(s) from marker",
                path.display(),
                outcome.lines_read - outcome.lines_written
            )));
        }
        reporter.report(CmdMessage::info(format!("{} Optimze Done!", path.display())));
        summary.files.push(outcome);
    }

    reporter.report(CmdMessage::success("Optimze Markdown Success!"));
    Ok(summary)
}

/// Runs with the built-in defaults: `_posts/zmediumtomarkdown/*.md`, no filtering.
pub fn run_default<R: Reporter + ?Sized>(reporter: &mut R) -> Result<RunSummary> {
    run(&OptimizeConfig::default(), reporter)
}
