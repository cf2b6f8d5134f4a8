use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "optimize-markdown", version)]
#[command(about = "Rewrite exported Medium posts in place", long_about = None)]
pub struct Cli {
    /// Directory holding the posts (default: _posts/zmediumtomarkdown)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Glob matched inside the directory (default: *.md)
    #[arg(long, value_name = "GLOB")]
    pub pattern: Option<String>,

    /// Drop everything from the first line containing MARKER
    /// (default marker: the ZMediumToMarkdown footer)
    #[arg(long, value_name = "MARKER", num_args = 0..=1)]
    pub truncate_at_marker: Option<Option<String>>,

    /// Config file to read (default: .optimize-markdown.json)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
