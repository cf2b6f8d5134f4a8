//! # optimize-markdown
//!
//! Rewrites the Markdown posts that ZMediumToMarkdown exports into a Jekyll
//! `_posts/zmediumtomarkdown/` directory. Each post is read line by line, run
//! through a [`filter::LineFilter`] and written back in place.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (args.rs, main.rs)                                     │
//! │  - Parses flags, loads config, prints messages, exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Rewriter (rewriter.rs)                                     │
//! │  - Lists targets, rewrites each file, fails fast            │
//! │  - Hands progress to a Reporter, never touches stdout       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Lines + Filter (lines.rs, filter.rs)                       │
//! │  - Byte-exact line splitting, line selection                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! With the default [`config::OptimizeConfig`] the filter is disabled and a
//! run leaves every post byte-identical.
//!
//! ## Module Overview
//!
//! - [`rewriter`]: the rewrite pass
//! - [`filter`]: line filtering strategies
//! - [`lines`]: terminator-preserving split and join
//! - [`config`]: target directory, pattern and filter
//! - [`report`]: progress messages and the `Reporter` seam
//! - [`error`]: error types

pub mod config;
pub mod error;
pub mod filter;
pub mod lines;
pub mod report;
pub mod rewriter;
