use serde::{Deserialize, Serialize};

/// Footer line that ZMediumToMarkdown appends to every exported post.
pub const DEFAULT_MARKER: &str = "converted from Medium by [ZMediumToMarkdown]";

/// Decides which lines of a post survive a rewrite.
///
/// Stored in config as `{"mode": "pass_through"}` or
/// `{"mode": "truncate_at_marker", "marker": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LineFilter {
    /// Copy every line unchanged.
    #[default]
    PassThrough,

    /// Stop copying before the first line containing `marker`.
    TruncateAtMarker {
        #[serde(default = "default_marker")]
        marker: String,
    },
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

impl LineFilter {
    pub fn truncate_at(marker: impl Into<String>) -> Self {
        LineFilter::TruncateAtMarker {
            marker: marker.into(),
        }
    }

    pub fn truncate_at_default_marker() -> Self {
        Self::truncate_at(DEFAULT_MARKER)
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, LineFilter::PassThrough)
    }

    pub fn apply<'a>(&self, lines: Vec<&'a [u8]>) -> Vec<&'a [u8]> {
        match self {
            LineFilter::PassThrough => lines,
            LineFilter::TruncateAtMarker { marker } => {
                let needle = marker.as_bytes();
                lines
                    .into_iter()
                    .take_while(|line| !contains(line, needle))
                    .collect()
            }
        }
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.windows(needle.len()).any(|w| w == needle)
}
