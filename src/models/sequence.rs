//! Types describing a detected frame sequence

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Notation of a trailing frame token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequenceNotation {
    /// Plain digit run, e.g. "1023" or "000"
    Numeric,
    /// Hash placeholders, e.g. "####"
    Hash,
    /// printf-style padding, e.g. "%04d"
    Percent,
}

impl SequenceNotation {
    pub fn as_str(&self) -> &'static str {
        match self {
            SequenceNotation::Numeric => "numeric",
            SequenceNotation::Hash => "hash",
            SequenceNotation::Percent => "percent",
        }
    }
}

/// A sequence token found at the end of a filename stem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceToken {
    pub notation: SequenceNotation,
    /// Digit count of one frame number on disk
    pub width: usize,
    /// Byte offset of the token within the stem
    pub start: usize,
}

/// Derived lookup patterns for one sequence path
///
/// Built once per call by pattern derivation and consumed once by the
/// directory scan; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceSpec {
    /// Directory holding the sibling frames. Empty when the queried
    /// path had no directory part.
    pub dir: PathBuf,
    /// Filename glob matching every sibling frame file
    pub file_pattern: String,
    /// End-anchored regex extracting the frame digits from a stem
    pub frame_pattern: String,
    pub notation: SequenceNotation,
    /// Digit count of the frame token
    pub token_width: usize,
}

impl SequenceSpec {
    /// Full glob path, directory part included
    ///
    /// e.g. "renders/shot_[0-9][0-9][0-9].exr"
    pub fn glob_path(&self) -> String {
        format!("{}{}", self.dir.display(), self.file_pattern)
    }
}
