//! Directory scan turning a sequence path into its frame numbers

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ScanError;
use crate::models::sequence::SequenceSpec;
use crate::pattern::{sequence_spec, split_ext};

/// Get the sorted list of frame numbers for a sequence path.
///
/// The path itself need not exist; its directory is listed once and
/// every sibling file matching the derived glob contributes the frame
/// number extracted from its stem. Leading zeros are dropped
/// numerically, so `shot_007.exr` contributes 7.
///
/// Returns `Ok(None)` both when the path carries no sequence token
/// and when no sibling frame files exist on disk; a present result is
/// never empty. Directory read failures (access denied, missing path
/// component) are returned as errors rather than folded into `None`.
pub fn frames_from_path(path: &str) -> Result<Option<Vec<u32>>, ScanError> {
    let Some(spec) = sequence_spec(path) else {
        return Ok(None);
    };
    let frames = scan_sequence(&spec)?;
    Ok(if frames.is_empty() { None } else { Some(frames) })
}

/// List `spec.dir` and extract frame numbers from matching files.
///
/// Directory scan order is unspecified; the result is sorted
/// ascending and deduplicated. Non-files and entries whose names are
/// not valid UTF-8 are skipped.
pub fn scan_sequence(spec: &SequenceSpec) -> Result<Vec<u32>, ScanError> {
    let pattern = glob::Pattern::new(&spec.file_pattern).map_err(|e| ScanError::Pattern {
        pattern: spec.file_pattern.clone(),
        message: e.to_string(),
    })?;
    let frame_re = regex::Regex::new(&spec.frame_pattern).map_err(|e| ScanError::Pattern {
        pattern: spec.frame_pattern.clone(),
        message: e.to_string(),
    })?;

    let dir = if spec.dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        spec.dir.as_path()
    };
    debug!("scanning {:?} for {:?}", dir, spec.file_pattern);

    let entries = fs::read_dir(dir).map_err(|source| ScanError::Scan {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut frames = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ScanError::Scan {
            path: dir.to_path_buf(),
            source,
        })?;
        if !entry.path().is_file() {
            continue;
        }
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };
        if !pattern.matches(file_name) {
            continue;
        }

        // The glob and the regex are derived from the same token, so
        // a matched name always carries the digits; skip anything
        // odd instead of failing the whole scan.
        let (stem, _) = split_ext(file_name);
        let Some(found) = frame_re.find(stem) else {
            debug!("no frame digits in matched entry: {}", file_name);
            continue;
        };
        match found.as_str().parse::<u32>() {
            Ok(frame) => frames.push(frame),
            Err(_) => {
                debug!("frame number out of range in entry: {}", file_name);
                continue;
            }
        }
    }

    frames.sort_unstable();
    frames.dedup();
    Ok(frames)
}
