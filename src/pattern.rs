//! Sequence token detection and sibling-pattern derivation
//!
//! A frame token is only recognised directly before the file
//! extension, i.e. at the very end of the filename stem. Three
//! notations are supported:
//!
//! - Plain digit runs: `1023`, `000`, `99`
//! - Hash runs: `####` matching frames like `0909` or `1182`
//! - printf-style padding: `%03d` matching frames like `023` and `248`

use std::path::PathBuf;
use std::sync::OnceLock;

use crate::limits::MAX_TOKEN_WIDTH;
use crate::models::sequence::{SequenceNotation, SequenceSpec, SequenceToken};

static RE_NUMBERS: OnceLock<regex::Regex> = OnceLock::new();
static RE_HASHES: OnceLock<regex::Regex> = OnceLock::new();
static RE_PERCENT: OnceLock<regex::Regex> = OnceLock::new();

/// Split a path into stem and extension.
///
/// The extension starts at the last dot of the final path component.
/// Leading dots of that component never start an extension, so
/// ".bashrc" splits into (".bashrc", "").
pub(crate) fn split_ext(path: &str) -> (&str, &str) {
    let base_start = path.rfind(['/', '\\']).map_or(0, |i| i + 1);
    let base = &path[base_start..];

    let Some(first_non_dot) = base.find(|c| c != '.') else {
        // Empty, or nothing but dots
        return (path, "");
    };
    match base[first_non_dot..].rfind('.') {
        Some(rel) => {
            let dot = base_start + first_non_dot + rel;
            (&path[..dot], &path[dot..])
        }
        None => (path, ""),
    }
}

/// Find a trailing sequence token in a filename stem.
///
/// The three notations are tried end-anchored in a fixed order:
/// digit run, hash run, percent padding. At most one can match a
/// given stem. Returns None when the stem ends in none of them, and
/// also for degenerate tokens: a zero-width padding like "%00d"
/// addresses nothing, and widths above [`MAX_TOKEN_WIDTH`] are
/// rejected before they can blow up the derived patterns.
pub fn detect_token(stem: &str) -> Option<SequenceToken> {
    let token = match_token(stem)?;
    if token.width == 0 || token.width > MAX_TOKEN_WIDTH {
        return None;
    }
    Some(token)
}

fn match_token(stem: &str) -> Option<SequenceToken> {
    let numbers = RE_NUMBERS.get_or_init(|| regex::Regex::new(r"[0-9]+$").unwrap());
    if let Some(m) = numbers.find(stem) {
        return Some(SequenceToken {
            notation: SequenceNotation::Numeric,
            width: m.as_str().len(),
            start: m.start(),
        });
    }

    let hashes = RE_HASHES.get_or_init(|| regex::Regex::new(r"#+$").unwrap());
    if let Some(m) = hashes.find(stem) {
        return Some(SequenceToken {
            notation: SequenceNotation::Hash,
            width: m.as_str().len(),
            start: m.start(),
        });
    }

    let percent = RE_PERCENT.get_or_init(|| regex::Regex::new(r"%0([0-9]+)d$").unwrap());
    if let Some(caps) = percent.captures(stem) {
        let all = caps.get(0)?;
        let width: usize = caps.get(1)?.as_str().parse().ok()?;
        return Some(SequenceToken {
            notation: SequenceNotation::Percent,
            width,
            start: all.start(),
        });
    }

    None
}

/// Derive the sibling glob and frame-extraction pattern for a path.
///
/// The filename stem is matched for a trailing sequence token; the
/// token span is then replaced with one "[0-9]" class per digit to
/// form the sibling glob, while the literal stem prefix and extension
/// are escaped so glob metacharacters in them stay literal. The frame
/// regex is the same digit classes, end-anchored.
///
/// Pure string derivation; nothing is read from disk. Returns None
/// when the stem carries no sequence token.
pub fn sequence_spec(path: &str) -> Option<SequenceSpec> {
    let base_start = path.rfind(['/', '\\']).map_or(0, |i| i + 1);
    let (dir, file_name) = path.split_at(base_start);
    let (stem, ext) = split_ext(file_name);
    let token = detect_token(stem)?;

    let digit_classes = "[0-9]".repeat(token.width);
    let file_pattern = format!(
        "{}{}{}",
        glob::Pattern::escape(&stem[..token.start]),
        digit_classes,
        glob::Pattern::escape(ext),
    );
    let frame_pattern = format!("{}$", digit_classes);

    Some(SequenceSpec {
        dir: PathBuf::from(dir),
        file_pattern,
        frame_pattern,
        notation: token.notation,
        token_width: token.width,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_ext() {
        assert_eq!(split_ext("a/b/shot_001.exr"), ("a/b/shot_001", ".exr"));
        assert_eq!(split_ext("shot_001"), ("shot_001", ""));
        assert_eq!(split_ext("archive.tar.gz"), ("archive.tar", ".gz"));
        assert_eq!(split_ext(".bashrc"), (".bashrc", ""));
        assert_eq!(split_ext(".exr"), (".exr", ""));
        assert_eq!(split_ext(""), ("", ""));
        // A dot in a directory name is not an extension marker
        assert_eq!(split_ext("v1.2/clip"), ("v1.2/clip", ""));
        assert_eq!(split_ext(r"v1.2\clip"), (r"v1.2\clip", ""));
        assert_eq!(split_ext("name."), ("name", "."));
    }

    #[test]
    fn test_detect_numeric_token() {
        let token = detect_token("shot_001").unwrap();
        assert_eq!(token.notation, SequenceNotation::Numeric);
        assert_eq!(token.width, 3);
        assert_eq!(token.start, 5);

        // Maximal run: all trailing digits belong to the token
        let token = detect_token("take21023").unwrap();
        assert_eq!(token.width, 5);
        assert_eq!(token.start, 4);
    }

    #[test]
    fn test_detect_hash_token() {
        let token = detect_token("plate_####").unwrap();
        assert_eq!(token.notation, SequenceNotation::Hash);
        assert_eq!(token.width, 4);
        assert_eq!(token.start, 6);
    }

    #[test]
    fn test_detect_percent_token() {
        let token = detect_token("render_%04d").unwrap();
        assert_eq!(token.notation, SequenceNotation::Percent);
        assert_eq!(token.width, 4);
        assert_eq!(token.start, 7);

        // Multi-digit padding width
        let token = detect_token("render_%010d").unwrap();
        assert_eq!(token.width, 10);
    }

    #[test]
    fn test_detect_no_token() {
        assert_eq!(detect_token("final_comp"), None);
        assert_eq!(detect_token(""), None);
        // Digits not at the end of the stem do not count
        assert_eq!(detect_token("shot_001_preview"), None);
        // "%0d" has no padding digits at all
        assert_eq!(detect_token("render_%0d"), None);
    }

    #[test]
    fn test_degenerate_percent_tokens_rejected() {
        // Zero-width padding addresses nothing
        assert_eq!(detect_token("render_%00d"), None);
        // Widths past the cap never turn into patterns
        assert_eq!(detect_token("render_%0999d"), None);
    }

    #[test]
    fn test_sequence_spec_numeric() {
        let spec = sequence_spec("renders/shot_001.exr").unwrap();
        assert_eq!(spec.dir, PathBuf::from("renders/"));
        assert_eq!(spec.file_pattern, "shot_[0-9][0-9][0-9].exr");
        assert_eq!(spec.frame_pattern, "[0-9][0-9][0-9]$");
        assert_eq!(spec.notation, SequenceNotation::Numeric);
        assert_eq!(spec.token_width, 3);
        assert_eq!(spec.glob_path(), "renders/shot_[0-9][0-9][0-9].exr");
    }

    #[test]
    fn test_sequence_spec_hash() {
        let spec = sequence_spec("plate_####.dpx").unwrap();
        assert_eq!(spec.dir, PathBuf::from(""));
        assert_eq!(spec.file_pattern, "plate_[0-9][0-9][0-9][0-9].dpx");
        assert_eq!(spec.token_width, 4);
    }

    #[test]
    fn test_sequence_spec_percent() {
        let spec = sequence_spec("render_%04d.png").unwrap();
        assert_eq!(spec.file_pattern, "render_[0-9][0-9][0-9][0-9].png");
        assert_eq!(spec.notation, SequenceNotation::Percent);
    }

    #[test]
    fn test_sequence_spec_without_extension() {
        let spec = sequence_spec("frames/0001").unwrap();
        assert_eq!(spec.file_pattern, "[0-9][0-9][0-9][0-9]");
        assert_eq!(spec.notation, SequenceNotation::Numeric);
    }

    #[test]
    fn test_sequence_spec_none_for_plain_paths() {
        assert_eq!(sequence_spec("final_comp.mov"), None);
        assert_eq!(sequence_spec(""), None);
        // Trailing separator means an empty filename
        assert_eq!(sequence_spec("renders/"), None);
        // The extension never participates in token matching
        assert_eq!(sequence_spec("shot.0001x"), None);
    }

    #[test]
    fn test_sequence_spec_escapes_glob_metacharacters() {
        let spec = sequence_spec("sh[1]_002.exr").unwrap();
        let pattern = glob::Pattern::new(&spec.file_pattern).unwrap();
        assert!(pattern.matches("sh[1]_002.exr"));
        assert!(pattern.matches("sh[1]_045.exr"));
        assert!(!pattern.matches("sh1_002.exr"));
    }

    #[test]
    fn test_sequence_spec_token_in_dotted_filename() {
        // e.g. Katana-style "file.0001.exr" naming
        let spec = sequence_spec("/path/to/file.0001.exr").unwrap();
        assert_eq!(spec.dir, PathBuf::from("/path/to/"));
        assert_eq!(spec.file_pattern, "file.[0-9][0-9][0-9][0-9].exr");
    }
}
