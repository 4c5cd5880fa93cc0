use anyhow::{Context, Result};
use clap::Parser;

use frameseq::{frames_from_path, sequence_spec};

/// Detect on-disk frame ranges for file sequence paths.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Sequence paths to inspect, e.g. "renders/shot_%04d.exr"
    #[arg(required = true)]
    paths: Vec<String>,

    /// Emit one JSON object per path instead of plain text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    for path in &cli.paths {
        let frames = frames_from_path(path)
            .with_context(|| format!("Failed to scan sequence: {}", path))?;

        if cli.json {
            let value = serde_json::json!({
                "path": path,
                "spec": sequence_spec(path),
                "frames": frames,
            });
            println!("{}", value);
        } else {
            match frames {
                Some(frames) => println!(
                    "{}: {} ({} frames)",
                    path,
                    format_frames(&frames),
                    frames.len()
                ),
                None => println!("{}: no sequence", path),
            }
        }
    }

    Ok(())
}

/// Summarise sorted frames as contiguous ranges, e.g. "1-3, 7, 10-12"
fn format_frames(frames: &[u32]) -> String {
    let mut parts = Vec::new();
    let mut i = 0;
    while i < frames.len() {
        let start = frames[i];
        let mut end = start;
        while i + 1 < frames.len() && frames[i + 1] == end + 1 {
            i += 1;
            end = frames[i];
        }
        if start == end {
            parts.push(start.to_string());
        } else {
            parts.push(format!("{}-{}", start, end));
        }
        i += 1;
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_frames() {
        assert_eq!(format_frames(&[]), "");
        assert_eq!(format_frames(&[7]), "7");
        assert_eq!(format_frames(&[1, 2, 3, 7, 10, 11, 12]), "1-3, 7, 10-12");
        assert_eq!(format_frames(&[1, 2, 10]), "1-2, 10");
    }
}
