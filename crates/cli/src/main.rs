use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use comet_core::layout::{LayoutOutput, LayoutWarning, layout};
use comet_core::stats;
use comet_protocol::{Comment, LayoutConfig, OverlayInterval};
use serde::Deserialize;

/// Lay out scrolling live-stream comments into collision-free lanes.
#[derive(Debug, Parser)]
#[command(name = "comet", version, about)]
struct Cli {
    /// Layout request: a JSON document with `comments`, plus optional
    /// `config` and `overlays`.
    input: PathBuf,

    /// Write the segment list here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override the configured lane count.
    #[arg(long)]
    lanes: Option<usize>,

    /// Print the N most active commenters.
    #[arg(short = 't', long, default_value_t = 0)]
    top_authors: usize,
}

#[derive(Debug, Deserialize)]
struct LayoutRequest {
    #[serde(default)]
    config: LayoutConfig,
    comments: Vec<Comment>,
    #[serde(default)]
    overlays: Vec<OverlayInterval>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let data = fs::read(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let mut request: LayoutRequest =
        serde_json::from_slice(&data).context("parsing layout request")?;

    if let Some(lanes) = cli.lanes {
        request.config.lane_count = lanes;
    }

    // The core requires sorted input; ordering is our job as the caller.
    // Stable sorts keep same-instant comments in stream order.
    request.comments.sort_by_key(|c| c.arrival);
    request.overlays.sort_by_key(|o| o.start);

    let output = layout(&request.comments, &request.overlays, &request.config)?;

    write_segments(&output, cli.output.as_deref())?;
    print_summary(&request.comments, &output, cli.top_authors);
    Ok(())
}

fn write_segments(output: &LayoutOutput, path: Option<&std::path::Path>) -> Result<()> {
    match path {
        Some(path) => {
            let json = serde_json::to_vec_pretty(&output.segments)?;
            fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, &output.segments)?;
            writeln!(handle)?;
        }
    }
    Ok(())
}

fn print_summary(comments: &[Comment], output: &LayoutOutput, top_n: usize) {
    let scheduled = comments.iter().filter(|c| !c.text.is_empty()).count();
    let splits = output.segments.len().saturating_sub(scheduled);
    let degraded = output
        .warnings
        .iter()
        .filter(|w| matches!(w, LayoutWarning::DegradedPlacement { .. }))
        .count();
    let suppressed = output
        .warnings
        .iter()
        .filter(|w| matches!(w, LayoutWarning::DisplacementSuppressed { .. }))
        .count();

    eprintln!();
    eprintln!("    comments: {}", comments.len());
    eprintln!("    segments: {} ({splits} from overlay splits)", output.segments.len());
    if degraded > 0 {
        eprintln!("    degraded placements: {degraded}");
    }
    if suppressed > 0 {
        eprintln!("    suppressed displacements: {suppressed}");
    }

    let counts = stats::comment_counts(comments);
    if !counts.is_empty() {
        eprintln!("    commenters: {}", counts.len());
        eprintln!(
            "    comments per commenter: {:.1}",
            comments.len() as f64 / counts.len() as f64
        );
    }

    if top_n > 0 {
        eprintln!("    top commenters:");
        for (author, count) in stats::top_authors(comments, top_n) {
            eprintln!("    {count:6}  {author}");
        }
    }
}
