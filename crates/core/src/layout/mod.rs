pub mod collision;
pub mod motion;
pub mod resolver;
pub mod scheduler;

use comet_protocol::{Comment, LayoutConfig, OverlayInterval, ScheduledSegment};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    /// A configuration value the math divides by or scans over is not
    /// positive. Reported before any scheduling happens.
    #[error("configuration: {field} must be positive (got {value})")]
    InvalidConfig { field: &'static str, value: i64 },

    /// Input comments are not sorted by arrival time. The scheduler's
    /// incumbent-only collision check is only correct on sorted input,
    /// so this is rejected before any lane state is touched.
    #[error(
        "comment {index} arrives at {arrival}cs, before its predecessor at {prev}cs; \
         input must be sorted by arrival time"
    )]
    UnsortedInput { index: usize, arrival: i64, prev: i64 },
}

/// A degraded-but-defined outcome. Processing always continues; these
/// are returned for caller visibility and logged via `log`.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutWarning {
    /// No collision-free lane existed for this comment; it was placed on
    /// the lane with the smallest worst-case overlap.
    DegradedPlacement {
        /// Index into the input comment slice.
        comment: usize,
        lane: usize,
        /// Worst-case overlap in pixels, always positive here.
        overlap: f64,
    },

    /// Pushing this segment below an overlay would have moved it off
    /// screen, so it was left at its original position.
    DisplacementSuppressed { lane: usize, y: f64, displacement: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOutput {
    pub segments: Vec<ScheduledSegment>,
    pub warnings: Vec<LayoutWarning>,
}

/// Run the full pass: validate, schedule comments into lanes, then
/// resolve overlay overlaps.
///
/// `comments` must be sorted by `arrival` (non-decreasing) and
/// `overlays` by `start`; sorting is the caller's responsibility.
pub fn layout(
    comments: &[Comment],
    overlays: &[OverlayInterval],
    config: &LayoutConfig,
) -> Result<LayoutOutput, LayoutError> {
    validate_config(config)?;
    validate_ordering(comments)?;

    let mut warnings = Vec::new();
    let segments = scheduler::schedule(comments, config, &mut warnings);
    let segments = resolver::resolve(segments, overlays, config, &mut warnings);

    Ok(LayoutOutput { segments, warnings })
}

fn validate_config(config: &LayoutConfig) -> Result<(), LayoutError> {
    let checks: [(&'static str, i64); 6] = [
        ("lane_count", config.lane_count as i64),
        ("display_duration", config.display_duration),
        ("screen_width", i64::from(config.screen_width)),
        ("screen_height", i64::from(config.screen_height)),
        ("glyph_width", i64::from(config.glyph_width)),
        ("line_height", i64::from(config.line_height)),
    ];
    for (field, value) in checks {
        if value <= 0 {
            return Err(LayoutError::InvalidConfig { field, value });
        }
    }
    Ok(())
}

fn validate_ordering(comments: &[Comment]) -> Result<(), LayoutError> {
    for (index, pair) in comments.windows(2).enumerate() {
        if pair[1].arrival < pair[0].arrival {
            return Err(LayoutError::UnsortedInput {
                index: index + 1,
                arrival: pair[1].arrival,
                prev: pair[0].arrival,
            });
        }
    }
    Ok(())
}
