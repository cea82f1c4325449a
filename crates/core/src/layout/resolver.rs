//! Overlay-overlap resolution.
//!
//! A scrolling segment whose lane row sits inside an overlay's band and
//! whose lifetime crosses the overlay's on-screen interval is rewritten:
//! split at the overlay's edges and pushed below the overlay for the
//! overlapping stretch. Splits are derived as fresh immutable segments;
//! horizontal positions at the split instants are projected from the
//! parent's linear motion so the rendered movement stays seamless.

use comet_protocol::{LayoutConfig, OverlayInterval, ScheduledSegment};

use crate::layout::LayoutWarning;

/// Resolve every segment against every overlay.
///
/// Overlays must be sorted by `start`. Each segment's derived pieces are
/// re-resolved against the remaining overlays, so stacked or adjacent
/// overlays compose.
pub(crate) fn resolve(
    segments: Vec<ScheduledSegment>,
    overlays: &[OverlayInterval],
    config: &LayoutConfig,
    warnings: &mut Vec<LayoutWarning>,
) -> Vec<ScheduledSegment> {
    if overlays.is_empty() {
        return segments;
    }

    let mut resolved = Vec::with_capacity(segments.len());
    for segment in segments {
        let mut pieces = vec![segment];
        for overlay in overlays {
            let mut next = Vec::with_capacity(pieces.len() + 1);
            for piece in pieces {
                resolve_pair(piece, overlay, config, warnings, &mut next);
            }
            pieces = next;
        }
        resolved.append(&mut pieces);
    }
    resolved
}

/// Resolve one segment piece against one overlay, appending the derived
/// piece(s) to `out`. The union of output lifetimes always equals the
/// input lifetime exactly.
fn resolve_pair(
    segment: ScheduledSegment,
    overlay: &OverlayInterval,
    config: &LayoutConfig,
    warnings: &mut Vec<LayoutWarning>,
    out: &mut Vec<ScheduledSegment>,
) {
    // Already pushed below one overlay; by construction it sits under
    // the banner area and is not pushed again.
    if segment.displaced
        || segment.y >= overlay.band_height
        || !overlay.overlaps_time(segment.start, segment.end)
    {
        out.push(segment);
        return;
    }

    let pushed_y = segment.y + overlay.displacement;
    if pushed_y + f64::from(config.line_height) > f64::from(config.screen_height) {
        log::warn!(
            "segment on lane {} at y={} cannot move down {}px without leaving the screen; leaving it in place",
            segment.lane,
            segment.y,
            overlay.displacement,
        );
        warnings.push(LayoutWarning::DisplacementSuppressed {
            lane: segment.lane,
            y: segment.y,
            displacement: overlay.displacement,
        });
        out.push(segment);
        return;
    }

    let starts_inside = overlay.start > segment.start;
    let ends_inside = overlay.end < segment.end;
    match (starts_inside, ends_inside) {
        // Overlay entirely inside the segment's lifetime: dodge under it
        // for exactly the overlay's duration, then return to the lane row.
        (true, true) => {
            out.push(slice(&segment, segment.start, overlay.start, segment.y, false));
            out.push(slice(&segment, overlay.start, overlay.end, pushed_y, true));
            out.push(slice(&segment, overlay.end, segment.end, segment.y, false));
        }
        // Overlay appears mid-flight and outlives the segment: drop down
        // when it appears and stay down.
        (true, false) => {
            out.push(slice(&segment, segment.start, overlay.start, segment.y, false));
            out.push(slice(&segment, overlay.start, segment.end, pushed_y, true));
        }
        // Segment enters under an already-showing overlay that vanishes
        // mid-flight: start down, pop back up when it goes away.
        (false, true) => {
            out.push(slice(&segment, segment.start, overlay.end, pushed_y, true));
            out.push(slice(&segment, overlay.end, segment.end, segment.y, false));
        }
        // Overlay covers the whole lifetime: displaced throughout.
        (false, false) => {
            out.push(ScheduledSegment {
                y: pushed_y,
                displaced: true,
                ..segment
            });
        }
    }
}

/// Derive the sub-segment of `parent` covering `[start, end]` at
/// vertical position `y`, keeping the parent's speed and projecting its
/// entry/exit positions analytically.
fn slice(
    parent: &ScheduledSegment,
    start: i64,
    end: i64,
    y: f64,
    displaced: bool,
) -> ScheduledSegment {
    ScheduledSegment {
        text: parent.text.clone(),
        author: parent.author.clone(),
        lane: parent.lane,
        y,
        start,
        end,
        speed: parent.speed,
        entry_x: parent.position_at(start),
        exit_x: parent.position_at(end),
        displaced,
    }
}
