//! Greedy lane assignment.
//!
//! One left-to-right scan over arrival-ordered comments. Each lane
//! remembers only its most recent occupant: on sorted input a comment
//! that has fully exited can never overlap a later one, so the latest
//! incumbent is the only collision that matters.

use comet_protocol::{Comment, LayoutConfig, ScheduledSegment};

use crate::layout::LayoutWarning;
use crate::layout::collision::max_overlap;
use crate::layout::motion::{Motion, lane_y};

/// Assign every comment to a lane and emit its initial segment.
///
/// Comments with empty text are skipped. When no lane is collision-free
/// the comment takes the least-overlap lane and a
/// [`LayoutWarning::DegradedPlacement`] is recorded.
///
/// Callers must have validated the configuration and input ordering.
pub(crate) fn schedule(
    comments: &[Comment],
    config: &LayoutConfig,
    warnings: &mut Vec<LayoutWarning>,
) -> Vec<ScheduledSegment> {
    let screen_width = f64::from(config.screen_width);

    // Latest incumbent per lane, owned by this pass alone.
    let mut lanes: Vec<Option<Motion>> = vec![None; config.lane_count];
    let mut segments = Vec::with_capacity(comments.len());

    for (index, comment) in comments.iter().enumerate() {
        if comment.text.is_empty() {
            continue;
        }
        let candidate = Motion::of(comment, config);

        let mut chosen = None;
        let mut fallback = 0;
        let mut fallback_overlap = f64::INFINITY;
        for (lane, incumbent) in lanes.iter().enumerate() {
            let overlap = max_overlap(incumbent.as_ref(), &candidate, screen_width);
            if overlap <= 0.0 {
                // First collision-free lane wins: lowest index gives the
                // deterministic top-down stacking order.
                chosen = Some(lane);
                break;
            }
            if overlap < fallback_overlap {
                fallback_overlap = overlap;
                fallback = lane;
            }
        }

        let lane = chosen.unwrap_or_else(|| {
            log::debug!(
                "no free lane for comment {index} at {}cs; lane {fallback} overlaps by {fallback_overlap:.1}px",
                comment.arrival,
            );
            warnings.push(LayoutWarning::DegradedPlacement {
                comment: index,
                lane: fallback,
                overlap: fallback_overlap,
            });
            fallback
        });

        lanes[lane] = Some(candidate);
        segments.push(ScheduledSegment {
            text: comment.text.clone(),
            author: comment.author.clone(),
            lane,
            y: lane_y(lane, config),
            start: candidate.arrival,
            end: candidate.exit,
            speed: candidate.speed,
            entry_x: screen_width,
            exit_x: -candidate.width,
            displaced: false,
        });
    }

    segments
}
