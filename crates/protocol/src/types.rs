use serde::{Deserialize, Serialize};

use crate::shared_str::SharedStr;

/// A single normalized comment event, as handed over by the ingestion side.
///
/// Comments must reach the scheduler in non-decreasing `arrival` order;
/// the core rejects unsorted input rather than mis-scheduling it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Instant the comment's leading edge enters the screen, in
    /// centiseconds on the stream clock.
    pub arrival: i64,
    /// Display text, already language-normalized upstream.
    pub text: SharedStr,
    /// Stable author identifier (user id or display name).
    pub author: SharedStr,
}

/// A fixed, opaque region scrolling comments must not cross — e.g. a
/// pinned announcement banner.
///
/// The band occupies `[0, band_height)` measured from lane-row zero.
/// Overlays are expected pre-sorted by `start`; the core never mutates
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayInterval {
    /// First instant the overlay is visible (centiseconds).
    pub start: i64,
    /// First instant the overlay is gone (centiseconds).
    pub end: i64,
    /// Height of the occupied vertical band, from lane-row zero.
    pub band_height: f64,
    /// How far down a colliding segment must move, typically the
    /// overlay's rendered height plus margins.
    pub displacement: f64,
}

impl OverlayInterval {
    /// Whether the overlay is on screen at any point of `[start, end]`.
    pub fn overlaps_time(&self, start: i64, end: i64) -> bool {
        start < self.end && end > self.start
    }
}

/// One contiguous, linearly-moving piece of a comment's trajectory.
///
/// The scheduler emits one segment per comment; the overlay resolver may
/// replace it with two or three derived segments. A segment is immutable
/// once emitted — derivation builds new values rather than mutating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledSegment {
    pub text: SharedStr,
    pub author: SharedStr,
    /// Lane index the scheduler chose.
    pub lane: usize,
    /// Vertical position of the row, possibly displaced by the resolver.
    pub y: f64,
    /// First instant this piece is live (centiseconds).
    pub start: i64,
    /// Last instant this piece is live (centiseconds).
    pub end: i64,
    /// Scroll speed in pixels per centisecond; motion is leftward.
    pub speed: f64,
    /// Horizontal position of the leading edge at `start`.
    pub entry_x: f64,
    /// Horizontal position of the leading edge at `end`.
    pub exit_x: f64,
    /// True once the resolver has pushed this piece below an overlay.
    pub displaced: bool,
}

impl ScheduledSegment {
    /// Leading-edge position at time `t`, by linear extrapolation.
    ///
    /// Valid for `t` outside `[start, end]` too — the resolver uses this
    /// predictively when computing split positions.
    pub fn position_at(&self, t: i64) -> f64 {
        self.entry_x - self.speed * (t - self.start) as f64
    }

    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}
