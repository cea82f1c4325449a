//! Geometry and timing primitives. Everything here is closed-form:
//! comments move linearly, so positions and speeds are computed exactly,
//! never sampled.

use comet_protocol::{Comment, LayoutConfig};

/// Precomputed motion descriptor for one comment, used by the collision
/// estimator and as per-lane incumbent state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// Instant the leading edge enters the screen (centiseconds).
    pub arrival: i64,
    /// Instant the trailing edge leaves the screen (centiseconds).
    pub exit: i64,
    /// Rendered text width in pixels.
    pub width: f64,
    /// Scroll speed in pixels per centisecond, always positive.
    pub speed: f64,
}

impl Motion {
    pub fn of(comment: &Comment, config: &LayoutConfig) -> Self {
        let width = text_width(&comment.text, config);
        Self {
            arrival: comment.arrival,
            exit: comment.arrival + config.display_duration,
            width,
            speed: scroll_speed(width, config),
        }
    }
}

/// Rendered width of a comment: glyph count times glyph width.
pub fn text_width(text: &str, config: &LayoutConfig) -> f64 {
    text.chars().count() as f64 * f64::from(config.glyph_width)
}

/// Speed a comment must scroll at to cross the screen in exactly
/// `display_duration`: longer comments move faster so every comment's
/// full travel (screen width plus its own width) takes the same time.
pub fn scroll_speed(text_width: f64, config: &LayoutConfig) -> f64 {
    (f64::from(config.screen_width) + text_width) / config.display_duration as f64
}

/// Vertical position of a lane's row.
///
/// Two-tier rhythm: the first `primary_row_count` lanes sit on whole row
/// positions; overflow lanes repeat from the top offset by half a line
/// height, filling the visual gaps between primary rows.
pub fn lane_y(lane: usize, config: &LayoutConfig) -> f64 {
    let line = f64::from(config.line_height);
    if lane < config.primary_row_count {
        line * lane as f64
    } else {
        line * ((lane - config.primary_row_count) as f64 + 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LayoutConfig {
        LayoutConfig {
            screen_width: 1280,
            glyph_width: 40,
            display_duration: 600,
            line_height: 44,
            primary_row_count: 11,
            ..LayoutConfig::default()
        }
    }

    #[test]
    fn speed_matches_travel_distance() {
        // 4 glyphs * 40px = 160px wide; (1280 + 160) / 600 = 2.4 px/cs.
        let cfg = config();
        let width = text_width("AAAA", &cfg);
        assert_eq!(width, 160.0);
        assert_eq!(scroll_speed(width, &cfg), 2.4);
    }

    #[test]
    fn width_counts_chars_not_bytes() {
        let cfg = config();
        assert_eq!(text_width("コメント", &cfg), 160.0);
    }

    #[test]
    fn speed_is_positive_for_empty_text() {
        // Degenerate but defined: an empty comment still has the screen
        // width to cross.
        let cfg = config();
        assert!(scroll_speed(0.0, &cfg) > 0.0);
    }

    #[test]
    fn primary_lanes_sit_on_whole_rows() {
        let cfg = config();
        assert_eq!(lane_y(0, &cfg), 0.0);
        assert_eq!(lane_y(1, &cfg), 44.0);
        assert_eq!(lane_y(10, &cfg), 440.0);
    }

    #[test]
    fn overflow_lanes_are_half_offset() {
        let cfg = config();
        assert_eq!(lane_y(11, &cfg), 22.0);
        assert_eq!(lane_y(12, &cfg), 66.0);
    }

    #[test]
    fn motion_of_comment() {
        let cfg = config();
        let m = Motion::of(
            &Comment {
                arrival: 100,
                text: "AAAA".into(),
                author: "u".into(),
            },
            &cfg,
        );
        assert_eq!(m.arrival, 100);
        assert_eq!(m.exit, 700);
        assert_eq!(m.width, 160.0);
        assert_eq!(m.speed, 2.4);
    }
}
