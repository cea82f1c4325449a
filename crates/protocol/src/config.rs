use serde::{Deserialize, Serialize};

/// Layout configuration, passed explicitly into every pass.
///
/// All time values are centiseconds, all distances logical pixels.
/// The core validates this before scheduling; see
/// `comet_core::layout::LayoutError::InvalidConfig`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Visible width in pixels. A comment enters at `x = screen_width`
    /// and exits once its tail passes `x = 0`.
    pub screen_width: u32,
    /// Visible height in pixels. Bounds how far the resolver may push a
    /// segment down.
    pub screen_height: u32,
    /// Width of one glyph. Comment width = char count * glyph width.
    pub glyph_width: u32,
    /// Vertical extent of one lane row, including spacing.
    pub line_height: u32,
    /// How long a comment takes to cross the screen, in centiseconds.
    pub display_duration: i64,
    /// Total number of lanes (primary rows plus half-offset rows).
    pub lane_count: usize,
    /// Lanes `0..primary_row_count` sit on whole row positions; the rest
    /// are offset by half a line height.
    pub primary_row_count: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            screen_width: 1280,
            screen_height: 720,
            glyph_width: 40,
            line_height: 44,
            display_duration: 600,
            lane_count: 21,
            primary_row_count: 11,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fills_omitted_fields() {
        let cfg: LayoutConfig = serde_json::from_str(r#"{"lane_count": 3}"#)
            .unwrap_or_else(|_| LayoutConfig::default());
        assert_eq!(cfg.lane_count, 3);
        assert_eq!(cfg.screen_width, LayoutConfig::default().screen_width);
    }
}
