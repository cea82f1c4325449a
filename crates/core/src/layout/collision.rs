//! Worst-case overlap between two comments sharing a lane.
//!
//! Both comments move linearly, so the overlap between their spans is a
//! piecewise-linear function of time whose maximum occurs at one of two
//! instants: when the candidate enters the screen, or when the incumbent
//! leaves it. Checking those two closed-form expressions is exact.

use crate::layout::motion::Motion;

/// Maximum pixel overlap that `candidate` would ever have with
/// `incumbent` if placed on the same lane.
///
/// Requires `candidate.arrival >= incumbent.arrival` (enforced upstream
/// by the sorted-input contract). A result `<= 0` means the two can
/// never visually collide; a positive result is the worst-case overlap
/// in pixels. An empty lane (`None` incumbent) never collides.
pub fn max_overlap(incumbent: Option<&Motion>, candidate: &Motion, screen_width: f64) -> f64 {
    let Some(incumbent) = incumbent else {
        return 0.0;
    };

    // How much of the incumbent's tail still hangs past the right edge
    // when the candidate enters.
    let gap = incumbent.speed * (candidate.arrival - incumbent.arrival) as f64;
    let at_candidate_entry = incumbent.width - gap;

    // How far the candidate has advanced past the left edge's worth of
    // screen by the time the incumbent fully exits. The candidate is
    // faster whenever it is longer, so it can catch up from behind.
    let advanced = candidate.speed * (incumbent.exit - candidate.arrival) as f64;
    let at_incumbent_exit = advanced - screen_width;

    at_candidate_entry.max(at_incumbent_exit)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: f64 = 1280.0;
    const DURATION: i64 = 600;

    fn motion(arrival: i64, width: f64) -> Motion {
        Motion {
            arrival,
            exit: arrival + DURATION,
            width,
            speed: (SCREEN + width) / DURATION as f64,
        }
    }

    /// Sampled ground truth: do the two spans ever overlap on screen?
    /// The head of a comment at time t is at `SCREEN - speed * dt`, its
    /// tail `width` further right; only the part inside `[0, SCREEN]` is
    /// visible.
    fn visible_span(m: &Motion, t: i64) -> Option<(f64, f64)> {
        let head = SCREEN - m.speed * (t - m.arrival) as f64;
        let left = head.max(0.0);
        let right = (head + m.width).min(SCREEN);
        (right > left).then_some((left, right))
    }

    fn overlap_by_simulation(first: &Motion, second: &Motion) -> bool {
        let t0 = first.arrival.min(second.arrival);
        let t1 = first.exit.max(second.exit);
        for t in t0..=t1 {
            let (Some(a), Some(b)) = (visible_span(first, t), visible_span(second, t)) else {
                continue;
            };
            if a.1.min(b.1) - a.0.max(b.0) > 1e-9 {
                return true;
            }
        }
        false
    }

    #[test]
    fn empty_lane_never_collides() {
        let candidate = motion(0, 160.0);
        assert_eq!(max_overlap(None, &candidate, SCREEN), 0.0);
    }

    #[test]
    fn close_arrivals_overlap_at_entry() {
        // 160px incumbent at t=0, candidate 50cs later.
        // 160 - 2.4 * 50 = 40px of tail still on screen.
        let incumbent = motion(0, 160.0);
        let candidate = motion(50, 160.0);
        assert_eq!(max_overlap(Some(&incumbent), &candidate, SCREEN), 40.0);
    }

    #[test]
    fn distant_arrivals_never_collide() {
        let incumbent = motion(0, 160.0);
        let candidate = motion(400, 160.0);
        assert!(max_overlap(Some(&incumbent), &candidate, SCREEN) <= 0.0);
    }

    #[test]
    fn fast_long_candidate_catches_slow_short_incumbent() {
        // A short, slow incumbent followed by a much longer, faster
        // candidate: no overlap at entry, but the candidate rams into it
        // before it exits.
        let incumbent = motion(0, 40.0);
        let candidate = motion(100, 2000.0);
        let overlap = max_overlap(Some(&incumbent), &candidate, SCREEN);
        assert!(overlap > 0.0);
        // At-entry term alone would have said "no collision".
        assert!(incumbent.width - incumbent.speed * 100.0 <= 0.0);
    }

    #[test]
    fn sign_agrees_with_sampled_simulation() {
        let incumbent_widths = [40.0, 160.0, 480.0, 1200.0];
        let candidate_widths = [40.0, 160.0, 480.0, 2400.0];
        let deltas = [0, 10, 50, 120, 300, 599, 700];

        for &iw in &incumbent_widths {
            for &cw in &candidate_widths {
                for &dt in &deltas {
                    let incumbent = motion(0, iw);
                    let candidate = motion(dt, cw);
                    let analytic = max_overlap(Some(&incumbent), &candidate, SCREEN);
                    let simulated = overlap_by_simulation(&incumbent, &candidate);
                    assert_eq!(
                        analytic > 1e-9,
                        simulated,
                        "disagreement for widths {iw}/{cw}, delta {dt}: analytic={analytic}"
                    );
                }
            }
        }
    }
}
