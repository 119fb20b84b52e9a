// Scroll and pointer math for the cosmetic effects.

/// Navbar switches to its solid style past this many pixels.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Largest drift of the hero background, in pixels.
pub const HERO_PARALLAX_PX: f64 = 24.0;

pub fn scrolled_past(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// How far the reader has scrolled through the timeline, in `[0, 1]`.
/// Progress starts once the section top reaches mid-viewport and completes
/// after 80% of its height.
pub fn timeline_progress(viewport_height: f64, rect_top: f64, rect_height: f64) -> f64 {
    let span = rect_height * 0.8;
    if span <= 0.0 || !span.is_finite() {
        return 0.0;
    }
    let progress = (viewport_height / 2.0 - rect_top) / span;
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0)
}

pub fn timeline_step(progress: f64, steps: usize) -> usize {
    if steps == 0 {
        return 0;
    }
    let step = (progress.clamp(0.0, 1.0) * steps as f64).floor() as usize;
    step.min(steps - 1)
}

/// Offset proportional to the pointer's distance from the centre of
/// `extent`, bounded by `max_shift` either way.
pub fn parallax_offset(pointer: f64, extent: f64, max_shift: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    let centre = extent / 2.0;
    let ratio = ((pointer - centre) / centre).clamp(-1.0, 1.0);
    ratio * max_shift
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_threshold_is_strict() {
        assert!(!scrolled_past(50.0, NAV_SCROLL_THRESHOLD));
        assert!(scrolled_past(50.5, NAV_SCROLL_THRESHOLD));
    }

    #[test]
    fn progress_is_clamped() {
        // section still below the fold
        assert_eq!(timeline_progress(800.0, 1200.0, 2000.0), 0.0);
        // top exactly at mid-viewport
        assert_eq!(timeline_progress(800.0, 400.0, 2000.0), 0.0);
        // half way through the 80% span
        assert!((timeline_progress(800.0, -400.0, 2000.0) - 0.5).abs() < 1e-9);
        // long past the section
        assert_eq!(timeline_progress(800.0, -5000.0, 2000.0), 1.0);
        assert_eq!(timeline_progress(800.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn steps_follow_progress() {
        assert_eq!(timeline_step(0.0, 4), 0);
        assert_eq!(timeline_step(0.24, 4), 0);
        assert_eq!(timeline_step(0.25, 4), 1);
        assert_eq!(timeline_step(0.74, 4), 2);
        assert_eq!(timeline_step(1.0, 4), 3);
        assert_eq!(timeline_step(0.5, 0), 0);
    }

    #[test]
    fn parallax_is_proportional_and_bounded() {
        assert_eq!(parallax_offset(500.0, 1000.0, 20.0), 0.0);
        assert_eq!(parallax_offset(1000.0, 1000.0, 20.0), 20.0);
        assert_eq!(parallax_offset(0.0, 1000.0, 20.0), -20.0);
        assert_eq!(parallax_offset(750.0, 1000.0, 20.0), 10.0);
        assert_eq!(parallax_offset(4000.0, 1000.0, 20.0), 20.0);
        assert_eq!(parallax_offset(10.0, 0.0, 20.0), 0.0);
    }
}
