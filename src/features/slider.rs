//! Slider model: maps a vertical drag to a fill level with rubber-band overshoot
//!
//! The model is pure state. The widget reports drag samples, the app feeds
//! them here, and the view renders whatever `fill_level` currently is.
//!
//! ```text
//! offset = -translation_y + previous_offset
//! offset > H      => fill = 1 + (offset - H) * k / H
//! offset < 0      => fill = offset * k / H
//! otherwise       => fill = offset / H
//! ```

use serde::{Deserialize, Serialize};

/// Spring parameters for the release transition, in response/damping form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseSpring {
    /// Approximate settle time in seconds
    pub response: f32,
    /// 1.0 = critically damped, below 1.0 overshoots
    pub damping_fraction: f32,
}

impl Default for ReleaseSpring {
    fn default() -> Self {
        Self {
            response: 0.3,
            damping_fraction: 0.8,
        }
    }
}

/// Geometry and feel of the slider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub track_width: f32,
    /// Track height H in logical pixels
    pub track_height: f32,
    pub corner_radius: f32,
    /// Stretch coefficient k applied past either end
    pub stretch: f32,
    pub release: ReleaseSpring,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            track_width: 90.0,
            track_height: 200.0,
            corner_radius: 20.0,
            stretch: 0.3,
            release: ReleaseSpring::default(),
        }
    }
}

impl SliderConfig {
    /// Returns a reason when the values cannot drive the mapping
    pub fn validate(&self) -> Result<(), String> {
        if !(self.track_height.is_finite() && self.track_height > 0.0) {
            return Err(format!("track_height must be positive, got {}", self.track_height));
        }
        if !(self.track_width.is_finite() && self.track_width > 0.0) {
            return Err(format!("track_width must be positive, got {}", self.track_width));
        }
        if !(self.stretch.is_finite() && self.stretch >= 0.0) {
            return Err(format!("stretch must not be negative, got {}", self.stretch));
        }
        if !(self.release.response > 0.0 && self.release.damping_fraction > 0.0) {
            return Err("release spring parameters must be positive".to_string());
        }
        Ok(())
    }
}

/// One gesture-update event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    /// Vertical distance from the gesture start, positive downward
    pub translation_y: f32,
}

impl DragSample {
    pub fn new(translation_y: f32) -> Self {
        Self { translation_y }
    }
}

/// Outcome of ending a gesture: the displayed fill moves `from` -> `to`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settle {
    pub from: f32,
    pub to: f32,
}

impl Settle {
    /// Whether the release actually had an overshoot to undo
    pub fn is_noop(&self) -> bool {
        (self.from - self.to).abs() <= f32::EPSILON
    }
}

/// Fill level for a raw vertical offset
pub fn fill_for_offset(offset: f32, height: f32, stretch: f32) -> f32 {
    if offset > height {
        let excess = offset - height;
        1.0 + excess * stretch / height
    } else if offset < 0.0 {
        offset * stretch / height
    } else {
        offset / height
    }
}

/// Slider state owned by the app for the lifetime of the window
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SliderState {
    current_offset: f32,
    previous_offset: f32,
    fill_level: f32,
}

impl SliderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_offset(&self) -> f32 {
        self.current_offset
    }

    pub fn previous_offset(&self) -> f32 {
        self.previous_offset
    }

    pub fn fill_level(&self) -> f32 {
        self.fill_level
    }

    /// Apply one drag sample relative to the committed baseline
    pub fn drag_changed(&mut self, sample: DragSample, config: &SliderConfig) {
        let offset = -sample.translation_y + self.previous_offset;
        self.fill_level = fill_for_offset(offset, config.track_height, config.stretch);
        self.current_offset = offset;
    }

    /// Clamp the fill and commit the matching offset as the next baseline
    pub fn drag_ended(&mut self, config: &SliderConfig) -> Settle {
        let from = self.fill_level;
        self.fill_level = from.clamp(0.0, 1.0);
        self.previous_offset = self.fill_level * config.track_height;
        self.current_offset = self.previous_offset;

        Settle {
            from,
            to: self.fill_level,
        }
    }

    /// An interrupted gesture settles the same way a finished one does
    pub fn drag_cancelled(&mut self, config: &SliderConfig) -> Settle {
        self.drag_ended(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn config() -> SliderConfig {
        SliderConfig::default()
    }

    fn drag(state: &mut SliderState, dy: f32) {
        state.drag_changed(DragSample::new(dy), &config());
    }

    #[test]
    fn test_linear_region() {
        let mut state = SliderState::new();
        for dy in [0.0, -1.0, -37.5, -100.0, -199.0, -200.0] {
            drag(&mut state, dy);
            assert!((state.fill_level() - (-dy / 200.0)).abs() < EPS, "dy = {dy}");
            assert_eq!(state.current_offset(), -dy);
        }
    }

    #[test]
    fn test_drag_half_way() {
        let mut state = SliderState::new();
        drag(&mut state, -100.0);
        assert!((state.fill_level() - 0.5).abs() < EPS);
    }

    #[test]
    fn test_overshoot_above_and_release() {
        let mut state = SliderState::new();
        drag(&mut state, -250.0);
        assert_eq!(state.current_offset(), 250.0);
        assert!((state.fill_level() - 1.075).abs() < EPS);

        let settle = state.drag_ended(&config());
        assert!((settle.from - 1.075).abs() < EPS);
        assert_eq!(settle.to, 1.0);
        assert_eq!(state.fill_level(), 1.0);
        assert_eq!(state.previous_offset(), 200.0);
        assert_eq!(state.current_offset(), 200.0);
    }

    #[test]
    fn test_overshoot_below_from_full() {
        let mut state = SliderState::new();
        drag(&mut state, -200.0);
        state.drag_ended(&config());
        assert_eq!(state.previous_offset(), 200.0);

        drag(&mut state, 300.0);
        assert_eq!(state.current_offset(), -100.0);
        assert!((state.fill_level() + 0.15).abs() < EPS);

        state.drag_ended(&config());
        assert_eq!(state.fill_level(), 0.0);
        assert_eq!(state.previous_offset(), 0.0);
    }

    #[test]
    fn test_overshoot_is_monotonic() {
        let h = 200.0;
        let k = 0.3;
        let mut last_above = fill_for_offset(h, h, k);
        let mut last_below = fill_for_offset(0.0, h, k);
        for e in 1..50 {
            let e = e as f32 * 3.0;
            let above = fill_for_offset(h + e, h, k);
            let below = fill_for_offset(-e, h, k);
            assert!((above - (1.0 + e * k / h)).abs() < EPS);
            assert!((below - (-e * k / h)).abs() < EPS);
            assert!(above > last_above);
            assert!(below < last_below);
            last_above = above;
            last_below = below;
        }
    }

    #[test]
    fn test_continuous_at_edges() {
        let h = 200.0;
        let k = 0.3;
        assert!((fill_for_offset(h + 1e-3, h, k) - 1.0).abs() < EPS);
        assert!(fill_for_offset(-1e-3, h, k).abs() < EPS);
    }

    #[test]
    fn test_release_always_in_range() {
        for dy in [-1000.0, -250.0, -30.0, 0.0, 45.0, 500.0, 10_000.0] {
            let mut state = SliderState::new();
            drag(&mut state, -120.0);
            state.drag_ended(&config());
            drag(&mut state, dy);
            state.drag_ended(&config());

            let fill = state.fill_level();
            assert!((0.0..=1.0).contains(&fill), "dy = {dy}, fill = {fill}");
            assert!((state.previous_offset() - fill * 200.0).abs() < EPS);
        }
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut state = SliderState::new();
        drag(&mut state, -260.0);
        state.drag_ended(&config());
        let once = state;
        let settle = state.drag_ended(&config());
        assert_eq!(state, once);
        assert!(settle.is_noop());
    }

    #[test]
    fn test_baseline_carries_between_gestures() {
        let mut state = SliderState::new();
        drag(&mut state, -80.0);
        state.drag_ended(&config());
        drag(&mut state, -40.0);
        assert!((state.fill_level() - 0.6).abs() < EPS);
    }

    #[test]
    fn test_cancel_settles_like_release() {
        let mut a = SliderState::new();
        let mut b = SliderState::new();
        drag(&mut a, 90.0);
        drag(&mut b, 90.0);
        assert_eq!(a.drag_ended(&config()), b.drag_cancelled(&config()));
        assert_eq!(a, b);
    }

    #[test]
    fn test_deterministic() {
        let samples = [-10.0, -80.0, -230.0, -400.0, -150.0, 60.0];
        let run = || {
            let mut state = SliderState::new();
            for dy in samples {
                drag(&mut state, dy);
            }
            state.drag_ended(&config());
            state.fill_level()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_validate_rejects_bad_geometry() {
        assert!(config().validate().is_ok());

        let flat = SliderConfig {
            track_height: 0.0,
            ..config()
        };
        assert!(flat.validate().is_err());

        let inverted = SliderConfig {
            stretch: -0.3,
            ..config()
        };
        assert!(inverted.validate().is_err());
    }
}
