//! Application state definitions

use iced::time::Instant;
use iced::widget::image;

use crate::features::{Settings, SliderConfig, SliderState};
use crate::ui::animation::{PressHighlight, Spring, SpringParams};

/// Main application state
pub struct App {
    /// Settings loaded at startup
    pub settings: Settings,
    /// Slider model and its animations
    pub slider: SliderUi,
    /// Blurred background, `None` until loaded or when unavailable
    pub background: Option<image::Handle>,
}

/// Slider model plus what is needed to draw it between gestures
pub struct SliderUi {
    pub state: SliderState,
    /// Displayed fill level; follows the model while dragging, springs after release
    pub release: Spring,
    pub press: PressHighlight,
    /// Time of the previous animation step
    pub last_tick: Option<Instant>,
}

impl SliderUi {
    pub fn new(config: &SliderConfig) -> Self {
        let params = SpringParams::from_response(
            config.release.response as f64,
            config.release.damping_fraction as f64,
        );

        Self {
            state: SliderState::new(),
            release: Spring::new(0.0, params),
            press: PressHighlight::new(),
            last_tick: None,
        }
    }

    /// Fill level to render this frame
    pub fn displayed_fill(&self) -> f32 {
        self.release.position() as f32
    }

    /// Check if the release spring or the press fade still needs frames
    pub fn has_active_animations(&self) -> bool {
        !self.release.arrived() || self.press.is_animating()
    }

    /// Advance animations to `now`
    pub fn tick(&mut self, now: Instant) {
        let delta = self
            .last_tick
            .map(|last| now.saturating_duration_since(last).as_secs_f64())
            .unwrap_or(0.0);

        self.release.update(delta);
        self.press.tick(now);

        self.last_tick = if self.has_active_animations() {
            Some(now)
        } else {
            None
        };
    }
}
