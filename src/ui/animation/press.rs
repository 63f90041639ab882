//! Press highlight for the slider track using iced_anim

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Fade-in/out duration while a gesture is held
const PRESS_DURATION: Duration = Duration::from_millis(150);

fn press_easing() -> Easing {
    Easing::EASE_OUT.with_duration(PRESS_DURATION)
}

/// Eased 0..1 progress that follows whether the track is held
#[derive(Debug)]
pub struct PressHighlight {
    animation: Animated<f32>,
    pressed: bool,
}

impl Default for PressHighlight {
    fn default() -> Self {
        Self::new()
    }
}

impl PressHighlight {
    pub fn new() -> Self {
        Self {
            animation: Animated::transition(0.0, press_easing()),
            pressed: false,
        }
    }

    /// Go towards 1.0; repeated calls during one gesture are ignored
    pub fn press(&mut self) {
        if !self.pressed {
            self.pressed = true;
            self.animation.update(1.0.into());
        }
    }

    /// Go back towards 0.0
    pub fn release(&mut self) {
        if self.pressed {
            self.pressed = false;
            self.animation.update(0.0.into());
        }
    }

    /// Current progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        *self.animation.value()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Must be called on each animation frame
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}
