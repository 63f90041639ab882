//! Theme for the slider window
//! Frosted dark track over a blurred backdrop, white fill

use iced::color;
use iced::widget::container;
use iced::{Background, Color, Theme};

// ============================================================================
// Color Palette
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x101014);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xd9d9de);
}

/// Window background shown when no image is loaded
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Translucent black, close to an ultra-thin material over a busy image
pub const TRACK_BACKDROP: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.35);

/// Backdrop while the track is held
pub const TRACK_BACKDROP_PRESSED: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.5);

/// Slider fill
pub const TRACK_FILL: Color = Color::WHITE;

/// Linear blend of two colors, `t` in 0.0..=1.0
pub fn mix(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color::from_rgba(
        from.r + (to.r - from.r) * t,
        from.g + (to.g - from.g) * t,
        from.b + (to.b - from.b) * t,
        from.a + (to.a - from.a) * t,
    )
}

// ============================================================================
// Container Styles
// ============================================================================

/// Fallback backdrop when the background image is missing
pub fn fallback_backdrop(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_endpoints() {
        assert_eq!(mix(TRACK_BACKDROP, TRACK_BACKDROP_PRESSED, 0.0), TRACK_BACKDROP);
        let pressed = mix(TRACK_BACKDROP, TRACK_BACKDROP_PRESSED, 1.0);
        assert!((pressed.a - TRACK_BACKDROP_PRESSED.a).abs() < 1e-6);
    }

    #[test]
    fn test_mix_clamps() {
        let over = mix(Color::BLACK, Color::WHITE, 3.0);
        assert_eq!(over, Color::WHITE);
    }
}
