//! Application messages

use iced::time::Instant;
use iced::widget::image;

use crate::features::DragSample;

/// Application messages
#[derive(Clone)]
pub enum Message {
    // ============ Gesture ============
    /// Pointer moved while the track is held (also sent on press, translation 0)
    DragChanged(DragSample),
    /// Pointer released
    DragEnded,
    /// Gesture interrupted (finger lost, window unfocused)
    DragCancelled,

    // ============ Animation ============
    /// Frame tick while the release spring or press fade is running
    AnimationTick(Instant),

    // ============ Background ============
    /// Blurred background decoded, `None` when it could not be loaded
    BackgroundLoaded(Option<image::Handle>),
}

// Manual Debug implementation keeps frame ticks and image handles short in logs
impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DragChanged(sample) => write!(f, "DragChanged({:.1})", sample.translation_y),
            Self::DragEnded => write!(f, "DragEnded"),
            Self::DragCancelled => write!(f, "DragCancelled"),
            Self::AnimationTick(_) => write!(f, "AnimationTick"),
            Self::BackgroundLoaded(handle) => {
                write!(f, "BackgroundLoaded(ready={})", handle.is_some())
            }
        }
    }
}
