//! Feature modules - slider logic separated from UI
//!
//! Features should not depend on UI components directly.

pub mod background;
pub mod settings;
pub mod slider;

pub use settings::Settings;
pub use slider::{DragSample, Settle, SliderConfig, SliderState};
