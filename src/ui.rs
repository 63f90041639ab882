//! UI module for the slider window
//!
//! # Architecture
//!
//! - **Widgets** (`widgets`): the `Widget` trait implementation of the slider
//! - **Animation** (`animation`): frame-driven release spring and press fade
//! - **Theme** (`theme`): colors and container styles

pub mod animation;
pub mod theme;
pub mod widgets;
