//! Reusable UI widgets
//!
//! Widgets must not import from `crate::app`; they report through generic
//! Message callbacks.

mod elastic_slider;

pub use elastic_slider::elastic_slider;
