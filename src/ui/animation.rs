//! Animation drivers for the slider
//!
//! - [`Spring`]: analytical damped spring, settles the fill after release
//! - [`PressHighlight`]: eased `iced_anim` transition for the held state
//!
//! Both are advanced from `Message::AnimationTick`, which the app only
//! subscribes to while one of them is moving.

mod press;
pub mod spring;

pub use press::PressHighlight;
pub use spring::{Spring, SpringParams};
