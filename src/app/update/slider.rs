//! Gesture and animation message handlers

use iced::Task;
use iced::time::Instant;

use crate::app::{App, Message};
use crate::features::Settle;

impl App {
    pub(super) fn handle_slider(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::DragChanged(sample) => {
                let slider = &mut self.slider;
                slider.state.drag_changed(*sample, &self.settings.slider);
                // The finger owns the fill while dragging; any running settle stops here
                slider.release.set_position(slider.state.fill_level() as f64);
                slider.press.press();
                slider.last_tick = Some(Instant::now());
                Some(Task::none())
            }

            Message::DragEnded => {
                let offset = self.slider.state.current_offset();
                let settle = self.slider.state.drag_ended(&self.settings.slider);
                tracing::debug!(
                    "Drag ended at offset {:.1}: {:.3} -> {:.3}",
                    offset,
                    settle.from,
                    settle.to
                );
                self.settle(settle);
                Some(Task::none())
            }

            Message::DragCancelled => {
                let settle = self.slider.state.drag_cancelled(&self.settings.slider);
                tracing::debug!("Drag cancelled: {:.3} -> {:.3}", settle.from, settle.to);
                self.settle(settle);
                Some(Task::none())
            }

            Message::AnimationTick(now) => {
                self.slider.tick(*now);
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Spring the displayed fill from the overshoot back into range
    fn settle(&mut self, settle: Settle) {
        let slider = &mut self.slider;
        slider.press.release();
        slider.last_tick = Some(Instant::now());

        if settle.is_noop() {
            slider.release.set_position(settle.to as f64);
        } else {
            slider.release.set_position(settle.from as f64);
            slider.release.set_target(settle.to as f64);
        }
    }
}
