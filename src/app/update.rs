//! Message update handlers - thin dispatcher delegating to submodules

mod background;
mod slider;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        if let Some(task) = self.handle_slider(&message) {
            return task;
        }
        if let Some(task) = self.handle_background(message) {
            return task;
        }

        Task::none()
    }
}
