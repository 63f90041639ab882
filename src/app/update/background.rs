//! Background image message handlers

use iced::Task;

use crate::app::{App, Message};

impl App {
    /// Task that loads the configured background, or the built-in backdrop
    pub(crate) fn load_background_task(&self) -> Task<Message> {
        let path = self.settings.background.image_path.clone();
        let sigma = self.settings.background.blur_sigma;

        match &path {
            Some(path) => tracing::info!("Loading background from {}", path.display()),
            None => tracing::info!("No background image configured, using built-in backdrop"),
        }
        Task::perform(
            crate::features::background::load(path, sigma),
            Message::BackgroundLoaded,
        )
    }

    pub(super) fn handle_background(&mut self, message: Message) -> Option<Task<Message>> {
        match message {
            Message::BackgroundLoaded(handle) => {
                self.background = handle;
                Some(Task::none())
            }
            _ => None,
        }
    }
}
