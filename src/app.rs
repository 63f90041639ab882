//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::Settings;
pub use message::Message;
pub use state::{App, SliderUi};

impl App {
    /// Create new application instance
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        let slider = SliderUi::new(&settings.slider);
        let app = Self {
            settings,
            slider,
            background: None,
        };

        let init_task = app.load_background_task();
        (app, init_task)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn title(&self) -> String {
        "Elastic Slider".to_string()
    }

    /// Frame ticks, only while something is animating
    pub fn subscription(&self) -> iced::Subscription<Message> {
        if self.slider.has_active_animations() {
            iced::window::frames().map(Message::AnimationTick)
        } else {
            iced::Subscription::none()
        }
    }
}
