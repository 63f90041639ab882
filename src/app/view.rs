//! Application view rendering

use iced::widget::{container, image, stack};
use iced::{ContentFit, Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::{theme, widgets};

impl App {
    /// Slider centered over the blurred background
    pub fn view(&self) -> Element<'_, Message> {
        let slider = widgets::elastic_slider(self.slider.displayed_fill(), Message::DragChanged)
            .config(&self.settings.slider)
            .highlight(self.slider.press.progress())
            .on_release(Message::DragEnded)
            .on_cancel(Message::DragCancelled);

        let centered = container(slider).center_x(Fill).center_y(Fill);

        match &self.background {
            Some(handle) => stack![
                image(handle.clone())
                    .width(Fill)
                    .height(Fill)
                    .content_fit(ContentFit::Cover),
                centered,
            ]
            .into(),
            None => centered.style(theme::fallback_backdrop).into(),
        }
    }
}
