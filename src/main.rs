//! Elastic Slider - an iOS Control Center style volume slider
//! Built with iced; the fill stretches past either end and springs back on release

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let settings = features::Settings::load();
    let window = settings.window;
    tracing::info!(
        "Starting with a {}x{} track",
        settings.slider.track_width,
        settings.slider.track_height
    );

    iced::application(move || app::App::new(settings.clone()), app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size(iced::Size::new(window.width, window.height))
        .antialiasing(true)
        .run()
}
