//! Elastic vertical slider widget
//!
//! A tall rounded track with a white fill rising from the bottom, in the
//! style of the iOS Control Center volume control. The widget holds no value
//! of its own: it reports raw drag translations and draws whatever fill level
//! it is given, including levels outside `0.0..=1.0` where the track
//! stretches toward the gesture.

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::border::Radius;
use iced::event::Event;
use iced::mouse;
use iced::touch;
use iced::window;
use iced::{Background, Border, Element, Point, Rectangle, Size, Theme};

use crate::features::slider::{DragSample, SliderConfig};
use crate::ui::theme;

/// Track and fill rectangles for a given fill level
///
/// `fill >= 0`: the track keeps its bottom edge and grows upward once the
/// fill passes the top. `fill < 0`: the track keeps its top edge and grows
/// downward by `-fill * H`, with nothing filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    pub track: Rectangle,
    pub fill: Option<Rectangle>,
}

impl TrackGeometry {
    pub fn new(bounds: Rectangle, fill_level: f32) -> Self {
        let height = bounds.height;

        if fill_level < 0.0 {
            let track = Rectangle {
                height: height + (-fill_level * height),
                ..bounds
            };
            return Self { track, fill: None };
        }

        let filled = fill_level * height;
        let track_height = height.max(filled);
        let bottom = bounds.y + height;

        let track = Rectangle {
            x: bounds.x,
            y: bottom - track_height,
            width: bounds.width,
            height: track_height,
        };
        let fill = (filled > 0.0).then(|| Rectangle {
            x: bounds.x,
            y: bottom - filled,
            width: bounds.width,
            height: filled,
        });

        Self { track, fill }
    }

    /// Corner radii for the fill so it stays inside the track's rounded outline
    fn fill_radius(&self, corner_radius: f32) -> Radius {
        let Some(fill) = self.fill else {
            return Radius::from(0.0);
        };

        let bottom = corner_radius.min(fill.height / 2.0);
        let gap = fill.y - self.track.y;
        let top = (corner_radius - gap).clamp(0.0, bottom);

        Radius {
            top_left: top,
            top_right: top,
            bottom_right: bottom,
            bottom_left: bottom,
        }
    }
}

/// The elastic slider widget
pub struct ElasticSlider<'a, Message> {
    fill_level: f32,
    on_drag: Box<dyn Fn(DragSample) -> Message + 'a>,
    on_release: Option<Message>,
    on_cancel: Option<Message>,
    width: f32,
    height: f32,
    corner_radius: f32,
    highlight: f32,
}

impl<'a, Message> ElasticSlider<'a, Message> {
    /// Creates a new slider showing `fill_level`
    pub fn new<F>(fill_level: f32, on_drag: F) -> Self
    where
        F: Fn(DragSample) -> Message + 'a,
    {
        let config = SliderConfig::default();
        Self {
            fill_level,
            on_drag: Box::new(on_drag),
            on_release: None,
            on_cancel: None,
            width: config.track_width,
            height: config.track_height,
            corner_radius: config.corner_radius,
            highlight: 0.0,
        }
    }

    /// Takes track size and corner radius from a config
    pub fn config(mut self, config: &SliderConfig) -> Self {
        self.width = config.track_width;
        self.height = config.track_height;
        self.corner_radius = config.corner_radius;
        self
    }

    /// Message published when the pointer is released
    pub fn on_release(mut self, message: Message) -> Self {
        self.on_release = Some(message);
        self
    }

    /// Message published when the gesture is interrupted
    pub fn on_cancel(mut self, message: Message) -> Self {
        self.on_cancel = Some(message);
        self
    }

    /// Press highlight progress (0.0 to 1.0)
    pub fn highlight(mut self, progress: f32) -> Self {
        self.highlight = progress.clamp(0.0, 1.0);
        self
    }
}

/// Which pointer owns the current gesture
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pointer {
    Mouse,
    Finger(touch::Finger),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    pointer: Pointer,
    origin: Point,
}

/// State for the elastic slider
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    drag: Option<Drag>,
}

impl<'a, Message> ElasticSlider<'a, Message>
where
    Message: Clone,
{
    fn begin(
        &self,
        state: &mut State,
        pointer: Pointer,
        origin: Point,
        shell: &mut Shell<'_, Message>,
    ) {
        state.drag = Some(Drag { pointer, origin });
        shell.publish((self.on_drag)(DragSample::new(0.0)));
        shell.capture_event();
    }

    fn moved(&self, drag: Drag, position: Point, shell: &mut Shell<'_, Message>) {
        let translation_y = position.y - drag.origin.y;
        shell.publish((self.on_drag)(DragSample::new(translation_y)));
        shell.capture_event();
    }

    fn finish(&self, state: &mut State, cancelled: bool, shell: &mut Shell<'_, Message>) {
        state.drag = None;
        let message = if cancelled {
            self.on_cancel.clone().or_else(|| self.on_release.clone())
        } else {
            self.on_release.clone()
        };
        if let Some(message) = message {
            shell.publish(message);
        }
        shell.capture_event();
    }
}

impl<'a, Message, Renderer> Widget<Message, Theme, Renderer> for ElasticSlider<'a, Message>
where
    Renderer: renderer::Renderer,
    Message: Clone,
{
    fn tag(&self) -> widget::tree::Tag {
        widget::tree::Tag::of::<State>()
    }

    fn state(&self) -> widget::tree::State {
        widget::tree::State::new(State::default())
    }

    fn size(&self) -> Size<iced::Length> {
        Size::new(self.width.into(), self.height.into())
    }

    fn layout(
        &mut self,
        _tree: &mut widget::Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::atomic(limits, self.width, self.height)
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();

        match (event, state.drag) {
            (Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)), None) => {
                if let Some(position) = cursor.position_over(bounds) {
                    self.begin(state, Pointer::Mouse, position, shell);
                }
            }
            (Event::Touch(touch::Event::FingerPressed { id, position }), None) => {
                if bounds.contains(*position) {
                    self.begin(state, Pointer::Finger(*id), *position, shell);
                }
            }
            (Event::Mouse(mouse::Event::CursorMoved { position }), Some(drag))
                if drag.pointer == Pointer::Mouse =>
            {
                self.moved(drag, *position, shell);
            }
            (Event::Touch(touch::Event::FingerMoved { id, position }), Some(drag))
                if drag.pointer == Pointer::Finger(*id) =>
            {
                self.moved(drag, *position, shell);
            }
            (Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)), Some(drag))
                if drag.pointer == Pointer::Mouse =>
            {
                self.finish(state, false, shell);
            }
            (Event::Touch(touch::Event::FingerLifted { id, .. }), Some(drag))
                if drag.pointer == Pointer::Finger(*id) =>
            {
                self.finish(state, false, shell);
            }
            (Event::Touch(touch::Event::FingerLost { id, .. }), Some(drag))
                if drag.pointer == Pointer::Finger(*id) =>
            {
                self.finish(state, true, shell);
            }
            (Event::Window(window::Event::Unfocused), Some(_)) => {
                self.finish(state, true, shell);
            }
            _ => {}
        }
    }

    fn draw(
        &self,
        _tree: &widget::Tree,
        renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let geometry = TrackGeometry::new(layout.bounds(), self.fill_level);
        let backdrop = theme::mix(
            theme::TRACK_BACKDROP,
            theme::TRACK_BACKDROP_PRESSED,
            self.highlight,
        );

        renderer.fill_quad(
            renderer::Quad {
                bounds: geometry.track,
                border: Border::default().rounded(self.corner_radius),
                ..Default::default()
            },
            Background::Color(backdrop),
        );

        if let Some(fill) = geometry.fill {
            renderer.fill_quad(
                renderer::Quad {
                    bounds: fill,
                    border: Border {
                        radius: geometry.fill_radius(self.corner_radius),
                        ..Default::default()
                    },
                    ..Default::default()
                },
                Background::Color(theme::TRACK_FILL),
            );
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();

        if state.drag.is_some() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(layout.bounds()) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message> From<ElasticSlider<'a, Message>> for Element<'a, Message, Theme>
where
    Message: Clone + 'a,
{
    fn from(slider: ElasticSlider<'a, Message>) -> Self {
        Element::new(slider)
    }
}

/// Creates a new elastic slider
pub fn elastic_slider<'a, Message>(
    fill_level: f32,
    on_drag: impl Fn(DragSample) -> Message + 'a,
) -> ElasticSlider<'a, Message> {
    ElasticSlider::new(fill_level, on_drag)
}
