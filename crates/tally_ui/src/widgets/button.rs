//! Clickable button widget.

use crate::constants::{BUTTON_PADDING, DEFAULT_FONT_SIZE};
use crate::event::{Event, MouseButton};
use crate::layout::{Bounds, Length, Padding, Point, Size};
use crate::renderer::{Color, Renderer};
use crate::text_metrics::TextMetrics;
use crate::widget::{EventResult, Widget};

/// Visual shape of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonShape {
    /// A regular rectangle with a border.
    #[default]
    Rect,
    /// The upper half of a circle sitting on the button's bottom edge.
    Dome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ButtonState {
    Normal,
    Hovered,
    Pressed,
}

/// A button that emits a message when pressed.
pub struct Button<M> {
    label: String,
    on_press: Option<M>,
    width: Length,
    height: Length,
    padding: Padding,
    font_size: f32,
    shape: ButtonShape,
    background: Option<Color>,
    text_color: Option<Color>,
    state: ButtonState,
}

impl<M> Button<M> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_press: None,
            width: Length::Shrink,
            height: Length::Shrink,
            padding: BUTTON_PADDING,
            font_size: DEFAULT_FONT_SIZE,
            shape: ButtonShape::default(),
            background: None,
            text_color: None,
            state: ButtonState::Normal,
        }
    }

    /// The message emitted when the button is pressed. Without one the
    /// button renders but never fires.
    pub fn on_press(mut self, message: M) -> Self {
        self.on_press = Some(message);
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn shape(mut self, shape: ButtonShape) -> Self {
        self.shape = shape;
        self
    }

    /// Set the background color. The label color follows automatically
    /// unless overridden with [`Button::text_color`].
    pub fn background_color(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    fn content_size(&self) -> Size {
        let metrics = TextMetrics::new(self.font_size);
        metrics.measure(&self.label)
    }

    fn current_background(&self) -> Color {
        let base = self.background.unwrap_or(Color::rgb(0.25, 0.25, 0.3));
        match self.state {
            ButtonState::Normal => base,
            ButtonState::Hovered => base.lighten(0.15),
            ButtonState::Pressed => base.darken(0.15),
        }
    }

    fn current_text_color(&self) -> Color {
        self.text_color.unwrap_or_else(|| {
            self.background
                .unwrap_or(Color::rgb(0.25, 0.25, 0.3))
                .contrasting_text()
        })
    }
}

impl<M: Clone> Widget<M> for Button<M> {
    fn layout(&mut self, available: Size) -> Size {
        let content = self.content_size();
        let intrinsic_width = content.width + self.padding.horizontal();
        let intrinsic_height = content.height + self.padding.vertical();
        Size::new(
            self.width.resolve(available.width, intrinsic_width),
            self.height.resolve(available.height, intrinsic_height),
        )
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        let background = self.current_background();

        match self.shape {
            ButtonShape::Rect => {
                renderer.fill_rect(bounds, background);
                renderer.stroke_rect(bounds, background.darken(0.2), 1.0);
            }
            ButtonShape::Dome => {
                let radius = bounds.height.min(bounds.width / 2.0);
                let base = Point::new(bounds.x + bounds.width / 2.0, bounds.y + bounds.height);
                renderer.fill_dome(base, radius, background);
            }
        }

        if !self.label.is_empty() {
            let content = self.content_size();
            let center = bounds.center();
            renderer.text(
                &self.label,
                Point::new(
                    center.x - content.width / 2.0,
                    center.y - content.height / 2.0,
                ),
                self.font_size,
                self.current_text_color(),
            );
        }
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult<M> {
        match event {
            Event::MouseMoved { position } => {
                let hovered = bounds.contains(*position);
                let new_state = match (self.state, hovered) {
                    (ButtonState::Pressed, true) => ButtonState::Pressed,
                    (_, true) => ButtonState::Hovered,
                    (_, false) => ButtonState::Normal,
                };
                if new_state != self.state {
                    self.state = new_state;
                    EventResult::Redraw
                } else {
                    EventResult::None
                }
            }
            Event::MousePressed { button, position } => {
                if *button == MouseButton::Left && bounds.contains(*position) {
                    self.state = ButtonState::Pressed;
                    match &self.on_press {
                        Some(message) => EventResult::Message(message.clone()),
                        None => EventResult::Redraw,
                    }
                } else {
                    EventResult::None
                }
            }
            Event::MouseReleased { button, position } => {
                if *button == MouseButton::Left && self.state == ButtonState::Pressed {
                    self.state = if bounds.contains(*position) {
                        ButtonState::Hovered
                    } else {
                        ButtonState::Normal
                    };
                    EventResult::Redraw
                } else {
                    EventResult::None
                }
            }
            Event::CursorLeft => {
                if self.state != ButtonState::Normal {
                    self.state = ButtonState::Normal;
                    EventResult::Redraw
                } else {
                    EventResult::None
                }
            }
        }
    }
}

impl<M: Clone + 'static> From<Button<M>> for crate::Element<M> {
    fn from(button: Button<M>) -> Self {
        crate::Element::new(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(position: Point) -> Event {
        Event::MousePressed {
            button: MouseButton::Left,
            position,
        }
    }

    #[test]
    fn test_press_inside_emits_message() {
        let mut button: Button<u32> = Button::new("go").on_press(7);
        let bounds = Bounds::new(0.0, 0.0, 100.0, 40.0);
        match button.on_event(&press(Point::new(50.0, 20.0)), bounds) {
            EventResult::Message(7) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_press_outside_is_ignored() {
        let mut button: Button<u32> = Button::new("go").on_press(7);
        let bounds = Bounds::new(0.0, 0.0, 100.0, 40.0);
        assert!(matches!(
            button.on_event(&press(Point::new(150.0, 20.0)), bounds),
            EventResult::None
        ));
    }

    #[test]
    fn test_right_click_does_not_fire() {
        let mut button: Button<u32> = Button::new("go").on_press(7);
        let bounds = Bounds::new(0.0, 0.0, 100.0, 40.0);
        let event = Event::MousePressed {
            button: MouseButton::Right,
            position: Point::new(50.0, 20.0),
        };
        assert!(matches!(button.on_event(&event, bounds), EventResult::None));
    }

    #[test]
    fn test_hover_requests_redraw_once() {
        let mut button: Button<u32> = Button::new("go").on_press(7);
        let bounds = Bounds::new(0.0, 0.0, 100.0, 40.0);
        let inside = Event::MouseMoved {
            position: Point::new(10.0, 10.0),
        };
        assert!(matches!(
            button.on_event(&inside, bounds),
            EventResult::Redraw
        ));
        // Moving within the button again changes nothing.
        assert!(matches!(button.on_event(&inside, bounds), EventResult::None));
    }

    #[test]
    fn test_fixed_size_overrides_content() {
        let mut button: Button<u32> = Button::new("リセット")
            .width(80.0)
            .height(40.0);
        let size = button.layout(Size::new(800.0, 600.0));
        assert_eq!(size, Size::new(80.0, 40.0));
    }
}
