//! Static text widget.

use crate::constants::DEFAULT_FONT_SIZE;
use crate::layout::{Bounds, Length, Point, Size};
use crate::renderer::{Color, Renderer};
use crate::text_metrics::TextMetrics;
use crate::widget::Widget;

/// A piece of styled text.
pub struct Text {
    content: String,
    size: f32,
    color: Color,
    width: Length,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            size: DEFAULT_FONT_SIZE,
            color: Color::WHITE,
            width: Length::Shrink,
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }
}

impl<M> Widget<M> for Text {
    fn layout(&mut self, available: Size) -> Size {
        let measured = TextMetrics::new(self.size).measure(&self.content);
        Size::new(
            self.width.resolve(available.width, measured.width),
            measured.height,
        )
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        renderer.text(
            &self.content,
            Point::new(bounds.x, bounds.y),
            self.size,
            self.color,
        );
    }
}

impl<M> From<Text> for crate::Element<M> {
    fn from(text: Text) -> Self {
        crate::Element::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_width() {
        let mut text = Text::new("");
        let size = Widget::<()>::layout(&mut text, Size::new(800.0, 600.0));
        assert_eq!(size.width, 0.0);
    }

    #[test]
    fn test_larger_font_measures_wider() {
        let mut small = Text::new("20へぇ～").size(14.0);
        let mut large = Text::new("20へぇ～").size(24.0);
        let available = Size::new(800.0, 600.0);
        let small_size = Widget::<()>::layout(&mut small, available);
        let large_size = Widget::<()>::layout(&mut large, available);
        assert!(large_size.width > small_size.width);
        assert!(large_size.height > small_size.height);
    }
}
