//! Single-child container with padding, alignment and optional decoration.

use crate::element::Element;
use crate::event::Event;
use crate::layout::{Alignment, Bounds, Length, Padding, Size};
use crate::renderer::{Color, Renderer};
use crate::widget::{EventResult, Widget};

/// Wraps one child, controlling its size, position and backdrop.
pub struct Container<M> {
    child: Element<M>,
    padding: Padding,
    width: Length,
    height: Length,
    align_x: Alignment,
    align_y: Alignment,
    background: Option<Color>,
    border: Option<Color>,
    border_width: f32,
    /// Child rectangle relative to our origin, filled in during layout.
    child_bounds: Bounds,
}

impl<M> Container<M> {
    pub fn new(child: impl Into<Element<M>>) -> Self {
        Self {
            child: child.into(),
            padding: Padding::ZERO,
            width: Length::Shrink,
            height: Length::Shrink,
            align_x: Alignment::Start,
            align_y: Alignment::Start,
            background: None,
            border: None,
            border_width: 1.0,
            child_bounds: Bounds::default(),
        }
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
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

    pub fn align_x(mut self, align: Alignment) -> Self {
        self.align_x = align;
        self
    }

    pub fn align_y(mut self, align: Alignment) -> Self {
        self.align_y = align;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn border(mut self, color: Color, width: f32) -> Self {
        self.border = Some(color);
        self.border_width = width;
        self
    }

    /// Center the child on both axes.
    pub fn center(self) -> Self {
        self.align_x(Alignment::Center).align_y(Alignment::Center)
    }
}

impl<M> Widget<M> for Container<M> {
    fn layout(&mut self, available: Size) -> Size {
        let inner = Size::new(
            (available.width - self.padding.horizontal()).max(0.0),
            (available.height - self.padding.vertical()).max(0.0),
        );
        let child_size = self.child.layout(inner);

        let width = self.width.resolve(
            available.width,
            child_size.width + self.padding.horizontal(),
        );
        let height = self.height.resolve(
            available.height,
            child_size.height + self.padding.vertical(),
        );

        let inner_width = (width - self.padding.horizontal()).max(0.0);
        let inner_height = (height - self.padding.vertical()).max(0.0);
        self.child_bounds = Bounds::new(
            self.padding.left + self.align_x.align(inner_width, child_size.width),
            self.padding.top + self.align_y.align(inner_height, child_size.height),
            child_size.width,
            child_size.height,
        );

        Size::new(width, height)
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        if let Some(background) = self.background {
            renderer.fill_rect(bounds, background);
        }
        if let Some(border) = self.border {
            renderer.stroke_rect(bounds, border, self.border_width);
        }
        self.child
            .draw(renderer, self.child_bounds.translate(bounds.x, bounds.y));
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult<M> {
        self.child
            .on_event(event, self.child_bounds.translate(bounds.x, bounds.y))
    }
}

impl<M: 'static> From<Container<M>> for Element<M> {
    fn from(container: Container<M>) -> Self {
        Element::new(container)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::text;

    #[test]
    fn test_fixed_size_centers_child() {
        let mut container: Container<()> = Container::new(text("hi").size(20.0))
            .width(200.0)
            .height(100.0)
            .center();
        let size = container.layout(Size::new(800.0, 600.0));
        assert_eq!(size, Size::new(200.0, 100.0));

        let child = container.child_bounds;
        assert!((child.x - (200.0 - child.width) / 2.0).abs() < 1e-4);
        assert!((child.y - (100.0 - child.height) / 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_shrink_wraps_child_plus_padding() {
        let mut container: Container<()> =
            Container::new(text("hi").size(20.0)).padding(10.0);
        let size = container.layout(Size::new(800.0, 600.0));
        let child = container.child_bounds;
        assert_eq!(size.width, child.width + 20.0);
        assert_eq!(size.height, child.height + 20.0);
        assert_eq!(child.x, 10.0);
        assert_eq!(child.y, 10.0);
    }
}
