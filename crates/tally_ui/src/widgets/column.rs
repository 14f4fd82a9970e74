//! Vertical stack of child elements.

use crate::constants::DEFAULT_SPACING;
use crate::element::Element;
use crate::event::Event;
use crate::layout::{Alignment, Bounds, Length, Padding, Size};
use crate::renderer::Renderer;
use crate::widget::{EventResult, Widget};

/// Lays out children top to bottom with spacing between them.
pub struct Column<M> {
    children: Vec<Element<M>>,
    spacing: f32,
    padding: Padding,
    width: Length,
    height: Length,
    align_x: Alignment,
    /// Child rectangles relative to the column's own origin, filled in
    /// during layout.
    child_bounds: Vec<Bounds>,
}

impl<M> Column<M> {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            spacing: DEFAULT_SPACING,
            padding: Padding::ZERO,
            width: Length::Shrink,
            height: Length::Shrink,
            align_x: Alignment::Start,
            child_bounds: Vec::new(),
        }
    }

    pub fn push(mut self, child: impl Into<Element<M>>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
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
}

impl<M> Default for Column<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Widget<M> for Column<M> {
    fn layout(&mut self, available: Size) -> Size {
        let inner = Size::new(
            (available.width - self.padding.horizontal()).max(0.0),
            (available.height - self.padding.vertical()).max(0.0),
        );

        let mut content_width: f32 = 0.0;
        let mut content_height: f32 = 0.0;
        for (i, child) in self.children.iter_mut().enumerate() {
            let size = child.layout(inner);
            content_width = content_width.max(size.width);
            content_height += size.height;
            if i > 0 {
                content_height += self.spacing;
            }
        }

        let width = self.width.resolve(
            available.width,
            content_width + self.padding.horizontal(),
        );
        let height = self.height.resolve(
            available.height,
            content_height + self.padding.vertical(),
        );

        // Position children relative to our origin.
        let inner_width = (width - self.padding.horizontal()).max(0.0);
        self.child_bounds.clear();
        let mut y = self.padding.top;
        for child in &self.children {
            let size = child.cached_size();
            let x = self.padding.left + self.align_x.align(inner_width, size.width);
            self.child_bounds
                .push(Bounds::new(x, y, size.width, size.height));
            y += size.height + self.spacing;
        }

        Size::new(width, height)
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        for (child, relative) in self.children.iter().zip(&self.child_bounds) {
            child.draw(renderer, relative.translate(bounds.x, bounds.y));
        }
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult<M> {
        let mut result = EventResult::None;
        for (child, relative) in self.children.iter_mut().zip(&self.child_bounds) {
            let child_result = child.on_event(event, relative.translate(bounds.x, bounds.y));
            result = result.merge(child_result);
            if matches!(result, EventResult::Message(_)) {
                break;
            }
        }
        result
    }
}

impl<M: 'static> From<Column<M>> for Element<M> {
    fn from(column: Column<M>) -> Self {
        Element::new(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::text;

    #[test]
    fn test_children_stack_with_spacing() {
        let mut column: Column<()> = Column::new()
            .spacing(10.0)
            .push(text("one").size(20.0))
            .push(text("two").size(20.0));
        let size = column.layout(Size::new(800.0, 600.0));

        assert_eq!(column.child_bounds.len(), 2);
        let first = column.child_bounds[0];
        let second = column.child_bounds[1];
        assert_eq!(first.y, 0.0);
        assert_eq!(second.y, first.height + 10.0);
        assert_eq!(size.height, first.height + 10.0 + second.height);
    }

    #[test]
    fn test_center_alignment_offsets_narrow_child() {
        let mut column: Column<()> = Column::new()
            .width(200.0)
            .align_x(Alignment::Center)
            .push(text("x").size(20.0));
        column.layout(Size::new(800.0, 600.0));

        let child = column.child_bounds[0];
        assert!((child.x - (200.0 - child.width) / 2.0).abs() < 1e-4);
    }
}
