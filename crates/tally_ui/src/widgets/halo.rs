//! Circular glow behind a child element.

use crate::element::Element;
use crate::event::Event;
use crate::layout::{Bounds, Size};
use crate::renderer::{Color, Renderer};
use crate::widget::{EventResult, Widget};

/// Draws a filled circle behind its child, faded by an intensity in
/// [0, 1]. At zero intensity only the child is drawn.
pub struct Halo<M> {
    child: Element<M>,
    color: Color,
    intensity: f32,
    margin: f32,
}

impl<M> Halo<M> {
    pub fn new(child: impl Into<Element<M>>) -> Self {
        Self {
            child: child.into(),
            color: Color::rgba(1.0, 1.0, 0.0, 0.7),
            intensity: 0.0,
            margin: 0.0,
        }
    }

    /// The glow color at full intensity.
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity.clamp(0.0, 1.0);
        self
    }

    /// Extra space around the child the glow extends into.
    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }
}

impl<M> Widget<M> for Halo<M> {
    fn layout(&mut self, available: Size) -> Size {
        let inner = Size::new(
            (available.width - self.margin * 2.0).max(0.0),
            (available.height - self.margin * 2.0).max(0.0),
        );
        let child_size = self.child.layout(inner);
        Size::new(
            child_size.width + self.margin * 2.0,
            child_size.height + self.margin * 2.0,
        )
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        if self.intensity > 0.0 {
            let radius = bounds.width.min(bounds.height) / 2.0;
            let color = self.color.with_alpha(0.0).lerp(self.color, self.intensity);
            renderer.fill_circle(bounds.center(), radius, color);
        }

        let child_size = self.child.cached_size();
        self.child.draw(
            renderer,
            Bounds::new(
                bounds.x + self.margin,
                bounds.y + self.margin,
                child_size.width,
                child_size.height,
            ),
        );
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult<M> {
        let child_size = self.child.cached_size();
        self.child.on_event(
            event,
            Bounds::new(
                bounds.x + self.margin,
                bounds.y + self.margin,
                child_size.width,
                child_size.height,
            ),
        )
    }
}

impl<M: 'static> From<Halo<M>> for Element<M> {
    fn from(halo: Halo<M>) -> Self {
        Element::new(halo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::text;

    #[test]
    fn test_margin_grows_layout() {
        let mut bare: Halo<()> = Halo::new(text("x").size(20.0));
        let mut padded: Halo<()> = Halo::new(text("x").size(20.0)).margin(50.0);
        let available = Size::new(800.0, 600.0);
        let bare_size = bare.layout(available);
        let padded_size = padded.layout(available);
        assert_eq!(padded_size.width, bare_size.width + 100.0);
        assert_eq!(padded_size.height, bare_size.height + 100.0);
    }

    #[test]
    fn test_intensity_is_clamped() {
        let halo: Halo<()> = Halo::new(text("x")).intensity(3.0);
        assert_eq!(halo.intensity, 1.0);
        let halo: Halo<()> = Halo::new(text("x")).intensity(-1.0);
        assert_eq!(halo.intensity, 0.0);
    }
}
