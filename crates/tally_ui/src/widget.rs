//! Widget trait and related types

use crate::event::Event;
use crate::layout::{Bounds, Size};
use crate::renderer::Renderer;

/// The core widget trait that all UI elements implement.
pub trait Widget<M> {
    /// Calculate the size this widget wants given available space.
    fn layout(&mut self, available: Size) -> Size;

    /// Draw the widget to the renderer.
    fn draw(&self, renderer: &mut Renderer, bounds: Bounds);

    /// Handle an event, optionally producing a message.
    fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult<M> {
        let _ = (event, bounds);
        EventResult::None
    }
}

/// Outcome of delivering an event to a widget.
#[derive(Debug)]
pub enum EventResult<M> {
    /// Nothing happened.
    None,
    /// Visual state changed; a redraw is needed but no message is produced.
    Redraw,
    /// A message for the application (implies a redraw).
    Message(M),
}

impl<M> EventResult<M> {
    /// Keep the more significant of two results: messages beat redraws,
    /// redraws beat nothing.
    pub fn merge(self, other: EventResult<M>) -> EventResult<M> {
        match (self, other) {
            (EventResult::Message(m), _) | (_, EventResult::Message(m)) => EventResult::Message(m),
            (EventResult::Redraw, _) | (_, EventResult::Redraw) => EventResult::Redraw,
            _ => EventResult::None,
        }
    }
}
