use crate::layout::Point;

/// Events that widgets can respond to.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// Mouse button pressed.
    MousePressed { button: MouseButton, position: Point },
    /// Mouse button released.
    MouseReleased { button: MouseButton, position: Point },
    /// Mouse moved.
    MouseMoved { position: Point },
    /// Cursor left the window.
    CursorLeft,
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Light/dark presentation mode reported by the host window system.
///
/// Read-only from the application's point of view; it only ever affects
/// color selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Light,
    Dark,
}
