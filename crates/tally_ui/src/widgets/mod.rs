//! Built-in widgets.

mod button;
mod column;
mod container;
mod halo;
mod text;

pub use button::{Button, ButtonShape};
pub use column::Column;
pub use container::Container;
pub use halo::Halo;
pub use text::Text;

use crate::Element;

/// Create a button with the given label.
pub fn button<M>(label: impl Into<String>) -> Button<M> {
    Button::new(label)
}

/// Create an empty column.
pub fn column<M>() -> Column<M> {
    Column::new()
}

/// Create a container around a child element.
pub fn container<M>(child: impl Into<Element<M>>) -> Container<M> {
    Container::new(child)
}

/// Create a halo around a child element.
pub fn halo<M>(child: impl Into<Element<M>>) -> Halo<M> {
    Halo::new(child)
}

/// Create a text widget.
pub fn text(content: impl Into<String>) -> Text {
    Text::new(content)
}
