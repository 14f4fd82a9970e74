//! tally_ui - a small widget toolkit built on winit and wgpu.
//!
//! Applications implement the Elm-style [`Application`] trait (state,
//! messages, view) and hand it to [`run`]. Widgets are retained for the
//! duration of one event or frame only; the view is rebuilt from
//! application state whenever it is needed.

mod application;
pub mod constants;
mod element;
mod error;
mod event;
mod layout;
mod renderer;
mod text_metrics;
mod widget;
pub mod widgets;

pub use application::{run, Application, Settings};
pub use element::Element;
pub use error::UiError;
pub use event::{DisplayMode, Event, MouseButton};
pub use layout::{Alignment, Bounds, Length, Padding, Point, Size};
pub use renderer::{Color, Renderer};
pub use text_metrics::TextMetrics;
pub use widget::{EventResult, Widget};
