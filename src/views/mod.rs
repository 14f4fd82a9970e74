//! View construction.

mod counter;

pub use counter::view_counter;
