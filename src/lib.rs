//! A single-screen tally counter.
//!
//! Tapping the big button counts up to a cap of twenty with a brief glow
//! pulse each time; a reset control clears the tally. Built on the
//! [`tally_ui`] toolkit.

mod app;
mod counter;
mod glow;
mod message;
mod theme;
pub mod ui_constants;
mod views;

pub use app::TallyApp;
