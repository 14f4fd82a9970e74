//! Application messages.

use tally_ui::DisplayMode;

/// Messages originating from the counter controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterMessage {
    /// The tap button was pressed.
    Increment,
    /// The reset button was pressed.
    Reset,
}

/// Top-level application message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Counter(CounterMessage),
    /// The platform light/dark preference changed.
    DisplayModeChanged(DisplayMode),
    /// One animation frame elapsed.
    Tick,
}

impl Message {
    pub fn increment() -> Self {
        Message::Counter(CounterMessage::Increment)
    }

    pub fn reset() -> Self {
        Message::Counter(CounterMessage::Reset)
    }
}
