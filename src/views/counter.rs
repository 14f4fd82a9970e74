//! The counter screen.

use tally_ui::widgets::{button, column, container, halo, text, ButtonShape};
use tally_ui::{Alignment, Element, Length};

use crate::counter::Tally;
use crate::message::Message;
use crate::theme::Theme;
use crate::ui_constants::{labels, layout, text as font};

/// Build the whole screen: reset control in the corner, the glowing tap
/// button in the middle, the tally readout and the message area below it.
pub fn view_counter(theme: &Theme, tally: Tally, glow_level: f32) -> Element<Message> {
    let reset_bar = container(
        button(labels::RESET)
            .on_press(Message::reset())
            .width(layout::RESET_WIDTH)
            .height(layout::RESET_HEIGHT)
            .font_size(font::RESET)
            .background_color(theme.reset_button),
    )
    .width(Length::Fill)
    .align_x(Alignment::End)
    .padding(layout::SECTION_SPACING);

    let tap_button = button("")
        .on_press(Message::increment())
        .width(layout::TAP_BUTTON_WIDTH)
        .height(layout::TAP_BUTTON_HEIGHT)
        .shape(ButtonShape::Dome)
        .background_color(theme.tap_button);

    let base = container(text(""))
        .width(layout::BASE_WIDTH)
        .height(layout::BASE_HEIGHT)
        .background(theme.base);

    let button_assembly = halo(
        column()
            .spacing(0.0)
            .align_x(Alignment::Center)
            .push(tap_button)
            .push(base),
    )
    .color(theme.glow)
    .intensity(glow_level)
    .margin(layout::HALO_MARGIN);

    let readout = text(format!("{}{}", tally.get(), labels::TALLY_SUFFIX))
        .size(font::TALLY)
        .color(theme.text);

    // Fixed height keeps the layout steady when the line appears.
    let message_area = container(if tally.is_full() {
        text(labels::CONGRATS).size(font::CONGRATS).color(theme.congrats)
    } else {
        text("")
    })
    .height(layout::MESSAGE_AREA_HEIGHT)
    .center();

    let content = column()
        .width(Length::Fill)
        .align_x(Alignment::Center)
        .spacing(layout::SECTION_SPACING)
        .push(reset_bar)
        .push(button_assembly)
        .push(readout)
        .push(message_area);

    Element::new(
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center()
            .background(theme.background),
    )
}
