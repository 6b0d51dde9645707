use crate::font::MEDIUM;
use crate::{component::text::text, theme, widget::*};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::container;
use iced::Length;

pub fn primary<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content(text(t).font(MEDIUM))).style(theme::button::primary)
}

pub fn secondary<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content(text(t))).style(theme::button::secondary)
}

/// Inline text button, for navigation between screens.
pub fn link<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(text(t).font(MEDIUM))
        .style(theme::button::link)
        .padding(0)
}

/// Stand-in for a submit button while a submission is in flight: a
/// progress indicator in place of the label, and no `on_press`, so the
/// action cannot be triggered again until the task completes.
pub fn loading<'a, T: 'a>(progress: f32) -> Button<'a, T> {
    Button::new(
        container(
            ProgressBar::new(0.0..=1.0, progress)
                .width(Length::Fixed(120.0))
                .height(Length::Fixed(10.0)),
        )
        .align_y(Vertical::Center)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .padding(5),
    )
    .style(theme::button::primary)
}

fn content<'a, T: 'a>(text: Text<'a>) -> Container<'a, T> {
    container(text)
        .align_y(Vertical::Center)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .padding(5)
}
