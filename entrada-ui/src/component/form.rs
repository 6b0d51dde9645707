use iced::Length;

use crate::{color, component::text, theme, widget::*};

/// State of a single form field: the raw value, whether the user has
/// interacted with the field yet, and the current validation error.
///
/// The error is recomputed on every edit regardless of `touched`;
/// `touched` only gates whether it is shown.
#[derive(Debug, Clone)]
pub struct Value<T> {
    pub value: T,
    pub touched: bool,
    pub error: Option<&'static str>,
}

impl<T> Value<T> {
    pub fn displayed_error(&self) -> Option<&'static str> {
        if self.touched {
            self.error
        } else {
            None
        }
    }
}

impl std::default::Default for Value<String> {
    fn default() -> Self {
        Self {
            value: "".to_string(),
            touched: false,
            error: None,
        }
    }
}

impl std::default::Default for Value<bool> {
    fn default() -> Self {
        Self {
            value: false,
            touched: false,
            error: None,
        }
    }
}

pub struct Form<'a, Message> {
    label: Option<&'a str>,
    input: TextInput<'a, Message>,
    error: Option<&'static str>,
}

impl<'a, Message: 'a> Form<'a, Message>
where
    Message: Clone,
{
    /// Creates a new [`Form`].
    ///
    /// It expects:
    /// - a placeholder
    /// - the current value
    /// - a function that produces a message when the [`Form`] changes
    pub fn new<F>(placeholder: &str, value: &Value<String>, on_change: F) -> Self
    where
        F: 'static + Fn(String) -> Message,
    {
        Self {
            label: None,
            input: TextInput::new(placeholder, &value.value).on_input(on_change),
            error: value.displayed_error(),
        }
    }

    /// Creates a new [`Form`] with a masked input, for passwords.
    pub fn new_secure<F>(placeholder: &str, value: &Value<String>, on_change: F) -> Self
    where
        F: 'static + Fn(String) -> Message,
    {
        Self {
            label: None,
            input: TextInput::new(placeholder, &value.value)
                .secure(true)
                .on_input(on_change),
            error: value.displayed_error(),
        }
    }

    /// Sets the label displayed above the input.
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Sets the padding of the [`Form`].
    pub fn padding(mut self, units: u16) -> Self {
        self.input = self.input.padding(units);
        self
    }

    /// Sets the [`Form`] with a text size
    pub fn size(mut self, size: u16) -> Self {
        self.input = self.input.size(size);
        self
    }
}

impl<'a, Message: 'a + Clone> From<Form<'a, Message>> for Element<'a, Message> {
    fn from(form: Form<'a, Message>) -> Element<'a, Message> {
        Container::new(
            Column::new()
                .push_maybe(form.label.map(text::p2_medium))
                .push(if form.error.is_some() {
                    form.input.style(theme::text_input::invalid)
                } else {
                    form.input
                })
                .push_maybe(
                    form.error
                        .map(|message| text::caption(message).color(color::RED)),
                )
                .width(Length::Fill)
                .spacing(5),
        )
        .width(Length::Fill)
        .into()
    }
}
