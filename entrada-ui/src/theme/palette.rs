use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub text_inputs: TextInputs,
    pub checkboxes: Checkboxes,
    pub progress_bars: ProgressBars,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
    pub foreground: iced::Color,
    pub scrollable: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub error: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub secondary: Button,
    pub link: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Checkboxes {
    pub icon: iced::Color,
    pub text: iced::Color,
    pub background: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProgressBars {
    pub background: iced::Color,
    pub bar: iced::Color,
    pub border: Option<iced::Color>,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::GREY_1,
                foreground: color::WHITE,
                scrollable: color::GREY_3,
            },
            text: Text {
                primary: color::GREY_7,
                secondary: color::GREY_5,
                error: color::RED,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::BLUE,
                        text: color::WHITE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::DARK_BLUE,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::DARK_BLUE,
                        text: color::WHITE,
                        border: None,
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::LIGHT_BLUE,
                        text: color::WHITE,
                        border: None,
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::GREY_2,
                        text: color::GREY_7,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_3,
                        text: color::GREY_7,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::GREY_3,
                        text: color::GREY_7,
                        border: None,
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::GREY_2,
                        text: color::GREY_5,
                        border: None,
                    }),
                },
                link: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::BLUE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::DARK_BLUE,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::DARK_BLUE,
                        border: None,
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_4,
                        border: None,
                    }),
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::WHITE,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_4,
                        value: color::GREY_7,
                        selection: color::PALE_BLUE,
                        border: Some(color::GREY_3),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_1,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_4,
                        value: color::GREY_5,
                        selection: color::PALE_BLUE,
                        border: Some(color::GREY_3),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::LIGHT_RED,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_4,
                        value: color::GREY_7,
                        selection: color::PALE_BLUE,
                        border: Some(color::RED),
                    },
                    disabled: TextInputPalette {
                        background: color::LIGHT_RED,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_4,
                        value: color::GREY_5,
                        selection: color::PALE_BLUE,
                        border: Some(color::RED),
                    },
                },
            },
            checkboxes: Checkboxes {
                icon: color::BLUE,
                text: color::GREY_6,
                background: color::WHITE,
                border: Some(color::GREY_3),
            },
            progress_bars: ProgressBars {
                background: color::DARK_BLUE,
                bar: color::WHITE,
                border: None,
            },
        }
    }
}
