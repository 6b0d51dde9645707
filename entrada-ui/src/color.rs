use iced::Color;

pub const WHITE: Color = iced::Color::WHITE;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;
pub const GREY_1: Color = Color::from_rgb(
    0xF9 as f32 / 255.0,
    0xFA as f32 / 255.0,
    0xFB as f32 / 255.0,
);
pub const GREY_2: Color = Color::from_rgb(
    0xE5 as f32 / 255.0,
    0xE7 as f32 / 255.0,
    0xEB as f32 / 255.0,
);
pub const GREY_3: Color = Color::from_rgb(
    0xD1 as f32 / 255.0,
    0xD5 as f32 / 255.0,
    0xDB as f32 / 255.0,
);
pub const GREY_4: Color = Color::from_rgb(
    0x9C as f32 / 255.0,
    0xA3 as f32 / 255.0,
    0xAF as f32 / 255.0,
);
pub const GREY_5: Color = Color::from_rgb(
    0x4B as f32 / 255.0,
    0x55 as f32 / 255.0,
    0x63 as f32 / 255.0,
);
pub const GREY_6: Color = Color::from_rgb(
    0x37 as f32 / 255.0,
    0x41 as f32 / 255.0,
    0x51 as f32 / 255.0,
);
pub const GREY_7: Color = Color::from_rgb(
    0x11 as f32 / 255.0,
    0x18 as f32 / 255.0,
    0x27 as f32 / 255.0,
);
pub const BLUE: Color = Color::from_rgb(
    0x25 as f32 / 255.0,
    0x63 as f32 / 255.0,
    0xEB as f32 / 255.0,
);
pub const DARK_BLUE: Color = Color::from_rgb(
    0x1D as f32 / 255.0,
    0x4E as f32 / 255.0,
    0xD8 as f32 / 255.0,
);
pub const LIGHT_BLUE: Color = Color::from_rgb(
    0x93 as f32 / 255.0,
    0xC5 as f32 / 255.0,
    0xFD as f32 / 255.0,
);
pub const PALE_BLUE: Color = Color::from_rgb(
    0xBF as f32 / 255.0,
    0xDB as f32 / 255.0,
    0xFE as f32 / 255.0,
);
pub const RED: Color = Color::from_rgb(
    0xEF as f32 / 255.0,
    0x44 as f32 / 255.0,
    0x44 as f32 / 255.0,
);
pub const LIGHT_RED: Color = Color::from_rgb(
    0xFE as f32 / 255.0,
    0xF2 as f32 / 255.0,
    0xF2 as f32 / 255.0,
);
