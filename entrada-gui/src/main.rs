#![windows_subsystem = "windows"]

use std::{error::Error, process};

use iced::{Settings, Size};

use entrada_gui::{
    args::{self, Arg},
    gui::GUI,
    logger, VERSION,
};
use entrada_ui::{component::text, font, theme};

fn main() -> Result<(), Box<dyn Error>> {
    let cli_args: Vec<String> = std::env::args().collect();
    match args::parse_args(&cli_args)? {
        Some(Arg::Version) => {
            eprintln!("{}", VERSION);
            process::exit(0);
        }
        Some(Arg::Help) => {
            eprintln!("{}", args::HELP);
            process::exit(0);
        }
        None => {}
    }

    let log_level = logger::parse_log_level()?;

    let settings = Settings {
        id: Some("Entrada".to_string()),
        antialiasing: false,

        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        fonts: Vec::new(),
    };

    let window_settings = iced::window::Settings {
        size: Size {
            width: 480.0,
            height: 760.0,
        },
        position: iced::window::Position::Centered,
        min_size: Some(Size {
            width: 360.0,
            height: 600.0,
        }),
        ..Default::default()
    };

    if let Err(e) = iced::application(GUI::title, GUI::update, GUI::view)
        .theme(|_| theme::Theme::default())
        .scale_factor(GUI::scale_factor)
        .subscription(GUI::subscription)
        .settings(settings)
        .window(window_settings)
        .run_with(move || GUI::new(log_level))
    {
        log::error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}
