use iced::{Subscription, Task};
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;

use entrada_ui::widget::Element;

use crate::{
    logger::setup_logger,
    screen::{login, register},
};

/// Root shell: toggles between the login and registration screens.
pub struct GUI {
    screen: Screen,
}

enum Screen {
    Login(login::LoginScreen),
    Register(register::RegisterScreen),
}

#[derive(Debug)]
pub enum Message {
    CtrlC,
    Login(login::Message),
    Register(register::Message),
}

async fn ctrl_c() -> Result<(), ()> {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("{}", e);
    };
    info!("Signal received, exiting");
    Ok(())
}

impl GUI {
    pub fn title(&self) -> String {
        format!("Entrada v{}", crate::VERSION)
    }

    pub fn new(log_level: Option<LevelFilter>) -> (GUI, Task<Message>) {
        let log_level = log_level.unwrap_or(LevelFilter::INFO);
        if let Err(e) = setup_logger(log_level) {
            tracing::warn!("Error while setting up the logger: {}", e);
        }
        (
            Self {
                screen: Screen::Login(login::LoginScreen::new()),
            },
            Task::perform(ctrl_c(), |_| Message::CtrlC),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match (message, &mut self.screen) {
            (Message::CtrlC, _) => iced::window::get_latest().and_then(iced::window::close),
            // Navigating away constructs the other screen from
            // scratch: form state does not survive the toggle.
            (Message::Login(login::Message::RegisterPressed), Screen::Login(_)) => {
                self.screen = Screen::Register(register::RegisterScreen::new());
                Task::none()
            }
            (Message::Register(register::Message::LoginPressed), Screen::Register(_)) => {
                self.screen = Screen::Login(login::LoginScreen::new());
                Task::none()
            }
            (Message::Login(msg), Screen::Login(screen)) => {
                screen.update(msg).map(Message::Login)
            }
            (Message::Register(msg), Screen::Register(screen)) => {
                screen.update(msg).map(Message::Register)
            }
            // A task outcome addressed to a screen the user navigated
            // away from: drop it.
            _ => Task::none(),
        }
    }

    pub fn view(&self) -> Element<Message> {
        match &self.screen {
            Screen::Login(screen) => screen.view().map(Message::Login),
            Screen::Register(screen) => screen.view().map(Message::Register),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        match &self.screen {
            Screen::Login(screen) => screen.subscription().map(Message::Login),
            Screen::Register(screen) => screen.subscription().map(Message::Register),
        }
    }

    pub fn scale_factor(&self) -> f64 {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_toggles_the_screens() {
        let mut gui = GUI {
            screen: Screen::Login(login::LoginScreen::new()),
        };
        let _ = gui.update(Message::Login(login::Message::RegisterPressed));
        assert!(matches!(gui.screen, Screen::Register(_)));
        let _ = gui.update(Message::Register(register::Message::LoginPressed));
        assert!(matches!(gui.screen, Screen::Login(_)));
    }

    #[test]
    fn messages_for_an_inactive_screen_are_dropped() {
        let mut gui = GUI {
            screen: Screen::Register(register::RegisterScreen::new()),
        };
        // Completion of a login submit that outlived its screen.
        let _ = gui.update(Message::Login(login::Message::SubmitFinished));
        assert!(matches!(gui.screen, Screen::Register(_)));
        // A navigation message for the wrong screen is dropped too.
        let _ = gui.update(Message::Login(login::Message::RegisterPressed));
        assert!(matches!(gui.screen, Screen::Register(_)));
    }
}
