use iced::widget::scrollable;
use iced::{Alignment, Length, Subscription, Task};
use tracing::info;

use entrada_ui::{
    component::{
        button, form,
        text::{h2, p2_regular, text, P1_SIZE},
    },
    theme,
    widget::*,
};

use crate::{
    screen::{SUBMIT_DELAY, TICK_PERIOD},
    validation::{self, Field, FieldError},
};

pub struct LoginScreen {
    email: form::Value<String>,
    password: form::Value<String>,
    processing: bool,
    progress: f32,
}

#[derive(Debug, Clone)]
pub enum Message {
    EmailEdited(String),
    PasswordEdited(String),
    SubmitPressed,
    SubmitFinished,
    AlertDismissed,
    Tick,
    /// Intercepted by the root shell.
    RegisterPressed,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self {
            email: form::Value::default(),
            password: form::Value::default(),
            processing: false,
            progress: 0.0,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::EmailEdited(value) => {
                self.email.touched = true;
                self.email.error = validation::email(&value);
                self.email.value = value;
                Task::none()
            }
            Message::PasswordEdited(value) => {
                self.password.touched = true;
                self.password.error = validation::login_password(&value);
                self.password.value = value;
                Task::none()
            }
            Message::SubmitPressed => {
                if self.processing {
                    return Task::none();
                }
                self.email.touched = true;
                self.password.touched = true;
                match validation::validate_login(&self.email.value, &self.password.value) {
                    Ok(()) => {
                        self.email.error = None;
                        self.password.error = None;
                        self.processing = true;
                        self.progress = 0.0;
                        info!(email = %self.email.value, "submitting login form");
                        Task::perform(async { tokio::time::sleep(SUBMIT_DELAY).await }, |_| {
                            Message::SubmitFinished
                        })
                    }
                    Err(errors) => {
                        self.apply_errors(&errors);
                        Task::none()
                    }
                }
            }
            Message::SubmitFinished => {
                info!("simulated login call completed");
                *self = Self::new();
                Task::perform(
                    async {
                        rfd::AsyncMessageDialog::new()
                            .set_level(rfd::MessageLevel::Info)
                            .set_title("Entrada")
                            .set_description("¡Login exitoso!")
                            .set_buttons(rfd::MessageButtons::Ok)
                            .show()
                            .await
                    },
                    |_| Message::AlertDismissed,
                )
            }
            Message::AlertDismissed => Task::none(),
            Message::Tick => {
                if self.processing {
                    self.progress = (self.progress
                        + TICK_PERIOD.as_secs_f32() / SUBMIT_DELAY.as_secs_f32())
                    .min(1.0);
                }
                Task::none()
            }
            Message::RegisterPressed => Task::none(),
        }
    }

    /// Overwrites the whole error map with the outcome of a full-form
    /// validation.
    fn apply_errors(&mut self, errors: &[FieldError]) {
        self.email.error = None;
        self.password.error = None;
        for error in errors {
            match error.field {
                Field::Email => self.email.error = Some(error.message),
                Field::Password => self.password.error = Some(error.message),
                _ => {}
            }
        }
    }

    pub fn view(&self) -> Element<Message> {
        let submit = if self.processing {
            button::loading(self.progress).width(Length::Fill)
        } else {
            button::primary("Iniciar Sesión")
                .on_press(Message::SubmitPressed)
                .width(Length::Fill)
        };

        let content = Column::new()
            .spacing(20)
            .max_width(420)
            .push(h2("Bienvenido"))
            .push(text("Inicia sesión para continuar").style(theme::text::secondary))
            .push(
                form::Form::new("tu@email.com", &self.email, Message::EmailEdited)
                    .label("Email")
                    .size(P1_SIZE)
                    .padding(10),
            )
            .push(
                form::Form::new_secure("••••••••", &self.password, Message::PasswordEdited)
                    .label("Contraseña")
                    .size(P1_SIZE)
                    .padding(10),
            )
            .push(submit)
            .push(
                Row::new()
                    .spacing(5)
                    .align_y(Alignment::Center)
                    .push(p2_regular("¿No tienes cuenta?").style(theme::text::secondary))
                    .push(button::link("Regístrate").on_press(Message::RegisterPressed)),
            );

        Container::new(scrollable(
            Container::new(content).padding(40).center_x(Length::Fill),
        ))
        .height(Length::Fill)
        .style(theme::container::background)
        .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.processing {
            iced::time::every(TICK_PERIOD).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LoginScreen {
        let mut screen = LoginScreen::new();
        let _ = screen.update(Message::EmailEdited("juan@example.com".to_string()));
        let _ = screen.update(Message::PasswordEdited("Secreta1".to_string()));
        screen
    }

    #[test]
    fn submit_with_empty_fields_shows_errors() {
        let mut screen = LoginScreen::new();
        let _ = screen.update(Message::SubmitPressed);
        assert!(!screen.processing);
        assert!(screen.email.touched && screen.password.touched);
        assert_eq!(screen.email.error, Some("El email es requerido"));
        assert_eq!(
            screen.password.error,
            Some("La contraseña debe tener al menos 6 caracteres")
        );
    }

    #[test]
    fn keystroke_recomputes_that_field_only() {
        let mut screen = LoginScreen::new();
        let _ = screen.update(Message::EmailEdited("not-an-email".to_string()));
        assert_eq!(screen.email.error, Some("Email inválido"));
        // The other field has not been interacted with yet.
        assert!(!screen.password.touched);
        assert_eq!(screen.password.error, None);
        let _ = screen.update(Message::EmailEdited("a@b.co".to_string()));
        assert_eq!(screen.email.error, None);
    }

    #[test]
    fn valid_submit_runs_the_simulated_call_once() {
        let mut screen = filled();
        let _ = screen.update(Message::SubmitPressed);
        assert!(screen.processing);
        assert_eq!(screen.email.error, None);
        assert_eq!(screen.password.error, None);
        // A second press while processing is ignored.
        let _ = screen.update(Message::SubmitPressed);
        assert!(screen.processing);
        // Ticks advance the loading indicator.
        let _ = screen.update(Message::Tick);
        let after_one = screen.progress;
        assert!(after_one > 0.0);
        let _ = screen.update(Message::Tick);
        assert!(screen.progress > after_one);
    }

    #[test]
    fn completion_resets_the_form_with_no_residual_errors() {
        let mut screen = filled();
        let _ = screen.update(Message::SubmitPressed);
        let _ = screen.update(Message::SubmitFinished);
        assert!(!screen.processing);
        assert!(screen.email.value.is_empty());
        assert!(screen.password.value.is_empty());
        assert_eq!(screen.email.error, None);
        assert_eq!(screen.password.error, None);
        assert!(!screen.email.touched);
    }

    #[test]
    fn progress_saturates_at_full() {
        let mut screen = filled();
        let _ = screen.update(Message::SubmitPressed);
        for _ in 0..100 {
            let _ = screen.update(Message::Tick);
        }
        assert_eq!(screen.progress, 1.0);
    }
}
