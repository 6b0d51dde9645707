use iced::widget::scrollable;
use iced::{Alignment, Length, Subscription, Task};
use tracing::info;

use entrada_ui::{
    color,
    component::{
        button, form,
        text::{caption, h2, p2_regular, text, P1_SIZE},
    },
    theme,
    widget::*,
};

use crate::{
    screen::{SUBMIT_DELAY, TICK_PERIOD},
    validation::{self, Field, FieldError},
};

pub struct RegisterScreen {
    name: form::Value<String>,
    email: form::Value<String>,
    phone: form::Value<String>,
    password: form::Value<String>,
    confirm_password: form::Value<String>,
    terms: form::Value<bool>,
    processing: bool,
    progress: f32,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameEdited(String),
    EmailEdited(String),
    PhoneEdited(String),
    PasswordEdited(String),
    ConfirmPasswordEdited(String),
    TermsToggled(bool),
    SubmitPressed,
    SubmitFinished,
    AlertDismissed,
    Tick,
    /// Intercepted by the root shell.
    LoginPressed,
}

impl RegisterScreen {
    pub fn new() -> Self {
        Self {
            name: form::Value::default(),
            email: form::Value::default(),
            phone: form::Value::default(),
            password: form::Value::default(),
            confirm_password: form::Value::default(),
            terms: form::Value::default(),
            processing: false,
            progress: 0.0,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NameEdited(value) => {
                self.name.touched = true;
                self.name.error = validation::name(&value);
                self.name.value = value;
                Task::none()
            }
            Message::EmailEdited(value) => {
                self.email.touched = true;
                self.email.error = validation::email(&value);
                self.email.value = value;
                Task::none()
            }
            Message::PhoneEdited(value) => {
                self.phone.touched = true;
                self.phone.error = validation::phone(&value);
                self.phone.value = value;
                Task::none()
            }
            Message::PasswordEdited(value) => {
                self.password.touched = true;
                self.password.error = validation::password(&value);
                self.password.value = value;
                Task::none()
            }
            Message::ConfirmPasswordEdited(value) => {
                self.confirm_password.touched = true;
                self.confirm_password.error =
                    validation::confirm_password(&self.password.value, &value);
                self.confirm_password.value = value;
                Task::none()
            }
            Message::TermsToggled(accepted) => {
                self.terms.touched = true;
                self.terms.error = validation::terms(accepted);
                self.terms.value = accepted;
                Task::none()
            }
            Message::SubmitPressed => {
                if self.processing {
                    return Task::none();
                }
                self.touch_all();
                let input = validation::RegisterInput {
                    name: &self.name.value,
                    email: &self.email.value,
                    password: &self.password.value,
                    confirm_password: &self.confirm_password.value,
                    phone: &self.phone.value,
                    terms: self.terms.value,
                };
                match validation::validate_register(&input) {
                    Ok(()) => {
                        self.clear_errors();
                        self.processing = true;
                        self.progress = 0.0;
                        info!(email = %self.email.value, "submitting registration form");
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
                info!("simulated registration call completed");
                *self = Self::new();
                Task::perform(
                    async {
                        rfd::AsyncMessageDialog::new()
                            .set_level(rfd::MessageLevel::Info)
                            .set_title("Entrada")
                            .set_description("¡Registro exitoso!")
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
            Message::LoginPressed => Task::none(),
        }
    }

    fn touch_all(&mut self) {
        self.name.touched = true;
        self.email.touched = true;
        self.phone.touched = true;
        self.password.touched = true;
        self.confirm_password.touched = true;
        self.terms.touched = true;
    }

    fn clear_errors(&mut self) {
        self.name.error = None;
        self.email.error = None;
        self.phone.error = None;
        self.password.error = None;
        self.confirm_password.error = None;
        self.terms.error = None;
    }

    /// Overwrites the whole error map with the outcome of a full-form
    /// validation.
    fn apply_errors(&mut self, errors: &[FieldError]) {
        self.clear_errors();
        for error in errors {
            let slot = match error.field {
                Field::Name => &mut self.name.error,
                Field::Email => &mut self.email.error,
                Field::Password => &mut self.password.error,
                Field::ConfirmPassword => &mut self.confirm_password.error,
                Field::Phone => &mut self.phone.error,
                Field::Terms => &mut self.terms.error,
            };
            *slot = Some(error.message);
        }
    }

    pub fn view(&self) -> Element<Message> {
        let submit = if self.processing {
            button::loading(self.progress).width(Length::Fill)
        } else {
            button::primary("Crear Cuenta")
                .on_press(Message::SubmitPressed)
                .width(Length::Fill)
        };

        let terms = Column::new()
            .spacing(5)
            .push(
                CheckBox::new("Acepto los términos y condiciones", self.terms.value)
                    .on_toggle(Message::TermsToggled)
                    .size(18)
                    .spacing(10)
                    .text_size(P1_SIZE),
            )
            .push_maybe(
                self.terms
                    .displayed_error()
                    .map(|message| caption(message).color(color::RED)),
            );

        let content = Column::new()
            .spacing(20)
            .max_width(420)
            .push(h2("Crear Cuenta"))
            .push(text("Completa el formulario para registrarte").style(theme::text::secondary))
            .push(
                form::Form::new("Juan Pérez", &self.name, Message::NameEdited)
                    .label("Nombre Completo")
                    .size(P1_SIZE)
                    .padding(10),
            )
            .push(
                form::Form::new("tu@email.com", &self.email, Message::EmailEdited)
                    .label("Email")
                    .size(P1_SIZE)
                    .padding(10),
            )
            .push(
                form::Form::new("0999999999", &self.phone, Message::PhoneEdited)
                    .label("Teléfono")
                    .size(P1_SIZE)
                    .padding(10),
            )
            .push(
                form::Form::new_secure("••••••••", &self.password, Message::PasswordEdited)
                    .label("Contraseña")
                    .size(P1_SIZE)
                    .padding(10),
            )
            .push(
                form::Form::new_secure(
                    "••••••••",
                    &self.confirm_password,
                    Message::ConfirmPasswordEdited,
                )
                .label("Confirmar Contraseña")
                .size(P1_SIZE)
                .padding(10),
            )
            .push(terms)
            .push(submit)
            .push(
                Row::new()
                    .spacing(5)
                    .align_y(Alignment::Center)
                    .push(p2_regular("¿Ya tienes cuenta?").style(theme::text::secondary))
                    .push(button::link("Inicia Sesión").on_press(Message::LoginPressed)),
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

impl Default for RegisterScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegisterScreen {
        let mut screen = RegisterScreen::new();
        let _ = screen.update(Message::NameEdited("Juan Pérez".to_string()));
        let _ = screen.update(Message::EmailEdited("juan@example.com".to_string()));
        let _ = screen.update(Message::PhoneEdited("0999999999".to_string()));
        let _ = screen.update(Message::PasswordEdited("Secreta1".to_string()));
        let _ = screen.update(Message::ConfirmPasswordEdited("Secreta1".to_string()));
        screen
    }

    #[test]
    fn submit_requires_terms_even_when_fields_are_valid() {
        let mut screen = filled();
        let _ = screen.update(Message::SubmitPressed);
        assert!(!screen.processing);
        assert_eq!(screen.terms.error, Some("Debes aceptar los términos"));
        // All other fields are valid.
        assert_eq!(screen.name.error, None);
        assert_eq!(screen.email.error, None);
        assert_eq!(screen.phone.error, None);
        assert_eq!(screen.password.error, None);
        assert_eq!(screen.confirm_password.error, None);
    }

    #[test]
    fn mismatched_confirmation_is_reported_on_the_confirmation_field() {
        let mut screen = filled();
        let _ = screen.update(Message::ConfirmPasswordEdited("Distinta1".to_string()));
        assert_eq!(
            screen.confirm_password.error,
            Some("Las contraseñas no coinciden")
        );
        let _ = screen.update(Message::SubmitPressed);
        assert!(!screen.processing);
        assert_eq!(screen.password.error, None);
        assert_eq!(
            screen.confirm_password.error,
            Some("Las contraseñas no coinciden")
        );
    }

    #[test]
    fn keystroke_validates_the_edited_field() {
        let mut screen = RegisterScreen::new();
        let _ = screen.update(Message::NameEdited("J".to_string()));
        assert_eq!(
            screen.name.error,
            Some("El nombre debe tener al menos 2 caracteres")
        );
        let _ = screen.update(Message::NameEdited("Jo".to_string()));
        assert_eq!(screen.name.error, None);
        let _ = screen.update(Message::PhoneEdited("09999a9999".to_string()));
        assert_eq!(screen.phone.error, Some("Solo números"));
    }

    #[test]
    fn toggling_terms_clears_its_error() {
        let mut screen = filled();
        let _ = screen.update(Message::SubmitPressed);
        assert_eq!(screen.terms.error, Some("Debes aceptar los términos"));
        let _ = screen.update(Message::TermsToggled(true));
        assert_eq!(screen.terms.error, None);
        let _ = screen.update(Message::SubmitPressed);
        assert!(screen.processing);
    }

    #[test]
    fn completion_resets_the_form_with_no_residual_errors() {
        let mut screen = filled();
        let _ = screen.update(Message::TermsToggled(true));
        let _ = screen.update(Message::SubmitPressed);
        assert!(screen.processing);
        let _ = screen.update(Message::Tick);
        assert!(screen.progress > 0.0);
        let _ = screen.update(Message::SubmitFinished);
        assert!(!screen.processing);
        assert!(screen.name.value.is_empty());
        assert!(!screen.terms.value);
        assert_eq!(screen.terms.error, None);
        assert_eq!(screen.confirm_password.error, None);
    }

    #[test]
    fn submit_while_processing_is_ignored() {
        let mut screen = filled();
        let _ = screen.update(Message::TermsToggled(true));
        let _ = screen.update(Message::SubmitPressed);
        assert!(screen.processing);
        // A stray press cannot restart the delay or touch the form.
        let _ = screen.update(Message::SubmitPressed);
        assert!(screen.processing);
        assert_eq!(screen.email.value, "juan@example.com");
    }
}
