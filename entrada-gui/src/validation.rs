//! Field validation rules for the login and registration forms.
//!
//! Each rule is a pure function from a raw value to an optional error
//! message. Rules are composed per field as slices evaluated in order
//! with first-failure-wins semantics, and the same rules back both the
//! per-keystroke checks of the screens and the full-form validation
//! run at submit time.

use email_address::{EmailAddress, Options};

/// A single field rule: `None` when the value passes.
pub type Rule = fn(&str) -> Option<&'static str>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Phone,
    Terms,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

fn email_required(value: &str) -> Option<&'static str> {
    value.is_empty().then_some("El email es requerido")
}

fn email_format(value: &str) -> Option<&'static str> {
    if EmailAddress::parse_with_options(value, Options::default().with_required_tld()).is_ok() {
        None
    } else {
        Some("Email inválido")
    }
}

fn password_length(value: &str) -> Option<&'static str> {
    (value.chars().count() < 6).then_some("La contraseña debe tener al menos 6 caracteres")
}

fn password_classes(value: &str) -> Option<&'static str> {
    let lower = value.chars().any(|c| c.is_ascii_lowercase());
    let upper = value.chars().any(|c| c.is_ascii_uppercase());
    let digit = value.chars().any(|c| c.is_ascii_digit());
    (!(lower && upper && digit)).then_some("Debe contener mayúscula, minúscula y número")
}

fn name_min(value: &str) -> Option<&'static str> {
    (value.chars().count() < 2).then_some("El nombre debe tener al menos 2 caracteres")
}

fn name_max(value: &str) -> Option<&'static str> {
    (value.chars().count() > 50).then_some("El nombre no puede exceder 50 caracteres")
}

fn phone_min(value: &str) -> Option<&'static str> {
    (value.chars().count() < 10).then_some("El teléfono debe tener al menos 10 dígitos")
}

fn phone_digits(value: &str) -> Option<&'static str> {
    (!value.chars().all(|c| c.is_ascii_digit())).then_some("Solo números")
}

const EMAIL: &[Rule] = &[email_required, email_format];
const LOGIN_PASSWORD: &[Rule] = &[password_length];
const PASSWORD: &[Rule] = &[password_length, password_classes];
const NAME: &[Rule] = &[name_min, name_max];
const PHONE: &[Rule] = &[phone_min, phone_digits];

fn check(rules: &[Rule], value: &str) -> Option<&'static str> {
    rules.iter().find_map(|rule| rule(value))
}

pub fn email(value: &str) -> Option<&'static str> {
    check(EMAIL, value)
}

/// The login form only requires a minimum password length.
pub fn login_password(value: &str) -> Option<&'static str> {
    check(LOGIN_PASSWORD, value)
}

pub fn password(value: &str) -> Option<&'static str> {
    check(PASSWORD, value)
}

pub fn name(value: &str) -> Option<&'static str> {
    check(NAME, value)
}

pub fn phone(value: &str) -> Option<&'static str> {
    check(PHONE, value)
}

/// Cross-field rule, always reported against the confirmation field.
pub fn confirm_password(password: &str, confirm: &str) -> Option<&'static str> {
    if confirm.is_empty() {
        Some("Confirma tu contraseña")
    } else if confirm != password {
        Some("Las contraseñas no coinciden")
    } else {
        None
    }
}

pub fn terms(accepted: bool) -> Option<&'static str> {
    (!accepted).then_some("Debes aceptar los términos")
}

fn record(errors: &mut Vec<FieldError>, field: Field, result: Option<&'static str>) {
    if let Some(message) = result {
        errors.push(FieldError { field, message });
    }
}

/// Full-form validation of the login form. At most one error per
/// field, in declaration order.
pub fn validate_login(email_value: &str, password_value: &str) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    record(&mut errors, Field::Email, email(email_value));
    record(&mut errors, Field::Password, login_password(password_value));
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub struct RegisterInput<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
    pub phone: &'a str,
    pub terms: bool,
}

/// Full-form validation of the registration form, including the
/// cross-field confirmation rule and the terms checkbox.
pub fn validate_register(input: &RegisterInput) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    record(&mut errors, Field::Name, name(input.name));
    record(&mut errors, Field::Email, email(input.email));
    record(&mut errors, Field::Password, password(input.password));
    record(
        &mut errors,
        Field::ConfirmPassword,
        confirm_password(input.password, input.confirm_password),
    );
    record(&mut errors, Field::Phone, phone(input.phone));
    record(&mut errors, Field::Terms, terms(input.terms));
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_register_input() -> RegisterInput<'static> {
        RegisterInput {
            name: "Juan Pérez",
            email: "juan@example.com",
            password: "Secreta1",
            confirm_password: "Secreta1",
            phone: "0999999999",
            terms: true,
        }
    }

    #[test]
    fn email_rule() {
        assert_eq!(email(""), Some("El email es requerido"));
        assert_eq!(email("not-an-email"), Some("Email inválido"));
        assert_eq!(email("a@"), Some("Email inválido"));
        assert_eq!(email("a@b"), Some("Email inválido"));
        assert_eq!(email("a@b.co"), None);
        assert_eq!(email("juan.perez@example.com"), None);
    }

    #[test]
    fn password_rule_rejects_short_values() {
        for value in ["", "a", "Ab1", "Abc12"] {
            assert_eq!(
                password(value),
                Some("La contraseña debe tener al menos 6 caracteres")
            );
        }
        // Same for the login variant.
        assert_eq!(
            login_password("Abc12"),
            Some("La contraseña debe tener al menos 6 caracteres")
        );
    }

    #[test]
    fn password_rule_requires_character_classes() {
        for value in ["abcdef", "ABCDEF", "123456", "abcDEF", "abc123", "ABC123"] {
            assert_eq!(
                password(value),
                Some("Debe contener mayúscula, minúscula y número")
            );
        }
        for value in ["Abcde1", "Passw0rd", "xY9xY9"] {
            assert_eq!(password(value), None);
        }
        // The login form does not require character classes.
        assert_eq!(login_password("abcdef"), None);
    }

    #[test]
    fn name_rule_bounds() {
        assert_eq!(name("J"), Some("El nombre debe tener al menos 2 caracteres"));
        assert_eq!(name("Jo"), None);
        // Accented characters count once.
        assert_eq!(name("Án"), None);
        let long: String = "a".repeat(50);
        assert_eq!(name(&long), None);
        let too_long: String = "a".repeat(51);
        assert_eq!(name(&too_long), Some("El nombre no puede exceder 50 caracteres"));
    }

    #[test]
    fn phone_rule() {
        assert_eq!(
            phone("099999999"),
            Some("El teléfono debe tener al menos 10 dígitos")
        );
        assert_eq!(phone("09999a9999"), Some("Solo números"));
        // Length is checked before the digits-only rule.
        assert_eq!(
            phone("abc"),
            Some("El teléfono debe tener al menos 10 dígitos")
        );
        assert_eq!(phone("0999999999"), None);
    }

    #[test]
    fn confirm_password_rule() {
        assert_eq!(confirm_password("Secreta1", ""), Some("Confirma tu contraseña"));
        assert_eq!(
            confirm_password("Secreta1", "Secreta2"),
            Some("Las contraseñas no coinciden")
        );
        assert_eq!(confirm_password("Secreta1", "Secreta1"), None);
    }

    #[test]
    fn terms_rule() {
        assert_eq!(terms(false), Some("Debes aceptar los términos"));
        assert_eq!(terms(true), None);
    }

    #[test]
    fn login_validation_collects_fields_in_order() {
        let errors = validate_login("", "").unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError {
                    field: Field::Email,
                    message: "El email es requerido"
                },
                FieldError {
                    field: Field::Password,
                    message: "La contraseña debe tener al menos 6 caracteres"
                },
            ]
        );
        assert!(validate_login("a@b.co", "secret").is_ok());
    }

    #[test]
    fn register_validation_passes_on_valid_input() {
        assert!(validate_register(&valid_register_input()).is_ok());
    }

    #[test]
    fn register_validation_reports_mismatch_on_confirmation_field() {
        let input = RegisterInput {
            confirm_password: "Distinta1",
            ..valid_register_input()
        };
        let errors = validate_register(&input).unwrap_err();
        assert_eq!(
            errors,
            vec![FieldError {
                field: Field::ConfirmPassword,
                message: "Las contraseñas no coinciden"
            }]
        );
    }

    #[test]
    fn register_validation_requires_terms_regardless_of_other_fields() {
        let input = RegisterInput {
            terms: false,
            ..valid_register_input()
        };
        let errors = validate_register(&input).unwrap_err();
        assert_eq!(
            errors,
            vec![FieldError {
                field: Field::Terms,
                message: "Debes aceptar los términos"
            }]
        );
    }

    #[test]
    fn register_validation_reports_one_error_per_field_in_order() {
        let input = RegisterInput {
            name: "",
            email: "nope",
            password: "abc",
            confirm_password: "",
            phone: "123",
            terms: false,
        };
        let errors = validate_register(&input).unwrap_err();
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                Field::Name,
                Field::Email,
                Field::Password,
                Field::ConfirmPassword,
                Field::Phone,
                Field::Terms,
            ]
        );
        // First failure wins within a field: the short password fails
        // on length, not on character classes.
        assert_eq!(
            errors[2].message,
            "La contraseña debe tener al menos 6 caracteres"
        );
    }
}
