use crate::api::LoginRequest;
use crate::validation::{is_valid_email, FieldRule};
use leptos::*;

pub const EMAIL_REQUIRED: &str = "You must enter a email";
pub const EMAIL_INVALID: &str = "You must enter a valid email";
pub const PASSWORD_REQUIRED: &str = "Please enter your password.";
pub const PASSWORD_TOO_SHORT: &str = "Password is too short - must be at least 4 chars.";

const PASSWORD_MIN_CHARS: usize = 4;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub remember: RwSignal<bool>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            remember: create_rw_signal(true),
        }
    }
}

impl LoginFormState {
    pub fn snapshot(&self) -> LoginFormValues {
        LoginFormValues {
            email: self.email.get(),
            password: self.password.get(),
            remember: self.remember.get(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFormValues {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

impl LoginFormValues {
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            remember: self.remember,
        }
    }
}

pub fn login_rules() -> Vec<FieldRule<LoginFormValues>> {
    vec![
        FieldRule {
            field: "email",
            check: |values| {
                if values.email.is_empty() {
                    Err(EMAIL_REQUIRED.into())
                } else if !is_valid_email(&values.email) {
                    Err(EMAIL_INVALID.into())
                } else {
                    Ok(())
                }
            },
        },
        FieldRule {
            field: "password",
            check: |values| {
                if values.password.is_empty() {
                    Err(PASSWORD_REQUIRED.into())
                } else if values.password.chars().count() < PASSWORD_MIN_CHARS {
                    Err(PASSWORD_TOO_SHORT.into())
                } else {
                    Ok(())
                }
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::evaluate;

    fn values(email: &str, password: &str) -> LoginFormValues {
        LoginFormValues {
            email: email.into(),
            password: password.into(),
            remember: true,
        }
    }

    #[test]
    fn empty_form_fails_both_fields() {
        let verdict = evaluate(&login_rules(), &values("", ""));
        assert_eq!(verdict.error_for("email"), Some(EMAIL_REQUIRED));
        assert_eq!(verdict.error_for("password"), Some(PASSWORD_REQUIRED));
        assert!(!verdict.is_valid());
    }

    #[test]
    fn malformed_email_gets_its_own_message() {
        let verdict = evaluate(&login_rules(), &values("not-an-email", "secret"));
        assert_eq!(verdict.error_for("email"), Some(EMAIL_INVALID));
        assert_eq!(verdict.error_for("password"), None);
    }

    #[test]
    fn three_char_password_is_too_short() {
        let verdict = evaluate(&login_rules(), &values("user@example.com", "abc"));
        assert_eq!(verdict.error_for("password"), Some(PASSWORD_TOO_SHORT));
    }

    #[test]
    fn four_char_password_passes() {
        let verdict = evaluate(&login_rules(), &values("user@example.com", "abcd"));
        assert!(verdict.is_valid());
    }

    #[test]
    fn to_request_carries_the_remember_flag() {
        let request = values("user@example.com", "abcd").to_request();
        assert_eq!(request.email, "user@example.com");
        assert!(request.remember);
    }
}
