use chrono::{DateTime, Duration, Utc};
use leptos::*;

use crate::api::CompanyRegistration;
use crate::validation::{is_valid_br_phone, is_valid_email, FieldRule};

pub const NAME_REQUIRED: &str = "Por gentileza, informe seu nome.";
pub const NAME_TOO_SHORT: &str = "Nome informado é muito curto!";
pub const NAME_TOO_LONG: &str = "Nome informado é muito longo é permitido o máximo de 50 caracteres";
pub const PHONE_INVALID: &str = "Por gentileza, informe um número válido.";
pub const EMAIL_REQUIRED: &str = "Por gentileza, informe um e-mail";
pub const EMAIL_INVALID: &str = "Por gentileza, informe um e-mail válido";
pub const PASSWORD_REQUIRED: &str = "Por favor, digite sua senha.";
pub const PASSWORD_TOO_SHORT: &str = "A senha é muito curta - deve ter no mínimo 8 caracteres.";
pub const PASSWORD_MISMATCH: &str = "As senhas devem corresponder";
pub const TERMS_NOT_ACCEPTED: &str = "Os termos e condições devem ser aceitos";

pub const NAME_MIN_CHARS: usize = 5;
pub const NAME_MAX_CHARS: usize = 50;
const PASSWORD_MIN_CHARS: usize = 8;

// Every registration goes out on the default monthly plan; the trial due
// date is three days out.
pub const DEFAULT_RECURRENCE: &str = "MENSAL";
pub const DEFAULT_STATUS: &str = "t";
pub const DEFAULT_PLAN_ID: &str = "1";
pub const DUE_DATE_OFFSET_DAYS: i64 = 3;

#[derive(Clone, Copy)]
pub struct SignupFormState {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub password: RwSignal<String>,
    pub password_confirm: RwSignal<String>,
    pub accept_terms: RwSignal<bool>,
}

impl Default for SignupFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            phone: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            password_confirm: create_rw_signal(String::new()),
            accept_terms: create_rw_signal(false),
        }
    }
}

impl SignupFormState {
    pub fn snapshot(&self) -> SignupFormValues {
        SignupFormValues {
            name: self.name.get(),
            email: self.email.get(),
            phone: self.phone.get(),
            password: self.password.get(),
            password_confirm: self.password_confirm.get(),
            accept_terms: self.accept_terms.get(),
        }
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.email.set(String::new());
        self.phone.set(String::new());
        self.password.set(String::new());
        self.password_confirm.set(String::new());
        self.accept_terms.set(false);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupFormValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub password_confirm: String,
    pub accept_terms: bool,
}

impl SignupFormValues {
    /// Builds the full outbound record, fixed defaults included. `now` is
    /// a parameter so tests can pin the due date.
    pub fn to_registration(&self, now: DateTime<Utc>) -> CompanyRegistration {
        CompanyRegistration {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            password: self.password.clone(),
            password_confirm: self.password_confirm.clone(),
            accept_terms_conditions: self.accept_terms,
            recurrence: DEFAULT_RECURRENCE.to_string(),
            due_date: (now + Duration::days(DUE_DATE_OFFSET_DAYS)).to_rfc3339(),
            campaigns_enabled: false,
            status: DEFAULT_STATUS.to_string(),
            plan_id: DEFAULT_PLAN_ID.to_string(),
        }
    }
}

pub fn signup_rules() -> Vec<FieldRule<SignupFormValues>> {
    vec![
        FieldRule {
            field: "name",
            check: |values| {
                let chars = values.name.chars().count();
                if values.name.is_empty() {
                    Err(NAME_REQUIRED.into())
                } else if chars < NAME_MIN_CHARS {
                    Err(NAME_TOO_SHORT.into())
                } else if chars > NAME_MAX_CHARS {
                    Err(NAME_TOO_LONG.into())
                } else {
                    Ok(())
                }
            },
        },
        FieldRule {
            field: "phone",
            check: |values| {
                if is_valid_br_phone(&values.phone) {
                    Ok(())
                } else {
                    Err(PHONE_INVALID.into())
                }
            },
        },
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
        FieldRule {
            field: "password_confirm",
            check: |values| {
                if values.password_confirm == values.password {
                    Ok(())
                } else {
                    Err(PASSWORD_MISMATCH.into())
                }
            },
        },
        FieldRule {
            field: "accept_terms",
            check: |values| {
                if values.accept_terms {
                    Ok(())
                } else {
                    Err(TERMS_NOT_ACCEPTED.into())
                }
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::evaluate;
    use chrono::TimeZone;

    fn valid_values() -> SignupFormValues {
        SignupFormValues {
            name: "Empresa Exemplo".into(),
            email: "contato@exemplo.com.br".into(),
            phone: "11999998888".into(),
            password: "segredo123".into(),
            password_confirm: "segredo123".into(),
            accept_terms: true,
        }
    }

    #[test]
    fn fully_valid_form_passes_every_rule() {
        let verdict = evaluate(&signup_rules(), &valid_values());
        assert!(verdict.is_valid(), "failed: {:?}", verdict.failed_fields());
    }

    #[test]
    fn name_boundaries_are_inclusive() {
        let mut values = valid_values();

        values.name = "a".repeat(4);
        let verdict = evaluate(&signup_rules(), &values);
        assert_eq!(verdict.error_for("name"), Some(NAME_TOO_SHORT));

        values.name = "a".repeat(5);
        assert!(evaluate(&signup_rules(), &values).is_valid());

        values.name = "a".repeat(50);
        assert!(evaluate(&signup_rules(), &values).is_valid());

        values.name = "a".repeat(51);
        let verdict = evaluate(&signup_rules(), &values);
        assert_eq!(verdict.error_for("name"), Some(NAME_TOO_LONG));
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let mut values = valid_values();
        // Five characters, more than five bytes.
        values.name = "ãõçéí".into();
        assert!(evaluate(&signup_rules(), &values).is_valid());
    }

    #[test]
    fn empty_name_gets_the_required_message() {
        let mut values = valid_values();
        values.name = String::new();
        let verdict = evaluate(&signup_rules(), &values);
        assert_eq!(verdict.error_for("name"), Some(NAME_REQUIRED));
    }

    #[test]
    fn mismatched_confirmation_invalidates_the_form() {
        let mut values = valid_values();
        values.password_confirm = "outra-senha".into();
        let verdict = evaluate(&signup_rules(), &values);
        assert_eq!(verdict.error_for("password_confirm"), Some(PASSWORD_MISMATCH));
        assert!(!verdict.is_valid());
    }

    #[test]
    fn seven_char_password_is_too_short() {
        let mut values = valid_values();
        values.password = "abcdefg".into();
        values.password_confirm = "abcdefg".into();
        let verdict = evaluate(&signup_rules(), &values);
        assert_eq!(verdict.error_for("password"), Some(PASSWORD_TOO_SHORT));
    }

    #[test]
    fn unaccepted_terms_invalidate_an_otherwise_valid_form() {
        let mut values = valid_values();
        values.accept_terms = false;
        let verdict = evaluate(&signup_rules(), &values);
        assert_eq!(verdict.error_for("accept_terms"), Some(TERMS_NOT_ACCEPTED));
        assert_eq!(verdict.failed_fields(), vec!["accept_terms"]);
    }

    #[test]
    fn invalid_phone_fails_its_rule_only() {
        let mut values = valid_values();
        values.phone = "123".into();
        let verdict = evaluate(&signup_rules(), &values);
        assert_eq!(verdict.failed_fields(), vec!["phone"]);
    }

    #[test]
    fn to_registration_fills_the_fixed_defaults() {
        let now = Utc.with_ymd_and_hms(2026, 8, 25, 12, 0, 0).unwrap();
        let registration = valid_values().to_registration(now);

        assert_eq!(registration.recurrence, "MENSAL");
        assert_eq!(registration.status, "t");
        assert_eq!(registration.plan_id, "1");
        assert!(!registration.campaigns_enabled);
        assert!(registration.accept_terms_conditions);
        assert_eq!(registration.due_date, "2026-08-28T12:00:00+00:00");
    }
}
