use super::utils::{login_rules, LoginFormState};
use crate::api::{ApiError, LoginRequest};
use crate::components::toast::{use_toasts, Toasts};
use crate::validation::{evaluate, Verdict};
use leptos::*;
use rust_i18n::t;

/// Settled-login handling, kept out of the reactive effect so it can be
/// driven directly. Returns true when the caller should navigate to the
/// post-login landing.
pub(crate) fn apply_login_outcome(toasts: Toasts, result: &Result<(), ApiError>) -> bool {
    match result {
        Ok(_) => true,
        Err(err) => {
            if err.error.is_empty() {
                toasts.error(t!("login.toasts.failure"));
            } else {
                toasts.error(err.error.clone());
            }
            false
        }
    }
}

#[derive(Clone)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub verdict: Memo<Verdict>,
    pub submit_disabled: Signal<bool>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
    pub submit: Callback<()>,
}

/// The authentication action is injected by the caller so the page logic
/// does not depend on where the ambient auth context lives.
pub fn use_login_view_model(
    login_action: Action<LoginRequest, Result<(), ApiError>>,
) -> LoginViewModel {
    let form = LoginFormState::default();
    let toasts = use_toasts();

    let form_for_verdict = form;
    let verdict = create_memo(move |_| evaluate(&login_rules(), &form_for_verdict.snapshot()));

    let pending = login_action.pending();
    let submit_disabled = Signal::derive(move || !verdict.get().is_valid() || pending.get());

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            if apply_login_outcome(toasts, &result) {
                if let Ok(window) = crate::utils::storage::window() {
                    let _ = window.location().set_href("/");
                }
            }
        }
    });

    let form_for_submit = form;
    let submit = Callback::new(move |_: ()| {
        if pending.get_untracked() {
            return;
        }
        if !verdict.get_untracked().is_valid() {
            return;
        }
        login_action.dispatch(form_for_submit.snapshot().to_request());
    });

    LoginViewModel {
        form,
        verdict,
        submit_disabled,
        login_action,
        submit,
    }
}
