use super::repository::SignupRepository;
use super::utils::{signup_rules, SignupFormState};
use crate::api::{ApiClient, ApiError, CompanyRegistration, CompanyResponse, PlanResponse};
use crate::components::toast::{use_toasts, Toasts};
use crate::validation::{evaluate, Verdict};
use chrono::Utc;
use leptos::*;
use leptos_router::use_query_map;
use rust_i18n::t;
use std::rc::Rc;

/// One submission attempt, derived from the action's pending flag and
/// last settled value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

pub fn phase_for(
    pending: bool,
    value: Option<&Result<CompanyResponse, ApiError>>,
) -> SubmitPhase {
    if pending {
        return SubmitPhase::Submitting;
    }
    match value {
        Some(Ok(_)) => SubmitPhase::Succeeded,
        Some(Err(_)) => SubmitPhase::Failed,
        None => SubmitPhase::Idle,
    }
}

/// Settled-submission handling, kept out of the reactive effect so it can
/// be driven directly. Both branches reset the form; the return value says
/// whether the caller should navigate on to the login page.
pub(crate) fn apply_submit_outcome(
    form: SignupFormState,
    toasts: Toasts,
    result: &Result<CompanyResponse, ApiError>,
) -> bool {
    form.reset();
    match result {
        Ok(_) => {
            toasts.success(t!("signup.toasts.success"));
            true
        }
        Err(err) => {
            if err.error.is_empty() {
                toasts.error(t!("signup.toasts.failure"));
            } else {
                toasts.error(err.error.clone());
            }
            false
        }
    }
}

#[derive(Clone)]
pub struct SignupViewModel {
    pub form: SignupFormState,
    pub verdict: Memo<Verdict>,
    pub submit_disabled: Signal<bool>,
    pub phase: Signal<SubmitPhase>,
    pub plans: RwSignal<Vec<PlanResponse>>,
    pub submit_action: Action<CompanyRegistration, Result<CompanyResponse, ApiError>>,
    pub submit: Callback<()>,
}

pub fn use_signup_view_model() -> SignupViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = SignupRepository::new_with_client(Rc::new(api));
    let form = SignupFormState::default();
    let toasts = use_toasts();
    let plans = create_rw_signal(Vec::new());

    let form_for_verdict = form;
    let verdict = create_memo(move |_| evaluate(&signup_rules(), &form_for_verdict.snapshot()));

    // The link that brought the visitor here may carry a companyId, but
    // the open registration endpoint takes no such field.
    let query = use_query_map();
    create_effect(move |_| {
        if let Some(company_id) = query.get().get("companyId").cloned() {
            log::debug!("signup opened with companyId={}, ignored", company_id);
        }
    });

    // One plan-list read on mount; a failure only costs the plan display.
    let repo_for_plans = repository.clone();
    create_effect(move |_| {
        let repo = repo_for_plans.clone();
        spawn_local(async move {
            match repo.list_plans().await {
                Ok(list) => plans.set(list),
                Err(err) => log::warn!("failed to load plan list: {}", err),
            }
        });
    });

    let repo_for_submit = repository.clone();
    let submit_action = create_action(move |registration: &CompanyRegistration| {
        let repo = repo_for_submit.clone();
        let registration = registration.clone();
        async move { repo.register(registration).await }
    });

    let pending = submit_action.pending();
    let value = submit_action.value();
    let phase = Signal::derive(move || phase_for(pending.get(), value.get().as_ref()));
    let submit_disabled = Signal::derive(move || !verdict.get().is_valid() || pending.get());

    let form_for_outcome = form;
    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            if apply_submit_outcome(form_for_outcome, toasts, &result) {
                if let Ok(window) = crate::utils::storage::window() {
                    let _ = window.location().set_href("/login");
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
        let registration = form_for_submit.snapshot().to_registration(Utc::now());
        submit_action.dispatch(registration);
    });

    SignupViewModel {
        form,
        verdict,
        submit_disabled,
        phase,
        plans,
        submit_action,
        submit,
    }
}
