use crate::pages::signup::{components::form::SignupForm, view_model::use_signup_view_model};
use leptos::*;

#[component]
pub fn SignupPanel() -> impl IntoView {
    let vm = use_signup_view_model();

    view! { <SignupForm vm=vm /> }
}
