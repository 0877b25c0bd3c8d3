use crate::pages::login::{components::form::LoginForm, view_model::use_login_view_model};
use crate::state::auth;
use leptos::*;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let login_action = auth::use_login_action();
    let vm = use_login_view_model(login_action);

    view! { <LoginForm vm=vm /> }
}
