use leptos::*;
use leptos_router::*;
use rust_i18n::t;

mod api;
mod components;
pub mod config;
mod pages;
mod state;
pub mod utils;
mod validation;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;

rust_i18n::i18n!("locales", fallback = "en");

use components::toast::{provide_toasts, ToastHost};
use pages::{login::LoginPage, signup::SignupPage};

#[component]
pub fn App() -> impl IntoView {
    leptos_meta::provide_meta_context();
    provide_toasts();

    view! {
        <leptos_meta::Title text="Atendo" />
        <state::auth::AuthProvider>
            <Router>
                <ToastHost />
                <Routes>
                    <Route path="/" view=HomePage />
                    <Route path="/login" view=LoginPage />
                    <Route path="/signup" view=SignupPage />
                </Routes>
            </Router>
        </state::auth::AuthProvider>
    }
}

/// Post-login landing.
#[component]
fn HomePage() -> impl IntoView {
    let (auth, _set_auth) = state::auth::use_auth();
    let greeting = move || {
        auth.get()
            .user
            .map(|user| user.name)
            .unwrap_or_else(|| t!("home.guest").to_string())
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50">
            <div class="text-center">
                <h1 class="text-3xl font-extrabold text-gray-900">{t!("home.title").to_string()}</h1>
                <p class="mt-2 text-gray-600">{greeting}</p>
                <a class="mt-4 inline-block text-sm text-indigo-600 hover:text-indigo-500" href="/login">
                    {t!("home.login_link").to_string()}
                </a>
            </div>
        </div>
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn boot() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    rust_i18n::set_locale("pt-BR");

    config::init().await;
    log::info!("runtime config initialized");

    mount_to_body(App);
}
