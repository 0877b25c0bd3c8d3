use crate::components::common::{Button, TextField};
use crate::pages::login::view_model::LoginViewModel;
use leptos::*;
use rust_i18n::t;

#[component]
pub fn LoginForm(vm: LoginViewModel) -> impl IntoView {
    let form = vm.form;
    let verdict = vm.verdict;
    let pending = vm.login_action.pending();
    let submit = vm.submit;

    let email_error =
        Signal::derive(move || verdict.get().error_for("email").map(str::to_string));
    let password_error =
        Signal::derive(move || verdict.get().error_for("password").map(str::to_string));

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit.call(());
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">
                    {t!("login.title").to_string()}
                </h2>
                <form class="mt-8 space-y-6" on:submit=handle_submit>
                    <TextField
                        id="email"
                        label=t!("login.fields.email").to_string()
                        input_type="email"
                        value=Signal::derive(move || form.email.get())
                        on_input=Callback::new(move |value| form.email.set(value))
                        error=email_error
                    />
                    <TextField
                        id="password"
                        label=t!("login.fields.password").to_string()
                        input_type="password"
                        value=Signal::derive(move || form.password.get())
                        on_input=Callback::new(move |value| form.password.set(value))
                        error=password_error
                    />
                    <label class="flex items-center gap-2 text-sm text-gray-700">
                        <input
                            type="checkbox"
                            class="h-4 w-4 rounded border-gray-300 text-indigo-600 focus:ring-indigo-500"
                            prop:checked=move || form.remember.get()
                            on:change=move |ev| form.remember.set(event_target_checked(&ev))
                        />
                        {t!("login.fields.remember").to_string()}
                    </label>
                    // A button inside a form submits by default.
                    <Button class="w-full" disabled=vm.submit_disabled loading=pending>
                        {t!("login.buttons.submit").to_string()}
                    </Button>
                </form>
            </div>
        </div>
    }
}
