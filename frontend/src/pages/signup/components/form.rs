use crate::components::common::{Button, TextField};
use crate::pages::signup::view_model::SignupViewModel;
use leptos::*;
use rust_i18n::t;

#[component]
pub fn SignupForm(vm: SignupViewModel) -> impl IntoView {
    let form = vm.form;
    let verdict = vm.verdict;
    let plans = vm.plans;
    let pending = vm.submit_action.pending();
    let submit = vm.submit;

    let error_for = move |field: &'static str| {
        Signal::derive(move || verdict.get().error_for(field).map(str::to_string))
    };
    let terms_error = error_for("accept_terms");

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit.call(());
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">
                    {t!("signup.title").to_string()}
                </h2>
                <form class="mt-8 space-y-4" on:submit=handle_submit>
                    <TextField
                        id="name"
                        label=t!("signup.fields.name").to_string()
                        value=Signal::derive(move || form.name.get())
                        on_input=Callback::new(move |value| form.name.set(value))
                        error=error_for("name")
                    />
                    <TextField
                        id="email"
                        label=t!("signup.fields.email").to_string()
                        input_type="email"
                        value=Signal::derive(move || form.email.get())
                        on_input=Callback::new(move |value| form.email.set(value))
                        error=error_for("email")
                    />
                    <TextField
                        id="phone"
                        label=t!("signup.fields.phone").to_string()
                        input_type="tel"
                        value=Signal::derive(move || form.phone.get())
                        on_input=Callback::new(move |value| form.phone.set(value))
                        error=error_for("phone")
                    />
                    <TextField
                        id="password"
                        label=t!("signup.fields.password").to_string()
                        input_type="password"
                        value=Signal::derive(move || form.password.get())
                        on_input=Callback::new(move |value| form.password.set(value))
                        error=error_for("password")
                    />
                    <TextField
                        id="password_confirm"
                        label=t!("signup.fields.password_confirm").to_string()
                        input_type="password"
                        value=Signal::derive(move || form.password_confirm.get())
                        on_input=Callback::new(move |value| form.password_confirm.set(value))
                        error=error_for("password_confirm")
                    />
                    <div>
                        <label class="flex items-center gap-2 text-sm text-gray-700">
                            <input
                                type="checkbox"
                                class="h-4 w-4 rounded border-gray-300 text-indigo-600 focus:ring-indigo-500"
                                prop:checked=move || form.accept_terms.get()
                                on:change=move |ev| form.accept_terms.set(event_target_checked(&ev))
                            />
                            {t!("signup.fields.accept_terms").to_string()}
                        </label>
                        <Show when=move || terms_error.get().is_some()>
                            <p class="mt-1 text-sm text-red-600">
                                {move || terms_error.get().unwrap_or_default()}
                            </p>
                        </Show>
                    </div>
                    <Button class="w-full" disabled=vm.submit_disabled loading=pending>
                        {t!("signup.buttons.submit").to_string()}
                    </Button>
                </form>
                <Show when=move || !plans.get().is_empty()>
                    <div class="text-sm text-gray-600">
                        <p class="font-medium">{t!("signup.plans.heading").to_string()}</p>
                        <ul class="mt-1 list-disc pl-5">
                            <For
                                each=move || plans.get()
                                key=|plan| plan.id
                                children=|plan| view! { <li>{plan.name}</li> }
                            />
                        </ul>
                    </div>
                </Show>
            </div>
        </div>
    }
}
