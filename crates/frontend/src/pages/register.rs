use crate::components::Field;
use crate::hooks::{ActionState, use_auth_actions};
use crate::routes::Route;
use agrichain_core::{RegistrationProfile, Role};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let actions = use_auth_actions();
    let username = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let business_name = use_state(String::new);
    let phone_number = use_state(String::new);
    let role = use_state(|| Role::Producer);

    let text_input = |field: &UseStateHandle<String>| {
        let field = field.clone();
        let actions = actions.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            field.set(input.value());
            actions.clear_error();
        })
    };

    let on_role = {
        let role = role.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<Role>() {
                Ok(chosen) => role.set(chosen),
                Err(err) => tracing::warn!(error = %err, "Ignoring unknown role option"),
            }
        })
    };

    let on_submit = {
        let actions = actions.clone();
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        let business_name = business_name.clone();
        let phone_number = phone_number.clone();
        let role = role.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            actions.register(RegistrationProfile {
                username: username.trim().to_string(),
                email: email.trim().to_string(),
                password: (*password).clone(),
                confirm_password: (*confirm_password).clone(),
                role: *role,
                business_name: optional(&business_name),
                phone_number: optional(&phone_number),
            });
        })
    };

    if let ActionState::Done(message) = actions.state() {
        return html! {
            <div class="max-w-md mx-auto bg-white rounded-lg shadow-lg p-8 text-center">
                <h2 class="text-2xl font-bold text-gray-900 mb-4">{"You're registered"}</h2>
                <p class="text-gray-600 mb-6">{ message }</p>
                <Link<Route> to={Route::Login} classes="px-6 py-2 rounded-md text-white bg-green-600 hover:bg-green-700">
                    {"Go to sign in"}
                </Link<Route>>
            </div>
        };
    }

    let processing = actions.state().is_processing();
    let role_options = Role::ALL
        .into_iter()
        .filter(|r| r.is_self_registrable())
        .map(|r| {
            html! {
                <option value={r.as_str()} selected={*role == r}>
                    { format!("{} ({})", r.label(), r.description()) }
                </option>
            }
        });

    html! {
        <div class="max-w-lg mx-auto bg-white rounded-lg shadow-lg p-8">
            <h2 class="text-2xl font-bold text-gray-900 mb-6">{"Create your account"}</h2>
            <form onsubmit={on_submit} class="space-y-4">
                <Field id="username" label="Name" value={(*username).clone()} oninput={text_input(&username)} />
                <Field id="email" label="Email" kind="email" value={(*email).clone()} oninput={text_input(&email)} />
                <Field id="business_name" label="Business name (optional)" value={(*business_name).clone()} oninput={text_input(&business_name)} required=false />
                <Field id="phone_number" label="Phone number (optional)" kind="tel" value={(*phone_number).clone()} oninput={text_input(&phone_number)} required=false />
                <div>
                    <label for="role" class="block text-sm font-medium text-gray-700">{"I am a"}</label>
                    <select id="role" onchange={on_role} class="mt-1 w-full rounded-md border border-gray-300 px-3 py-2">
                        { for role_options }
                    </select>
                </div>
                <Field id="password" label="Password" kind="password" value={(*password).clone()} oninput={text_input(&password)} />
                <Field id="confirm_password" label="Confirm password" kind="password" value={(*confirm_password).clone()} oninput={text_input(&confirm_password)} />
                if let ActionState::Error(message) = actions.state() {
                    <p class="text-sm text-red-600">{ message }</p>
                }
                <button
                    type="submit"
                    disabled={processing}
                    class="w-full py-2 rounded-md text-white bg-green-600 hover:bg-green-700 disabled:opacity-50"
                >
                    { if processing { "Creating account..." } else { "Sign up" } }
                </button>
            </form>
            <p class="mt-6 text-sm text-center text-gray-600">
                {"Already registered? "}
                <Link<Route> to={Route::Login} classes="text-green-700 font-medium">{"Sign in"}</Link<Route>>
            </p>
        </div>
    }
}
