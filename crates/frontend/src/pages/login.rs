use crate::hooks::{ActionState, use_auth_actions};
use crate::routes::Route;
use agrichain_core::Credentials;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let actions = use_auth_actions();
    let email = use_state(String::new);
    let password = use_state(String::new);

    let on_email = {
        let email = email.clone();
        let actions = actions.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            actions.clear_error();
        })
    };

    let on_password = {
        let password = password.clone();
        let actions = actions.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
            actions.clear_error();
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let actions = actions.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            actions.login(Credentials::new(email.trim(), password.as_str()));
        })
    };

    let processing = actions.state().is_processing();

    html! {
        <div class="max-w-md mx-auto bg-white rounded-lg shadow-lg p-8">
            <h2 class="text-2xl font-bold text-gray-900 mb-6">{"Sign in"}</h2>
            <form onsubmit={on_submit} class="space-y-4">
                <div>
                    <label for="email" class="block text-sm font-medium text-gray-700">{"Email"}</label>
                    <input
                        id="email"
                        type="email"
                        required=true
                        value={(*email).clone()}
                        oninput={on_email}
                        class="mt-1 w-full rounded-md border border-gray-300 px-3 py-2"
                    />
                </div>
                <div>
                    <label for="password" class="block text-sm font-medium text-gray-700">{"Password"}</label>
                    <input
                        id="password"
                        type="password"
                        required=true
                        value={(*password).clone()}
                        oninput={on_password}
                        class="mt-1 w-full rounded-md border border-gray-300 px-3 py-2"
                    />
                </div>
                if let ActionState::Error(message) = actions.state() {
                    <p class="text-sm text-red-600">{ message }</p>
                }
                <button
                    type="submit"
                    disabled={processing}
                    class="w-full py-2 rounded-md text-white bg-green-600 hover:bg-green-700 disabled:opacity-50"
                >
                    { if processing { "Signing in..." } else { "Sign in" } }
                </button>
            </form>
            <p class="mt-6 text-sm text-center text-gray-600">
                {"New to AgriChain? "}
                <Link<Route> to={Route::Register} classes="text-green-700 font-medium">{"Create an account"}</Link<Route>>
            </p>
        </div>
    }
}
