use crate::session::{use_capabilities, use_session};
use yew::prelude::*;

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let ctx = use_session();
    let capabilities = use_capabilities();

    let Some(user) = ctx.session.user() else {
        return html! {};
    };

    html! {
        <div class="max-w-lg mx-auto bg-white rounded-lg shadow-lg p-8">
            <h2 class="text-2xl font-bold text-gray-900 mb-6">{"Your profile"}</h2>
            <dl class="grid grid-cols-3 gap-y-3 text-sm">
                <dt class="text-gray-500">{"Name"}</dt>
                <dd class="col-span-2 text-gray-900">{ user.username() }</dd>
                <dt class="text-gray-500">{"Email"}</dt>
                <dd class="col-span-2 text-gray-900">{ user.email().unwrap_or("Not provided") }</dd>
                <dt class="text-gray-500">{"Role"}</dt>
                <dd class="col-span-2 text-gray-900">{ user.role().label() }</dd>
            </dl>
            <h3 class="mt-8 mb-2 text-sm font-semibold text-gray-700">{"What you can do"}</h3>
            <ul class="list-disc list-inside text-sm text-gray-600">
                { for capabilities.iter().map(|c| html! { <li>{ c.label() }</li> }) }
            </ul>
        </div>
    }
}
