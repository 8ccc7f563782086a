use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="text-center py-24">
            <h2 class="text-3xl font-bold text-gray-900">{"Page not found"}</h2>
            <p class="mt-2 text-gray-500">{"There is nothing at this address."}</p>
            <Link<Route> to={Route::Home} classes="mt-6 inline-block text-green-700 font-medium">{"Back to home"}</Link<Route>>
        </div>
    }
}
