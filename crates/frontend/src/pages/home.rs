use crate::routes::Route;
use crate::session::{use_capabilities, use_session};
use agrichain_core::Capability;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let ctx = use_session();
    let capabilities = use_capabilities();
    let button = "px-8 py-3 rounded-md text-white bg-green-600 hover:bg-green-700";

    html! {
        <div class="text-center py-16">
            <h1 class="text-4xl font-extrabold text-gray-900 sm:text-5xl">
                {"Fresh produce, straight from the farm"}
            </h1>
            <p class="mt-4 max-w-2xl mx-auto text-lg text-gray-500">
                {"AgriChain connects producers, distributors and retailers in one marketplace."}
            </p>
            <div class="mt-8 flex justify-center gap-4">
                if ctx.session.is_authenticated() {
                    if capabilities.contains(Capability::CanSell) {
                        <Link<Route> to={Route::Sell} classes={button}>{"Sell your crops"}</Link<Route>>
                    }
                    <Link<Route> to={Route::Dashboard} classes={button}>{"Open dashboard"}</Link<Route>>
                } else {
                    <Link<Route> to={Route::Register} classes={button}>{"Join AgriChain"}</Link<Route>>
                    <Link<Route> to={Route::Login} classes="px-8 py-3 rounded-md border border-gray-300 text-gray-700">{"Sign in"}</Link<Route>>
                }
            </div>
        </div>
    }
}
