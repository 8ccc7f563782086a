//! Top navigation bar

use crate::hooks::{ActionState, use_auth_actions};
use crate::routes::Route;
use crate::session::use_session;
use agrichain_core::{NavItem, nav_items};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    let ctx = use_session();
    let actions = use_auth_actions();

    let on_logout = {
        let actions = actions.clone();
        Callback::from(move |_: MouseEvent| actions.logout())
    };

    let dismiss = {
        let actions = actions.clone();
        Callback::from(move |_: MouseEvent| actions.clear_error())
    };

    let items = nav_items(&ctx.session).into_iter().map(|item| match item {
        NavItem::Link(page) => html! {
            <Link<Route> to={Route::from_page(page)} classes="text-sm font-medium text-gray-700 hover:text-green-700">
                { item.label() }
            </Link<Route>>
        },
        NavItem::Logout => html! {
            <button
                onclick={on_logout.clone()}
                disabled={actions.state().is_processing()}
                class="text-sm font-medium text-gray-700 hover:text-red-600 disabled:opacity-50"
            >
                { item.label() }
            </button>
        },
    });

    html! {
        <header class="bg-white/80 backdrop-blur-sm border-b border-gray-200">
            <nav class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex justify-between h-16 items-center">
                <Link<Route> to={Route::Home} classes="text-2xl font-bold text-green-700">
                    {"AgriChain"}
                </Link<Route>>
                <div class="flex items-center gap-6">
                    if let Some(user) = ctx.session.user() {
                        <span class="text-sm text-gray-500">
                            { format!("{} · {}", user.username(), user.role().label()) }
                        </span>
                    }
                    { for items }
                </div>
            </nav>
            if let ActionState::Error(message) = actions.state() {
                <div class="bg-red-50 border-b border-red-200 text-red-700 text-sm px-4 py-2 flex justify-between">
                    <span>{ message }</span>
                    <button onclick={dismiss} class="font-medium">{"Dismiss"}</button>
                </div>
            }
        </header>
    }
}
