use crate::routes::Route;
use crate::session::{use_capabilities, use_session};
use agrichain_core::{Capability, DashboardKind};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
struct PanelProps {
    title: AttrValue,
    rows: Vec<(AttrValue, AttrValue)>,
}

#[function_component(Panel)]
fn panel(props: &PanelProps) -> Html {
    html! {
        <section class="bg-white rounded-lg shadow p-6">
            <h3 class="text-lg font-semibold text-gray-900 mb-4">{ props.title.clone() }</h3>
            <ul class="divide-y divide-gray-100">
                { for props.rows.iter().map(|(left, right)| html! {
                    <li class="flex justify-between py-2 text-sm">
                        <span class="text-gray-700">{ left.clone() }</span>
                        <span class="text-gray-500">{ right.clone() }</span>
                    </li>
                }) }
            </ul>
        </section>
    }
}

fn rows(items: &[(&'static str, &'static str)]) -> Vec<(AttrValue, AttrValue)> {
    items
        .iter()
        .map(|(l, r)| (AttrValue::Static(l), AttrValue::Static(r)))
        .collect()
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let ctx = use_session();
    let capabilities = use_capabilities();

    let Some(user) = ctx.session.user() else {
        return html! {};
    };

    let panels = match user.role().dashboard_kind() {
        DashboardKind::Producer => html! {
            <>
                <Panel title="Your listed crops" rows={rows(&[
                    ("Maize, 120 kg", "Listed"),
                    ("Tomatoes, 40 kg", "Sold"),
                ])} />
                <Panel title="Pending shipments" rows={rows(&[
                    ("Order #1042", "Awaiting pickup"),
                ])} />
            </>
        },
        DashboardKind::Buyer => html! {
            <>
                <Panel title="Recent purchases" rows={rows(&[
                    ("Order #2017, Cassava", "In transit"),
                    ("Order #1988, Beans", "Delivered"),
                ])} />
                <Panel title="Suppliers you follow" rows={rows(&[
                    ("Sunshine Farms", "3 new listings"),
                ])} />
            </>
        },
    };

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h2 class="text-2xl font-bold text-gray-900">{ format!("Welcome, {}", user.username()) }</h2>
                    <p class="text-gray-500">{ format!("{} dashboard", user.role().label()) }</p>
                </div>
                <div class="flex gap-3">
                    if capabilities.contains(Capability::CanSell) {
                        <Link<Route> to={Route::Sell} classes="px-4 py-2 rounded-md text-white bg-green-600 hover:bg-green-700">
                            {"List a crop"}
                        </Link<Route>>
                    }
                    if capabilities.contains(Capability::CanAccessAdmin) {
                        <Link<Route> to={Route::Admin} classes="px-4 py-2 rounded-md border border-gray-300 text-gray-700">
                            {"Administration"}
                        </Link<Route>>
                    }
                </div>
            </div>
            <div class="grid gap-6 md:grid-cols-2">
                { panels }
            </div>
        </div>
    }
}
