use agrichain_core::{Capability, Role};
use yew::prelude::*;

const COLUMNS: [Capability; 3] = [
    Capability::CanSell,
    Capability::CanPurchase,
    Capability::CanAccessAdmin,
];

/// Read-only view of what each role is allowed to do
#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    html! {
        <div class="bg-white rounded-lg shadow-lg p-8">
            <h2 class="text-2xl font-bold text-gray-900 mb-6">{"Administration"}</h2>
            <table class="w-full text-sm">
                <thead>
                    <tr class="text-left text-gray-500">
                        <th class="py-2">{"Role"}</th>
                        { for COLUMNS.iter().map(|c| html! { <th class="py-2">{ c.label() }</th> }) }
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-100">
                    { for Role::ALL.into_iter().map(|role| html! {
                        <tr>
                            <td class="py-2 font-medium text-gray-900">{ role.label() }</td>
                            { for COLUMNS.iter().map(|c| html! {
                                <td class="py-2">{ if role.has(*c) { "✓" } else { "" } }</td>
                            }) }
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}
