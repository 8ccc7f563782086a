use crate::components::Header;
use crate::guard::RequireRoute;
use crate::pages::{
    AdminPage, DashboardPage, HomePage, LoginPage, NotFoundPage, ProfilePage, RegisterPage,
    SellPage,
};
use crate::routes::Route;
use crate::session::SessionProvider;
use agrichain_core::SessionManager;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub manager: SessionManager,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider manager={props.manager.clone()}>
                <div class="min-h-screen bg-gradient-to-br from-green-50 to-gray-100">
                    <Header />
                    <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
            </SessionProvider>
        </BrowserRouter>
    }
}

/// Every route goes through the guard, including public ones, so nothing
/// renders before the session is known.
fn switch(route: Route) -> Html {
    let content = match route {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Sell => html! { <SellPage /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::Admin => html! { <AdminPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    };

    html! {
        <RequireRoute page={route.page()}>
            { content }
        </RequireRoute>
    }
}
