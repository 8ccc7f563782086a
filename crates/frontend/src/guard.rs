//! Route guard component

use crate::components::LoadingSpinner;
use crate::config::AuthConfig;
use crate::routes::Route;
use crate::session::{SessionStorageMirror, use_session};
use agrichain_core::{Page, RouteDecision};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RequireRouteProps {
    pub page: Page,
    pub children: Children,
}

/// Renders `children` only when the session may view `page`
#[function_component(RequireRoute)]
pub fn require_route(props: &RequireRouteProps) -> Html {
    let ctx = use_session();

    match props.page.decide(&ctx.session) {
        RouteDecision::Allow => html! { <>{ props.children.clone() }</> },
        RouteDecision::Defer => {
            let text = match SessionStorageMirror::cached_user() {
                Some(user) => format!("Welcome back, {}...", user.username()),
                None => AuthConfig::LOADING_TEXT.to_string(),
            };
            html! { <LoadingSpinner text={text} /> }
        }
        RouteDecision::Redirect(target) => {
            tracing::debug!(from = props.page.path(), to = target.page().path(), "Redirecting");
            html! { <Redirect<Route> to={Route::from_page(target.page())} /> }
        }
    }
}
