//! Browser routes

use agrichain_core::Page;
use yew_router::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/sell")]
    Sell,
    #[at("/user-profile")]
    Profile,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub const fn page(self) -> Page {
        match self {
            Self::Home => Page::Home,
            Self::Login => Page::Login,
            Self::Register => Page::Register,
            Self::Dashboard => Page::Dashboard,
            Self::Sell => Page::Sell,
            Self::Profile => Page::Profile,
            Self::Admin => Page::Admin,
            Self::NotFound => Page::NotFound,
        }
    }

    pub const fn from_page(page: Page) -> Self {
        match page {
            Page::Home => Self::Home,
            Page::Login => Self::Login,
            Page::Register => Self::Register,
            Page::Dashboard => Self::Dashboard,
            Page::Sell => Self::Sell,
            Page::Profile => Self::Profile,
            Page::Admin => Self::Admin,
            Page::NotFound => Self::NotFound,
        }
    }
}
