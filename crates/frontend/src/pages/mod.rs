//! One component per route

mod admin;
mod dashboard;
mod home;
mod login;
mod not_found;
mod profile;
mod register;
mod sell;

pub use admin::AdminPage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use register::RegisterPage;
pub use sell::SellPage;
