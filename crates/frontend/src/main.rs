mod app;
mod components;
mod config;
mod guard;
mod hooks;
mod pages;
mod routes;
mod session;

use agrichain_core::{SessionBootstrap, SessionManager, SessionStore, attach_mirror};
use agrichain_http::AuthClient;
use app::{App, AppProps};
use config::{AuthConfig, api_base_url};
use session::SessionStorageMirror;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    console_error_panic_hook::set_once();
    init_tracing();

    let client = match AuthClient::new(api_base_url()) {
        Ok(client) => client,
        Err(err) => {
            tracing::error!(error = %err, "Failed to create auth client");
            return;
        }
    };

    let manager = SessionManager::new(SessionStore::new(), Rc::new(client));
    attach_mirror(manager.store(), SessionStorageMirror).forget();

    // Probe once per page load; routes defer until it settles
    let bootstrap = SessionBootstrap::new(manager.clone());
    wasm_bindgen_futures::spawn_local(async move {
        let session = bootstrap.run().await;
        tracing::debug!(status = ?session.status(), "Session restored");
    });

    yew::Renderer::<App>::with_props(AppProps { manager }).render();
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(tracing_web::MakeWebConsoleWriter::new());

    tracing_subscriber::registry()
        .with(EnvFilter::new(AuthConfig::LOG_FILTER))
        .with(fmt_layer)
        .init();
}
