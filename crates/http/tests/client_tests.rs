//! Integration tests for the auth API client

use agrichain_core::{
    AuthApi, AuthError, Credentials, Page, RedirectTarget, RegistrationProfile, Role,
    RouteDecision, Session, SessionBootstrap, SessionManager, SessionStore,
};
use agrichain_http::ClientConfig;
use agrichain_http::client::{AuthClient, ClientError};
use serde_json::json;
use std::io::Write;
use std::rc::Rc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn user_body(role: &str) -> serde_json::Value {
    json!({
        "user": {
            "id": "usr_01",
            "username": "Rosa",
            "email": "a@b.com",
            "role": role
        }
    })
}

fn profile() -> RegistrationProfile {
    RegistrationProfile {
        username: "Sunshine Farms".to_string(),
        email: "hello@sunshine.example".to_string(),
        password: "pw".to_string(),
        confirm_password: "pw".to_string(),
        role: Role::Producer,
        business_name: Some("Sunshine Co-op".to_string()),
        phone_number: None,
    }
}

#[tokio::test]
async fn test_client_builder() {
    let client = AuthClient::builder()
        .base_url("http://localhost:8080/")
        .user_agent("agrichain-tests")
        .build();

    assert!(client.is_ok());
    let client = client.unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let result = AuthClient::builder().build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_login_posts_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"email": "a@b.com", "password": "x"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body("retailer")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(mock_server.uri()).unwrap();
    let user = client
        .login(&Credentials::new(" a@b.com ", "x"))
        .await
        .unwrap();

    assert_eq!(user.id, "usr_01");
    assert_eq!(user.role, "retailer");
}

#[tokio::test]
async fn test_login_unauthorized_is_invalid_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Wrong password"})),
        )
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(mock_server.uri()).unwrap();
    let err = client
        .login(&Credentials::new("a@b.com", "nope"))
        .await
        .unwrap_err();

    assert_eq!(err, AuthError::InvalidCredentials);
}

#[tokio::test]
async fn test_server_error_keeps_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({"error": "maintenance window"})),
        )
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(mock_server.uri()).unwrap();
    let err = client
        .login(&Credentials::new("a@b.com", "x"))
        .await
        .unwrap_err();

    assert_eq!(err, AuthError::server(503, "maintenance window"));
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_unreachable_server_is_network_unavailable() {
    let client = AuthClient::new("http://127.0.0.1:1").unwrap();
    let err = client.probe_session().await.unwrap_err();
    assert!(matches!(err, AuthError::NetworkUnavailable(_)));
}

#[tokio::test]
async fn test_malformed_body_is_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/session"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(mock_server.uri()).unwrap();
    let err = client.probe_session().await.unwrap_err();
    assert!(matches!(err, AuthError::ServerError { status: 200, .. }));
}

#[tokio::test]
async fn test_register_sends_profile() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/register"))
        .and(body_json(json!({
            "username": "Sunshine Farms",
            "email": "hello@sunshine.example",
            "password": "pw",
            "role": "producer",
            "business_name": "Sunshine Co-op"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "message": "Account created"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(mock_server.uri()).unwrap();
    client.register(&profile()).await.unwrap();
}

#[tokio::test]
async fn test_register_refusal_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": false, "message": "Email already registered"})),
        )
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(mock_server.uri()).unwrap();
    let err = client.register(&profile()).await.unwrap_err();
    assert_eq!(err, AuthError::Rejected("Email already registered".into()));
}

#[tokio::test]
async fn test_register_conflict_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(409).set_body_string("Username taken"))
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(mock_server.uri()).unwrap();
    let err = client.register(&profile()).await.unwrap_err();
    assert_eq!(err, AuthError::Rejected("Username taken".into()));
}

#[tokio::test]
async fn test_logout_accepts_empty_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/logout"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(mock_server.uri()).unwrap();
    assert!(client.logout().await.is_ok());
}

#[tokio::test]
async fn test_probe_without_session_is_not_authenticated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/session"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(mock_server.uri()).unwrap();
    assert_eq!(
        client.probe_session().await.unwrap_err(),
        AuthError::NotAuthenticated
    );
}

#[tokio::test]
async fn test_authorized_get_maps_forbidden() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(mock_server.uri()).unwrap();
    let result: Result<serde_json::Value, _> = client.get_authorized("/orders").await;
    assert_eq!(result.unwrap_err(), AuthError::NotAuthenticated);
}

#[tokio::test]
async fn test_session_flow_over_http() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/session"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body("retailer")))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/logout"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = Rc::new(AuthClient::new(mock_server.uri()).unwrap());
    let manager = SessionManager::new(SessionStore::new(), client);
    let bootstrap = SessionBootstrap::new(manager.clone());

    assert_eq!(bootstrap.run().await, Session::Anonymous);
    assert_eq!(
        Page::Dashboard.decide(&manager.store().state()),
        RouteDecision::Redirect(RedirectTarget::Login)
    );

    let user = manager
        .login(&Credentials::new("a@b.com", "x"))
        .await
        .unwrap();
    assert_eq!(user.role(), Role::Retailer);
    assert_eq!(
        Page::Sell.decide(&manager.store().state()),
        RouteDecision::Redirect(RedirectTarget::Home)
    );

    // Remote failure is reported, local sign-out still happens
    let err = manager.logout().await.unwrap_err();
    assert!(err.is_transient());
    assert_eq!(manager.store().state(), Session::Anonymous);
}

#[tokio::test]
async fn test_client_from_config_file() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/session"))
        .and(header("user-agent", "agrichain-config-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body("farmer")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config_path = std::env::temp_dir().join(format!(
        "agrichain-client-from-config-{}.toml",
        std::process::id()
    ));
    let mut file = std::fs::File::create(&config_path).unwrap();
    writeln!(
        file,
        "base_url = \"{}\"\ntimeout_secs = 5\nuser_agent = \"agrichain-config-test\"",
        mock_server.uri()
    )
    .unwrap();

    let config = ClientConfig::load(Some(&config_path)).unwrap();
    std::fs::remove_file(&config_path).unwrap();

    let client = AuthClient::from_config(&config).unwrap();
    assert_eq!(client.base_url(), mock_server.uri());

    let user = client.probe_session().await.unwrap();
    assert_eq!(user.role, "farmer");
}
