//! Two-step login flow wired through `AppContext` and the session store.

mod common;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::{json, Value};

use soul_connection::config::Config;
use soul_connection::{AppContext, Role};

fn manager_jwt() -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(
        json!({"email": "manager@soul-connection.fr", "id": 3, "role": 2})
            .to_string()
            .as_bytes(),
    );
    format!("{header}.{payload}.unchecked")
}

fn auth_backend() -> Router {
    Router::new()
        .route(
            "/api/employees/login",
            post(|Json(body): Json<Value>| async move {
                if body["email"] == "manager@soul-connection.fr" {
                    Ok(Json(json!({"message": "Verification code sent to your email."})))
                } else {
                    Err(StatusCode::UNAUTHORIZED)
                }
            }),
        )
        .route(
            "/api/employees/verify",
            post(|Json(body): Json<Value>| async move {
                if body["code"] == "424242" {
                    Ok(Json(json!({"access_token": manager_jwt()})))
                } else {
                    Err(StatusCode::UNAUTHORIZED)
                }
            }),
        )
        .route(
            "/api/employees/me",
            get(|| async {
                Json(json!({
                    "id": 3,
                    "email": "manager@soul-connection.fr",
                    "name": "Marion",
                    "surname": "Dupont",
                    "work": "Manager"
                }))
            }),
        )
}

fn context(base_url: &str) -> AppContext {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();
    AppContext::new(config)
}

#[tokio::test]
async fn full_login_populates_session_and_role() {
    let base = common::serve(auth_backend()).await;
    let ctx = context(&base);

    assert!(!ctx.session.is_logged_in());
    assert!(ctx.request_login("manager@soul-connection.fr").await);
    assert!(ctx.verify_login("424242").await);

    assert!(ctx.session.is_logged_in());
    assert_eq!(ctx.session.role(), Some(Role::Manager));
    assert!(ctx.session.role().unwrap().can_view_payments());

    let me = ctx.api.get_me(&ctx.session.token()).await.expect("me");
    assert_eq!(me.work.as_deref(), Some("Manager"));

    ctx.logout();
    assert!(!ctx.session.is_logged_in());
    assert_eq!(ctx.session.token(), "");
    assert!(ctx.session.login_required());
}

#[tokio::test]
async fn rejected_code_leaves_session_untouched() {
    let base = common::serve(auth_backend()).await;
    let ctx = context(&base);

    assert!(!ctx.verify_login("000000").await);
    assert!(!ctx.session.is_logged_in());
}

#[tokio::test]
async fn unknown_email_is_reported_without_panicking() {
    let base = common::serve(auth_backend()).await;
    let ctx = context(&base);

    assert!(!ctx.request_login("stranger@nowhere.fr").await);
}
