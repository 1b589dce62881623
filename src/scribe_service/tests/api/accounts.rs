use serde_json::{Value, json};

use crate::helpers::{
    ADMIN_EMAIL, ADMIN_PASSWORD, BASE_URL, TestApp, link_parameter, reset_link_path,
};

#[tokio::test]
async fn login_returns_a_token_pair_for_the_seeded_admin() {
    let app = TestApp::new().await;

    let (access, refresh) = app.tokens_for(ADMIN_EMAIL, ADMIN_PASSWORD).await;

    assert!(!access.is_empty());
    assert!(!refresh.is_empty());
    assert_ne!(access, refresh);
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app.login(ADMIN_EMAIL, "not-the-password").await;

    assert_eq!(response.status().as_u16(), 401);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn login_for_unknown_email_is_not_found() {
    let app = TestApp::new().await;

    let response = app.login("nobody@scribe.test", "pw").await;

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn login_with_malformed_body_is_bad_request() {
    let app = TestApp::new().await;

    let missing_password = app
        .post("/login", &json!({ "email": ADMIN_EMAIL }), None)
        .await;
    let bad_email = app
        .post("/login", &json!({ "email": "admin", "password": "pw" }), None)
        .await;

    assert_eq!(missing_password.status().as_u16(), 400);
    assert_eq!(bad_email.status().as_u16(), 400);
}

#[tokio::test]
async fn refresh_exchanges_a_refresh_token_for_a_new_pair() {
    let app = TestApp::new().await;
    let (_, refresh) = app.tokens_for(ADMIN_EMAIL, ADMIN_PASSWORD).await;

    let response = app
        .post("/refresh", &json!({ "refresh_token": refresh }), None)
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert!(body["access_token"].is_string());
    assert!(body["refresh_token"].is_string());
}

#[tokio::test]
async fn refresh_rejects_an_access_token() {
    let app = TestApp::new().await;
    let (access, _) = app.tokens_for(ADMIN_EMAIL, ADMIN_PASSWORD).await;

    let response = app
        .post("/refresh", &json!({ "refresh_token": access }), None)
        .await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn forgot_then_reset_password_replaces_the_credential() {
    let app = TestApp::new().await;
    app.create_member("reader@scribe.test", "first-password").await;

    let response = app
        .post(
            "/forgot-password",
            &json!({ "email": "reader@scribe.test" }),
            None,
        )
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let sent = app.outbox.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient.as_str(), "reader@scribe.test");
    assert_eq!(sent[0].subject, "Reset Password");
    assert!(sent[0].content.contains(BASE_URL));

    let token = link_parameter(&sent[0].content, "token");
    let path = format!("/reset-password?email=reader@scribe.test&token={token}");
    let response = app
        .post(&path, &json!({ "password": "second-password" }), None)
        .await;
    assert_eq!(response.status().as_u16(), 200);

    assert_eq!(
        app.login("reader@scribe.test", "first-password")
            .await
            .status()
            .as_u16(),
        401
    );
    app.tokens_for("reader@scribe.test", "second-password").await;

    // The token is spent after one use.
    let replay = app
        .post(&path, &json!({ "password": "third-password" }), None)
        .await;
    assert_eq!(replay.status().as_u16(), 401);
}

#[tokio::test]
async fn reset_password_with_a_wrong_token_is_unauthorized() {
    let app = TestApp::new().await;
    app.create_member("reader@scribe.test", "first-password").await;
    app.post(
        "/forgot-password",
        &json!({ "email": "reader@scribe.test" }),
        None,
    )
    .await;

    let response = app
        .post(
            "/reset-password?email=reader@scribe.test&token=deadbeef",
            &json!({ "password": "second-password" }),
            None,
        )
        .await;

    assert_eq!(response.status().as_u16(), 401);
    app.tokens_for("reader@scribe.test", "first-password").await;
}

#[tokio::test]
async fn forgot_password_for_unknown_email_sends_nothing() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/forgot-password",
            &json!({ "email": "nobody@scribe.test" }),
            None,
        )
        .await;

    assert_eq!(response.status().as_u16(), 404);
    assert!(app.outbox.sent().is_empty());
}

#[tokio::test]
async fn emailed_reset_link_works_for_plus_addressed_accounts() {
    let app = TestApp::new().await;
    app.create_member("a+b@scribe.test", "first-password").await;

    let response = app
        .post(
            "/forgot-password",
            &json!({ "email": "a+b@scribe.test" }),
            None,
        )
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let sent = app.outbox.sent();
    let path = reset_link_path(&sent[0].content);
    let response = app
        .post(&path, &json!({ "password": "second-password" }), None)
        .await;

    assert_eq!(response.status().as_u16(), 200);
    app.tokens_for("a+b@scribe.test", "second-password").await;
}
