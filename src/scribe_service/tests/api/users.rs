use serde_json::{Value, json};

use crate::helpers::{ADMIN_EMAIL, TestApp, member_body};

#[tokio::test]
async fn admin_creates_an_inactive_member() {
    let app = TestApp::new().await;

    let user = app.create_member("writer@scribe.test", "pw").await;

    assert_eq!(user["email"], "writer@scribe.test");
    assert_eq!(user["is_active"], false);
    assert_eq!(user["is_admin"], false);
}

#[tokio::test]
async fn responses_never_carry_password_hashes() {
    let app = TestApp::new().await;
    let created = app.create_member("writer@scribe.test", "pw").await;
    let id = created["id"].as_str().unwrap();

    let listed: Value = app.get("/users").await.json().await.unwrap();
    let fetched: Value = app.get(&format!("/users/{id}")).await.json().await.unwrap();

    for user in listed.as_array().unwrap().iter().chain([&fetched, &created]) {
        let object = user.as_object().unwrap();
        assert!(!object.contains_key("password"));
        assert!(!object.contains_key("password_hash"));
    }
    assert_eq!(listed.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn creating_users_requires_an_admin() {
    let app = TestApp::new().await;
    app.create_member("writer@scribe.test", "pw").await;
    let (member, _) = app.tokens_for("writer@scribe.test", "pw").await;

    let anonymous = app
        .post("/users", &member_body("a@scribe.test", "pw"), None)
        .await;
    let as_member = app
        .post("/users", &member_body("b@scribe.test", "pw"), Some(&member))
        .await;
    let forged = app
        .post("/users", &member_body("c@scribe.test", "pw"), Some("not.a.jwt"))
        .await;

    assert_eq!(anonymous.status().as_u16(), 401);
    assert_eq!(as_member.status().as_u16(), 403);
    assert_eq!(forged.status().as_u16(), 401);
}

#[tokio::test]
async fn duplicate_email_is_a_conflict_naming_the_field() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let response = app
        .post("/users", &member_body(ADMIN_EMAIL, "pw"), Some(&admin))
        .await;

    assert_eq!(response.status().as_u16(), 409);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn members_update_only_their_own_profile() {
    let app = TestApp::new().await;
    let first = app.create_member("first@scribe.test", "pw").await;
    let second = app.create_member("second@scribe.test", "pw").await;
    let (token, _) = app.tokens_for("first@scribe.test", "pw").await;

    let own = app
        .put(
            &format!("/users/{}", first["id"].as_str().unwrap()),
            &json!({ "first_name": "Katherine" }),
            &token,
        )
        .await;
    let other = app
        .put(
            &format!("/users/{}", second["id"].as_str().unwrap()),
            &json!({ "first_name": "Mallory" }),
            &token,
        )
        .await;

    assert_eq!(own.status().as_u16(), 200);
    let updated: Value = own.json().await.unwrap();
    assert_eq!(updated["first_name"], "Katherine");
    // Empty fields in the request leave stored values alone.
    assert_eq!(updated["last_name"], "Hopper");
    assert_eq!(other.status().as_u16(), 403);
}

#[tokio::test]
async fn admin_toggles_account_flags() {
    let app = TestApp::new().await;
    let user = app.create_member("writer@scribe.test", "pw").await;
    let id = user["id"].as_str().unwrap();
    let admin = app.admin_token().await;

    let activated: Value = app
        .post(&format!("/users/{id}/activate"), &json!({}), Some(&admin))
        .await
        .json()
        .await
        .unwrap();
    let promoted: Value = app
        .post(&format!("/users/{id}/promote"), &json!({}), Some(&admin))
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(activated["is_active"], true);
    assert_eq!(promoted["is_admin"], true);
    assert_eq!(promoted["is_active"], true);

    let demoted: Value = app
        .post(&format!("/users/{id}/demote"), &json!({}), Some(&admin))
        .await
        .json()
        .await
        .unwrap();
    let deactivated: Value = app
        .post(&format!("/users/{id}/deactivate"), &json!({}), Some(&admin))
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(demoted["is_admin"], false);
    assert_eq!(deactivated["is_active"], false);
}

#[tokio::test]
async fn admin_deletes_a_user() {
    let app = TestApp::new().await;
    let user = app.create_member("writer@scribe.test", "pw").await;
    let id = user["id"].as_str().unwrap();
    let admin = app.admin_token().await;

    let deleted = app.delete(&format!("/users/{id}"), Some(&admin)).await;
    let fetched = app.get(&format!("/users/{id}")).await;

    assert_eq!(deleted.status().as_u16(), 204);
    assert_eq!(fetched.status().as_u16(), 404);
}

#[tokio::test]
async fn malformed_user_id_is_bad_request() {
    let app = TestApp::new().await;

    let response = app.get("/users/not-an-id").await;

    assert_eq!(response.status().as_u16(), 400);
}
