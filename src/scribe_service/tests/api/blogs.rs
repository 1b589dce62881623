use serde_json::{Value, json};

use crate::helpers::TestApp;

async fn create_blog(app: &TestApp, token: &str, title: &str, status: &str) -> Value {
    let response = app
        .post(
            "/blogs",
            &json!({ "title": title, "body": "Lorem ipsum", "status": status }),
            Some(token),
        )
        .await;
    assert_eq!(response.status().as_u16(), 201);
    response.json().await.unwrap()
}

#[tokio::test]
async fn writer_id_and_date_are_stamped_from_the_caller() {
    let app = TestApp::new().await;
    let member = app.create_member("writer@scribe.test", "pw").await;
    let (token, _) = app.tokens_for("writer@scribe.test", "pw").await;

    let blog = create_blog(&app, &token, "First post", "draft").await;

    assert_eq!(blog["writer_id"], member["id"]);
    assert_eq!(blog["title"], "First post");
    assert!(blog["last_modified_date"].is_string());

    let fetched: Value = app
        .get(&format!("/blogs/{}", blog["id"].as_str().unwrap()))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["id"], blog["id"]);
    assert_eq!(fetched["writer_id"], member["id"]);
}

#[tokio::test]
async fn creating_a_blog_requires_a_token() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/blogs",
            &json!({ "title": "t", "body": "b", "status": "draft" }),
            None,
        )
        .await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn blogs_are_filtered_by_writer_and_status() {
    let app = TestApp::new().await;
    let member = app.create_member("writer@scribe.test", "pw").await;
    let (writer, _) = app.tokens_for("writer@scribe.test", "pw").await;
    let admin = app.admin_token().await;

    create_blog(&app, &writer, "Draft", "draft").await;
    create_blog(&app, &writer, "Live", "published").await;
    create_blog(&app, &admin, "Announcement", "published").await;

    let all: Value = app.get("/blogs").await.json().await.unwrap();
    let by_writer: Value = app
        .get(&format!(
            "/blogs?writer_id={}",
            member["id"].as_str().unwrap()
        ))
        .await
        .json()
        .await
        .unwrap();
    let published: Value = app
        .get("/blogs?status=published")
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(all.as_array().unwrap().len(), 3);
    assert_eq!(by_writer.as_array().unwrap().len(), 2);
    assert_eq!(published.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn blogs_are_filtered_by_modification_date() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    create_blog(&app, &admin, "Recent", "draft").await;

    let since_2000: Value = app
        .get("/blogs?start_date=2000-01-01T00:00:00Z")
        .await
        .json()
        .await
        .unwrap();
    let before_2000: Value = app
        .get("/blogs?end_date=2000-01-01T00:00:00Z")
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(since_2000.as_array().unwrap().len(), 1);
    assert!(before_2000.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn update_keeps_the_writer_and_merges_fields() {
    let app = TestApp::new().await;
    let member = app.create_member("writer@scribe.test", "pw").await;
    let (writer, _) = app.tokens_for("writer@scribe.test", "pw").await;
    let blog = create_blog(&app, &writer, "Draft", "draft").await;
    let admin = app.admin_token().await;

    let response = app
        .put(
            &format!("/blogs/{}", blog["id"].as_str().unwrap()),
            &json!({ "title": "Edited", "body": "Lorem ipsum", "status": "published" }),
            &admin,
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["title"], "Edited");
    assert_eq!(updated["status"], "published");
    assert_eq!(updated["writer_id"], member["id"]);
}

#[tokio::test]
async fn only_admins_delete_blogs() {
    let app = TestApp::new().await;
    app.create_member("writer@scribe.test", "pw").await;
    let (writer, _) = app.tokens_for("writer@scribe.test", "pw").await;
    let blog = create_blog(&app, &writer, "Draft", "draft").await;
    let path = format!("/blogs/{}", blog["id"].as_str().unwrap());

    let as_writer = app.delete(&path, Some(&writer)).await;
    assert_eq!(as_writer.status().as_u16(), 403);

    let admin = app.admin_token().await;
    let as_admin = app.delete(&path, Some(&admin)).await;
    assert_eq!(as_admin.status().as_u16(), 200);
    let body: Value = as_admin.json().await.unwrap();
    assert_eq!(body["message"], "Blog deleted successfully");

    assert_eq!(app.get(&path).await.status().as_u16(), 404);
}

#[tokio::test]
async fn comments_are_scoped_to_their_blog() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let first = create_blog(&app, &admin, "First", "published").await;
    let second = create_blog(&app, &admin, "Second", "published").await;
    let first_id = first["id"].as_str().unwrap();
    let second_id = second["id"].as_str().unwrap();

    let response = app
        .post(
            &format!("/blogs/{first_id}/comments"),
            &json!({ "body": "Nice read" }),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status().as_u16(), 201);
    let comment: Value = response.json().await.unwrap();
    let comment_id = comment["id"].as_str().unwrap();
    assert_eq!(comment["blog_id"], first["id"]);

    let listed: Value = app
        .get(&format!("/blogs/{first_id}/comments"))
        .await
        .json()
        .await
        .unwrap();
    let elsewhere: Value = app
        .get(&format!("/blogs/{second_id}/comments"))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert!(elsewhere.as_array().unwrap().is_empty());

    let found = app
        .get(&format!("/blogs/{first_id}/comments/{comment_id}"))
        .await;
    let misplaced = app
        .get(&format!("/blogs/{second_id}/comments/{comment_id}"))
        .await;
    assert_eq!(found.status().as_u16(), 200);
    assert_eq!(misplaced.status().as_u16(), 404);
}

#[tokio::test]
async fn commenting_requires_a_token() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let blog = create_blog(&app, &admin, "First", "published").await;

    let response = app
        .post(
            &format!("/blogs/{}/comments", blog["id"].as_str().unwrap()),
            &json!({ "body": "Anonymous" }),
            None,
        )
        .await;

    assert_eq!(response.status().as_u16(), 401);
}
