//! Integration tests for post CRUD and the ownership rule

mod common;

use axum::http::StatusCode;
use serde_json::json;

async fn create_post(
    app: &common::TestApp,
    token: &str,
    title: &str,
    content: &str,
) -> serde_json::Value {
    let body = json!({ "title": title, "content": content });
    let (status, response) = app.post_auth("/posts", token, &body.to_string()).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {}", response);
    serde_json::from_str(&response).unwrap()
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_list_and_get_are_public() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user("Secr3t!").await;
    let post = create_post(&app, &user.token, "Public read", "No token needed").await;

    let (status, response) = app.get("/posts").await;
    assert_eq!(status, StatusCode::OK);
    let posts: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert!(posts.as_array().unwrap().iter().any(|p| p["id"] == post["id"]));

    let (status, response) = app.get(&format!("/posts/{}", post["id"].as_str().unwrap())).await;
    assert_eq!(status, StatusCode::OK);
    let fetched: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(fetched["title"], "Public read");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_get_missing_post_returns_404() {
    let app = common::TestApp::new().await;

    let (status, _) = app.get(&format!("/posts/{}", uuid::Uuid::new_v4())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_forces_author_to_caller() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user("Secr3t!").await;

    // A client-supplied author_id must be ignored
    let body = json!({
        "title": "Spoofed author",
        "content": "content",
        "author_id": uuid::Uuid::new_v4().to_string()
    });
    let (status, response) = app.post_auth("/posts", &user.token, &body.to_string()).await;

    assert_eq!(status, StatusCode::CREATED);
    let post: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(post["author_id"].as_str().unwrap(), user.id);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_with_empty_title_rejected() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user("Secr3t!").await;

    let body = json!({ "title": "", "content": "content" });
    let (status, _) = app.post_auth("/posts", &user.token, &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_ownership_rule_on_update() {
    let app = common::TestApp::new().await;
    let author = app.create_test_user("Secr3t!").await;
    let other = app.create_test_user("Secr3t!").await;

    let post = create_post(&app, &author.token, "Original", "Original content").await;
    let post_path = format!("/posts/{}", post["id"].as_str().unwrap());
    let update = json!({ "title": "Edited", "content": "Edited content" });

    // Unauthenticated update -> 401
    let (status, _) = app.put(&post_path, &update.to_string()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Another plain user -> 403
    let (status, _) = app.put_auth(&post_path, &other.token, &update.to_string()).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // The author -> 200
    let (status, response) = app.put_auth(&post_path, &author.token, &update.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    let updated: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(updated["title"], "Edited");
    assert_eq!(updated["author_id"].as_str().unwrap(), author.id);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_admin_can_update_any_post_without_changing_author() {
    let app = common::TestApp::new().await;
    let author = app.create_test_user("Secr3t!").await;
    let admin = app.create_test_user("Secr3t!").await;
    let admin = app.promote_to_admin(&admin, "Secr3t!").await;

    let post = create_post(&app, &author.token, "Original", "Original content").await;
    let post_path = format!("/posts/{}", post["id"].as_str().unwrap());

    let update = json!({ "title": "Moderated", "content": "Cleaned up" });
    let (status, response) = app.put_auth(&post_path, &admin.token, &update.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let updated: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(updated["title"], "Moderated");
    // Author stays the original author, not the admin
    assert_eq!(updated["author_id"].as_str().unwrap(), author.id);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_missing_post_is_404_not_403() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user("Secr3t!").await;

    let update = json!({ "title": "Edited", "content": "Edited content" });
    let (status, _) = app
        .put_auth(
            &format!("/posts/{}", uuid::Uuid::new_v4()),
            &user.token,
            &update.to_string(),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_ownership_rule_on_delete() {
    let app = common::TestApp::new().await;
    let author = app.create_test_user("Secr3t!").await;
    let other = app.create_test_user("Secr3t!").await;

    let post = create_post(&app, &author.token, "Doomed", "To be deleted").await;
    let post_path = format!("/posts/{}", post["id"].as_str().unwrap());

    // Another plain user -> 403, post still there
    let (status, _) = app.delete_auth(&post_path, &other.token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = app.get(&post_path).await;
    assert_eq!(status, StatusCode::OK);

    // The author -> 200, post gone
    let (status, _) = app.delete_auth(&post_path, &author.token).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.get(&post_path).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_admin_can_delete_any_post() {
    let app = common::TestApp::new().await;
    let author = app.create_test_user("Secr3t!").await;
    let admin = app.create_test_user("Secr3t!").await;
    let admin = app.promote_to_admin(&admin, "Secr3t!").await;

    let post = create_post(&app, &author.token, "Flagged", "Removed by moderation").await;
    let post_path = format!("/posts/{}", post["id"].as_str().unwrap());

    let (status, _) = app.delete_auth(&post_path, &admin.token).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.get(&post_path).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_missing_post_is_404() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user("Secr3t!").await;

    let (status, _) = app
        .delete_auth(&format!("/posts/{}", uuid::Uuid::new_v4()), &user.token)
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
