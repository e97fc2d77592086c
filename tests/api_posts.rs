//! Post, like and comment tests through the HTTP router

mod common;

use axum::http::StatusCode;
use common::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

async fn create_post(app: &TestApp, token: &str, text: &str) -> Value {
    let (status, post) = app.post("/api/posts", Some(token), json!({ "text": text })).await;
    assert_eq!(status, StatusCode::CREATED);
    post
}

fn ids(values: &Value, field: &str) -> Vec<String> {
    values
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v[field].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_like_comment_scenario() {
    let app = TestApp::new();
    let a = register_user(&app, "A", "a@x.com", "secret1").await;
    let b = register_user(&app, "B", "b@x.com", "secret1").await;

    let post = create_post(&app, &a.token, "hello").await;
    let post_id = post["id"].as_str().unwrap();
    assert_eq!(post["user"], a.id.to_string());
    assert_eq!(post["name"], "A");

    // B likes P
    let (status, likes) = app.put(&format!("/api/posts/like/{}", post_id), Some(&b.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(likes, json!([{ "user": b.id.to_string() }]));

    // B unlikes P
    let (status, likes) = app.put(&format!("/api/posts/unlike/{}", post_id), Some(&b.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(likes, json!([]));

    // B comments
    let (status, comments) = app
        .post(&format!("/api/posts/comment/{}", post_id), Some(&b.token), json!({ "text": "nice" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(comments.as_array().unwrap().len(), 1);
    assert_eq!(comments[0]["user"], b.id.to_string());
    assert_eq!(comments[0]["text"], "nice");
    let comment_id = comments[0]["id"].as_str().unwrap().to_string();

    // A owns the post but not the comment
    let path = format!("/api/posts/comment/{}/{}", post_id, comment_id);
    let (status, body) = app.delete(&path, Some(&a.token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "User not authorized");

    // B removes their own comment
    let (status, comments) = app.delete(&path, Some(&b.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(comments, json!([]));

    let (_, stored) = app.get(&format!("/api/posts/{}", post_id), Some(&a.token)).await;
    assert_eq!(stored["likes"], json!([]));
    assert_eq!(stored["comments"], json!([]));
}

#[tokio::test]
async fn test_double_like_rejected() {
    let app = TestApp::new();
    let a = register_unique_user(&app, "A").await;
    let b = register_unique_user(&app, "B").await;
    let post = create_post(&app, &a.token, "hello").await;
    let path = format!("/api/posts/like/{}", post["id"].as_str().unwrap());

    app.put(&path, Some(&b.token), None).await;
    let (status, body) = app.put(&path, Some(&b.token), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Post already liked");

    let (_, stored) = app
        .get(&format!("/api/posts/{}", post["id"].as_str().unwrap()), Some(&b.token))
        .await;
    assert_eq!(stored["likes"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unlike_without_like() {
    let app = TestApp::new();
    let a = register_unique_user(&app, "A").await;
    let post = create_post(&app, &a.token, "hello").await;

    let (status, body) = app
        .put(&format!("/api/posts/unlike/{}", post["id"].as_str().unwrap()), Some(&a.token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Post has not yet been liked");
}

#[tokio::test]
async fn test_newest_like_first() {
    let app = TestApp::new();
    let a = register_unique_user(&app, "A").await;
    let b = register_unique_user(&app, "B").await;
    let c = register_unique_user(&app, "C").await;
    let post = create_post(&app, &a.token, "hello").await;
    let path = format!("/api/posts/like/{}", post["id"].as_str().unwrap());

    app.put(&path, Some(&b.token), None).await;
    let (_, likes) = app.put(&path, Some(&c.token), None).await;

    assert_eq!(ids(&likes, "user"), vec![c.id.to_string(), b.id.to_string()]);
}

#[tokio::test]
async fn test_delete_post_ownership() {
    let app = TestApp::new();
    let a = register_unique_user(&app, "A").await;
    let b = register_unique_user(&app, "B").await;
    let post = create_post(&app, &a.token, "hello").await;
    let path = format!("/api/posts/{}", post["id"].as_str().unwrap());

    let (status, _) = app.delete(&path, Some(&b.token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app.delete(&path, Some(&a.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Post removed");

    let (status, body) = app.delete(&path, Some(&a.token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Post not found");
}

#[tokio::test]
async fn test_unknown_and_unparseable_post_ids() {
    let app = TestApp::new();
    let a = register_unique_user(&app, "A").await;

    let (status, _) = app.get(&format!("/api/posts/{}", Uuid::new_v4()), Some(&a.token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get("/api/posts/not-an-id", Some(&a.token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_posts_listed_newest_first() {
    let app = TestApp::new();
    let a = register_unique_user(&app, "A").await;
    let first = create_post(&app, &a.token, "first").await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = create_post(&app, &a.token, "second").await;

    let (status, posts) = app.get("/api/posts", Some(&a.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        ids(&posts, "id"),
        vec![
            second["id"].as_str().unwrap().to_string(),
            first["id"].as_str().unwrap().to_string()
        ]
    );
}

#[tokio::test]
async fn test_posts_require_token() {
    let app = TestApp::new();
    let (status, _) = app.get("/api/posts", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.post("/api/posts", None, json!({ "text": "hello" })).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_empty_text_rejected() {
    let app = TestApp::new();
    let a = register_unique_user(&app, "A").await;

    let (status, body) = app.post("/api/posts", Some(&a.token), json!({ "text": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["param"], "text");
    assert_eq!(body["errors"][0]["msg"], "Text is required");
}

#[tokio::test]
async fn test_remove_unknown_comment() {
    let app = TestApp::new();
    let a = register_unique_user(&app, "A").await;
    let post = create_post(&app, &a.token, "hello").await;

    let path = format!("/api/posts/comment/{}/{}", post["id"].as_str().unwrap(), Uuid::new_v4());
    let (status, body) = app.delete(&path, Some(&a.token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Comment does not exist");
}

#[tokio::test]
async fn test_removing_one_of_several_own_comments() {
    let app = TestApp::new();
    let a = register_unique_user(&app, "A").await;
    let b = register_unique_user(&app, "B").await;
    let post = create_post(&app, &a.token, "hello").await;
    let path = format!("/api/posts/comment/{}", post["id"].as_str().unwrap());

    app.post(&path, Some(&b.token), json!({ "text": "first" })).await;
    let (_, comments) = app.post(&path, Some(&b.token), json!({ "text": "second" })).await;
    let older = comments[1]["id"].as_str().unwrap().to_string();
    let newer = comments[0]["id"].as_str().unwrap().to_string();

    let (status, comments) = app.delete(&format!("{}/{}", path, older), Some(&b.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&comments, "id"), vec![newer]);
}
