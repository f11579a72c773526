//! HTTP-level integration tests for the reading-progress endpoints.
//!
//! End-to-end over the real router: record progress, list the reading
//! history, and the error paths (missing fields, unknown chapter, chapter
//! from the wrong story, missing token).

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, get, get_auth, post_json, post_json_auth};
use sqlx::PgPool;
use storyloom_db::models::chapter::{Chapter, CreateChapter};
use storyloom_db::models::story::{CreateStory, Story};
use storyloom_db::repositories::{ChapterRepo, StoryRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Register a reader via the API, returning `(access_token, user_id)`.
async fn register_reader(app: Router, username: &str) -> (String, i64) {
    let body = serde_json::json!({
        "username": username,
        "email": format!("{username}@test.com"),
        "password": "a-long-password",
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    (
        json["access_token"].as_str().unwrap().to_string(),
        json["user"]["id"].as_i64().unwrap(),
    )
}

/// Seed a story with `count` chapters directly through the repositories.
async fn seed_story(pool: &PgPool, author_id: i64, title: &str, count: i32) -> (Story, Vec<Chapter>) {
    let story = StoryRepo::create(
        pool,
        &CreateStory {
            author_id,
            title: title.to_string(),
            description: None,
            cover_url: Some(format!("https://covers.test/{title}.png")),
        },
    )
    .await
    .unwrap();

    let mut chapters = Vec::new();
    for i in 1..=count {
        chapters.push(
            ChapterRepo::create(
                pool,
                &CreateChapter {
                    story_id: story.id,
                    title: format!("Chapter {i}"),
                    sequence_index: i,
                    content_md: "body".to_string(),
                },
            )
            .await
            .unwrap(),
        );
    }
    (story, chapters)
}

/// POST a progress update and assert it was accepted.
async fn record(app: Router, token: &str, story_id: i64, chapter_id: i64) {
    let body = serde_json::json!({ "story_id": story_id, "chapter_id": chapter_id });
    let response = post_json_auth(app, "/api/v1/reading-progress", token, body).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

// ---------------------------------------------------------------------------
// Happy paths
// ---------------------------------------------------------------------------

/// Two updates in the same story collapse into one history entry carrying
/// the second chapter.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_record_then_list(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (token, user_id) = register_reader(app.clone(), "reader").await;
    let (story, chapters) = seed_story(&pool, user_id, "Nightfall", 5).await;

    record(app.clone(), &token, story.id, chapters[3].id).await;
    record(app.clone(), &token, story.id, chapters[4].id).await;

    let response = get_auth(app, "/api/v1/reading-progress", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();

    assert_eq!(data.len(), 1, "one entry per story");
    assert_eq!(data[0]["story_id"], story.id);
    assert_eq!(data[0]["chapter_id"], chapters[4].id);
    assert_eq!(data[0]["story_title"], "Nightfall");
    assert_eq!(data[0]["chapter_title"], "Chapter 5");
    assert_eq!(data[0]["chapter_index"], 5);
}

/// Stories appear most recently read first.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_history_ordering(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (token, user_id) = register_reader(app.clone(), "reader").await;

    let mut story_ids = Vec::new();
    for title in ["First", "Second", "Third"] {
        let (story, chapters) = seed_story(&pool, user_id, title, 1).await;
        record(app.clone(), &token, story.id, chapters[0].id).await;
        story_ids.push(story.id);
    }

    let response = get_auth(app, "/api/v1/reading-progress", &token).await;
    let json = body_json(response).await;
    let listed: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["story_id"].as_i64().unwrap())
        .collect();

    assert_eq!(listed, vec![story_ids[2], story_ids[1], story_ids[0]]);
}

/// `?story_id=` narrows the listing to one story.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_story_filter(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (token, user_id) = register_reader(app.clone(), "reader").await;
    let (story_a, chapters_a) = seed_story(&pool, user_id, "Alpha", 1).await;
    let (story_b, chapters_b) = seed_story(&pool, user_id, "Bravo", 1).await;

    record(app.clone(), &token, story_a.id, chapters_a[0].id).await;
    record(app.clone(), &token, story_b.id, chapters_b[0].id).await;

    let uri = format!("/api/v1/reading-progress?story_id={}", story_a.id);
    let response = get_auth(app, &uri, &token).await;
    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();

    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["story_id"], story_a.id);
}

/// A reader with no history gets an empty list.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_empty_history(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, _) = register_reader(app.clone(), "fresh").await;

    let response = get_auth(app, "/api/v1/reading-progress", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"], serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// Error paths
// ---------------------------------------------------------------------------

/// Omitted fields report the stable MISSING_FIELDS code and name the fields.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, _) = register_reader(app.clone(), "reader").await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/reading-progress",
        &token,
        serde_json::json!({ "story_id": 1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "MISSING_FIELDS");
    assert!(json["error"].as_str().unwrap().contains("chapter_id"));

    let response = post_json_auth(
        app,
        "/api/v1/reading-progress",
        &token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "MISSING_FIELDS");
}

/// Both endpoints require a Bearer token.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_requires_authentication(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/reading-progress").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = serde_json::json!({ "story_id": 1, "chapter_id": 1 });
    let response = post_json(app, "/api/v1/reading-progress", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Recording against a chapter that does not exist returns 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_chapter(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (token, user_id) = register_reader(app.clone(), "reader").await;
    let (story, _) = seed_story(&pool, user_id, "Short", 1).await;

    let body = serde_json::json!({ "story_id": story.id, "chapter_id": 9999 });
    let response = post_json_auth(app, "/api/v1/reading-progress", &token, body).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

/// A chapter belonging to a different story is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_chapter_from_wrong_story(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (token, user_id) = register_reader(app.clone(), "reader").await;
    let (story_a, _) = seed_story(&pool, user_id, "Alpha", 1).await;
    let (_story_b, chapters_b) = seed_story(&pool, user_id, "Bravo", 1).await;

    let body = serde_json::json!({ "story_id": story_a.id, "chapter_id": chapters_b[0].id });
    let response = post_json_auth(app, "/api/v1/reading-progress", &token, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

/// Non-positive ids are rejected before touching the store.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_positive_ids(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, _) = register_reader(app.clone(), "reader").await;

    let body = serde_json::json!({ "story_id": 0, "chapter_id": -3 });
    let response = post_json_auth(app, "/api/v1/reading-progress", &token, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}
