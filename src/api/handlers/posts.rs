/*
 * Responsibility
 * - /posts CRUD handlers
 * - The {id} segment arrives already resolved (PostIdParam extractor)
 * - Timestamps are taken here, at the request boundary
 */
use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;

use crate::{
    api::{
        dto::posts::{CreatePostRequest, PostResponse, UpdatePostRequest},
        extractors::{JsonBody, PostIdParam},
    },
    error::{AppError, AppResult},
    state::AppState,
};

pub async fn list_posts(State(state): State<AppState>) -> AppResult<Json<Vec<PostResponse>>> {
    let posts = state.posts.list().await?;
    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

pub async fn get_post(
    State(state): State<AppState>,
    PostIdParam(id): PostIdParam,
) -> AppResult<Json<PostResponse>> {
    let post = state.posts.get(id).await?;
    Ok(Json(post.into()))
}

pub async fn create_post(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreatePostRequest>,
) -> AppResult<(StatusCode, Json<PostResponse>)> {
    let new_post = req.into_new_post(Utc::now()).map_err(AppError::validation)?;
    let post = state.posts.create(new_post).await?;
    Ok((StatusCode::CREATED, Json(post.into())))
}

pub async fn update_post(
    State(state): State<AppState>,
    PostIdParam(id): PostIdParam,
    JsonBody(req): JsonBody<UpdatePostRequest>,
) -> AppResult<Json<PostResponse>> {
    let post = state.posts.update(id, req.into_changes(Utc::now())).await?;
    Ok(Json(post.into()))
}

pub async fn delete_post(
    State(state): State<AppState>,
    PostIdParam(id): PostIdParam,
) -> AppResult<StatusCode> {
    state.posts.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        Router,
        body::Body,
        http::{Method, Request, header},
    };
    use chrono::DateTime;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::app::build_router;
    use crate::config::{AppEnv, Config, StoreBackend};
    use crate::error::MISSING_FIELDS_MESSAGE;
    use crate::middleware::http::BODY_LIMIT_BYTES;
    use crate::repos::MemoryPostStore;
    use crate::services::{PostService, SeedPolicy};
    use crate::state::AppState;

    fn app(seed_policy: SeedPolicy) -> Router {
        let config = Config {
            addr: "127.0.0.1:0".parse().unwrap(),
            app_env: AppEnv::Development,
            cors_allowed_origins: vec![],
            store: StoreBackend::Memory,
            seed_policy,
        };
        let posts = PostService::new(Arc::new(MemoryPostStore::new()), seed_policy);
        build_router(AppState::new(Arc::new(posts)), &config)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (u16, Value) {
        let mut req = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                req = req.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let res = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
        let status = res.status().as_u16();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn date_of(post: &Value) -> DateTime<chrono::Utc> {
        post["date"].as_str().unwrap().parse().unwrap()
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let app = app(SeedPolicy::Never);
        let before = chrono::Utc::now();

        let (status, created) = send(
            &app,
            Method::POST,
            "/posts",
            Some(json!({"title": "Hello", "content": "World", "author": "Ann"})),
        )
        .await;
        assert_eq!(status, 201);
        assert_eq!(created["id"], json!(1));
        assert_eq!(created["author"], "Ann");
        assert!(date_of(&created) >= before);

        let (status, fetched) = send(&app, Method::GET, "/posts/1", None).await;
        assert_eq!(status, 200);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn create_without_author_uses_placeholder() {
        let app = app(SeedPolicy::Never);
        let (status, created) = send(
            &app,
            Method::POST,
            "/posts",
            Some(json!({"title": "Hello", "content": "World"})),
        )
        .await;
        assert_eq!(status, 201);
        assert_eq!(created["author"], "Anonymous");
    }

    #[tokio::test]
    async fn create_missing_fields_is_rejected() {
        let app = app(SeedPolicy::Never);
        for body in [
            json!({"content": "no title"}),
            json!({"title": "no content"}),
            json!({"title": "", "content": "empty title"}),
        ] {
            let (status, err) = send(&app, Method::POST, "/posts", Some(body)).await;
            assert_eq!(status, 400);
            assert_eq!(err, json!({"message": MISSING_FIELDS_MESSAGE}));
        }
    }

    #[tokio::test]
    async fn malformed_body_gets_a_json_error() {
        let app = app(SeedPolicy::Never);
        let req = Request::builder()
            .method(Method::POST)
            .uri("/posts")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), 400);

        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn get_distinguishes_missing_from_malformed_ids() {
        let app = app(SeedPolicy::Never);

        let (status, err) = send(&app, Method::GET, "/posts/99", None).await;
        assert_eq!(status, 404);
        assert_eq!(err["message"], "Can't find the post with this ID.");

        let (status, err) = send(&app, Method::GET, "/posts/abc", None).await;
        assert_eq!(status, 400);
        assert_eq!(err["message"], "Invalid post ID.");
    }

    #[tokio::test]
    async fn patch_only_author_keeps_title_and_content() {
        let app = app(SeedPolicy::Never);
        let (_, created) = send(
            &app,
            Method::POST,
            "/posts",
            Some(json!({"title": "Keep", "content": "Me"})),
        )
        .await;

        let (status, updated) = send(
            &app,
            Method::PATCH,
            "/posts/1",
            Some(json!({"author": "New Author", "title": ""})),
        )
        .await;
        assert_eq!(status, 200);
        assert_eq!(updated["title"], "Keep");
        assert_eq!(updated["content"], "Me");
        assert_eq!(updated["author"], "New Author");
        assert!(date_of(&updated) >= date_of(&created));
    }

    #[tokio::test]
    async fn patch_reports_missing_and_malformed_ids() {
        let app = app(SeedPolicy::Never);
        let (status, _) = send(&app, Method::PATCH, "/posts/5", Some(json!({"title": "x"}))).await;
        assert_eq!(status, 404);

        let (status, _) = send(&app, Method::PATCH, "/posts/x", Some(json!({"title": "x"}))).await;
        assert_eq!(status, 400);
    }

    #[tokio::test]
    async fn patch_without_body_only_refreshes_the_date() {
        let app = app(SeedPolicy::Never);
        let (_, created) = send(
            &app,
            Method::POST,
            "/posts",
            Some(json!({"title": "Same", "content": "Text", "author": "Ann"})),
        )
        .await;

        let (status, updated) = send(&app, Method::PATCH, "/posts/1", None).await;
        assert_eq!(status, 200);
        assert_eq!(updated["title"], "Same");
        assert_eq!(updated["content"], "Text");
        assert_eq!(updated["author"], "Ann");
        assert!(date_of(&updated) >= date_of(&created));
    }

    #[tokio::test]
    async fn create_without_body_reports_missing_fields() {
        let app = app(SeedPolicy::Never);
        let (status, err) = send(&app, Method::POST, "/posts", None).await;
        assert_eq!(status, 400);
        assert_eq!(err, json!({"message": MISSING_FIELDS_MESSAGE}));
    }

    #[tokio::test]
    async fn delete_twice_returns_not_found() {
        let app = app(SeedPolicy::Never);
        send(
            &app,
            Method::POST,
            "/posts",
            Some(json!({"title": "Bye", "content": "Soon"})),
        )
        .await;

        let (status, body) = send(&app, Method::DELETE, "/posts/1", None).await;
        assert_eq!(status, 204);
        assert_eq!(body, Value::Null);

        let (status, _) = send(&app, Method::GET, "/posts/1", None).await;
        assert_eq!(status, 404);

        let (status, _) = send(&app, Method::DELETE, "/posts/1", None).await;
        assert_eq!(status, 404);

        let (status, _) = send(&app, Method::DELETE, "/posts/one", None).await;
        assert_eq!(status, 400);
    }

    #[tokio::test]
    async fn listing_an_empty_collection_seeds_it() {
        let app = app(SeedPolicy::Once);

        let (status, first) = send(&app, Method::GET, "/posts", None).await;
        assert_eq!(status, 200);
        let first = first.as_array().unwrap().clone();
        assert_eq!(first.len(), 3);
        assert_eq!(first[1]["author"], "Mia Williams");
        assert_eq!(first[0]["date"], "2023-08-01T10:00:00Z");

        let (_, second) = send(&app, Method::GET, "/posts", None).await;
        assert_eq!(second.as_array().unwrap(), &first);
    }

    #[tokio::test]
    async fn unknown_routes_get_a_json_404() {
        let app = app(SeedPolicy::Never);
        let (status, body) = send(&app, Method::GET, "/nope", None).await;
        assert_eq!(status, 404);
        assert_eq!(body["message"], "Route not found.");
    }

    #[tokio::test]
    async fn unsupported_methods_get_a_json_405() {
        let app = app(SeedPolicy::Never);
        let req = Request::builder()
            .method(Method::PUT)
            .uri("/posts/1")
            .body(Body::empty())
            .unwrap();
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), 405);
        assert_eq!(res.headers()[header::CONTENT_TYPE], "application/json");

        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"message": "Method not allowed."}));
    }

    #[tokio::test]
    async fn oversized_bodies_get_a_json_413() {
        let app = app(SeedPolicy::Never);
        let content = "x".repeat(BODY_LIMIT_BYTES + 1);
        let oversized = json!({"title": "Big", "content": content}).to_string();

        let req = Request::builder()
            .method(Method::POST)
            .uri("/posts")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(oversized))
            .unwrap();
        let res = app.clone().oneshot(req).await.unwrap();
        assert_eq!(res.status(), 413);
        assert_eq!(res.headers()[header::CONTENT_TYPE], "application/json");

        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"message": "Request body too large."}));

        let (_, posts) = send(&app, Method::GET, "/posts", None).await;
        assert_eq!(posts, json!([]));
    }

    #[tokio::test]
    async fn health_reports_the_store() {
        let app = app(SeedPolicy::Never);
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, 200);
        assert_eq!(body, json!({"status": "ok", "store": "memory"}));
    }
}
