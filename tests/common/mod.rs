// Shared helpers for the integration tests: an in-memory app plus token minting
#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use tower::ServiceExt;

use befit::api::create_routes;
use befit::auth::{JwtService, UserRole};
use befit::models::{CreatePerformedSet, ExerciseTypeRequest, WorkoutRequest};
use befit::repositories::{
    ExerciseTypeRepository, MemoryStore, PerformedSetRepository, Repositories, WorkoutRepository,
};

pub const TEST_SECRET: &str = "test_secret_key_for_testing_only";

pub static TEST_JWT: Lazy<JwtService> = Lazy::new(|| JwtService::new(TEST_SECRET));

pub fn user_token(user_id: &str) -> String {
    TEST_JWT
        .create_access_token(user_id, &format!("{}@example.com", user_id), UserRole::User)
        .unwrap()
}

pub fn admin_token() -> String {
    TEST_JWT
        .create_access_token("admin", "admin@befit.com", UserRole::Admin)
        .unwrap()
}

/// Router backed by a `MemoryStore` the test can also reach directly.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let router = create_routes(Repositories::from_store(store.clone()), TEST_SECRET);
        Self { router, store }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        (status, json)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, token, None).await
    }
}

pub fn workout_body(start: DateTime<Utc>) -> Value {
    json!({
        "start_time": start.to_rfc3339(),
        "end_time": (start + Duration::hours(1)).to_rfc3339(),
        "notes": "Upper body"
    })
}

pub async fn seed_exercise_type(store: &MemoryStore, name: &str) -> i64 {
    store
        .insert_exercise_type(ExerciseTypeRequest {
            name: name.to_string(),
            description: None,
            muscle_group: None,
        })
        .await
        .unwrap()
        .id
}

pub async fn seed_workout(store: &MemoryStore, owner_id: &str, start: DateTime<Utc>) -> i64 {
    store
        .insert_workout(
            owner_id,
            WorkoutRequest {
                start_time: start,
                end_time: start + Duration::hours(1),
                notes: None,
            },
        )
        .await
        .unwrap()
        .id
}

pub async fn seed_set(
    store: &MemoryStore,
    owner_id: &str,
    workout_id: i64,
    exercise_type_id: i64,
    sets: i32,
    reps: i32,
    weight: f64,
) -> i64 {
    store
        .insert_performed_set(
            owner_id,
            CreatePerformedSet {
                workout_id,
                exercise_type_id,
                sets,
                reps,
                weight,
            },
        )
        .await
        .unwrap()
        .expect("workout should belong to owner")
        .id
}
