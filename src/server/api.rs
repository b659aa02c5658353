use axum::{routing::get, Json, Router};
use serde::Serialize;

pub fn router() -> Router {
  Router::new().route("/health", get(health))
}

#[derive(Serialize)]
struct Health {
  status: &'static str,
}

/// Liveness check; nothing about the request changes the answer.
async fn health() -> Json<Health> {
  Json(Health { status: "healthy" })
}
