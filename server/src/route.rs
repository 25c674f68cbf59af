use crate::handler::AppModule;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

mod book;

pub use self::book::*;

pub trait SystemRouter {
    fn route_system(self) -> Self;
}

impl SystemRouter for Router<AppModule> {
    fn route_system(self) -> Self {
        self.route(
            "/",
            get(|| async { Json(json!({"message": "Welcome to the Book Catalog API"})) }),
        )
        .route(
            "/health",
            get(|| async { Json(json!({"status": "healthy"})) }),
        )
    }
}
