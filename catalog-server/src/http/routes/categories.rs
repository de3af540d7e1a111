//! Category endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Deserialize;

use super::MessageResponse;
use crate::db::repos::CategoryRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, RecordId};
use crate::http::server::AppState;
use crate::models::{Category, NewCategory};

/// Create category request
#[derive(Deserialize)]
pub struct CreateCategoryRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// POST /categories/ - duplicate titles are allowed
async fn create_category(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateCategoryRequest>,
) -> Result<Json<Category>, ApiError> {
    let category = NewCategory::new(req.title, req.description);
    category.validate()?;
    let category = CategoryRepo::new(&state.pool).create(&category).await?;
    Ok(Json(category))
}

/// GET /categories/
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let categories = CategoryRepo::new(&state.pool).list().await?;
    Ok(Json(categories))
}

/// GET /categories/{id}/
async fn get_category(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<Category>, ApiError> {
    let category = CategoryRepo::new(&state.pool).get(id).await?;
    Ok(Json(category))
}

/// DELETE /categories/{id}/ - 409 while products still reference it
async fn delete_category(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<MessageResponse>, ApiError> {
    CategoryRepo::new(&state.pool).delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Category deleted successfully",
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories/", get(list_categories).post(create_category))
        .route("/categories/{id}/", get(get_category).delete(delete_category))
}
