//! Product endpoints
//!
//! CRUD on `/products/{id}/` plus two read-only listings under
//! `/products/filter/`: by price (asc/desc) and by category title.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use super::MessageResponse;
use crate::db::repos::{PriceOrder, ProductRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, RecordId};
use crate::http::server::AppState;
use crate::models::{NewProduct, Product, ProductPatch};

/// Create product request
///
/// `count` and `price` default to zero when omitted.
#[derive(Deserialize)]
pub struct CreateProductRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub count: Option<i32>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub category_id: Option<i64>,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(req: CreateProductRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            count: req.count.unwrap_or(0),
            price: req.price.unwrap_or(0.0),
            user_id: req.user_id,
            category_id: req.category_id,
        }
    }
}

/// POST /products/
async fn create_product(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateProductRequest>,
) -> Result<Json<Product>, ApiError> {
    let product = NewProduct::from(req);
    product.validate()?;
    let product = ProductRepo::new(&state.pool).create(&product).await?;
    Ok(Json(product))
}

/// GET /products/
async fn list_products(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = ProductRepo::new(&state.pool).list().await?;
    Ok(Json(products))
}

/// GET /products/{id}/
async fn get_product(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<Product>, ApiError> {
    let product = ProductRepo::new(&state.pool).get(id).await?;
    Ok(Json(product))
}

/// PUT /products/{id}/ - only the supplied fields change
async fn update_product(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
    JsonBody(patch): JsonBody<ProductPatch>,
) -> Result<Json<Product>, ApiError> {
    patch.validate()?;
    let product = ProductRepo::new(&state.pool).update(id, &patch).await?;
    Ok(Json(product))
}

/// DELETE /products/{id}/
async fn delete_product(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<MessageResponse>, ApiError> {
    ProductRepo::new(&state.pool).delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Product deleted successfully",
    }))
}

/// GET /products/filter/price/asc/
async fn products_by_price_asc(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = ProductRepo::new(&state.pool)
        .list_by_price(PriceOrder::Asc)
        .await?;
    Ok(Json(products))
}

/// GET /products/filter/price/desc/
async fn products_by_price_desc(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = ProductRepo::new(&state.pool)
        .list_by_price(PriceOrder::Desc)
        .await?;
    Ok(Json(products))
}

/// GET /products/filter/{category_name}/ - empty array when nothing matches
async fn products_by_category(
    State(state): State<Arc<AppState>>,
    Path(category_name): Path<String>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = ProductRepo::new(&state.pool)
        .list_by_category_title(&category_name)
        .await?;
    Ok(Json(products))
}

/// Product routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/products/", get(list_products).post(create_product))
        .route(
            "/products/{id}/",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/products/filter/price/asc/", get(products_by_price_asc))
        .route("/products/filter/price/desc/", get(products_by_price_desc))
        .route("/products/filter/{category_name}/", get(products_by_category))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_defaults() {
        let req: CreateProductRequest =
            serde_json::from_str(r#"{"title": "lamp", "description": "desk lamp"}"#).unwrap();
        let product = NewProduct::from(req);

        assert_eq!(product.count, 0);
        assert_eq!(product.price, 0.0);
        assert_eq!(product.description.as_deref(), Some("desk lamp"));
        assert_eq!(product.category_id, None);
    }

    #[test]
    fn create_request_keeps_supplied_values() {
        let req: CreateProductRequest = serde_json::from_str(
            r#"{"title": "lamp", "count": 100, "price": 200, "category_id": 3}"#,
        )
        .unwrap();
        let product = NewProduct::from(req);

        assert_eq!(product.count, 100);
        assert_eq!(product.price, 200.0);
        assert_eq!(product.category_id, Some(3));
    }
}
