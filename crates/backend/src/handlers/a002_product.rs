use axum::Json;
use contracts::domain::a002_product::aggregate::Product;

use crate::domain::a002_product::repository;
use crate::shared::error::ApiError;

/// GET /api/products
pub async fn list_all() -> Result<Json<Vec<Product>>, ApiError> {
    repository::list_all()
        .map(|items| Json(items.to_vec()))
        .ok_or_else(|| ApiError::NotFound("Products file not found.".into()))
}
