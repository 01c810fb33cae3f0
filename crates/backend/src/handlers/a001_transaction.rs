use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_transaction::aggregate::{Transaction, TransactionDto, TransactionId};
use contracts::domain::common::AggregateId;

use crate::domain::a001_transaction::service;
use crate::shared::data::db::get_connection;
use crate::shared::error::ApiError;

fn parse_id(raw: &str) -> Result<TransactionId, ApiError> {
    TransactionId::from_string(raw).map_err(ApiError::BadRequest)
}

/// GET /api/transactions
pub async fn list_all() -> Result<Json<Vec<Transaction>>, ApiError> {
    service::list_all(get_connection()).await.map(Json)
}

/// POST /api/transactions
pub async fn create(
    Json(dto): Json<TransactionDto>,
) -> Result<(StatusCode, Json<Transaction>), ApiError> {
    let created = service::create(get_connection(), dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/transactions/:id
pub async fn update(
    Path(id): Path<String>,
    Json(record): Json<Transaction>,
) -> Result<Json<Transaction>, ApiError> {
    let id = parse_id(&id)?;
    service::update(get_connection(), id, record).await.map(Json)
}

/// DELETE /api/transactions/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    service::delete(get_connection(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
