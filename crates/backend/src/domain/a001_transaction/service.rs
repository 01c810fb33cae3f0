use super::repository;
use crate::shared::error::ApiError;
use contracts::domain::a001_transaction::aggregate::{Transaction, TransactionDto, TransactionId};
use once_cell::sync::Lazy;
use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;

/// Serialises id allocation with the insert that uses it
static CREATE_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Получение списка всех операций
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Transaction>, ApiError> {
    Ok(repository::list_all(db).await?)
}

/// Создание операции: id = max + 1, дата по умолчанию сегодняшняя
pub async fn create(db: &DatabaseConnection, dto: TransactionDto) -> Result<Transaction, ApiError> {
    dto.validate().map_err(ApiError::BadRequest)?;

    let _guard = CREATE_LOCK.lock().await;
    let id = TransactionId(repository::max_id(db).await? + 1);
    let today = chrono::Local::now().date_naive();
    let record = Transaction::from_dto(id, dto, today);

    repository::insert(db, &record).await?;
    tracing::info!("Created transaction {} ({})", record.id, record.description);
    Ok(record)
}

/// Полная замена записи (last write wins)
pub async fn update(
    db: &DatabaseConnection,
    id: TransactionId,
    mut record: Transaction,
) -> Result<Transaction, ApiError> {
    // The path id wins over whatever the body carries
    record.id = id;
    record.validate().map_err(ApiError::BadRequest)?;

    if !repository::replace(db, &record).await? {
        return Err(ApiError::NotFound(format!("Transaction {} not found", id)));
    }
    tracing::info!("Updated transaction {}", id);
    Ok(record)
}

pub async fn delete(db: &DatabaseConnection, id: TransactionId) -> Result<(), ApiError> {
    if !repository::delete(db, id).await? {
        return Err(ApiError::NotFound(format!("Transaction {} not found", id)));
    }
    tracing::info!("Deleted transaction {}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::memory_connection;
    use axum::http::StatusCode;
    use contracts::domain::a001_transaction::aggregate::TransactionStatus;

    fn dto(description: &str, amount: f64) -> TransactionDto {
        TransactionDto::new(description, amount, TransactionStatus::Completed)
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let db = memory_connection().await;
        let first = create(&db, dto("Widget", 10.0)).await.unwrap();
        let second = create(&db, dto("Gadget", 5.0)).await.unwrap();
        assert_eq!(first.id, TransactionId(1));
        assert_eq!(second.id, TransactionId(2));
        assert!(!first.date.is_empty());

        let ids: Vec<_> = list_all(&db).await.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TransactionId(1), TransactionId(2)]);
    }

    #[tokio::test]
    async fn test_create_keeps_explicit_date_and_sale_fields() {
        let db = memory_connection().await;
        let mut sale = dto("Laptop", 999.99);
        sale.date = Some("2024-02-01".into());
        sale.product_category = Some("Electronics".into());
        sale.payment_method = Some("PayPal".into());
        let created = create(&db, sale).await.unwrap();

        let stored = repository::get_by_id(&db, created.id).await.unwrap().unwrap();
        assert_eq!(stored.date, "2024-02-01");
        assert_eq!(stored.product_category.as_deref(), Some("Electronics"));
        assert_eq!(stored.payment_method.as_deref(), Some("PayPal"));
        assert_eq!(stored.units_sold, 1);
    }

    #[tokio::test]
    async fn test_invalid_create_is_bad_request() {
        let db = memory_connection().await;
        let err = create(&db, dto("  ", 10.0)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(repository::count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_then_list_shows_new_fields() {
        let db = memory_connection().await;
        let created = create(&db, dto("Widget", 10.0)).await.unwrap();
        create(&db, dto("Gadget", 5.0)).await.unwrap();

        let mut edited = created.clone();
        edited.amount = 42.5;
        edited.status = TransactionStatus::Pending;
        update(&db, created.id, edited).await.unwrap();

        let items = list_all(&db).await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].amount, 42.5);
        assert_eq!(items[0].status, TransactionStatus::Pending);
        assert_eq!(items[1].description, "Gadget");
    }

    #[tokio::test]
    async fn test_update_uses_path_id() {
        let db = memory_connection().await;
        let created = create(&db, dto("Widget", 10.0)).await.unwrap();
        let mut body = created.clone();
        body.id = TransactionId(99);
        body.description = "Renamed".into();

        let saved = update(&db, created.id, body).await.unwrap();
        assert_eq!(saved.id, created.id);
        assert_eq!(repository::count(&db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let db = memory_connection().await;
        let created = create(&db, dto("Widget", 10.0)).await.unwrap();
        let err = update(&db, TransactionId(7), created).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_removes_only_that_id() {
        let db = memory_connection().await;
        for name in ["A", "B", "C"] {
            create(&db, dto(name, 1.0)).await.unwrap();
        }
        delete(&db, TransactionId(2)).await.unwrap();

        let names: Vec<_> = list_all(&db)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.description)
            .collect();
        assert_eq!(names, vec!["A", "C"]);

        let err = delete(&db, TransactionId(2)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_while_rows_exist() {
        let db = memory_connection().await;
        for name in ["A", "B", "C"] {
            create(&db, dto(name, 1.0)).await.unwrap();
        }
        delete(&db, TransactionId(2)).await.unwrap();
        let next = create(&db, dto("D", 1.0)).await.unwrap();
        assert_eq!(next.id, TransactionId(4));
    }
}
