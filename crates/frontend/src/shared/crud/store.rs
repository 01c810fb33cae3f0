use super::SyncError;
use async_trait::async_trait;
use contracts::domain::a001_transaction::aggregate::{Transaction, TransactionDto, TransactionId};

/// Remote transactions collection (`/api/transactions`)
///
/// The browser implementation lives in `domain::a001_transaction::api`;
/// futures are not `Send` because they run on the wasm event loop.
#[async_trait(?Send)]
pub trait TransactionStore {
    /// `GET /transactions`
    async fn list(&self) -> Result<Vec<Transaction>, SyncError>;

    /// `POST /transactions`, returns the created record with its new id
    async fn create(&self, dto: &TransactionDto) -> Result<Transaction, SyncError>;

    /// `PUT /transactions/{id}` with the full record
    async fn update(&self, id: TransactionId, record: &Transaction)
        -> Result<Transaction, SyncError>;

    /// `DELETE /transactions/{id}`
    async fn delete(&self, id: TransactionId) -> Result<(), SyncError>;
}
