use crate::shared::api_utils::{api_url, ensure_ok, get_json, read_json, send};
use crate::shared::crud::{SyncError, TransactionStore};
use async_trait::async_trait;
use contracts::domain::a001_transaction::aggregate::{Transaction, TransactionDto, TransactionId};
use contracts::domain::common::AggregateRoot;
use gloo_net::http::Request;

/// Хранилище операций на сервере данных (`/api/transactions`)
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransactionStore;

fn collection_url() -> String {
    api_url(&Transaction::collection_path())
}

fn element_url(id: TransactionId) -> String {
    format!("{}/{}", collection_url(), id)
}

fn encode_error(e: gloo_net::Error) -> SyncError {
    SyncError::Transport(format!("Failed to encode request: {}", e))
}

#[async_trait(?Send)]
impl TransactionStore for HttpTransactionStore {
    async fn list(&self) -> Result<Vec<Transaction>, SyncError> {
        get_json(&collection_url()).await
    }

    async fn create(&self, dto: &TransactionDto) -> Result<Transaction, SyncError> {
        let request = Request::post(&collection_url())
            .json(dto)
            .map_err(encode_error)?;
        read_json(send(request).await?).await
    }

    async fn update(&self, id: TransactionId, record: &Transaction) -> Result<Transaction, SyncError> {
        let request = Request::put(&element_url(id))
            .json(record)
            .map_err(encode_error)?;
        read_json(send(request).await?).await
    }

    async fn delete(&self, id: TransactionId) -> Result<(), SyncError> {
        let request = Request::delete(&element_url(id))
            .build()
            .map_err(encode_error)?;
        ensure_ok(send(request).await?).await?;
        Ok(())
    }
}
