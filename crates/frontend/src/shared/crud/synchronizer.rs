use super::{SyncError, TransactionStore};
use crate::shared::state::{RequestScope, Ticket};
use std::future::Future;
use contracts::domain::a001_transaction::aggregate::{Transaction, TransactionDto, TransactionId};

/// Component-scoped view of a remote collection
///
/// Replaced wholesale by every successful `list()`; a failed call only sets
/// `error` and leaves `items` at the last good state.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState<T> {
    pub items: Vec<T>,
    pub error: Option<String>,
    pub loading: bool,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            error: None,
            loading: true,
        }
    }
}

impl<T> CollectionState<T> {
    /// Apply the outcome of a fetch or of a mutation's refresh.
    /// Returns `true` when the items were replaced.
    pub fn apply(&mut self, outcome: Result<Vec<T>, SyncError>) -> bool {
        self.loading = false;
        match outcome {
            Ok(items) => {
                self.items = items;
                self.error = None;
                true
            }
            Err(e) => {
                self.error = Some(e.to_string());
                false
            }
        }
    }

    pub fn fail(&mut self, error: &SyncError) {
        self.error = Some(error.to_string());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

/// A write the store confirmed, and the refresh that followed it
#[derive(Debug, Clone, PartialEq)]
pub struct Written {
    pub ticket: Ticket,
    pub refresh: Result<Vec<Transaction>, SyncError>,
}

/// CRUD against the remote collection with refresh-after-write
///
/// `create`/`update`/`delete` only write. [`write_then_refresh`](Self::write_then_refresh)
/// follows a confirmed write with a full [`refresh`](Self::refresh), which
/// takes its ticket when the list request starts. Nothing is applied locally
/// before the store confirms, so a failed write leaves the caller's state
/// untouched. A confirmed write whose refresh fails is still a confirmed
/// write. Concurrent calls are independent and not coalesced.
#[derive(Debug, Clone)]
pub struct CrudSynchronizer<S> {
    store: S,
}

impl<S: TransactionStore> CrudSynchronizer<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Transaction>, SyncError> {
        let items = self
            .store
            .list()
            .await
            .map_err(|e| e.during("fetch transactions"))?;
        log::debug!("fetched {} transactions", items.len());
        Ok(items)
    }

    /// Re-fetch the collection under a ticket taken from `scope` as the
    /// request starts. The caller applies the outcome only if
    /// `scope.accept(ticket)` holds.
    pub async fn refresh(
        &self,
        scope: &RequestScope,
    ) -> (Ticket, Result<Vec<Transaction>, SyncError>) {
        let ticket = scope.issue();
        (ticket, self.list().await)
    }

    /// `Err` only when the write failed. A failed refresh comes back inside
    /// [`Written`], so the caller can still treat the write as done.
    pub async fn write_then_refresh<W>(
        &self,
        scope: &RequestScope,
        write: W,
    ) -> Result<Written, SyncError>
    where
        W: Future<Output = Result<(), SyncError>>,
    {
        write.await?;
        let (ticket, refresh) = self.refresh(scope).await;
        Ok(Written { ticket, refresh })
    }

    pub async fn create(&self, dto: TransactionDto) -> Result<(), SyncError> {
        dto.validate().map_err(SyncError::Validation)?;
        let created = self
            .store
            .create(&dto)
            .await
            .map_err(|e| e.during("add transaction"))?;
        log::debug!("created transaction {}", created.id);
        Ok(())
    }

    /// Full replace of record `id`; `record.id` must match.
    pub async fn update(&self, id: TransactionId, record: Transaction) -> Result<(), SyncError> {
        if record.id != id {
            return Err(SyncError::Validation(format!(
                "Record id {} does not match {}",
                record.id, id
            )));
        }
        record.validate().map_err(SyncError::Validation)?;
        self.store
            .update(id, &record)
            .await
            .map_err(|e| e.during("update transaction"))?;
        log::debug!("updated transaction {}", id);
        Ok(())
    }

    pub async fn delete(&self, id: TransactionId) -> Result<(), SyncError> {
        self.store
            .delete(id)
            .await
            .map_err(|e| e.during("delete transaction"))?;
        log::debug!("deleted transaction {}", id);
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use contracts::domain::a001_transaction::aggregate::TransactionStatus;
    use std::cell::{Cell, RefCell};

    /// In-memory store double with the server's id/date rules
    #[derive(Default)]
    pub(crate) struct MemoryStore {
        pub rows: RefCell<Vec<Transaction>>,
        pub fail_writes: Cell<bool>,
        pub fail_list: Cell<bool>,
        pub calls: Cell<usize>,
        pub lists: Cell<usize>,
    }

    impl MemoryStore {
        pub(crate) fn with_rows(rows: Vec<Transaction>) -> Self {
            let store = Self::default();
            *store.rows.borrow_mut() = rows;
            store
        }

        fn touch(&self) {
            self.calls.set(self.calls.get() + 1);
        }

        fn write_guard(&self) -> Result<(), SyncError> {
            self.touch();
            if self.fail_writes.get() {
                return Err(SyncError::Transport("HTTP error: 500".into()));
            }
            Ok(())
        }
    }

    #[async_trait(?Send)]
    impl TransactionStore for MemoryStore {
        async fn list(&self) -> Result<Vec<Transaction>, SyncError> {
            self.touch();
            self.lists.set(self.lists.get() + 1);
            if self.fail_list.get() {
                return Err(SyncError::Transport("HTTP error: 503".into()));
            }
            Ok(self.rows.borrow().clone())
        }

        async fn create(&self, dto: &TransactionDto) -> Result<Transaction, SyncError> {
            self.write_guard()?;
            let next = self.rows.borrow().iter().map(|r| r.id.value()).max().unwrap_or(0) + 1;
            let today = chrono::NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
            let created = Transaction::from_dto(TransactionId(next), dto.clone(), today);
            self.rows.borrow_mut().push(created.clone());
            Ok(created)
        }

        async fn update(
            &self,
            id: TransactionId,
            record: &Transaction,
        ) -> Result<Transaction, SyncError> {
            self.write_guard()?;
            let mut rows = self.rows.borrow_mut();
            let row = rows
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| SyncError::Transport("Transaction not found".into()))?;
            *row = record.clone();
            Ok(record.clone())
        }

        async fn delete(&self, id: TransactionId) -> Result<(), SyncError> {
            self.write_guard()?;
            let mut rows = self.rows.borrow_mut();
            let before = rows.len();
            rows.retain(|r| r.id != id);
            if rows.len() == before {
                return Err(SyncError::Transport("Transaction not found".into()));
            }
            Ok(())
        }
    }

    pub(crate) fn widget(id: i64, amount: f64) -> Transaction {
        Transaction {
            id: TransactionId(id),
            date: "2024-01-01".into(),
            description: "Widget".into(),
            amount,
            status: TransactionStatus::Completed,
            product_category: None,
            payment_method: None,
            units_sold: 1,
        }
    }

    fn gadget(id: i64) -> Transaction {
        Transaction {
            description: "Gadget".into(),
            date: "2024-01-02".into(),
            ..widget(id, 7.5)
        }
    }

    #[tokio::test]
    async fn test_update_then_list_returns_updated_record() {
        let sync = CrudSynchronizer::new(MemoryStore::with_rows(vec![widget(1, 10.0)]));

        let initial = sync.list().await.unwrap();
        assert_eq!(initial, vec![widget(1, 10.0)]);

        sync.update(TransactionId(1), widget(1, 20.0)).await.unwrap();
        let refreshed = sync.list().await.unwrap();
        assert_eq!(refreshed.len(), 1);
        assert_eq!(refreshed[0].amount, 20.0);
    }

    #[tokio::test]
    async fn test_create_adds_exactly_one_record_with_fresh_id() {
        let sync = CrudSynchronizer::new(MemoryStore::with_rows(vec![widget(1, 10.0), gadget(2)]));

        let dto = TransactionDto::new("New", 5.0, TransactionStatus::Pending);
        sync.create(dto).await.unwrap();
        let refreshed = sync.list().await.unwrap();

        assert_eq!(refreshed.len(), 3);
        let new_rows: Vec<_> = refreshed.iter().filter(|r| r.description == "New").collect();
        assert_eq!(new_rows.len(), 1);
        assert!(new_rows[0].id != TransactionId(1) && new_rows[0].id != TransactionId(2));
        assert_eq!(new_rows[0].status, TransactionStatus::Pending);
    }

    #[tokio::test]
    async fn test_delete_excludes_only_that_record() {
        let sync = CrudSynchronizer::new(MemoryStore::with_rows(vec![widget(1, 10.0), gadget(2)]));

        sync.delete(TransactionId(1)).await.unwrap();
        assert_eq!(sync.list().await.unwrap(), vec![gadget(2)]);
    }

    #[tokio::test]
    async fn test_refresh_is_one_list_with_a_fresh_ticket() {
        let sync = CrudSynchronizer::new(MemoryStore::with_rows(vec![widget(1, 10.0)]));
        let scope = RequestScope::new();
        let initial = scope.issue();

        sync.create(TransactionDto::new("A", 1.0, TransactionStatus::Completed))
            .await
            .unwrap();
        sync.update(TransactionId(1), widget(1, 2.0)).await.unwrap();
        assert_eq!(sync.store.lists.get(), 0);

        let (ticket, outcome) = sync.refresh(&scope).await;
        assert!(ticket > initial);
        assert_eq!(outcome.unwrap().len(), 2);
        assert_eq!(sync.store.lists.get(), 1);
    }

    #[tokio::test]
    async fn test_overlapping_writes_end_on_remote_state() {
        let sync = CrudSynchronizer::new(MemoryStore::with_rows(vec![widget(1, 10.0)]));
        let scope = RequestScope::new();
        let mut state = CollectionState::default();
        let (ticket, outcome) = sync.refresh(&scope).await;
        assert!(scope.accept(ticket));
        state.apply(outcome);

        // A (slow save) writes, then B (add) writes and refreshes first.
        sync.update(TransactionId(1), widget(1, 99.0)).await.unwrap();
        let dto = TransactionDto::new("Widget", 5.0, TransactionStatus::Completed);
        let written_b = sync.write_then_refresh(&scope, sync.create(dto)).await.unwrap();
        assert!(scope.accept(written_b.ticket));
        state.apply(written_b.refresh);

        let (ticket_a, outcome_a) = sync.refresh(&scope).await;
        assert!(scope.accept(ticket_a));
        state.apply(outcome_a);

        let shown: Vec<f64> = state.items.iter().map(|r| r.amount).collect();
        assert_eq!(shown, vec![99.0, 5.0]);
        assert_eq!(state.items, *sync.store.rows.borrow());
    }

    #[tokio::test]
    async fn test_failed_mutation_keeps_last_good_state() {
        let store = MemoryStore::with_rows(vec![widget(1, 10.0)]);
        let sync = CrudSynchronizer::new(store);
        let mut state = CollectionState::default();
        state.apply(sync.list().await);

        sync.store.fail_writes.set(true);
        let err = sync.update(TransactionId(1), widget(1, 99.0)).await.unwrap_err();
        state.fail(&err);

        assert_eq!(state.items, vec![widget(1, 10.0)]);
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to update transaction: HTTP error: 500")
        );
        assert_eq!(sync.store.lists.get(), 1);
    }

    #[tokio::test]
    async fn test_invalid_record_is_blocked_before_any_request() {
        let sync = CrudSynchronizer::new(MemoryStore::with_rows(vec![widget(1, 10.0)]));

        let mut bad = widget(1, 10.0);
        bad.description = " ".into();
        let err = sync.update(TransactionId(1), bad).await.unwrap_err();
        assert!(err.is_validation());

        let err = sync.update(TransactionId(2), widget(1, 10.0)).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(sync.store.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_create_confirmed_even_when_refresh_fails() {
        let sync = CrudSynchronizer::new(MemoryStore::with_rows(vec![widget(1, 10.0)]));
        let scope = RequestScope::new();
        let mut state = CollectionState::default();
        state.apply(sync.list().await);

        sync.store.fail_list.set(true);
        let dto = TransactionDto::new("New", 5.0, TransactionStatus::Pending);
        let written = sync
            .write_then_refresh(&scope, sync.create(dto))
            .await
            .unwrap();
        assert_eq!(sync.store.rows.borrow().len(), 2);

        assert!(scope.accept(written.ticket));
        assert!(!state.apply(written.refresh));
        assert_eq!(state.items, vec![widget(1, 10.0)]);
        assert!(state.error.unwrap().starts_with("Failed to fetch transactions"));
    }

    #[tokio::test]
    async fn test_failed_write_skips_refresh() {
        let sync = CrudSynchronizer::new(MemoryStore::with_rows(vec![widget(1, 10.0)]));
        let scope = RequestScope::new();
        sync.store.fail_writes.set(true);

        let err = sync
            .write_then_refresh(&scope, sync.delete(TransactionId(1)))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to delete transaction: HTTP error: 500");
        assert_eq!(sync.store.lists.get(), 0);
    }
}
