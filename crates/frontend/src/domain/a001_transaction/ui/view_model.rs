use crate::domain::a001_transaction::api::HttpTransactionStore;
use crate::shared::crud::{CollectionState, CrudSynchronizer, SyncError, Written};
use crate::shared::state::{use_request_scope, RequestScope, Ticket};
use contracts::domain::a001_transaction::aggregate::Transaction;
use leptos::prelude::*;
use std::future::Future;

type Synchronizer = CrudSynchronizer<HttpTransactionStore>;

/// Per-page view model of the transactions collection
///
/// Owns the page's `CollectionState` and its request scope. A list result is
/// dropped when the page was left or when a list that started later was
/// already applied.
#[derive(Clone, Copy)]
pub struct TransactionsViewModel {
    pub state: RwSignal<CollectionState<Transaction>>,
    scope: StoredValue<RequestScope>,
}

impl TransactionsViewModel {
    /// Must be called inside a component: the scope is tied to its cleanup
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(CollectionState::default()),
            scope: StoredValue::new(use_request_scope()),
        }
    }

    fn synchronizer() -> Synchronizer {
        CrudSynchronizer::new(HttpTransactionStore)
    }

    /// Apply a list result if it is still wanted
    fn apply(&self, scope: &RequestScope, ticket: Ticket, outcome: Result<Vec<Transaction>, SyncError>) -> bool {
        if !scope.accept(ticket) {
            log::debug!("dropping stale transactions result");
            return false;
        }
        if let Err(e) = &outcome {
            log::warn!("transactions: {}", e);
        }
        self.state
            .try_update(|s| s.apply(outcome))
            .unwrap_or(false)
    }

    pub fn items(&self) -> Vec<Transaction> {
        self.state.with(|s| s.items.clone())
    }

    pub fn refresh(&self) {
        let Some(scope) = self.scope.try_get_value() else {
            return;
        };
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let (ticket, outcome) = Self::synchronizer().refresh(&scope).await;
            this.apply(&scope, ticket, outcome);
        });
    }

    /// Run a write, then refresh the list. `on_done` gets `Ok` once the store
    /// confirmed the write, even if the refresh failed (that error goes to the
    /// banner). Nothing is reported for a page that is gone.
    pub fn mutate<F, Fut>(&self, op: F, on_done: impl FnOnce(Result<(), SyncError>) + 'static)
    where
        F: FnOnce(Synchronizer) -> Fut + 'static,
        Fut: Future<Output = Result<(), SyncError>> + 'static,
    {
        let Some(scope) = self.scope.try_get_value() else {
            return;
        };
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let write = op(Self::synchronizer());
            match Self::synchronizer().write_then_refresh(&scope, write).await {
                Ok(Written { ticket, refresh }) => {
                    this.apply(&scope, ticket, refresh);
                    if !scope.is_disposed() {
                        on_done(Ok(()));
                    }
                }
                Err(e) => {
                    if scope.is_disposed() {
                        log::debug!("dropping failed mutation for a disposed page: {}", e);
                        return;
                    }
                    log::warn!("transactions: {}", e);
                    this.state.try_update(|s| s.fail(&e));
                    on_done(Err(e));
                }
            }
        });
    }

    pub fn clear_error(&self) {
        self.state.update(|s| s.clear_error());
    }
}
