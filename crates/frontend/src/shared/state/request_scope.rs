//! Stale-result guard for in-flight requests.
//!
//! Requests are never cancelled. A component takes a [`Ticket`] as each
//! read request starts (for a write, once the write is confirmed and its
//! refresh starts) and asks its [`RequestScope`] whether the result may still be
//! applied once the request completes. Results are dropped when the scope
//! was disposed (component torn down) or a read that started later was
//! already applied.

use leptos::prelude::on_cleanup;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
struct ScopeInner {
    disposed: AtomicBool,
    issued: AtomicU64,
    applied: AtomicU64,
}

#[derive(Debug, Clone, Default)]
pub struct RequestScope {
    inner: Arc<ScopeInner>,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a ticket right before issuing a read
    pub fn issue(&self) -> Ticket {
        Ticket(self.inner.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether the result for `ticket` may be applied. Results are applied in
    /// ticket order: once a newer ticket was accepted, older ones are refused.
    pub fn accept(&self, ticket: Ticket) -> bool {
        if self.is_disposed() {
            return false;
        }
        let previous = self.inner.applied.fetch_max(ticket.0, Ordering::SeqCst);
        previous < ticket.0
    }

    /// Like [`accept`](Self::accept), but only the most recently issued
    /// ticket is accepted. For fetches superseded by a newer parameter value.
    pub fn accept_latest(&self, ticket: Ticket) -> bool {
        self.is_latest(ticket) && self.accept(ticket)
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.inner.issued.load(Ordering::SeqCst) == ticket.0
    }

    pub fn dispose(&self) {
        self.inner.disposed.store(true, Ordering::SeqCst);
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.load(Ordering::SeqCst)
    }
}

/// Scope bound to the current component; disposed on cleanup.
pub fn use_request_scope() -> RequestScope {
    let scope = RequestScope::new();
    let for_cleanup = scope.clone();
    on_cleanup(move || for_cleanup.dispose());
    scope
}
