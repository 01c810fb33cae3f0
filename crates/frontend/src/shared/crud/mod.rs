//! Remote collection plumbing: the store seam, the refresh-after-write
//! synchronizer and the component-scoped collection state it feeds.

pub mod error;
pub mod store;
pub mod synchronizer;

pub use error::SyncError;
pub use store::TransactionStore;
pub use synchronizer::{CollectionState, CrudSynchronizer, Written};
