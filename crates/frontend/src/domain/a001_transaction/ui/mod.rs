pub mod add_form;
pub mod entry_form;
pub mod list;
pub mod view_model;

pub use add_form::AddTransactionForm;
pub use entry_form::TransactionEntryForm;
pub use list::{TransactionsPage, TransactionsTable};
pub use view_model::TransactionsViewModel;
