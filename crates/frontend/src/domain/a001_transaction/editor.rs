//! Inline editing of one table row at a time.
//!
//! The draft keeps every field as entered text; numbers are coerced only when
//! the edit is committed, so a half-typed amount never reaches the store.

use contracts::domain::a001_transaction::aggregate::{
    Transaction, TransactionId, TransactionStatus,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Date,
    Description,
    Amount,
    Status,
}

/// Черновик редактируемой строки
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    base: Transaction,
    date: String,
    description: String,
    amount: String,
    status: String,
}

impl Draft {
    fn from_record(record: &Transaction) -> Self {
        Self {
            base: record.clone(),
            date: record.date.clone(),
            description: record.description.clone(),
            amount: record.amount.to_string(),
            status: record.status.as_str().to_string(),
        }
    }

    pub fn id(&self) -> TransactionId {
        self.base.id
    }

    pub fn get(&self, field: EditField) -> &str {
        match field {
            EditField::Date => &self.date,
            EditField::Description => &self.description,
            EditField::Amount => &self.amount,
            EditField::Status => &self.status,
        }
    }

    fn set(&mut self, field: EditField, value: String) {
        match field {
            EditField::Date => self.date = value,
            EditField::Description => self.description = value,
            EditField::Amount => self.amount = value,
            EditField::Status => self.status = value,
        }
    }

    /// Full record for `PUT`; fields the table does not show are carried over
    fn to_record(&self) -> Result<Transaction, String> {
        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite())
            .ok_or_else(|| format!("Amount must be a number, got '{}'", self.amount))?;
        let status = self.status.parse::<TransactionStatus>()?;
        let record = Transaction {
            date: self.date.trim().to_string(),
            description: self.description.trim().to_string(),
            amount,
            status,
            ..self.base.clone()
        };
        record.validate()?;
        Ok(record)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditState {
    draft: Option<Draft>,
}

impl EditState {
    pub fn editing_id(&self) -> Option<TransactionId> {
        self.draft.as_ref().map(Draft::id)
    }

    pub fn is_editing(&self, id: TransactionId) -> bool {
        self.editing_id() == Some(id)
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    /// Start editing `record`; any other row's unsaved draft is discarded
    pub fn begin_edit(&mut self, record: &Transaction) {
        self.draft = Some(Draft::from_record(record));
    }

    pub fn cancel_edit(&mut self) {
        self.draft = None;
    }

    pub fn update_field(&mut self, field: EditField, value: impl Into<String>) {
        if let Some(draft) = self.draft.as_mut() {
            draft.set(field, value.into());
        }
    }

    /// Validate the draft and build the record to send. Edit state is left
    /// as is; call [`complete_commit`](Self::complete_commit) once the store
    /// accepted it.
    pub fn prepare_commit(&self) -> Result<(TransactionId, Transaction), String> {
        let draft = self
            .draft
            .as_ref()
            .ok_or_else(|| "No row is being edited".to_string())?;
        Ok((draft.id(), draft.to_record()?))
    }

    /// Leave edit mode after a successful save of `id`. A no-op when the user
    /// already moved on to another row.
    pub fn complete_commit(&mut self, id: TransactionId) {
        if self.is_editing(id) {
            self.draft = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::synchronizer::tests::{widget, MemoryStore};
    use crate::shared::crud::CrudSynchronizer;

    #[test]
    fn test_single_row_in_edit_mode() {
        let mut edit = EditState::default();
        edit.begin_edit(&widget(1, 10.0));
        edit.update_field(EditField::Description, "Changed");
        edit.begin_edit(&widget(2, 30.0));

        assert_eq!(edit.editing_id(), Some(TransactionId(2)));
        let draft = edit.draft().unwrap();
        assert_eq!(draft.get(EditField::Description), "Widget");
        assert_eq!(draft.get(EditField::Amount), "30");
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut edit = EditState::default();
        edit.begin_edit(&widget(1, 10.0));
        edit.update_field(EditField::Amount, "99");
        edit.cancel_edit();
        assert_eq!(edit, EditState::default());
        assert!(edit.prepare_commit().is_err());
    }

    #[test]
    fn test_amount_is_coerced_to_number() {
        let mut edit = EditState::default();
        edit.begin_edit(&widget(1, 10.0));
        edit.update_field(EditField::Amount, "42.5");
        let (id, record) = edit.prepare_commit().unwrap();
        assert_eq!(id, TransactionId(1));
        assert_eq!(record.amount, 42.5);
        assert_eq!(serde_json::to_value(&record).unwrap()["Amount"], 42.5);
    }

    #[test]
    fn test_non_numeric_amount_is_rejected_not_zeroed() {
        let mut edit = EditState::default();
        edit.begin_edit(&widget(1, 10.0));
        edit.update_field(EditField::Amount, "ten");
        let err = edit.prepare_commit().unwrap_err();
        assert!(err.contains("Amount"));
        assert_eq!(edit.editing_id(), Some(TransactionId(1)));
    }

    #[test]
    fn test_bad_status_and_empty_description_are_rejected() {
        let mut edit = EditState::default();
        edit.begin_edit(&widget(1, 10.0));
        edit.update_field(EditField::Status, "Lost");
        assert!(edit.prepare_commit().is_err());

        edit.update_field(EditField::Status, "Failed");
        edit.update_field(EditField::Description, "  ");
        assert!(edit.prepare_commit().is_err());
    }

    #[test]
    fn test_complete_commit_ignores_other_rows() {
        let mut edit = EditState::default();
        edit.begin_edit(&widget(2, 1.0));
        edit.complete_commit(TransactionId(1));
        assert_eq!(edit.editing_id(), Some(TransactionId(2)));
        edit.complete_commit(TransactionId(2));
        assert_eq!(edit.editing_id(), None);
    }

    #[tokio::test]
    async fn test_commit_persists_full_draft() {
        let sync = CrudSynchronizer::new(MemoryStore::with_rows(vec![widget(1, 10.0)]));
        let mut edit = EditState::default();
        edit.begin_edit(&widget(1, 10.0));
        edit.update_field(EditField::Amount, "42.5");
        edit.update_field(EditField::Status, "Pending");

        let (id, record) = edit.prepare_commit().unwrap();
        sync.update(id, record).await.unwrap();
        edit.complete_commit(id);
        let items = sync.list().await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].amount, 42.5);
        assert_eq!(items[0].status, TransactionStatus::Pending);
        assert_eq!(items[0].description, "Widget");
        assert_eq!(edit.editing_id(), None);
    }

    #[tokio::test]
    async fn test_failed_commit_keeps_edit_state() {
        let store = MemoryStore::with_rows(vec![widget(1, 10.0)]);
        store.fail_writes.set(true);
        let sync = CrudSynchronizer::new(store);
        let mut edit = EditState::default();
        edit.begin_edit(&widget(1, 10.0));
        edit.update_field(EditField::Amount, "20");

        let (id, record) = edit.prepare_commit().unwrap();
        assert!(sync.update(id, record).await.is_err());
        assert_eq!(edit.editing_id(), Some(TransactionId(1)));
        assert_eq!(edit.draft().unwrap().get(EditField::Amount), "20");
    }
}
