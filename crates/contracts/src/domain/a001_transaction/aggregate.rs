use crate::domain::common::{AggregateId, AggregateRoot};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Формат даты операции на проводе
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор операции (генерируется хранилищем)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TransactionId(pub i64);

impl TransactionId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for TransactionId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let value = <i64 as AggregateId>::from_string(s)?;
        if value <= 0 {
            return Err(format!("Invalid transaction id: {}", value));
        }
        Ok(Self(value))
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransactionStatus {
    #[default]
    Completed,
    Pending,
    Failed,
}

impl TransactionStatus {
    pub fn all() -> [TransactionStatus; 3] {
        [Self::Completed, Self::Pending, Self::Failed]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Pending => "Pending",
            Self::Failed => "Failed",
        }
    }
}

impl std::str::FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Completed" => Ok(Self::Completed),
            "Pending" => Ok(Self::Pending),
            "Failed" => Ok(Self::Failed),
            other => Err(format!("Unknown status: {}", other)),
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

fn default_units_sold() -> i64 {
    1
}

/// A sales transaction
///
/// Owned by the data server; the client only caches what `GET /transactions`
/// returned last and refetches after every write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    #[serde(rename = "Date")]
    pub date: String,

    #[serde(rename = "Description")]
    pub description: String,

    #[serde(rename = "Amount")]
    pub amount: f64,

    #[serde(rename = "Status")]
    pub status: TransactionStatus,

    #[serde(
        rename = "ProductCategory",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub product_category: Option<String>,

    #[serde(
        rename = "PaymentMethod",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub payment_method: Option<String>,

    #[serde(rename = "UnitsSold", default = "default_units_sold")]
    pub units_sold: i64,
}

impl Transaction {
    /// Собрать запись из DTO создания; без даты берётся `today`
    pub fn from_dto(id: TransactionId, dto: TransactionDto, today: NaiveDate) -> Self {
        let date = dto
            .date
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| today.format(DATE_FORMAT).to_string());
        Self {
            id,
            date,
            description: dto.description,
            amount: dto.amount,
            status: dto.status,
            product_category: dto.product_category,
            payment_method: dto.payment_method,
            units_sold: dto.units_sold,
        }
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        validate_fields(Some(&self.date), &self.description, self.amount, self.units_sold)
    }
}

impl AggregateRoot for Transaction {
    type Id = TransactionId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "transactions"
    }

    fn element_name() -> &'static str {
        "Transaction"
    }

    fn list_name() -> &'static str {
        "Transactions"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Тело `POST /transactions`: новая запись без id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDto {
    #[serde(rename = "Date", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(rename = "Description")]
    pub description: String,

    #[serde(rename = "Amount")]
    pub amount: f64,

    #[serde(rename = "Status", default)]
    pub status: TransactionStatus,

    #[serde(
        rename = "ProductCategory",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub product_category: Option<String>,

    #[serde(
        rename = "PaymentMethod",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub payment_method: Option<String>,

    #[serde(rename = "UnitsSold", default = "default_units_sold")]
    pub units_sold: i64,
}

impl TransactionDto {
    pub fn new(description: impl Into<String>, amount: f64, status: TransactionStatus) -> Self {
        Self {
            date: None,
            description: description.into(),
            amount,
            status,
            product_category: None,
            payment_method: None,
            units_sold: 1,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_fields(
            self.date.as_deref(),
            &self.description,
            self.amount,
            self.units_sold,
        )
    }
}

fn validate_fields(
    date: Option<&str>,
    description: &str,
    amount: f64,
    units_sold: i64,
) -> Result<(), String> {
    if description.trim().is_empty() {
        return Err("Description must not be empty".into());
    }
    if !amount.is_finite() {
        return Err("Amount must be a number".into());
    }
    if units_sold < 0 {
        return Err("UnitsSold must not be negative".into());
    }
    if let Some(date) = date.filter(|d| !d.trim().is_empty()) {
        NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
            .map_err(|_| format!("Date must be YYYY-MM-DD, got '{}'", date))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_uses_pascal_case_keys() {
        let json = r#"{"id":1,"Date":"2024-01-01","Description":"Widget","Amount":10,"Status":"Completed"}"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.id, TransactionId(1));
        assert_eq!(tx.amount, 10.0);
        assert_eq!(tx.units_sold, 1);
        assert_eq!(tx.product_category, None);

        let back = serde_json::to_value(&tx).unwrap();
        assert_eq!(back["Description"], "Widget");
        assert!(back.get("ProductCategory").is_none());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let json = r#"{"id":1,"Date":"2024-01-01","Description":"W","Amount":1,"Status":"Lost"}"#;
        assert!(serde_json::from_str::<Transaction>(json).is_err());
        assert!("completed".parse::<TransactionStatus>().is_err());
        assert_eq!(
            "Pending".parse::<TransactionStatus>(),
            Ok(TransactionStatus::Pending)
        );
    }

    #[test]
    fn test_from_dto_defaults_date_to_today() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let dto = TransactionDto::new("New", 5.0, TransactionStatus::Pending);
        let tx = Transaction::from_dto(TransactionId(3), dto, today);
        assert_eq!(tx.date, "2024-03-15");
        assert_eq!(tx.status, TransactionStatus::Pending);
    }

    #[test]
    fn test_validation() {
        let mut dto = TransactionDto::new("  ", 5.0, TransactionStatus::Completed);
        assert!(dto.validate().is_err());
        dto.description = "Widget".into();
        assert!(dto.validate().is_ok());
        dto.amount = f64::NAN;
        assert!(dto.validate().is_err());
        dto.amount = 1.0;
        dto.date = Some("15/03/2024".into());
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_id_from_url_segment() {
        assert_eq!(TransactionId::from_string("12"), Ok(TransactionId(12)));
        assert!(TransactionId::from_string("0").is_err());
        assert_eq!(Transaction::collection_path(), "/api/transactions");
    }
}
