use anyhow::Result;
use chrono::NaiveDate;
use contracts::domain::a001_transaction::aggregate::{
    Transaction, TransactionId, TransactionStatus, DATE_FORMAT,
};
use sea_orm::DatabaseConnection;
use std::path::Path;

use super::repository;

/// Parse a sales export (CSV)
///
/// Header names are matched with spaces removed and case ignored, so both
/// `Transaction ID` and `TransactionID` work. Dates may be `dd/mm/yyyy` or
/// ISO; they are stored as ISO. Malformed rows are skipped.
pub fn parse_sales_csv(csv_text: &str) -> Result<Vec<Transaction>> {
    // Strip UTF-8 BOM if present
    let text = csv_text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = match reader.headers() {
        Ok(h) => h.iter().map(|name| name.replace(' ', "")).collect(),
        Err(e) => anyhow::bail!("Failed to read CSV headers: {}", e),
    };

    let mut items = Vec::new();
    let mut skipped = 0usize;

    for (line, result) in reader.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Skipping malformed CSV record: {}", e);
                skipped += 1;
                continue;
            }
        };

        let get_field = |name: &str| -> Option<String> {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(name))
                .and_then(|i| record.get(i))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let parsed = (|| -> Option<Transaction> {
            let id = get_field("TransactionID")?.parse::<i64>().ok()?;
            let date = normalize_date(&get_field("Date")?)?;
            let description = get_field("ProductName").or_else(|| get_field("Description"))?;
            let amount = get_field("TotalRevenue")
                .or_else(|| get_field("Amount"))?
                .parse::<f64>()
                .ok()?;
            let status = match get_field("Status") {
                Some(s) => s.parse().ok()?,
                None => TransactionStatus::Completed,
            };
            let units_sold = match get_field("UnitsSold") {
                Some(s) => s.parse::<i64>().ok()?,
                None => 1,
            };
            Some(Transaction {
                id: TransactionId(id),
                date,
                description,
                amount,
                status,
                product_category: get_field("ProductCategory"),
                payment_method: get_field("PaymentMethod"),
                units_sold,
            })
        })();

        match parsed.filter(|tx| tx.id.value() > 0 && tx.validate().is_ok()) {
            Some(tx) => items.push(tx),
            None => {
                tracing::warn!("Skipping sales CSV row {}: missing or invalid fields", line + 2);
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        tracing::warn!("Sales CSV: {} rows skipped", skipped);
    }
    Ok(items)
}

/// `dd/mm/yyyy` или ISO → ISO
fn normalize_date(raw: &str) -> Option<String> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
        .ok()
        .map(|d| d.format(DATE_FORMAT).to_string())
}

/// Load seed rows when the table is empty
///
/// Returns the number of imported rows. Duplicate ids in the file keep the
/// first occurrence.
pub async fn seed_if_empty(db: &DatabaseConnection, path: &Path) -> Result<usize> {
    if repository::count(db).await? > 0 {
        return Ok(0);
    }
    if !path.exists() {
        tracing::warn!("Seed file not found: {}", path.display());
        return Ok(0);
    }

    let text = std::fs::read_to_string(path)?;
    let mut items = parse_sales_csv(&text)?;
    let mut seen = std::collections::HashSet::new();
    items.retain(|tx| seen.insert(tx.id));

    repository::insert_many(db, &items).await?;
    tracing::info!("Seeded {} transactions from {}", items.len(), path.display());
    Ok(items.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::memory_connection;

    const SALES: &str = "\u{FEFF}Transaction ID,Date,Product Category,Product Name,Units Sold,Unit Price,Total Revenue,Payment Method
1,01/01/2024,Electronics,iPhone 14 Pro,2,999.99,1999.98,Credit Card
2,2024-01-02,Books,Dune,1,15.5,15.5,PayPal
3,not-a-date,Books,Dune,1,15.5,15.5,PayPal
4,03/01/2024,Books,,1,15.5,15.5,PayPal
";

    #[test]
    fn test_parse_sales_csv() {
        let items = parse_sales_csv(SALES).unwrap();
        assert_eq!(items.len(), 2);

        let first = &items[0];
        assert_eq!(first.id, TransactionId(1));
        assert_eq!(first.date, "2024-01-01");
        assert_eq!(first.description, "iPhone 14 Pro");
        assert_eq!(first.amount, 1999.98);
        assert_eq!(first.units_sold, 2);
        assert_eq!(first.status, TransactionStatus::Completed);
        assert_eq!(first.product_category.as_deref(), Some("Electronics"));
        assert_eq!(first.payment_method.as_deref(), Some("Credit Card"));

        assert_eq!(items[1].date, "2024-01-02");
    }

    #[test]
    fn test_normalize_date() {
        assert_eq!(normalize_date("15/03/2024").as_deref(), Some("2024-03-15"));
        assert_eq!(normalize_date("2024-03-15").as_deref(), Some("2024-03-15"));
        assert_eq!(normalize_date("03-15-2024"), None);
    }

    #[tokio::test]
    async fn test_seed_only_into_empty_table() {
        let db = memory_connection().await;
        let path = std::env::temp_dir().join(format!("seed_{}.csv", std::process::id()));
        std::fs::write(&path, SALES).unwrap();

        assert_eq!(seed_if_empty(&db, &path).await.unwrap(), 2);
        assert_eq!(seed_if_empty(&db, &path).await.unwrap(), 0);
        assert_eq!(repository::max_id(&db).await.unwrap(), 2);

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_missing_seed_file_is_not_an_error() {
        let db = memory_connection().await;
        let path = std::env::temp_dir().join("no_such_seed_file.csv");
        assert_eq!(seed_if_empty(&db, &path).await.unwrap(), 0);
    }
}
