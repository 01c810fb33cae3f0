use contracts::dashboards::d401_charts::{
    ChartDataResponse, ProductShare, RevenuePoint, UnitsPoint,
};
use contracts::domain::a001_transaction::aggregate::Transaction;
use contracts::domain::a002_product::aggregate::Product;
use sea_orm::DatabaseConnection;
use std::collections::{BTreeMap, HashMap};

use crate::domain::{a001_transaction, a002_product};
use crate::shared::error::ApiError;

/// Все агрегаты drill-down дашборда одним ответом
pub async fn get_chart_data(db: &DatabaseConnection) -> Result<ChartDataResponse, ApiError> {
    let transactions = a001_transaction::repository::list_all(db).await?;
    let products = a002_product::repository::list_all()
        .map(<[Product]>::to_vec)
        .unwrap_or_default();
    Ok(build_chart_data(&transactions, products))
}

/// Sales aggregates for the charts
///
/// `Description` is the product name and `Amount` the revenue. Records
/// without a category feed only the per-product history. ISO dates sort
/// lexically, so `BTreeMap` keys give chronological order.
pub fn build_chart_data(transactions: &[Transaction], products: Vec<Product>) -> ChartDataResponse {
    let mut categories: Vec<String> = Vec::new();
    let mut revenue: BTreeMap<&str, HashMap<&str, f64>> = BTreeMap::new();
    let mut distribution: HashMap<&str, BTreeMap<&str, i64>> = HashMap::new();
    let mut history: HashMap<&str, BTreeMap<&str, i64>> = HashMap::new();

    for tx in transactions {
        *history
            .entry(tx.description.as_str())
            .or_default()
            .entry(tx.date.as_str())
            .or_insert(0) += tx.units_sold;

        let Some(category) = tx.product_category.as_deref().filter(|c| !c.is_empty()) else {
            continue;
        };
        if !categories.iter().any(|c| c == category) {
            categories.push(category.to_string());
        }
        *revenue
            .entry(tx.date.as_str())
            .or_default()
            .entry(category)
            .or_insert(0.0) += tx.amount;
        *distribution
            .entry(category)
            .or_default()
            .entry(tx.description.as_str())
            .or_insert(0) += tx.units_sold;
    }

    // Pivot: every categorised date for every category, zero when absent
    let category_sales_over_time = categories
        .iter()
        .map(|category| {
            let points = revenue
                .iter()
                .map(|(date, by_category)| RevenuePoint {
                    date: date.to_string(),
                    total_revenue: by_category.get(category.as_str()).copied().unwrap_or(0.0),
                })
                .collect();
            (category.clone(), points)
        })
        .collect();

    let product_distribution_by_category = distribution
        .into_iter()
        .map(|(category, by_product)| {
            let shares = by_product
                .into_iter()
                .map(|(name, units)| ProductShare {
                    product_name: name.to_string(),
                    units_sold: units,
                })
                .collect();
            (category.to_string(), shares)
        })
        .collect();

    let product_sales_history = history
        .into_iter()
        .map(|(product, by_date)| {
            let points = by_date
                .into_iter()
                .map(|(date, units)| UnitsPoint {
                    date: date.to_string(),
                    units_sold: units,
                })
                .collect();
            (product.to_string(), points)
        })
        .collect();

    ChartDataResponse {
        categories,
        products,
        category_sales_over_time,
        product_distribution_by_category,
        product_sales_history,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_transaction::aggregate::{TransactionId, TransactionStatus};

    fn sale(id: i64, date: &str, category: Option<&str>, product: &str, units: i64, amount: f64) -> Transaction {
        Transaction {
            id: TransactionId(id),
            date: date.into(),
            description: product.into(),
            amount,
            status: TransactionStatus::Completed,
            product_category: category.map(Into::into),
            payment_method: None,
            units_sold: units,
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            sale(1, "2024-01-02", Some("Electronics"), "Phone", 1, 500.0),
            sale(2, "2024-01-01", Some("Books"), "Dune", 2, 30.0),
            sale(3, "2024-01-02", Some("Books"), "Atlas", 1, 20.0),
            sale(4, "2024-01-02", Some("Books"), "Dune", 3, 45.0),
            sale(5, "2024-01-03", None, "Manual entry", 1, 9.0),
        ]
    }

    #[test]
    fn test_categories_in_first_seen_order_without_blanks() {
        let data = build_chart_data(&sample(), Vec::new());
        assert_eq!(data.categories, vec!["Electronics", "Books"]);
    }

    #[test]
    fn test_revenue_is_zero_filled_over_all_categorised_dates() {
        let data = build_chart_data(&sample(), Vec::new());
        let electronics = &data.category_sales_over_time["Electronics"];
        assert_eq!(
            electronics,
            &vec![
                RevenuePoint { date: "2024-01-01".into(), total_revenue: 0.0 },
                RevenuePoint { date: "2024-01-02".into(), total_revenue: 500.0 },
            ]
        );
        let books = &data.category_sales_over_time["Books"];
        assert_eq!(books[1].total_revenue, 65.0);
    }

    #[test]
    fn test_distribution_is_summed_and_sorted_by_name() {
        let data = build_chart_data(&sample(), Vec::new());
        let books = &data.product_distribution_by_category["Books"];
        assert_eq!(
            books,
            &vec![
                ProductShare { product_name: "Atlas".into(), units_sold: 1 },
                ProductShare { product_name: "Dune".into(), units_sold: 5 },
            ]
        );
    }

    #[test]
    fn test_history_per_product_is_chronological() {
        let data = build_chart_data(&sample(), Vec::new());
        let dune = &data.product_sales_history["Dune"];
        assert_eq!(dune.len(), 2);
        assert_eq!(dune[0].date, "2024-01-01");
        assert_eq!(dune[1].units_sold, 3);
        assert!(data.product_sales_history.contains_key("Manual entry"));
    }

    #[test]
    fn test_catalog_is_passed_through() {
        let catalog = vec![Product {
            product_name: "Dune".into(),
            product_category: "Books".into(),
            unit_price: 15.0,
        }];
        let data = build_chart_data(&[], catalog.clone());
        assert_eq!(data.products, catalog);
        assert!(data.categories.is_empty());
    }
}
