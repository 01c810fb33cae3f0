use crate::domain::a002_product::aggregate::Product;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Выручка категории за день
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "TotalRevenue")]
    pub total_revenue: f64,
}

/// Доля товара в продажах категории (штуки)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductShare {
    #[serde(rename = "ProductName")]
    pub product_name: String,
    #[serde(rename = "UnitsSold")]
    pub units_sold: i64,
}

/// Продажи товара за день (штуки)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitsPoint {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "UnitsSold")]
    pub units_sold: i64,
}

/// Response of `GET /api/chart_data`: every precomputed aggregate the
/// drill-down needs, fetched once.
///
/// All keys default so a partial body decodes into empty views instead of
/// failing the whole dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartDataResponse {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub category_sales_over_time: HashMap<String, Vec<RevenuePoint>>,
    #[serde(default)]
    pub product_distribution_by_category: HashMap<String, Vec<ProductShare>>,
    #[serde(default)]
    pub product_sales_history: HashMap<String, Vec<UnitsPoint>>,
}
