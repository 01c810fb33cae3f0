use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusteredProduct {
    #[serde(rename = "ProductName")]
    pub product_name: String,
    #[serde(rename = "TotalUnitsSold", default)]
    pub total_units_sold: f64,
    #[serde(rename = "TotalRevenue", default)]
    pub total_revenue: f64,
    #[serde(rename = "AveragePrice", default)]
    pub average_price: f64,
    #[serde(rename = "Cluster")]
    pub cluster: u8,
}

/// Response of `GET /api/predict/product_clustering`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusteringResponse {
    #[serde(default)]
    pub clustered_products: Vec<ClusteredProduct>,
    #[serde(default)]
    pub optimal_k: Option<u32>,
}
