use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};

/// Product catalog entry
///
/// Read-only for the client: loaded once per session and used both as an
/// aggregate dimension and as the typeahead source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "ProductName")]
    pub product_name: String,

    #[serde(rename = "ProductCategory")]
    pub product_category: String,

    #[serde(rename = "UnitPrice")]
    pub unit_price: f64,
}

impl Product {
    pub fn belongs_to(&self, category: &str) -> bool {
        self.product_category == category
    }
}

impl AggregateRoot for Product {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.product_name.clone()
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "products"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }
}
