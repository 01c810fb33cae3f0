//! Category → product drill-down.
//!
//! Selection is a plain state machine; views are pure lookups into the
//! aggregates fetched once, so changing the selection never hits the network.

use contracts::dashboards::d401_charts::{ChartDataResponse, ProductShare, RevenuePoint, UnitsPoint};
use contracts::domain::a002_product::aggregate::Product;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    NoSelection,
    CategorySelected(String),
    ProductSelected { category: String, product: String },
}

impl Selection {
    /// The first category is preselected after load
    pub fn initial(categories: &[String]) -> Self {
        categories
            .first()
            .map(|c| Self::CategorySelected(c.clone()))
            .unwrap_or_default()
    }

    pub fn category(&self) -> Option<&str> {
        match self {
            Self::NoSelection => None,
            Self::CategorySelected(category) | Self::ProductSelected { category, .. } => {
                Some(category)
            }
        }
    }

    pub fn product(&self) -> Option<&str> {
        match self {
            Self::ProductSelected { product, .. } => Some(product),
            _ => None,
        }
    }

    /// Any category choice drops the product; "" means no category
    pub fn select_category(&self, category: &str) -> Self {
        if category.is_empty() {
            Self::NoSelection
        } else {
            Self::CategorySelected(category.to_string())
        }
    }

    /// Pick a product of the current category; "" goes back to the category.
    /// Products outside the category leave the selection unchanged.
    pub fn select_product(&self, product: &str, catalog: &[Product]) -> Self {
        let Some(category) = self.category() else {
            return Self::NoSelection;
        };
        if product.is_empty() {
            return Self::CategorySelected(category.to_string());
        }
        let known = catalog
            .iter()
            .any(|p| p.product_name == product && p.belongs_to(category));
        if !known {
            log::warn!("product '{}' is not in category '{}'", product, category);
            return self.clone();
        }
        Self::ProductSelected {
            category: category.to_string(),
            product: product.to_string(),
        }
    }

    pub fn resolve(&self, data: &ChartDataResponse) -> DrillDownView {
        match self {
            Self::NoSelection => DrillDownView::Prompt,
            Self::CategorySelected(category) => DrillDownView::Category {
                category: category.clone(),
                revenue: data.category_sales_over_time.get(category).cloned(),
                distribution: data.product_distribution_by_category.get(category).cloned(),
            },
            Self::ProductSelected { product, .. } => DrillDownView::Product {
                product: product.clone(),
                history: data.product_sales_history.get(product).cloned(),
            },
        }
    }
}

/// Что рисовать для текущего выбора; `None` = для ключа нет данных
#[derive(Debug, Clone, PartialEq)]
pub enum DrillDownView {
    Prompt,
    Category {
        category: String,
        revenue: Option<Vec<RevenuePoint>>,
        distribution: Option<Vec<ProductShare>>,
    },
    Product {
        product: String,
        history: Option<Vec<UnitsPoint>>,
    },
}

pub fn products_in_category<'a>(catalog: &'a [Product], category: &str) -> Vec<&'a Product> {
    catalog.iter().filter(|p| p.belongs_to(category)).collect()
}
