use serde::{Deserialize, Serialize};

/// Модель классификации товаров
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationModel {
    #[default]
    Best,
    DecisionTree,
    LogisticRegression,
    NaiveBayes,
}

impl ClassificationModel {
    pub fn all() -> [ClassificationModel; 4] {
        [
            Self::Best,
            Self::DecisionTree,
            Self::LogisticRegression,
            Self::NaiveBayes,
        ]
    }

    pub fn as_query(&self) -> &'static str {
        match self {
            Self::Best => "best",
            Self::DecisionTree => "decision_tree",
            Self::LogisticRegression => "logistic_regression",
            Self::NaiveBayes => "naive_bayes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Best => "Best (auto)",
            Self::DecisionTree => "Decision Tree",
            Self::LogisticRegression => "Logistic Regression",
            Self::NaiveBayes => "Naive Bayes",
        }
    }

    pub fn from_query(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|m| m.as_query() == s)
    }
}

/// Performance tier predicted for a product
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceTier {
    BestSeller,
    AverageSeller,
    SlowMoving,
}

impl PerformanceTier {
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Best Seller" => Some(Self::BestSeller),
            "Average Seller" => Some(Self::AverageSeller),
            "Slow-Moving" => Some(Self::SlowMoving),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedProduct {
    #[serde(rename = "ProductName")]
    pub product_name: String,
    #[serde(rename = "Category", default)]
    pub category: String,
    #[serde(rename = "TotalUnitsSold", default)]
    pub total_units_sold: f64,
    #[serde(rename = "AveragePrice", default)]
    pub average_price: f64,
    #[serde(rename = "PredictedPerformance", default)]
    pub predicted_performance: String,
}

/// Response of `GET /api/predict/product_classification`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResponse {
    #[serde(default)]
    pub classified_products: Vec<ClassifiedProduct>,
    #[serde(default)]
    pub model_accuracy: Option<f64>,
    #[serde(default)]
    pub model_used: String,
}
