use serde::{Deserialize, Serialize};

/// Регрессионная модель прогноза
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastModel {
    Linear,
    Polynomial,
    #[default]
    Best,
}

impl ForecastModel {
    pub fn all() -> [ForecastModel; 3] {
        [Self::Linear, Self::Polynomial, Self::Best]
    }

    /// Значение query-параметра `model`
    pub fn as_query(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Polynomial => "polynomial",
            Self::Best => "best",
        }
    }

    pub fn from_query(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|m| m.as_query() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Polynomial => "Polynomial",
            Self::Best => "Best Fit",
        }
    }
}

/// Response of `GET /api/predict/forecast`.
///
/// The series stays raw JSON: a malformed series must degrade to an empty
/// chart on the client, not fail the whole response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub forecast: serde_json::Value,
    #[serde(default)]
    pub mae: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_default() {
        let resp: ForecastResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.forecast.is_null());
        assert_eq!(resp.mae, None);
    }

    #[test]
    fn test_model_query_values() {
        let values: Vec<&str> = ForecastModel::all().iter().map(|m| m.as_query()).collect();
        assert_eq!(values, vec!["linear", "polynomial", "best"]);
        assert_eq!(ForecastModel::default(), ForecastModel::Best);
        assert_eq!(ForecastModel::from_query("polynomial"), Some(ForecastModel::Polynomial));
        assert_eq!(ForecastModel::from_query("Best"), None);
    }
}
