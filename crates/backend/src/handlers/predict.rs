use axum::extract::Query;
use axum::Json;
use contracts::dashboards::d402_forecast::ForecastModel;
use contracts::dashboards::d403_classification::ClassificationModel;
use serde::Deserialize;

use crate::shared::error::ApiError;
use crate::shared::prediction_client::get_client;

#[derive(Debug, Deserialize)]
pub struct ModelQuery {
    pub model: Option<String>,
}

/// Model query value, validated against the known set; absent means default
fn model_param<M: Default>(
    query: &ModelQuery,
    parse: fn(&str) -> Option<M>,
) -> Result<M, ApiError> {
    match query.model.as_deref().map(str::trim).filter(|m| !m.is_empty()) {
        None => Ok(M::default()),
        Some(raw) => parse(raw).ok_or_else(|| ApiError::BadRequest(format!("Unknown model: {}", raw))),
    }
}

/// GET /api/predict/forecast?model=
pub async fn forecast(Query(query): Query<ModelQuery>) -> Result<Json<serde_json::Value>, ApiError> {
    let model = model_param(&query, ForecastModel::from_query)?;
    get_client()?
        .get_json("predict/forecast", &[("model", model.as_query())])
        .await
        .map(Json)
}

/// GET /api/predict/product_classification?model=
pub async fn product_classification(
    Query(query): Query<ModelQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let model = model_param(&query, ClassificationModel::from_query)?;
    get_client()?
        .get_json("predict/product_classification", &[("model", model.as_query())])
        .await
        .map(Json)
}

/// GET /api/predict/product_clustering
pub async fn product_clustering() -> Result<Json<serde_json::Value>, ApiError> {
    get_client()?
        .get_json("predict/product_clustering", &[])
        .await
        .map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn query(model: Option<&str>) -> ModelQuery {
        ModelQuery {
            model: model.map(Into::into),
        }
    }

    #[test]
    fn test_model_param_defaults_and_validates() {
        assert_eq!(
            model_param(&query(None), ForecastModel::from_query).unwrap(),
            ForecastModel::Best
        );
        assert_eq!(
            model_param(&query(Some("linear")), ForecastModel::from_query).unwrap(),
            ForecastModel::Linear
        );
        assert_eq!(
            model_param(&query(Some("decision_tree")), ClassificationModel::from_query).unwrap(),
            ClassificationModel::DecisionTree
        );
        let err = model_param(&query(Some("svm")), ClassificationModel::from_query).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unconfigured_service_answers_503() {
        let err = product_clustering().await.unwrap_err();
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
