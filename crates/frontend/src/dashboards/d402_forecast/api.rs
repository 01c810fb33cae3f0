use crate::shared::api_utils::{api_url_with_query, get_json};
use crate::shared::crud::SyncError;
use contracts::dashboards::d402_forecast::{ForecastModel, ForecastResponse};

pub async fn get_forecast(model: ForecastModel) -> Result<ForecastResponse, SyncError> {
    get_json(&api_url_with_query(
        "/api/predict/forecast",
        "model",
        model.as_query(),
    ))
    .await
}
