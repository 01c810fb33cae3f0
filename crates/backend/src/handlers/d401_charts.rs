use axum::Json;
use contracts::dashboards::d401_charts::ChartDataResponse;

use crate::dashboards::d401_charts::service;
use crate::shared::data::db::get_connection;
use crate::shared::error::ApiError;

/// GET /api/chart_data
pub async fn get_chart_data() -> Result<Json<ChartDataResponse>, ApiError> {
    service::get_chart_data(get_connection()).await.map(Json)
}
