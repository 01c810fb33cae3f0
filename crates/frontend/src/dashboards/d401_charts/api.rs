use crate::shared::api_utils::{api_url, get_json};
use crate::shared::crud::SyncError;
use contracts::dashboards::d401_charts::ChartDataResponse;

/// Все агрегаты для детализации одним запросом
pub async fn get_chart_data() -> Result<ChartDataResponse, SyncError> {
    get_json(&api_url("/api/chart_data"))
        .await
        .map_err(|e| e.during("fetch chart data"))
}
