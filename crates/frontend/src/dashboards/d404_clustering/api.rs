use crate::shared::api_utils::{api_url, get_json};
use crate::shared::crud::SyncError;
use contracts::dashboards::d404_clustering::ClusteringResponse;

pub async fn get_clustering() -> Result<ClusteringResponse, SyncError> {
    get_json(&api_url("/api/predict/product_clustering")).await
}
