use crate::shared::api_utils::{api_url_with_query, get_json};
use crate::shared::crud::SyncError;
use contracts::dashboards::d403_classification::{ClassificationModel, ClassificationResponse};

pub async fn get_classification(
    model: ClassificationModel,
) -> Result<ClassificationResponse, SyncError> {
    get_json(&api_url_with_query(
        "/api/predict/product_classification",
        "model",
        model.as_query(),
    ))
    .await
}
