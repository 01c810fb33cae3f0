use crate::shared::api_utils::{api_url, get_json};
use crate::shared::crud::SyncError;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::common::AggregateRoot;

/// Каталог товаров; загружается один раз на страницу
pub async fn fetch_products() -> Result<Vec<Product>, SyncError> {
    get_json(&api_url(&Product::collection_path()))
        .await
        .map_err(|e| e.during("fetch products"))
}
