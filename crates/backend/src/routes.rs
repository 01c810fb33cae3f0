use axum::{routing::get, Router};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Transaction handlers
        .route(
            "/api/transactions",
            get(handlers::a001_transaction::list_all).post(handlers::a001_transaction::create),
        )
        .route(
            "/api/transactions/:id",
            axum::routing::put(handlers::a001_transaction::update)
                .delete(handlers::a001_transaction::delete),
        )
        // A002 Product catalog (read-only)
        .route("/api/products", get(handlers::a002_product::list_all))
        // D401 Charts drill-down
        .route("/api/chart_data", get(handlers::d401_charts::get_chart_data))
        // Prediction proxy
        .route("/api/predict/forecast", get(handlers::predict::forecast))
        .route(
            "/api/predict/product_classification",
            get(handlers::predict::product_classification),
        )
        .route(
            "/api/predict/product_clustering",
            get(handlers::predict::product_clustering),
        )
}
