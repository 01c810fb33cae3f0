use crate::dashboards::d402_forecast::api;
use crate::domain::a001_transaction::api::HttpTransactionStore;
use crate::shared::chart::{daily_totals, stitch_with_raw_forecast, ChartPoint};
use crate::shared::components::SalesChart;
use crate::shared::crud::{CrudSynchronizer, SyncError};
use crate::shared::state::use_request_scope;
use contracts::dashboards::d402_forecast::ForecastModel;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn format_mae(mae: Option<f64>) -> String {
    match mae {
        Some(v) => format!("${:.2}", v),
        None => "N/A".to_string(),
    }
}

/// История и прогноз для выбранной модели
async fn load(model: ForecastModel) -> Result<(Vec<ChartPoint>, Option<f64>), SyncError> {
    let history = CrudSynchronizer::new(HttpTransactionStore).list().await?;
    let forecast = api::get_forecast(model).await?;
    let points = stitch_with_raw_forecast(&daily_totals(&history), &forecast.forecast);
    Ok((points, forecast.mae))
}

#[component]
pub fn ForecastDashboard() -> impl IntoView {
    let (model, set_model) = signal(ForecastModel::default());
    let (points, set_points) = signal(Vec::<ChartPoint>::new());
    let (mae, set_mae) = signal(None::<f64>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let scope = use_request_scope();

    // Re-fetch on every model switch; only the latest switch may land
    Effect::new(move |_| {
        let model = model.get();
        let scope = scope.clone();
        let ticket = scope.issue();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let outcome = load(model).await;
            if !scope.accept_latest(ticket) {
                log::debug!("dropping superseded forecast for {}", model.as_query());
                return;
            }
            match outcome {
                Ok((chart, mae)) => {
                    set_points.set(chart);
                    set_mae.set(mae);
                }
                Err(e) => {
                    log::warn!("forecast: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page dashboard">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Sales Forecast"</h1>
                    <p class="header__subtitle">"Select a regression model to predict future sales."</p>
                </div>
            </div>

            <div class="model-selector">
                {ForecastModel::all()
                    .into_iter()
                    .map(|m| view! {
                        <button
                            class="button button--secondary"
                            class:button--active=move || model.get() == m
                            on:click=move |_| set_model.set(m)
                        >
                            {m.label()}
                        </button>
                    })
                    .collect_view()}
            </div>

            {move || {
                if loading.get() {
                    view! { <p class="placeholder">"Generating forecast..."</p> }.into_any()
                } else if let Some(e) = error.get() {
                    view! { <p class="placeholder placeholder--error">{e}</p> }.into_any()
                } else {
                    view! {
                        <div class="metric-card">
                            <h4>"Model Accuracy (MAE)"</h4>
                            <p class="metric-card__value">{move || format_mae(mae.get())}</p>
                            <span class="metric-card__hint">
                                "Lower is better. This is the average error in the model's prediction."
                            </span>
                        </div>
                        <SalesChart points=points />
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mae_format() {
        assert_eq!(format_mae(Some(12.345)), "$12.35");
        assert_eq!(format_mae(None), "N/A");
    }
}
