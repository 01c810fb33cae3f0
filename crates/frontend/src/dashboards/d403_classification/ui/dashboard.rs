use crate::dashboards::d403_classification::api;
use crate::shared::components::ui::{Badge, Select};
use crate::shared::state::use_request_scope;
use contracts::dashboards::d403_classification::{
    ClassificationModel, ClassificationResponse, ClassifiedProduct, PerformanceTier,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Вариант бейджа по прогнозу; неизвестные метки без бейджа
pub fn badge_variant(label: &str) -> Option<&'static str> {
    PerformanceTier::parse(label).map(|tier| match tier {
        PerformanceTier::BestSeller => "success",
        PerformanceTier::AverageSeller => "warning",
        PerformanceTier::SlowMoving => "error",
    })
}

fn format_accuracy(accuracy: Option<f64>) -> String {
    accuracy
        .map(|a| format!("{:.0}%", a * 100.0))
        .unwrap_or_else(|| "N/A".to_string())
}

fn product_row(p: ClassifiedProduct) -> impl IntoView {
    let performance = match badge_variant(&p.predicted_performance) {
        Some(variant) => view! { <Badge variant=variant>{p.predicted_performance.clone()}</Badge> }.into_any(),
        None => view! { <span>{p.predicted_performance.clone()}</span> }.into_any(),
    };
    view! {
        <tr class="table__row">
            <td>{p.product_name}</td>
            <td>{p.category}</td>
            <td class="table__cell--number">{format!("{:.0}", p.total_units_sold)}</td>
            <td class="table__cell--number">{format!("${:.2}", p.average_price)}</td>
            <td>{performance}</td>
        </tr>
    }
}

#[component]
pub fn ClassificationDashboard() -> impl IntoView {
    let (model, set_model) = signal(ClassificationModel::default());
    let (data, set_data) = signal(None::<ClassificationResponse>);
    let (error, set_error) = signal(None::<String>);
    let scope = use_request_scope();

    Effect::new(move |_| {
        let model = model.get();
        let scope = scope.clone();
        let ticket = scope.issue();
        set_error.set(None);
        set_data.set(None);
        spawn_local(async move {
            let outcome = api::get_classification(model).await;
            if !scope.accept_latest(ticket) {
                log::debug!("dropping superseded classification for {}", model.as_query());
                return;
            }
            match outcome {
                Ok(response) => set_data.set(Some(response)),
                Err(e) => {
                    log::warn!("classification: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    });

    let options = ClassificationModel::all()
        .into_iter()
        .map(|m| (m.as_query().to_string(), m.label().to_string()))
        .collect::<Vec<_>>();
    let on_model = Callback::new(move |value: String| {
        if let Some(m) = ClassificationModel::from_query(&value) {
            set_model.set(m);
        }
    });

    view! {
        <div class="page dashboard">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Product Performance Classification"</h1>
                </div>
            </div>

            <div class="filter-bar">
                <Select
                    label="Model"
                    value=Signal::derive(move || model.get().as_query().to_string())
                    options=options
                    on_change=on_model
                />
            </div>

            {move || match (error.get(), data.get()) {
                (Some(e), _) => view! { <p class="placeholder placeholder--error">{e}</p> }.into_any(),
                (None, None) => view! { <p class="placeholder">"Classifying products..."</p> }.into_any(),
                (None, Some(response)) => view! {
                    <div class="metric-row">
                        <div class="metric-card">
                            <h4>"Model Used"</h4>
                            <p class="metric-card__value">{response.model_used.clone()}</p>
                        </div>
                        <div class="metric-card">
                            <h4>"Accuracy"</h4>
                            <p class="metric-card__value">{format_accuracy(response.model_accuracy)}</p>
                        </div>
                    </div>
                    <div class="table-card">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Product"</th>
                                    <th>"Category"</th>
                                    <th>"Units Sold"</th>
                                    <th>"Avg. Price"</th>
                                    <th>"Predicted Performance"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {response.classified_products.into_iter().map(product_row).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
