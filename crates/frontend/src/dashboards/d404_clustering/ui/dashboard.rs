use crate::dashboards::d404_clustering::api;
use crate::dashboards::d404_clustering::summary::cluster_summaries;
use crate::shared::chart::{ScatterChart, ScatterPoint};
use crate::shared::components::{format_value, ValueFormat};
use crate::shared::state::use_request_scope;
use contracts::dashboards::d404_clustering::ClusteringResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn scatter_points(response: &ClusteringResponse) -> Vec<ScatterPoint> {
    response
        .clustered_products
        .iter()
        .map(|p| ScatterPoint {
            x: p.total_revenue,
            y: p.total_units_sold,
            group: p.cluster as usize,
            label: p.product_name.clone(),
        })
        .collect()
}

#[component]
pub fn ClusteringDashboard() -> impl IntoView {
    let (data, set_data) = signal(None::<ClusteringResponse>);
    let (error, set_error) = signal(None::<String>);

    let scope = use_request_scope();
    let ticket = scope.issue();
    spawn_local(async move {
        let outcome = api::get_clustering().await;
        if !scope.accept(ticket) {
            log::debug!("dropping clustering result for a disposed dashboard");
            return;
        }
        match outcome {
            Ok(response) => set_data.set(Some(response)),
            Err(e) => {
                log::warn!("clustering: {}", e);
                set_error.set(Some(e.to_string()));
            }
        }
    });

    view! {
        <div class="page dashboard">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Product Clustering Analysis"</h1>
                </div>
            </div>

            {move || match (error.get(), data.get()) {
                (Some(e), _) => view! { <p class="placeholder placeholder--error">{e}</p> }.into_any(),
                (None, None) => view! { <p class="placeholder">"Running clustering model..."</p> }.into_any(),
                (None, Some(response)) => {
                    let k = response
                        .optimal_k
                        .map(|k| k.to_string())
                        .unwrap_or_else(|| "N/A".to_string());
                    let summaries = cluster_summaries(&response.clustered_products);
                    let groups: Vec<String> = match summaries.last() {
                        Some(last) => (0..=last.cluster).map(|c| format!("Cluster {}", c)).collect(),
                        None => Vec::new(),
                    };
                    let points = scatter_points(&response);
                    view! {
                        <p class="header__subtitle">
                            {format!("Products are segmented into {} groups using K-Means based on their sales patterns.", k)}
                        </p>
                        <div class="chart-card">
                            <h3 class="chart-card__title">"Product Segments"</h3>
                            <ScatterChart
                                points=points
                                groups=groups
                                x_label="Total Revenue ($)"
                                y_label="Units Sold"
                            />
                        </div>
                        <div class="table-card">
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Cluster"</th>
                                        <th>"Products"</th>
                                        <th>"Mean Revenue"</th>
                                        <th>"Mean Units Sold"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {summaries
                                        .into_iter()
                                        .map(|s| view! {
                                            <tr class="table__row">
                                                <td>{s.cluster}</td>
                                                <td>{s.count}</td>
                                                <td class="table__cell--number">{format_value(s.mean_revenue, ValueFormat::Money)}</td>
                                                <td class="table__cell--number">{format!("{:.1}", s.mean_units)}</td>
                                            </tr>
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
