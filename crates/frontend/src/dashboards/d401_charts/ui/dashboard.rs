use crate::dashboards::d401_charts::api;
use crate::dashboards::d401_charts::selector::{products_in_category, DrillDownView, Selection};
use crate::shared::chart::{BarChart, LineChart, LineSeries, PieChart};
use crate::shared::components::ui::Select;
use crate::shared::state::use_request_scope;
use contracts::dashboards::d401_charts::ChartDataResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn no_data() -> AnyView {
    view! { <p class="placeholder">"No data available for this selection."</p> }.into_any()
}

fn render_view(view: DrillDownView) -> AnyView {
    match view {
        DrillDownView::Prompt => {
            view! { <p class="placeholder">"Select a category to see its sales."</p> }.into_any()
        }
        DrillDownView::Category {
            category,
            revenue,
            distribution,
        } => {
            let revenue_view = match revenue.filter(|r| !r.is_empty()) {
                None => no_data(),
                Some(points) => {
                    let labels: Vec<String> = points.iter().map(|p| p.date.clone()).collect();
                    let series = vec![LineSeries {
                        label: "Total Revenue".to_string(),
                        color: "#8884d8",
                        dashed: false,
                        values: points.iter().map(|p| Some(p.total_revenue)).collect(),
                    }];
                    view! { <LineChart labels=labels series=series /> }.into_any()
                }
            };
            let distribution_view = match distribution.filter(|d| !d.is_empty()) {
                None => no_data(),
                Some(shares) => {
                    let labels: Vec<String> = shares.iter().map(|s| s.product_name.clone()).collect();
                    let values: Vec<f64> = shares.iter().map(|s| s.units_sold as f64).collect();
                    view! { <PieChart labels=labels values=values /> }.into_any()
                }
            };
            view! {
                <div class="chart-grid">
                    <div class="chart-card">
                        <h3 class="chart-card__title">{format!("Revenue Over Time: {}", category)}</h3>
                        {revenue_view}
                    </div>
                    <div class="chart-card">
                        <h3 class="chart-card__title">{format!("Units Sold by Product: {}", category)}</h3>
                        {distribution_view}
                    </div>
                </div>
            }
            .into_any()
        }
        DrillDownView::Product { product, history } => {
            let body = match history.filter(|h| !h.is_empty()) {
                None => no_data(),
                Some(points) => {
                    let labels: Vec<String> = points.iter().map(|p| p.date.clone()).collect();
                    let values: Vec<f64> = points.iter().map(|p| p.units_sold as f64).collect();
                    view! { <BarChart labels=labels values=values /> }.into_any()
                }
            };
            view! {
                <div class="chart-card">
                    <h3 class="chart-card__title">{format!("Units Sold Over Time: {}", product)}</h3>
                    {body}
                </div>
            }
            .into_any()
        }
    }
}

/// Детализация продаж: категория, затем товар
#[component]
pub fn ChartsDashboard() -> impl IntoView {
    let (data, set_data) = signal(None::<ChartDataResponse>);
    let (error, set_error) = signal(None::<String>);
    let selection = RwSignal::new(Selection::default());

    let scope = use_request_scope();
    let ticket = scope.issue();
    spawn_local(async move {
        let outcome = api::get_chart_data().await;
        if !scope.accept(ticket) {
            log::debug!("dropping chart data for a disposed dashboard");
            return;
        }
        match outcome {
            Ok(response) => {
                selection.set(Selection::initial(&response.categories));
                set_data.set(Some(response));
            }
            Err(e) => {
                log::warn!("{}", e);
                set_error.set(Some(e.to_string()));
            }
        }
    });

    let category_options = Signal::derive(move || {
        data.with(|d| {
            d.as_ref()
                .map(|d| d.categories.iter().map(|c| (c.clone(), c.clone())).collect())
                .unwrap_or_default()
        })
    });
    let product_options = Signal::derive(move || {
        let category = selection.with(|s| s.category().map(str::to_string));
        data.with(|d| match (d, category) {
            (Some(d), Some(category)) => products_in_category(&d.products, &category)
                .into_iter()
                .map(|p| (p.product_name.clone(), p.product_name.clone()))
                .collect(),
            _ => Vec::new(),
        })
    });
    let category_value = Signal::derive(move || selection.with(|s| s.category().unwrap_or_default().to_string()));
    let product_value = Signal::derive(move || selection.with(|s| s.product().unwrap_or_default().to_string()));

    let on_category = Callback::new(move |value: String| {
        selection.update(|s| *s = s.select_category(&value));
    });
    let on_product = Callback::new(move |value: String| {
        let next = data.with_untracked(|d| {
            let catalog = d.as_ref().map(|d| d.products.as_slice()).unwrap_or_default();
            selection.with_untracked(|s| s.select_product(&value, catalog))
        });
        selection.set(next);
    });

    let resolved = Memo::new(move |_| {
        data.with(|d| d.as_ref().map(|d| selection.with(|s| s.resolve(d))))
    });

    view! {
        <div class="page dashboard">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Sales Charts"</h1>
                </div>
            </div>

            <div class="filter-bar">
                <Select
                    label="Category"
                    value=category_value
                    options=category_options
                    placeholder="Select a category"
                    on_change=on_category
                />
                <Select
                    label="Product"
                    value=product_value
                    options=product_options
                    placeholder="All products"
                    disabled=Signal::derive(move || selection.with(|s| s.category().is_none()))
                    on_change=on_product
                />
            </div>

            {move || match (error.get(), resolved.get()) {
                (Some(e), _) => view! { <p class="placeholder placeholder--error">{e}</p> }.into_any(),
                (None, None) => view! { <p class="placeholder">"Loading chart data..."</p> }.into_any(),
                (None, Some(view)) => render_view(view),
            }}
        </div>
    }
}
