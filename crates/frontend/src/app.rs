use crate::dashboards::d400_overview::ui::OverviewDashboard;
use crate::dashboards::d401_charts::ui::ChartsDashboard;
use crate::dashboards::d402_forecast::ui::ForecastDashboard;
use crate::dashboards::d403_classification::ui::ClassificationDashboard;
use crate::dashboards::d404_clustering::ui::ClusteringDashboard;
use crate::domain::a001_transaction::ui::TransactionsPage;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use leptos::prelude::*;

fn page_view(page: Page) -> AnyView {
    match page {
        Page::Overview => view! { <OverviewDashboard /> }.into_any(),
        Page::Transactions => view! { <TransactionsPage /> }.into_any(),
        Page::Charts => view! { <ChartsDashboard /> }.into_any(),
        Page::Forecast => view! { <ForecastDashboard /> }.into_any(),
        Page::Classification => view! { <ClassificationDashboard /> }.into_any(),
        Page::Clustering => view! { <ClusteringDashboard /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    ctx.init_router_integration();

    // Each page owns its state; switching pages disposes the old one
    let active = Memo::new(move |_| ctx.active.get());

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || (move || page_view(active.get())).into_any()
        />
    }
}
