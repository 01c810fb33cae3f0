use crate::dashboards::d400_overview::kpi::{recent, Kpis, RECENT_LIMIT};
use crate::domain::a001_transaction::ui::list::status_class;
use crate::domain::a001_transaction::ui::{TransactionEntryForm, TransactionsViewModel};
use crate::shared::chart::{daily_totals, stitch};
use crate::shared::components::{SalesChart, StatCard, ValueFormat};
use leptos::prelude::*;

/// Обзор: KPI, график продаж, последние операции и ввод продажи
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let vm = TransactionsViewModel::new();
    vm.refresh();

    let loaded = Memo::new(move |_| vm.state.with(|s| !s.loading));
    let kpis = Memo::new(move |_| vm.state.with(|s| Kpis::from_transactions(&s.items)));
    let chart = Signal::derive(move || vm.state.with(|s| stitch(&daily_totals(&s.items), &[])));
    let recent_rows = Memo::new(move |_| vm.state.with(|s| recent(&s.items, RECENT_LIMIT)));

    let kpi = move |f: fn(&Kpis) -> f64| Signal::derive(move || loaded.get().then(|| f(&kpis.get())));

    view! {
        <div class="page dashboard">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Dashboard"</h1>
                </div>
            </div>

            {move || vm.state.with(|s| s.error.clone()).map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="stat-grid">
                <StatCard
                    label="Total Sales"
                    icon_name="revenue"
                    value=kpi(|k| k.total_sales)
                    format=ValueFormat::Money
                />
                <StatCard
                    label="Total Orders"
                    icon_name="orders"
                    value=kpi(|k| k.total_orders as f64)
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Average Sale Value"
                    icon_name="products"
                    value=kpi(|k| k.average_sale)
                    format=ValueFormat::Money
                />
            </div>

            <SalesChart points=chart />

            <TransactionEntryForm vm=vm />

            <div class="table-card">
                <h3 class="table-card__title">"Recent Transactions"</h3>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Description"</th>
                            <th>"Amount ($)"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            recent_rows
                                .get()
                                .into_iter()
                                .map(|tx| view! {
                                    <tr class="table__row">
                                        <td>{tx.date}</td>
                                        <td>{tx.description}</td>
                                        <td class="table__cell--number">{format!("{:.2}", tx.amount)}</td>
                                        <td><span class=status_class(tx.status)>{tx.status.as_str()}</span></td>
                                    </tr>
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
