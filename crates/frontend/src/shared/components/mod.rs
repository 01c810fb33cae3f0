pub mod sales_chart;
pub mod stat_card;
pub mod ui;

pub use sales_chart::SalesChart;
pub use stat_card::{format_value, StatCard, ValueFormat};
