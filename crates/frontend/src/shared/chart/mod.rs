//! Chart datasets and their SVG rendering.
//!
//! - `series`: turns transactions and forecast payloads into chart points
//! - `geometry`: pure scaling / path math
//! - `components`: Leptos SVG charts that draw a shaped dataset

pub mod components;
pub mod geometry;
pub mod series;

pub use components::{BarChart, LineChart, LineSeries, PieChart, ScatterChart, ScatterPoint};
pub use series::{daily_totals, stitch, stitch_with_raw_forecast, ChartPoint, TimePoint};
