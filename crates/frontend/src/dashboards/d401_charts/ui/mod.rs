pub mod dashboard;

pub use dashboard::ChartsDashboard;
