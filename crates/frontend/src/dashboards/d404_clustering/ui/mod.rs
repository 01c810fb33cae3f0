pub mod dashboard;

pub use dashboard::ClusteringDashboard;
