//! Wire types shared by the dashboard frontend and the data server.

pub mod dashboards;
pub mod domain;
pub mod shared;
