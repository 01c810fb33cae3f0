pub mod api_utils;
pub mod chart;
pub mod components;
pub mod crud;
pub mod icons;
pub mod picker_aggregate;
pub mod state;
