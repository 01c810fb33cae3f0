pub mod api;
pub mod selector;
pub mod ui;
