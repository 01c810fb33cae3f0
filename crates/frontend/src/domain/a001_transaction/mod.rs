pub mod api;
pub mod editor;
pub mod forms;
pub mod ui;
