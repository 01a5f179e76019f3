pub mod api;
pub mod app;
pub mod ui;
pub mod util;
