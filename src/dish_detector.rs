pub mod app;
pub mod core;
pub mod labels;
pub mod main;
pub mod render;
pub mod result_view;
pub mod run_effect;
