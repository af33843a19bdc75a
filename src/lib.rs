pub mod api;
pub mod config;
pub mod dataset;
pub mod error;
pub mod fetch;
pub mod format;
pub mod layout;
pub mod output;
pub mod render;
pub mod segments;
// cmd and reports belong to the binary (main.rs).
