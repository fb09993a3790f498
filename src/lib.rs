pub mod app;
pub mod catalog;
pub mod config;
pub mod generator;
pub mod shared;
pub mod tui;
pub mod wizard;
