//! Settings shell for a handheld game console: a button-driven menu engine
//! with tagged-value data binding, a windowed scrolling viewport, and the
//! assembled on-device settings tree.

pub mod app;
pub mod config;
pub mod core;
pub mod menu;
pub mod platform;
pub mod screens;
pub mod ui;
