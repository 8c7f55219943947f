//! Portfolio: a single-page personal portfolio rendered in a native WebView.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod config;
pub mod content;
pub mod ipc_handler;
pub mod services;
pub mod telemetry;
pub mod types;
pub mod views;

#[cfg(feature = "gui")]
pub mod ui;
