//! Portfolio UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! Views are rendered to HTML by [`crate::views`] and pushed into the WebView.
//! Communication between the Rust backend and the page script uses wry IPC.

pub mod webview_app;
