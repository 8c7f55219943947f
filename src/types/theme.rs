use serde::{Deserialize, Serialize};

/// Colour scheme applied to the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Returns the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// Class set on `<body>`.
    pub fn body_class(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark-body",
            ThemeMode::Light => "light-body",
        }
    }

    /// Class set on the top-level app container.
    pub fn app_class(self) -> &'static str {
        match self {
            ThemeMode::Dark => "app-dark",
            ThemeMode::Light => "app-light",
        }
    }

    /// Icon shown on the toggle button. It advertises the mode a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            ThemeMode::Dark => "☀️",
            ThemeMode::Light => "🌙",
        }
    }
}
