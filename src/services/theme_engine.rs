//! Theme Engine: owns the dark/light toggle and the CSS variables for each mode.

use std::collections::BTreeMap;

use crate::types::theme::ThemeMode;

/// Trait defining the theme engine interface.
pub trait ThemeEngineTrait {
    fn set_theme(&mut self, mode: ThemeMode);
    fn get_theme(&self) -> ThemeMode;
    /// Flips Dark↔Light and returns the new mode.
    fn toggle(&mut self) -> ThemeMode;
    fn get_css_variables(&self) -> BTreeMap<String, String>;
    /// Stylesheet declaring the variables of both modes under their body classes.
    fn stylesheet(&self) -> String;
}

/// Dark palette (the default).
struct DarkPalette;
impl DarkPalette {
    const BG_PRIMARY: &'static str = "#020617";
    const BG_CARD: &'static str = "#0f172a";
    const TEXT_PRIMARY: &'static str = "#e2e8f0";
    const TEXT_SECONDARY: &'static str = "#94a3b8";
    const BORDER: &'static str = "#1e293b";
    const ACCENT: &'static str = "#38bdf8";
    const ACCENT_ALT: &'static str = "#a855f7";
    const DANGER: &'static str = "#f97373";
    const SHADOW: &'static str = "0 20px 40px rgba(0,0,0,0.5)";
}

/// Light palette.
struct LightPalette;
impl LightPalette {
    const BG_PRIMARY: &'static str = "#f8fafc";
    const BG_CARD: &'static str = "#ffffff";
    const TEXT_PRIMARY: &'static str = "#0f172a";
    const TEXT_SECONDARY: &'static str = "#475569";
    const BORDER: &'static str = "#e2e8f0";
    const ACCENT: &'static str = "#0284c7";
    const ACCENT_ALT: &'static str = "#7c3aed";
    const DANGER: &'static str = "#dc2626";
    const SHADOW: &'static str = "0 20px 40px rgba(15,23,42,0.12)";
}

/// The theme engine implementation.
pub struct ThemeEngine {
    current_theme: ThemeMode,
}

impl Default for ThemeEngine {
    fn default() -> Self {
        Self::new(ThemeMode::Dark)
    }
}

impl ThemeEngine {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            current_theme: mode,
        }
    }

    /// Builds the CSS variable map for a given mode.
    pub fn variables_for(mode: ThemeMode) -> BTreeMap<String, String> {
        match mode {
            ThemeMode::Dark => Self::build_variables(
                DarkPalette::BG_PRIMARY,
                DarkPalette::BG_CARD,
                DarkPalette::TEXT_PRIMARY,
                DarkPalette::TEXT_SECONDARY,
                DarkPalette::BORDER,
                DarkPalette::ACCENT,
                DarkPalette::ACCENT_ALT,
                DarkPalette::DANGER,
                DarkPalette::SHADOW,
            ),
            ThemeMode::Light => Self::build_variables(
                LightPalette::BG_PRIMARY,
                LightPalette::BG_CARD,
                LightPalette::TEXT_PRIMARY,
                LightPalette::TEXT_SECONDARY,
                LightPalette::BORDER,
                LightPalette::ACCENT,
                LightPalette::ACCENT_ALT,
                LightPalette::DANGER,
                LightPalette::SHADOW,
            ),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn build_variables(
        bg_primary: &str,
        bg_card: &str,
        text_primary: &str,
        text_secondary: &str,
        border: &str,
        accent: &str,
        accent_alt: &str,
        danger: &str,
        shadow: &str,
    ) -> BTreeMap<String, String> {
        let mut vars = BTreeMap::new();
        vars.insert("--bg-primary".into(), bg_primary.into());
        vars.insert("--bg-card".into(), bg_card.into());
        vars.insert("--text-primary".into(), text_primary.into());
        vars.insert("--text-secondary".into(), text_secondary.into());
        vars.insert("--border-color".into(), border.into());
        vars.insert("--accent-color".into(), accent.into());
        vars.insert("--accent-alt".into(), accent_alt.into());
        vars.insert("--danger-color".into(), danger.into());
        vars.insert("--card-shadow".into(), shadow.into());
        vars.insert("--font-family".into(), "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif".into());
        vars.insert("--transition-fast".into(), "150ms".into());
        vars.insert("--transition-normal".into(), "200ms".into());
        vars
    }

    fn declarations(mode: ThemeMode) -> String {
        Self::variables_for(mode)
            .iter()
            .map(|(name, value)| format!("{}:{};", name, value))
            .collect()
    }
}

impl ThemeEngineTrait for ThemeEngine {
    fn set_theme(&mut self, mode: ThemeMode) {
        self.current_theme = mode;
    }

    fn get_theme(&self) -> ThemeMode {
        self.current_theme
    }

    fn toggle(&mut self) -> ThemeMode {
        self.current_theme = self.current_theme.toggled();
        self.current_theme
    }

    fn get_css_variables(&self) -> BTreeMap<String, String> {
        Self::variables_for(self.current_theme)
    }

    fn stylesheet(&self) -> String {
        [ThemeMode::Dark, ThemeMode::Light]
            .into_iter()
            .map(|mode| format!("body.{}{{{}}}", mode.body_class(), Self::declarations(mode)))
            .collect()
    }
}
