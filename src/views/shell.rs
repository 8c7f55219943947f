//! Navigation shell: document skeleton, header and footer.

use chrono::{Datelike, Local};

use crate::content::PROFILE;
use crate::services::theme_engine::{ThemeEngine, ThemeEngineTrait};
use crate::types::route::Route;

use super::html::{escape, route_link};

const STYLES: &str = include_str!("../../resources/ui/styles.css");
const APP_JS: &str = include_str!("../../resources/ui/app.js");

/// Id of the element whose content is replaced on every render.
pub const MAIN_ID: &str = "pf-main";

/// Builds the full HTML document with `main_html` as the active view.
pub fn render_document(theme: &ThemeEngine, route: Route, main_html: &str) -> String {
    let mode = theme.get_theme();
    let theme_css = theme.stylesheet();
    let header = render_header(theme, route);
    let footer = render_footer();

    let mut html = String::with_capacity(
        STYLES.len() + APP_JS.len() + theme_css.len() + header.len() + main_html.len() + 1024,
    );
    html.push_str("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"UTF-8\">");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    html.push_str("<title>");
    html.push_str(&escape(&PROFILE.full_name()));
    html.push_str(" | Portfolio</title><style>");
    html.push_str(&theme_css);
    html.push_str(STYLES);
    html.push_str("</style></head>");
    html.push_str(&format!("<body class=\"{}\">", mode.body_class()));
    html.push_str(&format!("<div id=\"pf-app\" class=\"app {}\">", mode.app_class()));
    html.push_str(&header);
    html.push_str(&format!("<main class=\"main\" id=\"{}\">", MAIN_ID));
    html.push_str(main_html);
    html.push_str("</main>");
    html.push_str(&footer);
    html.push_str("</div><script>");
    html.push_str(APP_JS);
    html.push_str("</script></body></html>");
    html
}

/// Brand, nav links (active one marked) and the theme toggle.
pub fn render_header(theme: &ThemeEngine, active: Route) -> String {
    let links: String = Route::ALL
        .iter()
        .map(|route| {
            let class = if *route == active { "nav-link active" } else { "nav-link" };
            route_link(route.path(), class, route.label())
        })
        .collect();

    format!(
        "<header class=\"navbar\">\
<div class=\"navbar-left\"><span class=\"logo\">{name}</span><span class=\"role-tag\">{role}</span></div>\
<nav class=\"navbar-links\">{links}</nav>\
<button id=\"pf-theme-toggle\" class=\"theme-toggle\" aria-label=\"Toggle theme\">{icon}</button>\
</header>",
        name = escape(&PROFILE.full_name()),
        role = escape(PROFILE.role_tag),
        links = links,
        icon = theme.get_theme().toggle_icon(),
    )
}

pub fn render_footer() -> String {
    format!(
        "<footer class=\"footer\"><p>© {} {} · Built with Rust</p></footer>",
        Local::now().year(),
        escape(&PROFILE.full_name())
    )
}
