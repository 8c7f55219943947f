//! Home / hero section.

use crate::content::PROFILE;
use crate::types::route::Route;

use super::html::{escape, external_link, route_link};

pub fn render() -> String {
    let p = &PROFILE;
    format!(
        "<section class=\"section home-section enter-up\">\
<div class=\"hero-grid\">\
<div class=\"hero-text\">\
<p class=\"hero-eyebrow\">Hello, I’m</p>\
<h1 class=\"hero-title\">{first}<span class=\"hero-title-accent\"> {initial}</span></h1>\
<h2 class=\"hero-subtitle\">{headline}</h2>\
<p class=\"hero-description\">{summary}</p>\
<div class=\"hero-buttons\">{resume}{contact}</div>\
<div class=\"hero-info\"><span>📍 {location}</span><span>📞 {phone}</span><span>📧 {email}</span></div>\
</div>\
<div class=\"hero-card enter-right\">\
<p class=\"hero-card-heading\">Currently</p>\
<p class=\"hero-card-text\">{education}<br /><span class=\"hero-highlight\">{education_detail}</span></p>\
<p class=\"hero-card-heading\">GitHub</p>{github}\
</div>\
</div>\
</section>",
        first = escape(p.first_name),
        initial = escape(p.initial),
        headline = escape(p.headline),
        summary = escape(p.summary),
        resume = external_link(p.resume_url, "btn btn-primary", "Download Resume"),
        contact = route_link(Route::Contact.path(), "btn btn-ghost", "Contact Me"),
        location = escape(p.location),
        phone = escape(p.phone),
        email = escape(p.email),
        education = escape(p.education),
        education_detail = escape(p.education_detail),
        github = external_link(p.github_url, "hero-link", p.github_label),
    )
}
