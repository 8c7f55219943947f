//! Certifications list.

use crate::content::CERTIFICATIONS;
use crate::types::content::Certification;

use super::html::{escape, external_link};

pub fn render() -> String {
    let cards: String = CERTIFICATIONS.iter().map(render_card).collect();
    format!(
        "<section class=\"section enter-scale\">\
<h2 class=\"section-title gradient-text\">Certifications</h2>{}</section>",
        cards
    )
}

fn render_card(cert: &Certification) -> String {
    format!(
        "<div class=\"card card-cert\">\
<h3 class=\"card-title\">{title}</h3>\
<p class=\"card-desc\">Issued: {issued}</p>\
<p class=\"card-desc\">Certification IDs: {ids}</p>\
{link}</div>",
        title = escape(cert.title),
        issued = escape(cert.issued_date),
        ids = escape(&cert.identifiers.join(" / ")),
        link = external_link(cert.certificate_url, "card-link", "View Certificate"),
    )
}
