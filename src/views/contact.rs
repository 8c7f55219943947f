//! Contact section: details card and the relay form.

use crate::content::PROFILE;
use crate::types::contact::ContactSubmission;

use super::html::escape;

/// Renders the section with `draft` as the current field values.
pub fn render(draft: &ContactSubmission) -> String {
    let p = &PROFILE;
    format!(
        "<section class=\"section enter-up\" id=\"contact-cta\">\
<h2 class=\"section-title gradient-text\">Contact</h2>\
<p class=\"section-subtitle\">Got an opportunity, idea, or collaboration in mind? Drop a message.</p>\
<div class=\"contact-grid\">\
<div class=\"contact-card\">\
<h3 class=\"card-title\">Let’s Talk</h3>\
<p class=\"card-desc\">I’m open to software engineering internships, freelance web projects, and collaborations on interesting tech ideas.</p>\
<ul class=\"contact-info\">\
<li>📧 <a href=\"mailto:{email}\">{email}</a></li>\
<li>📞 {phone}</li>\
<li>📍 {location}</li>\
<li>🐙 <a href=\"{github_url}\" target=\"_blank\" rel=\"noreferrer\">{github_label}</a></li>\
</ul>\
</div>\
<form id=\"pf-contact-form\" class=\"contact-form\">\
<div class=\"form-group\"><label>Name</label>\
<input name=\"user_name\" type=\"text\" placeholder=\"Your name\" value=\"{name}\" required /></div>\
<div class=\"form-group\"><label>Email</label>\
<input name=\"user_email\" type=\"email\" placeholder=\"Your email\" value=\"{user_email}\" required /></div>\
<div class=\"form-group\"><label>Message</label>\
<textarea name=\"message\" rows=\"4\" placeholder=\"Type your message...\" required>{message}</textarea></div>\
<button type=\"submit\" class=\"btn btn-primary btn-full\">Send Message</button>\
</form>\
</div>\
</section>",
        email = escape(p.email),
        phone = escape(p.phone),
        location = escape(p.location),
        github_url = escape(p.github_url),
        github_label = escape(p.github_label),
        name = escape(&draft.user_name),
        user_email = escape(&draft.user_email),
        message = escape(&draft.message),
    )
}
