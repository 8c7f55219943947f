//! Skills grid.

use crate::content::SKILLS;
use crate::types::content::Skill;

use super::html::escape;

pub fn render() -> String {
    let cards: String = SKILLS.iter().map(render_card).collect();
    format!(
        "<section class=\"section enter-up\">\
<h2 class=\"section-title gradient-text\">Skills</h2>\
<p class=\"section-subtitle\">A mix of technical and interpersonal skills I use to build and ship software.</p>\
<div class=\"skills-grid\">{}</div>\
</section>",
        cards
    )
}

fn render_card(skill: &Skill) -> String {
    format!(
        "<div class=\"card card-skill\"><h3 class=\"card-title\">{}</h3><p class=\"skill-items\">{}</p></div>",
        escape(skill.category),
        escape(skill.items)
    )
}
