//! Static section views: Home, Skills, Certifications.

use portfolio::app::App;
use portfolio::content::{CERTIFICATIONS, PROFILE, SKILLS};
use portfolio::types::repository::RepositoryListState;

fn render(path: &str) -> String {
    let mut app = App::default();
    let nav = app.navigate(path);
    assert!(nav.fetch.is_none(), "{} must not touch the network", path);
    assert_eq!(*app.projects(), RepositoryListState::Idle);
    app.render_view()
}

#[test]
fn test_skills_renders_exactly_five_categories() {
    let html = render("/skills");
    assert_eq!(html.matches("class=\"card card-skill\"").count(), 5);
    for skill in SKILLS {
        assert!(html.contains(skill.category), "missing {}", skill.category);
    }
    assert!(html.contains("Python, Java"));
}

#[test]
fn test_certifications_renders_both_records() {
    let html = render("/certifications");
    assert_eq!(html.matches("class=\"card card-cert\"").count(), CERTIFICATIONS.len());
    assert!(html.contains("Issued: September 22, 2025"));
    assert!(html.contains("Certification IDs: TOt4sbDURj-z5dlIvsIlNQ / 1tO0Ys3ITkGJkXM3sgBKrQ"));
    assert!(html.contains("Certification IDs: VTLO18RT2L44"));
    assert_eq!(html.matches("View Certificate").count(), 2);
}

#[test]
fn test_home_renders_profile_and_contact_link() {
    let html = render("/");
    assert!(html.contains(PROFILE.first_name));
    assert!(html.contains(PROFILE.headline));
    assert!(html.contains("Download Resume"));
    assert!(html.contains("data-route=\"/contact\""));
    assert!(html.contains(PROFILE.github_label));
}

#[test]
fn test_views_carry_entrance_animation() {
    for path in ["/", "/skills", "/certifications", "/contact"] {
        let html = render(path);
        assert!(html.contains("enter-"), "{} has no entrance class", path);
    }
}
