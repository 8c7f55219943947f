use serde::Serialize;

/// Biographical and contact details shown on Home and Contact.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Profile {
    pub first_name: &'static str,
    pub initial: &'static str,
    pub role_tag: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub resume_url: &'static str,
    pub location: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub github_url: &'static str,
    pub github_label: &'static str,
    pub education: &'static str,
    pub education_detail: &'static str,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.initial)
    }
}

/// A skill category and the comma-separated items in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub category: &'static str,
    pub items: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Certification {
    pub title: &'static str,
    pub issued_date: &'static str,
    pub identifiers: &'static [&'static str],
    pub certificate_url: &'static str,
}
