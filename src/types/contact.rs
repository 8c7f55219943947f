use serde::{Deserialize, Serialize};

/// Field values captured from the contact form at submit time.
///
/// Field names match the form inputs and the relay template parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        user_name: impl Into<String>,
        user_email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            user_name: user_name.into(),
            user_email: user_email.into(),
            message: message.into(),
        }
    }

    /// True when every field is blank.
    pub fn is_empty(&self) -> bool {
        self.user_name.is_empty() && self.user_email.is_empty() && self.message.is_empty()
    }
}

/// Blocking notification raised once a relay call resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactNotice {
    Sent,
    Failed,
}

impl ContactNotice {
    pub fn message(self) -> &'static str {
        match self {
            ContactNotice::Sent => "Message sent successfully! ✅",
            ContactNotice::Failed => "Something went wrong. Please try again ❌",
        }
    }

    /// Whether the form fields are cleared after this notice.
    pub fn clears_form(self) -> bool {
        matches!(self, ContactNotice::Sent)
    }
}
