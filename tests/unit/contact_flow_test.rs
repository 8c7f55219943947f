//! Contact form flow: draft handling around a relay call.

use async_trait::async_trait;
use portfolio::app::App;
use portfolio::services::email_relay::EmailRelay;
use portfolio::types::contact::{ContactNotice, ContactSubmission};
use portfolio::types::errors::RelayError;
use portfolio::types::route::Route;
use std::sync::Mutex;

/// Relay that records what it was given and answers with a fixed outcome.
struct FakeRelay {
    succeed: bool,
    received: Mutex<Vec<ContactSubmission>>,
}

impl FakeRelay {
    fn new(succeed: bool) -> Self {
        Self {
            succeed,
            received: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl EmailRelay for FakeRelay {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), RelayError> {
        self.received.lock().unwrap().push(submission.clone());
        if self.succeed {
            Ok(())
        } else {
            Err(RelayError::Rejected {
                status: 500,
                body: "down".into(),
            })
        }
    }
}

fn filled() -> ContactSubmission {
    ContactSubmission::new("Grace", "grace@example.com", "Let's build something")
}

async fn submit(app: &mut App, relay: &FakeRelay) -> ContactNotice {
    app.navigate(Route::Contact.path());
    let outgoing = app.begin_contact_submission(filled());
    let result = relay.send(&outgoing).await;
    app.complete_contact_submission(result)
}

#[tokio::test]
async fn test_successful_send_clears_all_fields() {
    let mut app = App::default();
    let relay = FakeRelay::new(true);

    let notice = submit(&mut app, &relay).await;

    assert_eq!(notice, ContactNotice::Sent);
    assert_eq!(notice.message(), "Message sent successfully! ✅");
    assert!(app.contact_draft().is_empty());
    assert_eq!(relay.received.lock().unwrap().as_slice(), &[filled()]);
}

#[tokio::test]
async fn test_failed_send_keeps_fields_populated() {
    let mut app = App::default();
    let relay = FakeRelay::new(false);

    let notice = submit(&mut app, &relay).await;

    assert_eq!(notice, ContactNotice::Failed);
    assert_eq!(notice.message(), "Something went wrong. Please try again ❌");
    assert_eq!(*app.contact_draft(), filled());

    let html = app.render_view();
    assert!(html.contains("value=\"Grace\""));
    assert!(html.contains("value=\"grace@example.com\""));
    assert!(html.contains(">Let&#39;s build something</textarea>"));
}

#[tokio::test]
async fn test_resubmission_after_failure_can_succeed() {
    let mut app = App::default();
    submit(&mut app, &FakeRelay::new(false)).await;
    let notice = submit(&mut app, &FakeRelay::new(true)).await;
    assert_eq!(notice, ContactNotice::Sent);
    assert!(app.contact_draft().is_empty());
}

#[test]
fn test_form_renders_required_fields() {
    let app = {
        let mut app = App::default();
        app.navigate("/contact");
        app
    };
    let html = app.render_view();
    assert!(html.contains("name=\"user_name\" type=\"text\""));
    assert!(html.contains("name=\"user_email\" type=\"email\""));
    assert!(html.contains("<textarea name=\"message\""));
    assert_eq!(html.matches(" required").count(), 3);
    assert!(html.contains("Send Message"));
}
