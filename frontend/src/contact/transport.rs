use gloo_net::http::Request;
use log::warn;

use super::lifecycle::{ContactForm, SubmitOutcome};

/// Delivers a contact form somewhere that answers accept or reject.
#[allow(async_fn_in_trait)]
pub trait ContactTransport {
    async fn send(&self, form: &ContactForm) -> SubmitOutcome;
}

/// POSTs the form as JSON; any 2xx counts as accepted.
#[derive(Clone, Debug, PartialEq)]
pub struct GlooTransport {
    endpoint: String,
}

impl GlooTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl ContactTransport for GlooTransport {
    async fn send(&self, form: &ContactForm) -> SubmitOutcome {
        let request = match Request::post(&self.endpoint).json(form) {
            Ok(req) => req,
            Err(e) => return SubmitOutcome::Transport(e.to_string()),
        };

        match request.send().await {
            Ok(response) if response.ok() => SubmitOutcome::Accepted,
            Ok(response) => {
                warn!("Contact endpoint answered with status {}", response.status());
                SubmitOutcome::Rejected(response.status())
            }
            Err(e) => {
                warn!("Contact request failed: {}", e);
                SubmitOutcome::Transport(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::lifecycle::{Field, SubmissionLifecycle, SubmissionStatus};
    use std::cell::RefCell;

    /// Answers every request with a fixed HTTP status and remembers the payloads.
    struct StubEndpoint {
        status: u16,
        received: RefCell<Vec<ContactForm>>,
    }

    impl StubEndpoint {
        fn answering(status: u16) -> Self {
            Self { status, received: RefCell::new(Vec::new()) }
        }
    }

    impl ContactTransport for StubEndpoint {
        async fn send(&self, form: &ContactForm) -> SubmitOutcome {
            self.received.borrow_mut().push(form.clone());
            if (200..300).contains(&self.status) {
                SubmitOutcome::Accepted
            } else {
                SubmitOutcome::Rejected(self.status)
            }
        }
    }

    struct Offline;

    impl ContactTransport for Offline {
        async fn send(&self, _form: &ContactForm) -> SubmitOutcome {
            SubmitOutcome::Transport("NetworkError when attempting to fetch resource.".to_string())
        }
    }

    fn filled() -> SubmissionLifecycle {
        let mut lifecycle = SubmissionLifecycle::new();
        lifecycle.set_field(Field::Name, "A".to_string());
        lifecycle.set_field(Field::Email, "a@b.com".to_string());
        lifecycle.set_field(Field::Message, "hi".to_string());
        lifecycle
    }

    async fn run<T: ContactTransport>(lifecycle: &mut SubmissionLifecycle, transport: &T) -> Vec<SubmissionStatus> {
        let mut seen = vec![lifecycle.status().clone()];
        let (payload, _) = lifecycle.begin(0.0).expect("form is complete");
        seen.push(lifecycle.status().clone());
        let outcome = transport.send(&payload).await;
        lifecycle.settle(outcome, 50.0);
        seen.push(lifecycle.status().clone());
        seen
    }

    #[tokio::test]
    async fn accepted_submission_clears_the_form() {
        let endpoint = StubEndpoint::answering(200);
        let mut lifecycle = filled();

        let seen = run(&mut lifecycle, &endpoint).await;
        let kinds: Vec<&str> = seen.iter().map(|s| s.kind()).collect();
        assert_eq!(kinds, vec!["idle", "info", "success"]);
        assert!(seen[2].message().unwrap().contains("Successfully"));

        assert_eq!(lifecycle.form(), &ContactForm::default());
        assert_eq!(
            endpoint.received.borrow().as_slice(),
            &[ContactForm {
                name: "A".to_string(),
                email: "a@b.com".to_string(),
                message: "hi".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn rejected_submission_keeps_the_form() {
        let endpoint = StubEndpoint::answering(500);
        let mut lifecycle = filled();
        let before = lifecycle.form().clone();

        let seen = run(&mut lifecycle, &endpoint).await;
        let kinds: Vec<&str> = seen.iter().map(|s| s.kind()).collect();
        assert_eq!(kinds, vec!["idle", "info", "error"]);
        assert_eq!(lifecycle.form(), &before);
        assert!(!lifecycle.is_in_flight());
    }

    #[tokio::test]
    async fn network_failure_keeps_the_form() {
        let mut lifecycle = filled();
        let before = lifecycle.form().clone();

        let seen = run(&mut lifecycle, &Offline).await;
        assert_eq!(seen.last().map(|s| s.kind()), Some("error"));
        assert_eq!(lifecycle.form(), &before);
    }

    #[test]
    fn payload_serializes_as_flat_json() {
        let form = ContactForm {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            message: "hi".to_string(),
        };
        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value, serde_json::json!({"name": "A", "email": "a@b.com", "message": "hi"}));
    }
}
