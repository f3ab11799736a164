use serde::{Deserialize, Serialize};

/// How long a status message stays visible before falling back to idle.
pub const STATUS_RESET_MS: u32 = 4000;

pub const SENDING_MESSAGE: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str = "✅ Message Sent Successfully!";
pub const REJECTED_MESSAGE: &str = "❌ Failed to send message.";
pub const TRANSPORT_MESSAGE: &str = "❌ Error sending message.";
pub const INCOMPLETE_MESSAGE: &str = "❌ Please fill in all fields.";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending(String),
    Success(String),
    Error(String),
}

impl SubmissionStatus {
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Sending(msg)
            | SubmissionStatus::Success(msg)
            | SubmissionStatus::Error(msg) => Some(msg),
        }
    }

    /// CSS modifier used by the form to colour the status line.
    pub fn kind(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Sending(_) => "info",
            SubmissionStatus::Success(_) => "success",
            SubmissionStatus::Error(_) => "error",
        }
    }
}

/// What the endpoint made of one POST.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected(u16),
    Transport(String),
}

/// Why `begin` refused to send. A blank field still gets a status line, so it
/// carries the ticket that clears it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SubmitRejected {
    Incomplete(ResetTicket),
    InFlight,
}

/// Permission to reset the status once its display time is over. Only the
/// ticket handed out for the latest status is honoured.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResetTicket {
    generation: u64,
    due_ms: f64,
}

/// Form values and status for one contact form instance.
#[derive(Debug, Default)]
pub struct SubmissionLifecycle {
    form: ContactForm,
    status: SubmissionStatus,
    in_flight: bool,
    generation: u64,
}

impl SubmissionLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.form.name = value,
            Field::Email => self.form.email = value,
            Field::Message => self.form.message = value,
        }
    }

    /// Moves to `Sending` and hands back the payload to POST.
    pub fn begin(&mut self, now_ms: f64) -> Result<(ContactForm, ResetTicket), SubmitRejected> {
        if self.in_flight {
            return Err(SubmitRejected::InFlight);
        }
        if !self.form.is_complete() {
            let ticket = self.set_status(SubmissionStatus::Error(INCOMPLETE_MESSAGE.to_string()), now_ms);
            return Err(SubmitRejected::Incomplete(ticket));
        }
        self.in_flight = true;
        let ticket = self.set_status(SubmissionStatus::Sending(SENDING_MESSAGE.to_string()), now_ms);
        Ok((self.form.clone(), ticket))
    }

    /// Records the endpoint's answer. The form is cleared only on acceptance.
    pub fn settle(&mut self, outcome: SubmitOutcome, now_ms: f64) -> ResetTicket {
        self.in_flight = false;
        let status = match outcome {
            SubmitOutcome::Accepted => {
                self.form = ContactForm::default();
                SubmissionStatus::Success(SUCCESS_MESSAGE.to_string())
            }
            SubmitOutcome::Rejected(_) => SubmissionStatus::Error(REJECTED_MESSAGE.to_string()),
            SubmitOutcome::Transport(_) => SubmissionStatus::Error(TRANSPORT_MESSAGE.to_string()),
        };
        self.set_status(status, now_ms)
    }

    pub fn is_current(&self, ticket: ResetTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Time left before `ticket` may clear the status, or `None` once a newer
    /// status has replaced it.
    pub fn remaining_ms(&self, ticket: ResetTicket, now_ms: f64) -> Option<u32> {
        if !self.is_current(ticket) {
            return None;
        }
        Some((ticket.due_ms - now_ms).ceil().max(0.0) as u32)
    }

    /// Clears the status if `ticket` is still current and due.
    pub fn expire(&mut self, ticket: ResetTicket, now_ms: f64) -> bool {
        if !self.is_current(ticket) || now_ms < ticket.due_ms {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        true
    }

    fn set_status(&mut self, status: SubmissionStatus, now_ms: f64) -> ResetTicket {
        self.status = status;
        self.generation += 1;
        ResetTicket {
            generation: self.generation,
            due_ms: now_ms + f64::from(STATUS_RESET_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SubmissionLifecycle {
        let mut lifecycle = SubmissionLifecycle::new();
        lifecycle.set_field(Field::Name, "A".to_string());
        lifecycle.set_field(Field::Email, "a@b.com".to_string());
        lifecycle.set_field(Field::Message, "hi".to_string());
        lifecycle
    }

    #[test]
    fn begin_requires_every_field() {
        let mut lifecycle = SubmissionLifecycle::new();
        lifecycle.set_field(Field::Name, "A".to_string());
        lifecycle.set_field(Field::Email, "a@b.com".to_string());
        lifecycle.set_field(Field::Message, "   ".to_string());

        assert!(matches!(lifecycle.begin(0.0), Err(SubmitRejected::Incomplete(_))));
        assert!(!lifecycle.is_in_flight());
    }

    #[test]
    fn blank_field_shows_an_error_that_clears() {
        let mut lifecycle = filled();
        lifecycle.set_field(Field::Message, " ".to_string());

        let ticket = match lifecycle.begin(0.0) {
            Err(SubmitRejected::Incomplete(ticket)) => ticket,
            other => panic!("expected an incomplete refusal, got {:?}", other),
        };
        assert_eq!(lifecycle.status(), &SubmissionStatus::Error(INCOMPLETE_MESSAGE.to_string()));
        assert_eq!(lifecycle.form().message, " ");

        assert!(!lifecycle.expire(ticket, 3999.0));
        assert!(lifecycle.expire(ticket, 4000.0));
        assert_eq!(lifecycle.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn remaining_time_counts_down_to_the_due_instant() {
        let mut lifecycle = filled();
        let (_, sending) = lifecycle.begin(1000.0).unwrap();
        assert_eq!(lifecycle.remaining_ms(sending, 1000.0), Some(STATUS_RESET_MS));
        assert_eq!(lifecycle.remaining_ms(sending, 4999.5), Some(1));
        assert_eq!(lifecycle.remaining_ms(sending, 6000.0), Some(0));

        let settled = lifecycle.settle(SubmitOutcome::Accepted, 2000.0);
        assert_eq!(lifecycle.remaining_ms(sending, 2000.0), None);
        assert_eq!(lifecycle.remaining_ms(settled, 5990.0), Some(10));
    }

    #[test]
    fn second_submit_is_refused_while_sending() {
        let mut lifecycle = filled();
        assert!(lifecycle.begin(0.0).is_ok());
        assert_eq!(lifecycle.begin(10.0), Err(SubmitRejected::InFlight));

        lifecycle.settle(SubmitOutcome::Rejected(500), 20.0);
        assert!(lifecycle.begin(30.0).is_ok());
    }

    #[test]
    fn rejected_and_transport_errors_differ_only_in_message() {
        let mut lifecycle = filled();
        lifecycle.begin(0.0).unwrap();
        lifecycle.settle(SubmitOutcome::Rejected(422), 1.0);
        assert_eq!(lifecycle.status(), &SubmissionStatus::Error(REJECTED_MESSAGE.to_string()));

        lifecycle.begin(2.0).unwrap();
        lifecycle.settle(SubmitOutcome::Transport("offline".to_string()), 3.0);
        assert_eq!(lifecycle.status(), &SubmissionStatus::Error(TRANSPORT_MESSAGE.to_string()));
        assert_eq!(lifecycle.form().name, "A");
    }

    #[test]
    fn status_resets_no_earlier_than_four_seconds() {
        let mut lifecycle = filled();
        lifecycle.begin(0.0).unwrap();
        let ticket = lifecycle.settle(SubmitOutcome::Accepted, 100.0);
        assert_eq!(lifecycle.remaining_ms(ticket, 100.0), Some(4000));

        assert!(!lifecycle.expire(ticket, 4099.0));
        assert_eq!(lifecycle.status().kind(), "success");
        assert!(lifecycle.expire(ticket, 4100.0));
        assert_eq!(lifecycle.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn newer_status_supersedes_pending_reset() {
        let mut lifecycle = filled();
        let (_, sending) = lifecycle.begin(0.0).unwrap();
        let settled = lifecycle.settle(SubmitOutcome::Transport("timeout".to_string()), 1000.0);

        // The Sending ticket is stale once the Error status has replaced it.
        assert!(!lifecycle.expire(sending, 10_000.0));
        assert_eq!(lifecycle.status().kind(), "error");

        let (_, resubmitted) = lifecycle.begin(2000.0).unwrap();
        assert!(!lifecycle.expire(settled, 10_000.0));
        assert!(lifecycle.expire(resubmitted, 6000.0));
    }

    #[test]
    fn status_message_is_hidden_when_idle() {
        assert_eq!(SubmissionStatus::Idle.message(), None);
        assert_eq!(
            SubmissionStatus::Sending(SENDING_MESSAGE.to_string()).message(),
            Some("Sending...")
        );
    }
}
