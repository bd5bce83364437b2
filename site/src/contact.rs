use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use crate::notify::{Notifier, Severity, Ticket};

pub const SENT: &str = "Message sent successfully! I'll get back to you soon.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    // form control name, matching the serialized submission keys
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// the captured values of one submission
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug)]
pub enum SubmitError {
    // required fields left empty; the form keeps its contents
    Missing(Vec<Field>),
    // the sink rejected the submission; the form keeps its contents
    Delivery(anyhow::Error),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(fields) => {
                let names: Vec<&str> = fields.iter().map(|f| f.label()).collect();
                write!(f, "required fields missing: {}", names.join(", "))
            }
            Self::Delivery(err) => write!(f, "failed to send message: {err}"),
        }
    }
}

impl std::error::Error for SubmitError {}

// what a submit did to the notifier
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    // delivered; the form is empty and a success notification is up
    Sent(Ticket),
    // not delivered; the form is kept and an error notification is up
    Failed(Ticket),
    // nothing was sent and nothing is shown
    Missing(Vec<Field>),
}

impl Outcome {
    // the notification to arm an auto-dismiss for, if one was shown
    pub fn ticket(&self) -> Option<Ticket> {
        match self {
            Self::Sent(ticket) | Self::Failed(ticket) => Some(*ticket),
            Self::Missing(_) => None,
        }
    }
}

// where a submission ends up
//
// the futures are not Send since the browser implementation holds js values
#[async_trait(?Send)]
pub trait ContactSink {
    async fn deliver(&self, submission: &Submission) -> anyhow::Result<()>;
}

// the default sink: write the submission to the local log and nothing else
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

#[async_trait(?Send)]
impl ContactSink for LogSink {
    #[instrument(skip_all)]
    async fn deliver(&self, submission: &Submission) -> anyhow::Result<()> {
        let payload = serde_json::to_string(submission)?;
        info!(%payload, "contact form submitted");
        Ok(())
    }
}

// ContactForm
//
// four required text fields.  "required" means non-empty, the same rule the
// browser applies to the inputs; there is no shape check on the email
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    values: Submission,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.values.name,
            Field::Email => &self.values.email,
            Field::Subject => &self.values.subject,
            Field::Message => &self.values.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.values.name,
            Field::Email => &mut self.values.email,
            Field::Subject => &mut self.values.subject,
            Field::Message => &mut self.values.message,
        };
        *slot = value.into();
    }

    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    pub fn clear(&mut self) {
        self.values = Submission::default();
    }

    pub fn prepare(&self) -> Result<Submission, SubmitError> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(SubmitError::Missing(missing));
        }

        Ok(self.values.clone())
    }

    // validate, hand the values to the sink, and clear only once the sink has
    // accepted them
    pub async fn submit<S: ContactSink + ?Sized>(
        &mut self,
        sink: &S,
    ) -> Result<Submission, SubmitError> {
        let submission = self.prepare()?;

        sink.deliver(&submission)
            .await
            .map_err(SubmitError::Delivery)?;

        self.clear();
        Ok(submission)
    }

    // submit and report the result to the user
    //
    // missing fields are shown inline by the caller, so they never reach the
    // notifier
    pub async fn submit_into<S: ContactSink + ?Sized>(
        &mut self,
        sink: &S,
        notifier: &mut Notifier,
    ) -> Outcome {
        match self.submit(sink).await {
            Ok(_) => Outcome::Sent(notifier.show(Severity::Success, SENT)),
            Err(SubmitError::Missing(fields)) => Outcome::Missing(fields),
            Err(err) => {
                error!("contact form not delivered: {err}");
                Outcome::Failed(notifier.show(Severity::Error, err.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use anyhow::bail;
    use futures::executor::block_on;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        seen: RefCell<Vec<Submission>>,
    }

    #[async_trait(?Send)]
    impl ContactSink for Recorder {
        async fn deliver(&self, submission: &Submission) -> anyhow::Result<()> {
            self.seen.borrow_mut().push(submission.clone());
            Ok(())
        }
    }

    struct Offline;

    #[async_trait(?Send)]
    impl ContactSink for Offline {
        async fn deliver(&self, _submission: &Submission) -> anyhow::Result<()> {
            bail!("network unreachable")
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Ada");
        form.set(Field::Email, "ada@example.com");
        form.set(Field::Subject, "Hello");
        form.set(Field::Message, "Let's talk");
        form
    }

    #[test]
    fn fields_are_independent() {
        let mut form = ContactForm::new();
        assert!(form.is_empty());

        form.set(Field::Subject, "Hi");
        assert_eq!(form.get(Field::Subject), "Hi");
        assert_eq!(form.get(Field::Name), "");
        assert_eq!(form.missing(), vec![Field::Name, Field::Email, Field::Message]);
    }

    #[test]
    fn submit_clears_after_delivery() {
        let mut form = filled();
        let sink = Recorder::default();

        let sent = block_on(form.submit(&sink)).unwrap();

        assert_eq!(sent.name, "Ada");
        assert_eq!(sent.message, "Let's talk");
        assert_eq!(sink.seen.borrow().len(), 1);
        assert_eq!(sink.seen.borrow()[0], sent);

        for field in Field::ALL {
            assert_eq!(form.get(field), "");
        }
    }

    #[test]
    fn missing_fields_block_delivery() {
        let mut form = filled();
        form.set(Field::Email, "");
        let before = form.clone();
        let sink = Recorder::default();

        match block_on(form.submit(&sink)) {
            Err(SubmitError::Missing(fields)) => assert_eq!(fields, vec![Field::Email]),
            other => panic!("unexpected result: {other:?}"),
        }

        assert!(sink.seen.borrow().is_empty());
        assert_eq!(form, before);
    }

    #[test]
    fn whitespace_counts_as_filled() {
        let mut form = filled();
        form.set(Field::Subject, " ");
        assert!(form.prepare().is_ok());
    }

    #[test]
    fn delivery_failure_keeps_the_form() {
        let mut form = filled();
        let before = form.clone();

        let err = block_on(form.submit(&Offline)).unwrap_err();
        assert!(matches!(err, SubmitError::Delivery(_)));
        assert!(err.to_string().contains("network unreachable"));
        assert_eq!(form, before);
    }

    #[test]
    fn log_sink_accepts_everything() {
        let mut form = filled();
        assert!(block_on(form.submit(&LogSink)).is_ok());
        assert!(form.is_empty());
    }

    #[test]
    fn submission_keys_match_field_keys() {
        let value = serde_json::to_value(filled().prepare().unwrap()).unwrap();
        for field in Field::ALL {
            assert!(value.get(field.key()).is_some(), "{} not serialized", field.key());
        }
    }

    #[test]
    fn missing_error_names_the_fields() {
        let err = ContactForm::new().prepare().unwrap_err();
        assert_eq!(
            err.to_string(),
            "required fields missing: Name, Email, Subject, Message"
        );
    }

    #[test]
    fn sent_form_is_cleared_with_one_success_notification() {
        let mut form = filled();
        let mut notifier = Notifier::new();
        let sink = Recorder::default();

        let outcome = block_on(form.submit_into(&sink, &mut notifier));

        let ticket = match outcome {
            Outcome::Sent(ticket) => ticket,
            other => panic!("unexpected outcome: {other:?}"),
        };
        assert!(form.is_empty());
        assert_eq!(sink.seen.borrow().len(), 1);

        let current = notifier.current().unwrap();
        assert_eq!(current.severity, Severity::Success);
        assert_eq!(current.message, SENT);
        assert_eq!(current.ticket(), ticket);
    }

    #[test]
    fn missing_fields_show_nothing() {
        let mut form = filled();
        form.set(Field::Name, "");
        let before = form.clone();
        let mut notifier = Notifier::new();

        let outcome = block_on(form.submit_into(&LogSink, &mut notifier));

        assert_eq!(outcome, Outcome::Missing(vec![Field::Name]));
        assert_eq!(outcome.ticket(), None);
        assert!(notifier.current().is_none());
        assert_eq!(form, before);
    }

    #[test]
    fn failed_delivery_shows_an_error_and_keeps_the_form() {
        let mut form = filled();
        let before = form.clone();
        let mut notifier = Notifier::new();

        let outcome = block_on(form.submit_into(&Offline, &mut notifier));

        assert!(matches!(outcome, Outcome::Failed(_)));
        assert_eq!(form, before);

        let current = notifier.current().unwrap();
        assert_eq!(current.severity, Severity::Error);
        assert!(current.message.contains("network unreachable"));
        assert_eq!(Some(current.ticket()), outcome.ticket());
    }

    #[test]
    fn back_to_back_submits_leave_one_notification() {
        let mut notifier = Notifier::new();

        let mut form = filled();
        let first = block_on(form.submit_into(&LogSink, &mut notifier));

        let mut form = filled();
        let second = block_on(form.submit_into(&LogSink, &mut notifier));

        let (first, second) = (first.ticket().unwrap(), second.ticket().unwrap());
        assert_ne!(first, second);

        // the first timer firing must not hide the second notification
        assert!(!notifier.expire(first));
        assert_eq!(notifier.current().map(|n| n.ticket()), Some(second));

        assert!(notifier.expire(second));
        assert!(notifier.current().is_none());
    }
}
