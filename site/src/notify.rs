pub const DEFAULT_NOTIFICATION_MS: u32 = 6000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
    ticket: Ticket,
}

impl Notification {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }
}

// Notifier
//
// at most one notification is visible.  each show() hands out a fresh ticket,
// and the auto-dismiss timer armed for that ticket only fires if the ticket
// still names what is on screen -- a manual dismiss or a newer notification
// makes the old timer harmless
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notifier {
    current: Option<Notification>,
    issued: u64,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn show(&mut self, severity: Severity, message: impl Into<String>) -> Ticket {
        self.issued += 1;
        let ticket = Ticket(self.issued);

        self.current = Some(Notification {
            severity,
            message: message.into(),
            ticket,
        });

        ticket
    }

    pub fn dismiss(&mut self) -> bool {
        self.current.take().is_some()
    }

    // timer callback
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        match &self.current {
            Some(current) if current.ticket == ticket => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_then_expire() {
        let mut notifier = Notifier::new();
        assert!(notifier.current().is_none());

        let ticket = notifier.show(Severity::Success, "sent");
        let current = notifier.current().unwrap();
        assert_eq!(current.severity, Severity::Success);
        assert_eq!(current.message, "sent");
        assert_eq!(current.ticket(), ticket);

        assert!(notifier.expire(ticket));
        assert!(notifier.current().is_none());

        // a second firing is a no-op
        assert!(!notifier.expire(ticket));
    }

    #[test]
    fn manual_dismiss_defuses_the_timer() {
        let mut notifier = Notifier::new();

        let first = notifier.show(Severity::Success, "one");
        assert!(notifier.dismiss());
        assert!(!notifier.dismiss());

        let second = notifier.show(Severity::Success, "two");
        assert_ne!(first, second);

        // the timer for the dismissed notification must not hide the new one
        assert!(!notifier.expire(first));
        assert_eq!(notifier.current().map(|n| n.message.as_str()), Some("two"));

        assert!(notifier.expire(second));
        assert!(notifier.current().is_none());
    }

    #[test]
    fn last_write_wins() {
        let mut notifier = Notifier::new();

        let first = notifier.show(Severity::Success, "one");
        let second = notifier.show(Severity::Error, "two");

        let current = notifier.current().unwrap();
        assert_eq!(current.severity, Severity::Error);
        assert_eq!(current.ticket(), second);

        assert!(!notifier.expire(first));
        assert!(notifier.current().is_some());
    }
}
