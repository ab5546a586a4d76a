use std::cell::RefCell;

/// User-facing, blocking notification channel.
pub trait Alert {
    fn alert(&self, message: &str);
}

/// Keeps every alert message instead of showing it.
#[derive(Debug, Default)]
pub struct RecordedAlerts {
    messages: RefCell<Vec<String>>,
}

impl RecordedAlerts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.messages.borrow().last().cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }
}

impl Alert for RecordedAlerts {
    fn alert(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorded_alerts() {
        let alerts = RecordedAlerts::new();
        assert!(alerts.is_empty());

        alerts.alert("first");
        alerts.alert("second");

        assert_eq!(alerts.messages(), vec!["first", "second"]);
        assert_eq!(alerts.last().as_deref(), Some("second"));
    }
}
