use apk_graph::prelude::*;
use std::sync::{Arc, Mutex};

/// One call recorded by [`MockProgressReporter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportedEvent {
    Message(String),
    Progress {
        current: usize,
        total: usize,
        message: Option<String>,
    },
    Error(String),
    Completion(String),
}

/// Mock ProgressReporter recording every call in order
///
/// Clones share the same event log, so a clone handed to a use case can
/// be inspected through the original.
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    events: Arc<Mutex<Vec<ReportedEvent>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ReportedEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ReportedEvent::Error(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn completion(&self) -> Option<String> {
        self.events().into_iter().rev().find_map(|event| match event {
            ReportedEvent::Completion(message) => Some(message),
            _ => None,
        })
    }

    fn record(&self, event: ReportedEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.record(ReportedEvent::Message(message.to_string()));
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.record(ReportedEvent::Progress {
            current,
            total,
            message: message.map(str::to_string),
        });
    }

    fn report_error(&self, message: &str) {
        self.record(ReportedEvent::Error(message.to_string()));
    }

    fn report_completion(&self, message: &str) {
        self.record(ReportedEvent::Completion(message.to_string()));
    }
}
