//! Type definitions for streaming responses

use actix_web::web;

/// Server-Sent Event
#[derive(Debug, Clone, Default)]
pub struct Event {
    /// Event type
    pub event: Option<String>,
    /// Event data
    pub data: String,
}

impl Event {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the event type
    pub fn event(mut self, event: &str) -> Self {
        self.event = Some(event.to_string());
        self
    }

    /// Set the event data
    pub fn data(mut self, data: &str) -> Self {
        self.data = data.to_string();
        self
    }

    /// Encode for the wire
    ///
    /// Multi-line data is split over several `data:` lines.
    pub fn to_bytes(&self) -> web::Bytes {
        let mut result = String::new();
        if let Some(event) = &self.event {
            result.push_str(&format!("event: {}\n", event));
        }
        for line in self.data.split('\n') {
            result.push_str(&format!("data: {}\n", line));
        }
        result.push('\n');
        web::Bytes::from(result)
    }
}
