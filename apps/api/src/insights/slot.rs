use serde::Serialize;

/// What a screen shows in its insight panel.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum InsightState {
    Idle,
    Loading,
    Ready(String),
}

/// Proof of which request a response belongs to. Stale tickets are rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct InsightTicket {
    key: String,
    generation: u64,
}

impl InsightTicket {
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Holds the insight for one screen instance, keyed by the screen's input
/// (hub id, region). Only the newest request may write its result.
#[derive(Debug, Clone)]
pub struct InsightSlot {
    key: Option<String>,
    generation: u64,
    state: InsightState,
}

impl Default for InsightSlot {
    fn default() -> Self {
        Self {
            key: None,
            generation: 0,
            state: InsightState::Idle,
        }
    }
}

impl InsightSlot {
    /// True when nothing has been requested for `key` yet.
    pub fn needs_fetch(&self, key: &str) -> bool {
        self.key.as_deref() != Some(key)
    }

    /// Starts a request for `key`, superseding any request in flight.
    pub fn begin(&mut self, key: &str) -> InsightTicket {
        self.generation += 1;
        self.key = Some(key.to_string());
        self.state = InsightState::Loading;
        InsightTicket {
            key: key.to_string(),
            generation: self.generation,
        }
    }

    /// Stores `text` if `ticket` is still the current request. Returns whether it was kept.
    pub fn complete(&mut self, ticket: &InsightTicket, text: String) -> bool {
        if ticket.generation != self.generation || self.key.as_deref() != Some(ticket.key()) {
            return false;
        }
        self.state = InsightState::Ready(text);
        true
    }

    /// Drops the current request; any response still in flight becomes a no-op.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.key = None;
        self.state = InsightState::Idle;
    }

    pub fn state_for(&self, key: &str) -> InsightState {
        if self.key.as_deref() == Some(key) {
            self.state.clone()
        } else {
            InsightState::Idle
        }
    }
}
