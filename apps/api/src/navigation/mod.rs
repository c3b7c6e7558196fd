//! Navigation state machine: keeps the URL fragment and the current screen in sync.
//!
//! The fragment (the part of the address after `#`) is the serialized form of
//! the current [`View`]. `navigate_to` writes both; `on_fragment_change` reads
//! a fragment reported by the client and ignores anything it does not know.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// The closed set of screens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    #[serde(rename = "home")]
    Home,
    #[serde(rename = "hubs")]
    HubDirectory,
    #[serde(rename = "hub-profile")]
    HubProfile,
    #[serde(rename = "employer")]
    EmployerDashboard,
    #[serde(rename = "hub-dashboard")]
    HubDashboard,
    #[serde(rename = "submit-review")]
    SubmitReview,
    #[serde(rename = "insights")]
    Insights,
    #[serde(rename = "hub-signup")]
    HubSignup,
}

impl View {
    pub const ALL: [View; 8] = [
        View::Home,
        View::HubDirectory,
        View::HubProfile,
        View::EmployerDashboard,
        View::HubDashboard,
        View::SubmitReview,
        View::Insights,
        View::HubSignup,
    ];

    /// The fragment tag for this view.
    pub fn tag(self) -> &'static str {
        match self {
            View::Home => "home",
            View::HubDirectory => "hubs",
            View::HubProfile => "hub-profile",
            View::EmployerDashboard => "employer",
            View::HubDashboard => "hub-dashboard",
            View::SubmitReview => "submit-review",
            View::Insights => "insights",
            View::HubSignup => "hub-signup",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("Unknown view tag: {0}")]
pub struct UnknownView(pub String);

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.strip_prefix('#').unwrap_or(s);
        View::ALL
            .into_iter()
            .find(|v| v.tag() == tag)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

/// Per-session navigation state. One writer: the session that owns it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Navigator {
    current_view: View,
    selected_hub: Option<String>,
    fragment: String,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            current_view: View::Home,
            selected_hub: None,
            fragment: View::Home.tag().to_string(),
        }
    }
}

impl Navigator {
    pub fn current_view(&self) -> View {
        self.current_view
    }

    pub fn selected_hub(&self) -> Option<&str> {
        self.selected_hub.as_deref()
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Moves to `view`. The selected hub is only replaced when one is supplied,
    /// so it survives unrelated navigations.
    pub fn navigate_to(&mut self, view: View, hub_id: Option<String>) {
        debug!(from = %self.current_view, to = %view, "navigate");
        self.fragment = view.tag().to_string();
        self.current_view = view;
        if let Some(hub_id) = hub_id {
            self.selected_hub = Some(hub_id);
        }
    }

    /// Applies a fragment change from any source (history, manual edit, the echo
    /// of `navigate_to`). Unknown fragments are ignored. Returns whether the
    /// current view actually changed, so an echo never causes a re-render.
    pub fn on_fragment_change(&mut self, fragment: &str) -> bool {
        let Ok(view) = fragment.parse::<View>() else {
            debug!(fragment, "ignoring unknown fragment");
            return false;
        };
        self.fragment = view.tag().to_string();
        if view == self.current_view {
            return false;
        }
        self.current_view = view;
        true
    }
}
