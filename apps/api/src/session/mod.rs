//! Browser sessions: one owned state object per client.
//!
//! A session is the single writer of its navigation state and of every
//! screen's local state. Leaving a screen discards that screen's local state,
//! including any insight request still in flight for it.

pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::catalog::models::Review;
use crate::catalog::Catalog;
use crate::dashboard::HubDashboard;
use crate::insights::slot::{InsightSlot, InsightTicket};
use crate::navigation::{Navigator, View};
use crate::wizard::review::ReviewWizard;
use crate::wizard::signup::SignupWizard;

pub const REGIONS: [&str; 4] = [
    "Lagos, Nigeria",
    "Nairobi, Kenya",
    "Cape Town, SA",
    "Accra, Ghana",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightTarget {
    HubProfile,
    Region,
}

#[derive(Debug, Clone)]
pub enum InsightRequest {
    HubSummary {
        hub_name: String,
        reviews: Vec<Review>,
    },
    Region(String),
}

/// A fetch the caller must run outside the session lock, then hand back with
/// [`Session::complete_insight`].
#[derive(Debug, Clone)]
pub struct InsightJob {
    pub target: InsightTarget,
    pub ticket: InsightTicket,
    pub request: InsightRequest,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub navigator: Navigator,
    pub search_query: String,
    pub employer_search: String,
    pub active_region: String,
    pub review: ReviewWizard,
    pub signup: SignupWizard,
    pub dashboard: HubDashboard,
    pub profile_insight: InsightSlot,
    pub region_insight: InsightSlot,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            navigator: Navigator::default(),
            search_query: String::new(),
            employer_search: String::new(),
            active_region: REGIONS[0].to_string(),
            review: ReviewWizard::default(),
            signup: SignupWizard::default(),
            dashboard: HubDashboard::default(),
            profile_insight: InsightSlot::default(),
            region_insight: InsightSlot::default(),
        }
    }
}

impl Session {
    pub fn navigate(&mut self, view: View, hub_id: Option<String>) {
        let previous = self.navigator.current_view();
        self.navigator.navigate_to(view, hub_id);
        if previous != view {
            self.leave(previous);
        }
    }

    /// Returns whether the view changed.
    pub fn on_fragment_change(&mut self, fragment: &str) -> bool {
        let previous = self.navigator.current_view();
        let changed = self.navigator.on_fragment_change(fragment);
        if changed {
            self.leave(previous);
        }
        changed
    }

    fn leave(&mut self, view: View) {
        debug!(view = %view, "discarding screen-local state");
        match view {
            View::HubProfile => self.profile_insight.invalidate(),
            View::Insights => self.region_insight.invalidate(),
            View::SubmitReview => self.review = ReviewWizard::default(),
            View::HubSignup => self.signup = SignupWizard::default(),
            View::HubDashboard => self.dashboard = HubDashboard::default(),
            View::EmployerDashboard => self.employer_search.clear(),
            View::Home | View::HubDirectory => {}
        }
    }

    /// Starts the insight fetch the current screen needs, if its key has no
    /// request yet. The slot is marked loading before this returns.
    pub fn plan_insight(&mut self, catalog: &Catalog) -> Option<InsightJob> {
        match self.navigator.current_view() {
            View::HubProfile => {
                let hub = catalog.hub(self.navigator.selected_hub()?)?;
                if !self.profile_insight.needs_fetch(&hub.id) {
                    return None;
                }
                let ticket = self.profile_insight.begin(&hub.id);
                Some(InsightJob {
                    target: InsightTarget::HubProfile,
                    ticket,
                    request: InsightRequest::HubSummary {
                        hub_name: hub.name.clone(),
                        reviews: catalog.reviews_for(&hub.id).into_iter().cloned().collect(),
                    },
                })
            }
            View::Insights => {
                if !self.region_insight.needs_fetch(&self.active_region) {
                    return None;
                }
                let ticket = self.region_insight.begin(&self.active_region);
                Some(InsightJob {
                    target: InsightTarget::Region,
                    ticket,
                    request: InsightRequest::Region(self.active_region.clone()),
                })
            }
            _ => None,
        }
    }

    /// Stores a finished insight unless the screen moved on. Returns whether it was kept.
    pub fn complete_insight(
        &mut self,
        target: InsightTarget,
        ticket: &InsightTicket,
        text: String,
    ) -> bool {
        let slot = match target {
            InsightTarget::HubProfile => &mut self.profile_insight,
            InsightTarget::Region => &mut self.region_insight,
        };
        let kept = slot.complete(ticket, text);
        if !kept {
            debug!(key = ticket.key(), "discarding superseded insight");
        }
        kept
    }

    pub fn select_region(&mut self, region: &str) -> bool {
        if !REGIONS.contains(&region) {
            return false;
        }
        self.active_region = region.to_string();
        true
    }
}

const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

struct StoredSession {
    session: Session,
    last_seen: Instant,
}

/// All live sessions. Cloning shares the same map.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, StoredSession>>>,
}

impl SessionStore {
    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        let stored = StoredSession {
            session: Session::default(),
            last_seen: Instant::now(),
        };
        self.sessions.write().await.insert(id, stored);
        info!(session_id = %id, "session created");
        id
    }

    /// Runs `f` with exclusive access to the session and marks it as seen.
    /// `None` if it does not exist.
    pub async fn with_session<R>(&self, id: Uuid, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        let mut sessions = self.sessions.write().await;
        sessions.get_mut(&id).map(|stored| {
            stored.last_seen = Instant::now();
            f(&mut stored.session)
        })
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            info!(session_id = %id, "session closed");
        }
        removed
    }

    /// Drops every session untouched for at least `max_idle`. Returns how many went.
    pub async fn expire_idle(&self, max_idle: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, stored| stored.last_seen.elapsed() < max_idle);
        let expired = before - sessions.len();
        if expired > 0 {
            info!(expired, remaining = sessions.len(), "expired idle sessions");
        }
        expired
    }

    /// Background sweep calling [`SessionStore::expire_idle`] once a minute.
    pub fn spawn_expiry(&self, max_idle: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(SWEEP_INTERVAL);
            loop {
                interval.tick().await;
                store.expire_idle(max_idle).await;
            }
        })
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
