// Hub management dashboard: outcome analytics and the trainee roster editor.
// The roster lives in the owning session only and is never persisted.

pub mod analytics;
pub mod trainees;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::dashboard::trainees::{seed_roster, Trainee, TraineeStatus};

#[derive(Debug, Error, PartialEq)]
pub enum DashboardError {
    #[error("Trainee {0} not found")]
    UnknownTrainee(String),

    #[error("Onboarding form is not open")]
    OnboardingClosed,

    #[error("Trainee {0} is required")]
    MissingField(&'static str),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DashboardTab {
    #[default]
    Analytics,
    Trainees,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum DashboardAction {
    SetTab {
        tab: DashboardTab,
    },
    Search {
        query: String,
    },
    UpdateStatus {
        trainee_id: String,
        status: TraineeStatus,
    },
    OpenOnboarding,
    CancelOnboarding,
    ConfirmOnboarding {
        name: String,
        email: String,
        program: String,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct HubDashboard {
    active_tab: DashboardTab,
    search: String,
    onboarding_open: bool,
    roster: Vec<Trainee>,
    next_trainee: usize,
}

impl Default for HubDashboard {
    fn default() -> Self {
        let roster = seed_roster();
        let next_trainee = roster.len() + 1;
        Self {
            active_tab: DashboardTab::default(),
            search: String::new(),
            onboarding_open: false,
            roster,
            next_trainee,
        }
    }
}

impl HubDashboard {
    pub fn active_tab(&self) -> DashboardTab {
        self.active_tab
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn onboarding_open(&self) -> bool {
        self.onboarding_open
    }

    pub fn roster(&self) -> &[Trainee] {
        &self.roster
    }

    pub fn visible_trainees(&self) -> Vec<&Trainee> {
        self.roster.iter().filter(|t| t.matches(&self.search)).collect()
    }

    pub fn apply(&mut self, action: DashboardAction) -> Result<(), DashboardError> {
        match action {
            DashboardAction::SetTab { tab } => self.active_tab = tab,
            DashboardAction::Search { query } => self.search = query,
            DashboardAction::UpdateStatus { trainee_id, status } => {
                self.update_status(&trainee_id, status)?
            }
            DashboardAction::OpenOnboarding => self.onboarding_open = true,
            DashboardAction::CancelOnboarding => self.onboarding_open = false,
            DashboardAction::ConfirmOnboarding {
                name,
                email,
                program,
            } => self.confirm_onboarding(name, email, program)?,
        }
        Ok(())
    }

    fn update_status(&mut self, id: &str, status: TraineeStatus) -> Result<(), DashboardError> {
        let trainee = self
            .roster
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| DashboardError::UnknownTrainee(id.to_string()))?;
        trainee.status = status;
        Ok(())
    }

    fn confirm_onboarding(
        &mut self,
        name: String,
        email: String,
        program: String,
    ) -> Result<(), DashboardError> {
        if !self.onboarding_open {
            return Err(DashboardError::OnboardingClosed);
        }
        if name.trim().is_empty() {
            return Err(DashboardError::MissingField("name"));
        }
        if email.trim().is_empty() {
            return Err(DashboardError::MissingField("email"));
        }

        let id = format!("t{}", self.next_trainee);
        self.next_trainee += 1;
        info!(trainee_id = %id, program = %program, "trainee onboarded");
        self.roster.push(Trainee {
            id,
            name,
            email,
            program,
            status: TraineeStatus::InTraining,
            progress: 0,
        });
        self.onboarding_open = false;
        Ok(())
    }
}
