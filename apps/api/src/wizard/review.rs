//! Review wizard: hub and rating → experience → graduation verification.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::Catalog;
use crate::wizard::WizardError;

pub const STEP_COUNT: u8 = 3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStep {
    #[default]
    HubAndRating,
    Experience,
    Verification,
}

impl ReviewStep {
    pub fn number(self) -> u8 {
        match self {
            ReviewStep::HubAndRating => 1,
            ReviewStep::Experience => 2,
            ReviewStep::Verification => 3,
        }
    }
}

/// Placement options offered by the form (not the catalog's review enum).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ReviewPlacement {
    #[default]
    Employed,
    Looking,
    #[serde(rename = "Self-employed")]
    SelfEmployed,
}

#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct ReviewDraft {
    pub hub_id: Option<String>,
    pub rating: Option<u8>,
    pub content: String,
    pub placement_status: ReviewPlacement,
    pub cohort_completion: String,
    pub proof_document: Option<String>,
}

/// A completed review as handed off on submit.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReviewSubmission {
    pub hub_id: String,
    pub rating: u8,
    pub content: String,
    pub placement_status: ReviewPlacement,
    pub cohort_completion: String,
    pub proof_document: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ReviewAction {
    SelectHub {
        hub_id: String,
    },
    Rate {
        rating: u8,
    },
    Describe {
        content: String,
        #[serde(default)]
        placement_status: ReviewPlacement,
        #[serde(default)]
        cohort_completion: String,
    },
    AttachProof {
        file_name: String,
    },
    Next,
    Back,
    Submit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReviewOutcome {
    Updated,
    Submitted(ReviewSubmission),
}

#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct ReviewWizard {
    step: ReviewStep,
    draft: ReviewDraft,
}

impl ReviewWizard {
    pub fn step(&self) -> ReviewStep {
        self.step
    }

    pub fn draft(&self) -> &ReviewDraft {
        &self.draft
    }

    /// Progress through the form, 0 – 100.
    pub fn progress_percent(&self) -> u8 {
        self.step.number() * 100 / STEP_COUNT
    }

    fn require_step(&self, expected: ReviewStep) -> Result<(), WizardError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::WrongStep {
                expected: expected.number(),
                actual: self.step.number(),
            })
        }
    }

    pub fn apply(
        &mut self,
        action: ReviewAction,
        catalog: &Catalog,
    ) -> Result<ReviewOutcome, WizardError> {
        match action {
            ReviewAction::SelectHub { hub_id } => {
                self.require_step(ReviewStep::HubAndRating)?;
                if catalog.hub(&hub_id).is_none() {
                    return Err(WizardError::UnknownHub(hub_id));
                }
                self.draft.hub_id = Some(hub_id);
            }
            ReviewAction::Rate { rating } => {
                self.require_step(ReviewStep::HubAndRating)?;
                if !(1..=5).contains(&rating) {
                    return Err(WizardError::InvalidRating(rating));
                }
                self.draft.rating = Some(rating);
            }
            ReviewAction::Describe {
                content,
                placement_status,
                cohort_completion,
            } => {
                self.require_step(ReviewStep::Experience)?;
                self.draft.content = content;
                self.draft.placement_status = placement_status;
                self.draft.cohort_completion = cohort_completion;
            }
            ReviewAction::AttachProof { file_name } => {
                self.require_step(ReviewStep::Verification)?;
                self.draft.proof_document = Some(file_name);
            }
            ReviewAction::Next => self.advance()?,
            ReviewAction::Back => {
                self.step = match self.step {
                    ReviewStep::HubAndRating => ReviewStep::HubAndRating,
                    ReviewStep::Experience => ReviewStep::HubAndRating,
                    ReviewStep::Verification => ReviewStep::Experience,
                };
            }
            ReviewAction::Submit => return self.submit().map(ReviewOutcome::Submitted),
        }
        Ok(ReviewOutcome::Updated)
    }

    fn advance(&mut self) -> Result<(), WizardError> {
        self.step = match self.step {
            ReviewStep::HubAndRating => {
                if self.draft.hub_id.is_none() {
                    return Err(WizardError::MissingHub);
                }
                if self.draft.rating.is_none() {
                    return Err(WizardError::MissingRating);
                }
                ReviewStep::Experience
            }
            ReviewStep::Experience => {
                if self.draft.content.trim().is_empty() {
                    return Err(WizardError::EmptyContent);
                }
                ReviewStep::Verification
            }
            ReviewStep::Verification => return Err(WizardError::AtLastStep),
        };
        Ok(())
    }

    fn submit(&self) -> Result<ReviewSubmission, WizardError> {
        self.require_step(ReviewStep::Verification)?;
        let hub_id = self.draft.hub_id.clone().ok_or(WizardError::MissingHub)?;
        let rating = self.draft.rating.ok_or(WizardError::MissingRating)?;

        info!(hub_id = %hub_id, rating, "review submitted");
        Ok(ReviewSubmission {
            hub_id,
            rating,
            content: self.draft.content.clone(),
            placement_status: self.draft.placement_status,
            cohort_completion: self.draft.cohort_completion.clone(),
            proof_document: self.draft.proof_document.clone(),
        })
    }
}
