//! Hub signup wizard: identity → curriculum → verification.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::wizard::WizardError;

pub const STEP_LABELS: [&str; 3] = ["Identity", "Curriculum", "Verification"];

pub const TECH_STACK_CHOICES: [&str; 8] = [
    "React",
    "Node.js",
    "Python",
    "Mobile",
    "UI/UX",
    "Cloud",
    "Data Science",
    "Blockchain",
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SignupStep {
    #[default]
    Identity,
    Curriculum,
    Verification,
}

impl SignupStep {
    pub fn number(self) -> u8 {
        match self {
            SignupStep::Identity => 1,
            SignupStep::Curriculum => 2,
            SignupStep::Verification => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PricingTier {
    #[serde(rename = "Free / Sponsored")]
    Free,
    #[serde(rename = "Affordable ($)")]
    Affordable,
    #[serde(rename = "Mid-range ($$)")]
    MidRange,
    #[serde(rename = "Premium ($$$)")]
    Premium,
}

impl PricingTier {
    pub const ALL: [PricingTier; 4] = [
        PricingTier::Free,
        PricingTier::Affordable,
        PricingTier::MidRange,
        PricingTier::Premium,
    ];
}

#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct HubApplication {
    pub name: String,
    pub location: String,
    pub website: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub pricing: Option<PricingTier>,
    pub registration_document: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SignupAction {
    Identify {
        name: String,
        location: String,
        #[serde(default)]
        website: String,
        #[serde(default)]
        description: String,
    },
    ToggleStack {
        stack: String,
    },
    SetPricing {
        tier: PricingTier,
    },
    AttachDocument {
        file_name: String,
    },
    Next,
    Back,
    Complete,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SignupOutcome {
    Updated,
    Completed(HubApplication),
}

#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct SignupWizard {
    step: SignupStep,
    application: HubApplication,
}

impl SignupWizard {
    pub fn step(&self) -> SignupStep {
        self.step
    }

    pub fn application(&self) -> &HubApplication {
        &self.application
    }

    fn require_step(&self, expected: SignupStep) -> Result<(), WizardError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::WrongStep {
                expected: expected.number(),
                actual: self.step.number(),
            })
        }
    }

    pub fn apply(&mut self, action: SignupAction) -> Result<SignupOutcome, WizardError> {
        match action {
            SignupAction::Identify {
                name,
                location,
                website,
                description,
            } => {
                self.require_step(SignupStep::Identity)?;
                self.application.name = name;
                self.application.location = location;
                self.application.website = website;
                self.application.description = description;
            }
            SignupAction::ToggleStack { stack } => {
                self.require_step(SignupStep::Curriculum)?;
                let Some(known) = TECH_STACK_CHOICES.iter().find(|c| **c == stack) else {
                    return Err(WizardError::UnknownStack(stack));
                };
                let selected = &mut self.application.tech_stack;
                if let Some(pos) = selected.iter().position(|s| s == known) {
                    selected.remove(pos);
                } else {
                    selected.push(known.to_string());
                }
            }
            SignupAction::SetPricing { tier } => {
                self.require_step(SignupStep::Curriculum)?;
                self.application.pricing = Some(tier);
            }
            SignupAction::AttachDocument { file_name } => {
                self.require_step(SignupStep::Verification)?;
                self.application.registration_document = Some(file_name);
            }
            SignupAction::Next => self.advance()?,
            SignupAction::Back => {
                self.step = match self.step {
                    SignupStep::Identity => SignupStep::Identity,
                    SignupStep::Curriculum => SignupStep::Identity,
                    SignupStep::Verification => SignupStep::Curriculum,
                };
            }
            SignupAction::Complete => {
                self.require_step(SignupStep::Verification)?;
                info!(hub = %self.application.name, "hub signup completed");
                return Ok(SignupOutcome::Completed(self.application.clone()));
            }
        }
        Ok(SignupOutcome::Updated)
    }

    fn advance(&mut self) -> Result<(), WizardError> {
        self.step = match self.step {
            SignupStep::Identity => {
                if self.application.name.trim().is_empty() {
                    return Err(WizardError::MissingName);
                }
                if self.application.location.trim().is_empty() {
                    return Err(WizardError::MissingLocation);
                }
                SignupStep::Curriculum
            }
            SignupStep::Curriculum => {
                if self.application.tech_stack.is_empty() {
                    return Err(WizardError::NoStackSelected);
                }
                if self.application.pricing.is_none() {
                    return Err(WizardError::MissingPricing);
                }
                SignupStep::Verification
            }
            SignupStep::Verification => return Err(WizardError::AtLastStep),
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identify(name: &str, location: &str) -> SignupAction {
        SignupAction::Identify {
            name: name.to_string(),
            location: location.to_string(),
            website: "https://accra.dev".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_identity_requires_name_and_location() {
        let mut wizard = SignupWizard::default();
        assert_eq!(wizard.apply(SignupAction::Next), Err(WizardError::MissingName));

        wizard.apply(identify("Accra Dev Hub", "  ")).unwrap();
        assert_eq!(
            wizard.apply(SignupAction::Next),
            Err(WizardError::MissingLocation)
        );
        assert_eq!(wizard.step(), SignupStep::Identity);
    }

    #[test]
    fn test_back_on_identity_step_is_noop() {
        let mut wizard = SignupWizard::default();
        wizard.apply(identify("Accra Dev Hub", "Accra, Ghana")).unwrap();
        let before = wizard.clone();

        assert_eq!(wizard.apply(SignupAction::Back), Ok(SignupOutcome::Updated));
        assert_eq!(wizard, before);

        wizard.apply(SignupAction::Next).unwrap();
        wizard.apply(SignupAction::Back).unwrap();
        assert_eq!(wizard.step(), SignupStep::Identity);
    }

    #[test]
    fn test_toggle_stack_adds_and_removes() {
        let mut wizard = SignupWizard::default();
        wizard.apply(identify("Accra Dev Hub", "Accra, Ghana")).unwrap();
        wizard.apply(SignupAction::Next).unwrap();

        let toggle = || SignupAction::ToggleStack {
            stack: "Cloud".to_string(),
        };
        wizard.apply(toggle()).unwrap();
        assert_eq!(wizard.application().tech_stack, vec!["Cloud".to_string()]);
        wizard.apply(toggle()).unwrap();
        assert!(wizard.application().tech_stack.is_empty());

        assert_eq!(
            wizard.apply(SignupAction::ToggleStack {
                stack: "COBOL".to_string()
            }),
            Err(WizardError::UnknownStack("COBOL".to_string()))
        );
    }

    #[test]
    fn test_curriculum_requires_stack_and_pricing() {
        let mut wizard = SignupWizard::default();
        wizard.apply(identify("Accra Dev Hub", "Accra, Ghana")).unwrap();
        wizard.apply(SignupAction::Next).unwrap();

        assert_eq!(
            wizard.apply(SignupAction::Next),
            Err(WizardError::NoStackSelected)
        );
        wizard
            .apply(SignupAction::ToggleStack {
                stack: "React".to_string(),
            })
            .unwrap();
        assert_eq!(
            wizard.apply(SignupAction::Next),
            Err(WizardError::MissingPricing)
        );
        wizard
            .apply(SignupAction::SetPricing {
                tier: PricingTier::Affordable,
            })
            .unwrap();
        wizard.apply(SignupAction::Next).unwrap();
        assert_eq!(wizard.step(), SignupStep::Verification);
    }

    #[test]
    fn test_complete_only_from_verification() {
        let mut wizard = SignupWizard::default();
        assert!(matches!(
            wizard.apply(SignupAction::Complete),
            Err(WizardError::WrongStep { expected: 3, actual: 1 })
        ));

        wizard.apply(identify("Accra Dev Hub", "Accra, Ghana")).unwrap();
        wizard.apply(SignupAction::Next).unwrap();
        wizard
            .apply(SignupAction::ToggleStack {
                stack: "Python".to_string(),
            })
            .unwrap();
        wizard
            .apply(SignupAction::SetPricing {
                tier: PricingTier::Premium,
            })
            .unwrap();
        wizard.apply(SignupAction::Next).unwrap();
        wizard
            .apply(SignupAction::AttachDocument {
                file_name: "cac-certificate.pdf".to_string(),
            })
            .unwrap();
        assert_eq!(wizard.apply(SignupAction::Next), Err(WizardError::AtLastStep));

        let SignupOutcome::Completed(application) = wizard.apply(SignupAction::Complete).unwrap()
        else {
            panic!("expected completion");
        };
        assert_eq!(application.name, "Accra Dev Hub");
        assert_eq!(application.pricing, Some(PricingTier::Premium));
        assert_eq!(
            application.registration_document.as_deref(),
            Some("cac-certificate.pdf")
        );
    }

    #[test]
    fn test_pricing_tier_uses_display_labels() {
        let tier: PricingTier = serde_json::from_str("\"Mid-range ($$)\"").unwrap();
        assert_eq!(tier, PricingTier::MidRange);
    }
}
