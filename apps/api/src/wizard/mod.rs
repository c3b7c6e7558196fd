// Multi-step forms: trainee review submission and hub signup.
// Each wizard is an explicit state machine; a guard failure leaves the state untouched.

pub mod review;
pub mod signup;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum WizardError {
    #[error("Action not allowed on step {actual}, expected step {expected}")]
    WrongStep { expected: u8, actual: u8 },

    #[error("Already on the last step")]
    AtLastStep,

    #[error("Select the hub you attended")]
    MissingHub,

    #[error("Unknown hub: {0}")]
    UnknownHub(String),

    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    #[error("Give an overall rating before continuing")]
    MissingRating,

    #[error("Tell us about the teaching and curriculum")]
    EmptyContent,

    #[error("Hub name is required")]
    MissingName,

    #[error("Location is required")]
    MissingLocation,

    #[error("Unknown tech stack: {0}")]
    UnknownStack(String),

    #[error("Select at least one tech stack focus")]
    NoStackSelected,

    #[error("Choose a pricing strategy")]
    MissingPricing,
}
