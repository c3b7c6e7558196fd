use std::collections::HashSet;

use thiserror::Error;

use crate::catalog::Catalog;

const MAX_RATING: f64 = 5.0;
const MAX_PERCENTAGE: f64 = 100.0;

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("{entity} {id}: {field} {value} is outside 0–5")]
    RatingOutOfRange {
        entity: &'static str,
        id: String,
        field: &'static str,
        value: f64,
    },

    #[error("{entity} {id}: {field} {value} is not a valid percentage")]
    PercentageOutOfRange {
        entity: &'static str,
        id: String,
        field: &'static str,
        value: f64,
    },

    #[error("{entity} {id} references unknown hub {hub_id}")]
    UnknownHubReference {
        entity: &'static str,
        id: String,
        hub_id: String,
    },

    #[error("Duplicate hub id {0}")]
    DuplicateHub(String),

    #[error("Program {0} is owned by more than one hub")]
    DuplicateProgram(String),
}

fn check_rating(
    entity: &'static str,
    id: &str,
    field: &'static str,
    value: f64,
) -> Result<(), CatalogError> {
    if (0.0..=MAX_RATING).contains(&value) {
        Ok(())
    } else {
        Err(CatalogError::RatingOutOfRange {
            entity,
            id: id.to_string(),
            field,
            value,
        })
    }
}

fn check_percentage(
    entity: &'static str,
    id: &str,
    field: &'static str,
    value: f64,
    bounded: bool,
) -> Result<(), CatalogError> {
    let in_range = value >= 0.0 && (!bounded || value <= MAX_PERCENTAGE);
    if in_range && value.is_finite() {
        Ok(())
    } else {
        Err(CatalogError::PercentageOutOfRange {
            entity,
            id: id.to_string(),
            field,
            value,
        })
    }
}

/// Checks the data-model invariants over the whole catalog, stopping at the first violation.
pub fn validate_catalog(catalog: &Catalog) -> Result<(), CatalogError> {
    let mut hub_ids = HashSet::new();
    let mut program_ids = HashSet::new();

    for hub in catalog.hubs() {
        if !hub_ids.insert(hub.id.as_str()) {
            return Err(CatalogError::DuplicateHub(hub.id.clone()));
        }
        check_rating("hub", &hub.id, "rating", hub.rating)?;
        check_percentage("hub", &hub.id, "placement_rate", hub.placement_rate, true)?;
        check_percentage("hub", &hub.id, "completion_rate", hub.completion_rate, true)?;
        // Salary uplift is a relative increase; 150% is a legitimate value.
        check_percentage(
            "hub",
            &hub.id,
            "avg_salary_increase",
            hub.avg_salary_increase,
            false,
        )?;

        for program in &hub.programs {
            if !program_ids.insert(program.id.as_str()) {
                return Err(CatalogError::DuplicateProgram(program.id.clone()));
            }
        }
    }

    for review in catalog.reviews() {
        if !hub_ids.contains(review.hub_id.as_str()) {
            return Err(CatalogError::UnknownHubReference {
                entity: "review",
                id: review.id.clone(),
                hub_id: review.hub_id.clone(),
            });
        }
        check_rating("review", &review.id, "rating", review.rating)?;
        check_rating("review", &review.id, "teaching_rating", review.teaching_rating)?;
        check_rating(
            "review",
            &review.id,
            "instructor_rating",
            review.instructor_rating,
        )?;
        check_rating("review", &review.id, "project_quality", review.project_quality)?;
    }

    for candidate in catalog.candidates() {
        if !hub_ids.contains(candidate.hub_id.as_str()) {
            return Err(CatalogError::UnknownHubReference {
                entity: "candidate",
                id: candidate.id.clone(),
                hub_id: candidate.hub_id.clone(),
            });
        }
        check_percentage(
            "candidate",
            &candidate.id,
            "assessment_score",
            f64::from(candidate.assessment_score),
            true,
        )?;
    }

    Ok(())
}
