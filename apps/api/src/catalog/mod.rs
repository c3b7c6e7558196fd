// Marketplace catalog: hubs, their programs, reviews and hireable candidates.
// Immutable after startup; every session reads the same shared instance.

pub mod handlers;
pub mod models;
pub mod search;
pub mod seed;
pub mod validation;

use crate::catalog::models::{Candidate, Review, TechHub};
use crate::catalog::seed::{seed_candidates, seed_hubs, seed_reviews};
use crate::catalog::validation::{validate_catalog, CatalogError};

#[derive(Debug, Clone)]
pub struct Catalog {
    hubs: Vec<TechHub>,
    reviews: Vec<Review>,
    candidates: Vec<Candidate>,
}

impl Catalog {
    pub fn new(hubs: Vec<TechHub>, reviews: Vec<Review>, candidates: Vec<Candidate>) -> Self {
        Self {
            hubs,
            reviews,
            candidates,
        }
    }

    /// The built-in listings.
    pub fn seeded() -> Self {
        Self::new(seed_hubs(), seed_reviews(), seed_candidates())
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        validate_catalog(self)
    }

    pub fn hubs(&self) -> &[TechHub] {
        &self.hubs
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn hub(&self, id: &str) -> Option<&TechHub> {
        self.hubs.iter().find(|h| h.id == id)
    }

    pub fn reviews_for(&self, hub_id: &str) -> Vec<&Review> {
        self.reviews.iter().filter(|r| r.hub_id == hub_id).collect()
    }
}
