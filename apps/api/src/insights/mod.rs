//! Narrative insights from the generative-language API.
//!
//! Rendering never sees a failure from here: every error is absorbed into a
//! fixed fallback sentence at this boundary. `AppState` carries the fetcher as
//! `Arc<dyn InsightFetcher>` so tests can swap in a stub transport.

pub mod gemini;
pub mod prompts;
pub mod slot;

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

use crate::catalog::models::Review;
use crate::insights::prompts::{hub_summary_prompt, region_prompt};

/// Shown when the hub review summary cannot be fetched.
pub const INSIGHTS_UNAVAILABLE: &str = "Insights currently unavailable. Please check back later.";
/// Shown when the service answered but said nothing.
pub const ANALYSIS_ERROR: &str = "Analysis error.";
/// Shown when the regional call answered with no text.
pub const REGION_EMPTY: &str = "Error loading insights.";

#[derive(Debug, Error)]
pub enum InsightError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("No API key configured")]
    MissingApiKey,

    #[error("Response contained no text")]
    EmptyContent,
}

/// A single-shot text generation call keyed by a prompt.
#[async_trait]
pub trait InsightFetcher: Send + Sync {
    async fn fetch(&self, prompt: &str) -> Result<String, InsightError>;
}

/// Three-sentence summary of a hub's reviews, or a fallback sentence.
pub async fn hub_review_summary(
    fetcher: &dyn InsightFetcher,
    hub_name: &str,
    reviews: &[&Review],
) -> String {
    let prompt = hub_summary_prompt(hub_name, reviews);
    match fetcher.fetch(&prompt).await {
        Ok(text) if text.trim().is_empty() => ANALYSIS_ERROR.to_string(),
        Ok(text) => text,
        Err(e) => {
            warn!("Hub insight for {hub_name} failed: {e}");
            INSIGHTS_UNAVAILABLE.to_string()
        }
    }
}

pub fn region_fallback(region: &str) -> String {
    format!("Loading insights for {region}...")
}

/// Paragraph naming the top hubs in `region`, or a fallback sentence.
pub async fn regional_top_hubs(fetcher: &dyn InsightFetcher, region: &str) -> String {
    match fetcher.fetch(&region_prompt(region)).await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => REGION_EMPTY.to_string(),
        Err(e) => {
            warn!("Regional insight for {region} failed: {e}");
            region_fallback(region)
        }
    }
}

#[cfg(test)]
pub mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Fetcher that always fails, like an unreachable endpoint.
    pub struct FailingFetcher;

    #[async_trait]
    impl InsightFetcher for FailingFetcher {
        async fn fetch(&self, _prompt: &str) -> Result<String, InsightError> {
            Err(InsightError::Api {
                status: 503,
                message: "service unavailable".to_string(),
            })
        }
    }

    /// Fetcher that answers every prompt with the same text and records prompts.
    pub struct CannedFetcher {
        pub reply: String,
        pub prompts: Mutex<Vec<String>>,
    }

    impl CannedFetcher {
        pub fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn prompt_count(&self) -> usize {
            self.prompts.lock().map(|p| p.len()).unwrap_or(0)
        }
    }

    #[async_trait]
    impl InsightFetcher for CannedFetcher {
        async fn fetch(&self, prompt: &str) -> Result<String, InsightError> {
            if let Ok(mut prompts) = self.prompts.lock() {
                prompts.push(prompt.to_string());
            }
            Ok(self.reply.clone())
        }
    }
}
