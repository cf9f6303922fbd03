//! Text-assist collaborator: description generation, match alerts, and
//! listing ranking over HTTP. Every call can fail; callers go through the
//! `*_or_fallback` helpers so a dead endpoint degrades to fixed copy
//! instead of an error.

mod client;
mod prompts;
mod types;

pub use client::{AssistClient, AssistError, MAX_RECOMMENDATIONS};
pub use prompts::{job_description_prompt, match_alert_prompt, DESCRIPTION_FALLBACK};
pub use types::{GenerateRequest, GenerateResponse, RankRequest, RankResponse, RankedListing};


use crate::listing::{Category, Listing};
use crate::profile::CandidateProfile;

/// Generate a posting description, or the fixed fallback copy on failure.
pub fn describe_or_fallback(client: &AssistClient, title: &str, category: Category) -> String {
    client
        .generate(&job_description_prompt(title, category))
        .unwrap_or_else(|_| DESCRIPTION_FALLBACK.to_string())
}

/// Generate a match-alert sentence, or a fixed sentence naming the listing.
pub fn match_alert_or_fallback(
    client: &AssistClient,
    profile: &CandidateProfile,
    listing: &Listing,
) -> String {
    client
        .generate(&match_alert_prompt(profile, listing))
        .unwrap_or_else(|_| format!("A {} opening was found near you!", listing.title))
}

/// Rank listings against a candidate description; empty on failure.
pub fn recommendations_or_empty(
    client: &AssistClient,
    candidate: &str,
    listings: &[Listing],
) -> Vec<String> {
    client.rank(candidate, listings).unwrap_or_default()
}
