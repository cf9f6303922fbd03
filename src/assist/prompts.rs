use crate::listing::{Category, Listing};
use crate::profile::CandidateProfile;

/// Copy shown when description generation fails.
pub const DESCRIPTION_FALLBACK: &str = "Description unavailable right now.";

/// Prompt for a short posting description aimed at local commerce.
pub fn job_description_prompt(title: &str, category: Category) -> String {
    format!(
        "Write a short, inviting description for a {title} opening at a \
         local {}. Keep it simple and under 150 characters.",
        category.label()
    )
}

/// Prompt for a one-sentence match alert for the candidate.
pub fn match_alert_prompt(profile: &CandidateProfile, listing: &Listing) -> String {
    format!(
        "The candidate {} has these skills: {}. A {} opening appeared at {}. \
         Write one short, upbeat sentence telling them about this match. \
         Human and direct, under 100 characters.",
        profile.name,
        profile.skills.join(", "),
        listing.title,
        listing.organization
    )
}
