use serde::{Deserialize, Serialize};

/// One prior job in the candidate's work history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: String,
    pub role: String,
    pub organization: String,
    pub period: String,
    pub description: String,
}

/// Whether the profile is shown to employers with the candidate's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Anonymous,
}

/// Candidate-facing profile record, persisted as JSON in the session store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_resume: Option<String>,
    pub city: String,
    pub phone: String,
    pub visibility: Visibility,
    pub has_worked_before: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<String>,
    pub experiences: Vec<ExperienceEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_upload_date: Option<String>,
    pub skills: Vec<String>,
    pub areas_of_interest: Vec<String>,
    pub shift_availability: Vec<String>,
    pub work_type_preference: Vec<String>,
}

impl CandidateProfile {
    /// One-line description of the candidate for assist prompts.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let (Some(role), Some(org)) = (&self.last_role, &self.last_organization) {
            parts.push(format!("worked as {role} at {org}"));
        }
        if !self.skills.is_empty() {
            parts.push(format!("skills: {}", self.skills.join(", ")));
        }
        if parts.is_empty() {
            parts.push("no prior experience listed".to_string());
        }
        parts.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_json_round_trip() {
        let profile = CandidateProfile {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            city: "Springfield".to_string(),
            skills: vec!["stocking".to_string(), "customer service".to_string()],
            last_role: Some("Stock Clerk".to_string()),
            last_organization: Some("Neighborhood Market".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&profile).unwrap();
        let back: CandidateProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
        // Absent optionals stay out of the payload
        assert!(!json.contains("video_resume"));
    }

    #[test]
    fn test_summary_mentions_experience_and_skills() {
        let profile = CandidateProfile {
            last_role: Some("Cashier".to_string()),
            last_organization: Some("Total Health Pharmacy".to_string()),
            skills: vec!["registers".to_string()],
            ..Default::default()
        };
        let summary = profile.summary();
        assert!(summary.contains("Cashier"));
        assert!(summary.contains("registers"));

        assert_eq!(
            CandidateProfile::default().summary(),
            "no prior experience listed"
        );
    }
}
