// the assist server contract
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RankRequest {
    /// Free-text description of the candidate's experience.
    pub candidate: String,
    pub listings: Vec<RankedListing>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RankedListing {
    pub id: String,
    pub summary: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RankResponse {
    pub recommended_ids: Vec<String>,
}
