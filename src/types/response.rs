// src/types/response.rs

use serde::{Deserialize, Serialize};

// ===== Ranking Service Response Types =====

/// A single scored candidate as returned by the ranking service. The
/// service orders the list; position is rank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub name: String,
    pub score: f64,
}

#[derive(Debug, Deserialize)]
pub struct RankingResponse {
    pub results: Vec<RankedCandidate>,
}
