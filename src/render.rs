// src/render.rs
//! Presentation of a ranked result set: tier classification and the
//! plain-text results table.

use crate::types::RankedCandidate;

/// Presentational bucket for a match score. Affects styling only; the
/// underlying score is never altered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    /// Inclusive lower bounds: 80 and above is high, 60 up to but not
    /// including 80 is medium, everything below 60 is low.
    pub fn classify(score: f64) -> Self {
        if score >= 80.0 {
            ScoreTier::High
        } else if score >= 60.0 {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreTier::High => "high",
            ScoreTier::Medium => "medium",
            ScoreTier::Low => "low",
        }
    }
}

/// Display the score exactly as received, as a percentage.
pub fn format_score(score: f64) -> String {
    format!("{}%", score)
}

/// Render one row per candidate in the exact order received; rank is the
/// 1-based position in that order, not a re-sort by score. An empty
/// result set renders nothing.
pub fn render_table(results: &[RankedCandidate]) -> String {
    if results.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<6} {:<40} {:<12} {:<8}\n",
        "Rank", "Candidate Resume", "Match Score", "Tier"
    ));
    out.push_str(&format!("{}\n", "-".repeat(68)));

    for (idx, candidate) in results.iter().enumerate() {
        let tier = ScoreTier::classify(candidate.score);
        out.push_str(&format!(
            "{:<6} {:<40} {:<12} {:<8}\n",
            format!("#{}", idx + 1),
            candidate.name,
            format_score(candidate.score),
            tier.as_str()
        ));
    }

    out
}
