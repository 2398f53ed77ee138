//! Scored output of one (candidate, job) pair

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coarse banding of the overall score for UI and reporting. Not a
/// statistical confidence interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    VeryLow,
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    /// Direct banding of the overall score.
    pub fn from_score(score: f32) -> Self {
        if score >= 0.8 {
            ConfidenceLevel::High
        } else if score >= 0.6 {
            ConfidenceLevel::Medium
        } else if score >= 0.4 {
            ConfidenceLevel::Low
        } else {
            ConfidenceLevel::VeryLow
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceLevel::VeryLow => "very low",
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::High => "high",
        }
    }
}

/// Immutable scoring output. All scores are clamped to [0,1];
/// `skill_gaps` and `matching_skills` are disjoint on the lower-cased key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub candidate_id: String,
    pub job_id: String,
    pub job_title: String,
    pub company: String,
    pub overall_score: f32,
    pub skill_match_score: f32,
    pub experience_match_score: f32,
    pub location_match_score: f32,
    pub salary_match_score: f32,
    pub semantic_match_score: f32,
    pub skill_gaps: Vec<String>,
    pub matching_skills: Vec<String>,
    pub recommendations: Vec<String>,
    pub confidence_level: ConfidenceLevel,
    pub explanation: String,
    pub timestamp: DateTime<Utc>,
}

impl MatchResult {
    /// The five sub-scores in weight-table order.
    pub fn sub_scores(&self) -> [f32; 5] {
        [
            self.skill_match_score,
            self.experience_match_score,
            self.location_match_score,
            self.salary_match_score,
            self.semantic_match_score,
        ]
    }
}
