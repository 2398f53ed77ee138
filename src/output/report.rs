//! Serializable run report combining the ranked results with run metadata

use crate::matching::{MatchReport, SkippedPosting};
use crate::model::{CandidateProfile, MatchResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything one matching run produced, in a shape that serializes cleanly
/// to JSON and renders to console or Markdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRunReport {
    pub candidate: CandidateSummary,
    pub strategy: String,
    pub results: Vec<MatchResult>,
    pub skipped: Vec<SkippedPosting>,
    pub metadata: RunMetadata,
}

/// Candidate fields worth echoing into a report. Deliberately omits the
/// resume text and bio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateSummary {
    pub id: String,
    pub name: String,
    pub skill_count: usize,
    pub experience_years: u32,
    pub education_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetadata {
    pub generated_at: DateTime<Utc>,
    pub engine_version: String,
    pub embedding_model: String,
    pub postings_considered: usize,
    pub processing_time_ms: u64,
    pub timed_out: bool,
}

impl MatchRunReport {
    pub fn new(candidate: &CandidateProfile, strategy: &str, report: MatchReport) -> Self {
        Self {
            candidate: CandidateSummary {
                id: candidate.id.clone(),
                name: candidate.name.clone(),
                skill_count: candidate.skills.len(),
                experience_years: candidate.experience_years,
                education_level: candidate.education_level.label().to_string(),
            },
            strategy: strategy.to_string(),
            metadata: RunMetadata {
                generated_at: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                embedding_model: report.embedding_model.clone(),
                postings_considered: report.postings_considered,
                processing_time_ms: report.processing_time_ms,
                timed_out: report.timed_out,
            },
            results: report.results,
            skipped: report.skipped,
        }
    }

    pub fn top_result(&self) -> Option<&MatchResult> {
        self.results.first()
    }
}
