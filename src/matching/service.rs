//! Job matching service: scores one candidate against many postings
//!
//! The service is constructed with its embedding dependency; there is no
//! global instance. A batch run never fails because of one bad posting —
//! the posting is skipped, logged, and reported in `MatchReport::skipped`.

use crate::config::Config;
use crate::embedding::EmbeddingProvider;
use crate::error::{Result, ScoreError};
use crate::matching::{
    experience::experience_match_score, explanation::explain, gaps,
    location::location_match_score, salary::salary_match_score,
    semantic::semantic_match_score, skills::skill_match_score, strategy,
    strategy::MatchingStrategy,
};
use crate::model::{CandidateProfile, ConfidenceLevel, JobPosting, MatchResult};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Parameters for one batch matching run.
#[derive(Debug, Clone)]
pub struct MatchParams {
    pub strategy: MatchingStrategy,
    pub max_results: usize,
    pub min_score_threshold: f32,
    /// Wall-clock budget; on expiry the scored-so-far results are returned
    /// and the report is flagged as timed out.
    pub time_budget: Option<Duration>,
}

impl MatchParams {
    pub fn from_config(config: &Config) -> Self {
        Self {
            strategy: MatchingStrategy::default(),
            max_results: config.matching.default_max_results,
            min_score_threshold: config.matching.default_min_score_threshold,
            time_budget: config.matching.batch_time_budget_ms.map(Duration::from_millis),
        }
    }
}

/// A posting that could not be scored, with the reason it was skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedPosting {
    pub job_id: String,
    pub error: ScoreError,
}

/// Outcome of a batch run: ranked results plus an explicit partial-failure
/// report instead of silently swallowed errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub results: Vec<MatchResult>,
    pub skipped: Vec<SkippedPosting>,
    pub timed_out: bool,
    pub postings_considered: usize,
    pub processing_time_ms: u64,
    pub embedding_model: String,
}

pub struct JobMatchingService {
    config: Config,
    embedder: Box<dyn EmbeddingProvider>,
}

impl JobMatchingService {
    pub fn new(config: Config, embedder: Box<dyn EmbeddingProvider>) -> Self {
        Self { config, embedder }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn embedder_name(&self) -> &str {
        self.embedder.name()
    }

    /// Score a single (candidate, posting) pair. Pure given its inputs:
    /// identical inputs yield an identical result apart from the timestamp.
    pub fn score_pair(
        &self,
        candidate: &CandidateProfile,
        posting: &JobPosting,
        strategy: MatchingStrategy,
    ) -> std::result::Result<MatchResult, ScoreError> {
        validate_candidate(candidate)?;
        posting.validate()?;

        let scoring = &self.config.scoring;
        let skill = skill_match_score(candidate, posting, self.embedder.as_ref(), scoring);
        let experience = experience_match_score(candidate, posting);
        let location = location_match_score(candidate, posting);
        let salary = salary_match_score(candidate, posting);
        let semantic = semantic_match_score(candidate, posting, self.embedder.as_ref());

        let sub_scores = [skill, experience, location, salary, semantic]
            .map(|s| s.clamp(0.0, 1.0));
        let weights = strategy.weights(scoring);
        let overall = strategy::combine(sub_scores, &weights);

        let analysis = gaps::analyze(candidate, posting, sub_scores[2], &self.config.recommend);

        Ok(MatchResult {
            candidate_id: candidate.id.clone(),
            job_id: posting.id.clone(),
            job_title: posting.title.clone(),
            company: posting.company.clone(),
            overall_score: overall,
            skill_match_score: sub_scores[0],
            experience_match_score: sub_scores[1],
            location_match_score: sub_scores[2],
            salary_match_score: sub_scores[3],
            semantic_match_score: sub_scores[4],
            skill_gaps: analysis.skill_gaps,
            matching_skills: analysis.matching_skills,
            recommendations: analysis.recommendations,
            confidence_level: ConfidenceLevel::from_score(overall),
            explanation: explain(sub_scores[0], sub_scores[1], sub_scores[2]),
            timestamp: Utc::now(),
        })
    }

    /// Score every posting, drop results below the threshold, rank by overall
    /// score descending, and truncate to `max_results`.
    ///
    /// A malformed posting is skipped with a logged error and reported; only
    /// a malformed candidate aborts the whole batch.
    pub fn match_jobs_for_user(
        &self,
        candidate: &CandidateProfile,
        postings: &[JobPosting],
        params: &MatchParams,
    ) -> Result<MatchReport> {
        let started = Instant::now();
        validate_candidate(candidate)?;

        let mut results: Vec<MatchResult> = Vec::with_capacity(postings.len());
        let mut skipped: Vec<SkippedPosting> = Vec::new();
        let mut timed_out = false;
        let mut considered = 0usize;

        for posting in postings {
            if let Some(budget) = params.time_budget {
                if started.elapsed() >= budget {
                    log::warn!(
                        "batch time budget exhausted after {} of {} postings; returning partial results",
                        considered,
                        postings.len()
                    );
                    timed_out = true;
                    break;
                }
            }
            considered += 1;

            match self.score_pair(candidate, posting, params.strategy) {
                Ok(result) => {
                    if result.overall_score >= params.min_score_threshold {
                        results.push(result);
                    }
                }
                Err(e) => {
                    log::error!("skipping posting '{}': {}", posting.id, e);
                    skipped.push(SkippedPosting {
                        job_id: posting.id.clone(),
                        error: e,
                    });
                }
            }
        }

        results.sort_by(|a, b| {
            b.overall_score
                .partial_cmp(&a.overall_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.job_id.cmp(&b.job_id))
        });
        results.truncate(params.max_results);

        Ok(MatchReport {
            results,
            skipped,
            timed_out,
            postings_considered: considered,
            processing_time_ms: started.elapsed().as_millis() as u64,
            embedding_model: self.embedder.name().to_string(),
        })
    }
}

fn validate_candidate(candidate: &CandidateProfile) -> std::result::Result<(), ScoreError> {
    if candidate.id.trim().is_empty() {
        return Err(ScoreError::MalformedCandidate("empty id".into()));
    }
    Ok(())
}
