//! Recommendation engine: reorders base match results per recommendation
//! goal, with optional diversity/novelty personalization
//!
//! Reordering only changes rank order. Stored scores, gaps, and explanations
//! stay exactly as the matching service produced them, so a reordered result
//! remains explainable against its own numbers.

use crate::error::Result;
use crate::matching::{JobMatchingService, MatchParams, MatchReport};
use crate::model::{CandidateProfile, JobPosting, MatchResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    #[default]
    BestMatches,
    SkillGrowth,
    SalaryBoost,
    CareerProgression,
}

impl RecommendationType {
    /// Parse a recommendation type name; unknown names fall back to
    /// best matches.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "best_matches" | "best-matches" | "best" => RecommendationType::BestMatches,
            "skill_growth" | "skill-growth" => RecommendationType::SkillGrowth,
            "salary_boost" | "salary-boost" => RecommendationType::SalaryBoost,
            "career_progression" | "career-progression" => RecommendationType::CareerProgression,
            other => {
                log::debug!("unknown recommendation type '{}', using best_matches", other);
                RecommendationType::BestMatches
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RecommendationType::BestMatches => "best_matches",
            RecommendationType::SkillGrowth => "skill_growth",
            RecommendationType::SalaryBoost => "salary_boost",
            RecommendationType::CareerProgression => "career_progression",
        }
    }
}

/// One historic interaction (view, save, application) with a posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionEvent {
    pub job_id: String,
    pub company: String,
}

/// Personalized re-ranking knobs. Both factors at 0 make `personalize` the
/// identity on result order.
#[derive(Debug, Clone, Default)]
pub struct Personalization {
    pub history: Vec<InteractionEvent>,
    pub diversity_factor: f32,
    pub novelty_factor: f32,
}

pub struct RecommendationEngine {
    service: JobMatchingService,
}

impl RecommendationEngine {
    pub fn new(service: JobMatchingService) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &JobMatchingService {
        &self.service
    }

    /// Base match run reordered for a recommendation goal.
    pub fn get_job_recommendations(
        &self,
        candidate: &CandidateProfile,
        postings: &[JobPosting],
        recommendation_type: RecommendationType,
    ) -> Result<MatchReport> {
        let params = MatchParams::from_config(self.service.config());
        let mut report = self.service.match_jobs_for_user(candidate, postings, &params)?;

        match recommendation_type {
            RecommendationType::BestMatches => {}
            RecommendationType::SkillGrowth => {
                let boost = self.service.config().recommend.skill_growth_boost;
                reorder_by(&mut report.results, |r| {
                    // Favor jobs with a small, learnable gap over perfect
                    // matches with nothing new.
                    let gap_count = r.skill_gaps.len();
                    let growth = if (1..=3).contains(&gap_count) {
                        boost * gap_count as f32
                    } else {
                        0.0
                    };
                    r.overall_score + growth
                });
            }
            RecommendationType::SalaryBoost => {
                let boost = self.service.config().recommend.salary_boost;
                let candidate_mid = salary_midpoint(
                    candidate.preferred_salary_min,
                    candidate.preferred_salary_max,
                );
                let posting_mids: HashMap<&str, f32> = postings
                    .iter()
                    .filter_map(|p| {
                        salary_midpoint(p.salary_min, p.salary_max).map(|m| (p.id.as_str(), m))
                    })
                    .collect();
                if let Some(current) = candidate_mid {
                    reorder_by(&mut report.results, |r| {
                        let uplift = posting_mids
                            .get(r.job_id.as_str())
                            .map(|job_mid| ((job_mid - current) / current).clamp(0.0, 1.0))
                            .unwrap_or(0.0);
                        r.overall_score + boost * uplift
                    });
                }
            }
            RecommendationType::CareerProgression => {
                let boost = self.service.config().recommend.progression_boost;
                reorder_by(&mut report.results, |r| {
                    if is_progression_title(&r.job_title) {
                        r.overall_score + boost
                    } else {
                        r.overall_score
                    }
                });
            }
        }

        Ok(report)
    }

    /// Re-rank using historic interaction signals. Order-stable and
    /// idempotent when both factors are 0.
    pub fn personalize(
        &self,
        results: &[MatchResult],
        personalization: &Personalization,
    ) -> Vec<MatchResult> {
        let mut results = results.to_vec();
        if personalization.novelty_factor <= 0.0 && personalization.diversity_factor <= 0.0 {
            return results;
        }

        if personalization.novelty_factor > 0.0 {
            let mut seen_companies: HashMap<String, usize> = HashMap::new();
            for event in &personalization.history {
                *seen_companies
                    .entry(event.company.to_lowercase())
                    .or_default() += 1;
            }
            let factor = personalization.novelty_factor;
            reorder_by(&mut results, |r| {
                let views = seen_companies
                    .get(&r.company.to_lowercase())
                    .copied()
                    .unwrap_or(0);
                // Inverse-popularity boost: unseen companies gain the most.
                r.overall_score + factor * (1.0 / (1.0 + views as f32))
            });
        }

        if personalization.diversity_factor > 0.0 {
            results = round_robin_by_company(results);
        }

        results
    }
}

/// Stable descending sort by an adjusted sort key; stored scores untouched.
fn reorder_by<F: Fn(&MatchResult) -> f32>(results: &mut [MatchResult], key: F) {
    results.sort_by(|a, b| {
        key(b)
            .partial_cmp(&key(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

fn salary_midpoint(min: Option<u32>, max: Option<u32>) -> Option<f32> {
    match (min, max) {
        (Some(min), Some(max)) => Some((min + max) as f32 / 2.0),
        (Some(min), None) => Some(min as f32),
        (None, Some(max)) => Some(max as f32),
        (None, None) => None,
    }
}

fn is_progression_title(title: &str) -> bool {
    const PROGRESSION_MARKERS: [&str; 7] = [
        "senior", "lead", "principal", "staff", "head", "manager", "director",
    ];
    let title = title.to_lowercase();
    PROGRESSION_MARKERS.iter().any(|m| title.contains(m))
}

/// Round-robin interleave across companies, keeping each company's own
/// results in their incoming order.
fn round_robin_by_company(results: Vec<MatchResult>) -> Vec<MatchResult> {
    let mut buckets: Vec<(String, Vec<MatchResult>)> = Vec::new();
    for result in results {
        let key = result.company.to_lowercase();
        match buckets.iter_mut().find(|(company, _)| *company == key) {
            Some((_, bucket)) => bucket.push(result),
            None => buckets.push((key, vec![result])),
        }
    }

    let total: usize = buckets.iter().map(|(_, b)| b.len()).sum();
    let mut interleaved = Vec::with_capacity(total);
    let mut round = 0;
    while interleaved.len() < total {
        for (_, bucket) in &mut buckets {
            if round < bucket.len() {
                interleaved.push(bucket[round].clone());
            }
        }
        round += 1;
    }
    interleaved
}
