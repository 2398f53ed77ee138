//! Matching strategies: named weightings over the five sub-scores

use crate::config::{ScoringConfig, StrategyWeights};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchingStrategy {
    SkillBased,
    Semantic,
    ExperienceWeighted,
    #[default]
    Hybrid,
}

impl MatchingStrategy {
    /// Parse a strategy name. Unknown names fall back to hybrid; that is a
    /// documented substitution, not an error.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "skill_based" | "skill-based" | "skills" => MatchingStrategy::SkillBased,
            "semantic" => MatchingStrategy::Semantic,
            "experience_weighted" | "experience-weighted" | "experience" => {
                MatchingStrategy::ExperienceWeighted
            }
            "hybrid" => MatchingStrategy::Hybrid,
            other => {
                log::debug!("unknown matching strategy '{}', using hybrid", other);
                MatchingStrategy::Hybrid
            }
        }
    }

    pub fn weights(&self, scoring: &ScoringConfig) -> StrategyWeights {
        match self {
            MatchingStrategy::SkillBased => scoring.skill_based,
            MatchingStrategy::Semantic => scoring.semantic,
            MatchingStrategy::ExperienceWeighted => scoring.experience_weighted,
            MatchingStrategy::Hybrid => scoring.hybrid,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MatchingStrategy::SkillBased => "skill_based",
            MatchingStrategy::Semantic => "semantic",
            MatchingStrategy::ExperienceWeighted => "experience_weighted",
            MatchingStrategy::Hybrid => "hybrid",
        }
    }
}

/// Weighted combination of the five sub-scores, clamped to [0,1].
/// Order: skill, experience, location, salary, semantic.
pub fn combine(sub_scores: [f32; 5], weights: &StrategyWeights) -> f32 {
    let [skill, experience, location, salary, semantic] = sub_scores;
    (skill * weights.skill
        + experience * weights.experience
        + location * weights.location
        + salary * weights.salary
        + semantic * weights.semantic)
        .clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn unknown_strategy_falls_back_to_hybrid() {
        assert_eq!(MatchingStrategy::parse("quantum"), MatchingStrategy::Hybrid);
        assert_eq!(MatchingStrategy::parse(""), MatchingStrategy::Hybrid);
    }

    #[test]
    fn known_names_parse() {
        assert_eq!(
            MatchingStrategy::parse("skill_based"),
            MatchingStrategy::SkillBased
        );
        assert_eq!(MatchingStrategy::parse("SEMANTIC"), MatchingStrategy::Semantic);
        assert_eq!(
            MatchingStrategy::parse("experience_weighted"),
            MatchingStrategy::ExperienceWeighted
        );
    }

    #[test]
    fn combine_applies_weights() {
        let config = Config::default();
        let weights = MatchingStrategy::SkillBased.weights(&config.scoring);
        // All sub-scores 1.0 must combine to exactly 1.0
        let total = combine([1.0; 5], &weights);
        assert!((total - 1.0).abs() < 1e-6);

        // Only the skill sub-score set: total equals the skill weight
        let total = combine([1.0, 0.0, 0.0, 0.0, 0.0], &weights);
        assert!((total - 0.60).abs() < 1e-6);
    }

    #[test]
    fn combine_clamps() {
        let config = Config::default();
        let weights = MatchingStrategy::Hybrid.weights(&config.scoring);
        assert_eq!(combine([2.0; 5], &weights).min(1.0), combine([2.0; 5], &weights));
    }
}
