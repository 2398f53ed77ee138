//! Configuration management for the matching engine
//!
//! The strategy weight tables and the skill-score blend ratios are
//! empirically tuned constants; they live here rather than in the scorers so
//! they can be adjusted and tested independently.

use crate::error::{MatcherError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub models: ModelConfig,
    pub scoring: ScoringConfig,
    pub matching: MatchingConfig,
    pub recommend: RecommendConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub models_dir: PathBuf,
    pub embedding_model: String,
}

/// Weights over the five sub-scores. Each table must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyWeights {
    pub skill: f32,
    pub experience: f32,
    pub location: f32,
    pub salary: f32,
    pub semantic: f32,
}

impl StrategyWeights {
    pub fn sum(&self) -> f32 {
        self.skill + self.experience + self.location + self.salary + self.semantic
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub skill_based: StrategyWeights,
    pub semantic: StrategyWeights,
    pub experience_weighted: StrategyWeights,
    pub hybrid: StrategyWeights,
    /// Direct skill score blend: required vs preferred coverage.
    pub skill_required_weight: f32,
    pub skill_preferred_weight: f32,
    /// Final skill score blend when an embedding provider is available.
    pub skill_direct_weight: f32,
    pub skill_semantic_weight: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub default_max_results: usize,
    pub default_min_score_threshold: f32,
    /// Optional wall-clock budget for a batch; on expiry the scored-so-far
    /// results are returned with the report flagged as timed out.
    pub batch_time_budget_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendConfig {
    /// Per-gap boost for skill-growth reordering.
    pub skill_growth_boost: f32,
    /// Maximum boost for salary-driven reordering.
    pub salary_boost: f32,
    /// Boost for seniority-progression titles.
    pub progression_boost: f32,
    /// Jaro-Winkler threshold for adjacent-skill hints in recommendations.
    pub adjacent_skill_threshold: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        let models_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".skillforge-matcher")
            .join("models");

        Self {
            models: ModelConfig {
                models_dir,
                embedding_model: "minishlab/M2V_base_output".to_string(),
            },
            scoring: ScoringConfig {
                skill_based: StrategyWeights {
                    skill: 0.60,
                    experience: 0.20,
                    location: 0.10,
                    salary: 0.05,
                    semantic: 0.05,
                },
                semantic: StrategyWeights {
                    skill: 0.20,
                    experience: 0.15,
                    location: 0.10,
                    salary: 0.05,
                    semantic: 0.50,
                },
                experience_weighted: StrategyWeights {
                    skill: 0.40,
                    experience: 0.30,
                    location: 0.15,
                    salary: 0.10,
                    semantic: 0.05,
                },
                hybrid: StrategyWeights {
                    skill: 0.35,
                    experience: 0.25,
                    location: 0.15,
                    salary: 0.10,
                    semantic: 0.15,
                },
                skill_required_weight: 0.8,
                skill_preferred_weight: 0.2,
                skill_direct_weight: 0.7,
                skill_semantic_weight: 0.3,
            },
            matching: MatchingConfig {
                default_max_results: 20,
                default_min_score_threshold: 0.3,
                batch_time_budget_ms: None,
            },
            recommend: RecommendConfig {
                skill_growth_boost: 0.03,
                salary_boost: 0.1,
                progression_boost: 0.1,
                adjacent_skill_threshold: 0.85,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                MatcherError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            MatcherError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("skillforge-matcher")
            .join("config.toml")
    }

    pub fn embedding_model_path(&self) -> PathBuf {
        self.models.models_dir.join(&self.models.embedding_model)
    }

    /// Reject weight tables that no longer sum to 1.0 after hand-editing.
    pub fn validate(&self) -> Result<()> {
        for (name, weights) in [
            ("skill_based", &self.scoring.skill_based),
            ("semantic", &self.scoring.semantic),
            ("experience_weighted", &self.scoring.experience_weighted),
            ("hybrid", &self.scoring.hybrid),
        ] {
            if (weights.sum() - 1.0).abs() > 1e-6 {
                return Err(MatcherError::Configuration(format!(
                    "strategy '{}' weights sum to {}, expected 1.0",
                    name,
                    weights.sum()
                )));
            }
        }
        let blend = self.scoring.skill_required_weight + self.scoring.skill_preferred_weight;
        if (blend - 1.0).abs() > 1e-6 {
            return Err(MatcherError::Configuration(format!(
                "skill required/preferred blend sums to {}, expected 1.0",
                blend
            )));
        }
        let blend = self.scoring.skill_direct_weight + self.scoring.skill_semantic_weight;
        if (blend - 1.0).abs() > 1e-6 {
            return Err(MatcherError::Configuration(format!(
                "skill direct/semantic blend sums to {}, expected 1.0",
                blend
            )));
        }
        Ok(())
    }
}
