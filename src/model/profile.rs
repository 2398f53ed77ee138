//! Candidate profile snapshot used as scoring input

use serde::{Deserialize, Serialize};

/// A named skill with a self-reported proficiency in [0,1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default = "default_proficiency")]
    pub proficiency: f32,
}

fn default_proficiency() -> f32 {
    0.5
}

impl Skill {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            proficiency: default_proficiency(),
        }
    }

    /// Lower-cased comparison key. All skill set operations are
    /// case-insensitive on this key.
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

/// Education levels ordered from lowest to highest. The derived `Ord`
/// implements the hierarchy used for education-gap recommendations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    #[default]
    HighSchool,
    Associate,
    Bachelor,
    Master,
    Phd,
}

impl EducationLevel {
    pub fn label(&self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "high school diploma",
            EducationLevel::Associate => "associate degree",
            EducationLevel::Bachelor => "bachelor's degree",
            EducationLevel::Master => "master's degree",
            EducationLevel::Phd => "PhD",
        }
    }
}

/// Immutable snapshot of a candidate at matching time. Callers own storage;
/// the engine never mutates or persists profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Ordered list; order is preserved in `matching_skills` output.
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub experience_years: u32,
    #[serde(default)]
    pub education_level: EducationLevel,
    #[serde(default)]
    pub preferred_locations: Vec<String>,
    #[serde(default)]
    pub preferred_salary_min: Option<u32>,
    #[serde(default)]
    pub preferred_salary_max: Option<u32>,
    #[serde(default)]
    pub preferred_industries: Vec<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub resume_text: String,
}

impl CandidateProfile {
    /// Lower-cased skill keys, preserving the profile's skill order.
    pub fn skill_keys(&self) -> Vec<String> {
        self.skills.iter().map(|s| s.key()).collect()
    }

    /// True if the candidate listed "remote" among preferred locations.
    pub fn prefers_remote(&self) -> bool {
        self.preferred_locations
            .iter()
            .any(|l| l.trim().eq_ignore_ascii_case("remote"))
    }

    /// Text used for whole-profile semantic comparison: bio + resume, falling
    /// back to the concatenated skill names when both are empty.
    pub fn semantic_text(&self) -> String {
        let text = format!("{} {}", self.bio.trim(), self.resume_text.trim());
        let text = text.trim().to_string();
        if text.is_empty() {
            self.skills
                .iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        } else {
            text
        }
    }

    pub fn has_salary_preference(&self) -> bool {
        self.preferred_salary_min.is_some() || self.preferred_salary_max.is_some()
    }
}
