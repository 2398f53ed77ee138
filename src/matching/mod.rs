//! Match scoring: component scorers, strategy weighting, gap analysis,
//! explanations, and the batch matching service

pub mod experience;
pub mod explanation;
pub mod gaps;
pub mod location;
pub mod salary;
pub mod semantic;
pub mod service;
pub mod skills;
pub mod strategy;

pub use service::{JobMatchingService, MatchParams, MatchReport, SkippedPosting};
pub use strategy::MatchingStrategy;
