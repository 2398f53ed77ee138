//! Recommendation variants, personalization, and market trend aggregation

pub mod engine;
pub mod trends;

pub use engine::{
    InteractionEvent, Personalization, RecommendationEngine, RecommendationType,
};
pub use trends::{analyze_market_trends, MarketTrends};
