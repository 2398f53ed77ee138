//! Job matching and recommendation library

pub mod cli;
pub mod config;
pub mod embedding;
pub mod error;
pub mod matching;
pub mod model;
pub mod output;
pub mod recommend;

pub use config::Config;
pub use error::{MatcherError, Result};
