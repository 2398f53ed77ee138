//! Embedding provider abstraction over Model2Vec
//!
//! The matching engine never checks for an installed model itself; it is
//! constructed with an [`EmbeddingProvider`] and the [`NullEmbedder`] makes
//! the "no model available" fallback explicit and testable.

use crate::config::Config;
use crate::error::{MatcherError, Result};
use model2vec_rs::model::StaticModel;
use std::path::Path;
use std::time::Instant;

/// Batch embedding interface. `embed` takes many strings in one call so
/// backends can amortize model overhead across a batch.
pub trait EmbeddingProvider: Send + Sync {
    /// True when the provider can produce real embeddings. When false the
    /// scorers use their documented neutral fallbacks and `embed` is never
    /// called.
    fn is_available(&self) -> bool;

    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Identifier for reports and logs.
    fn name(&self) -> &str;
}

/// Capability-off provider. Scorers seeing this fall back to neutral scores.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEmbedder;

impl EmbeddingProvider for NullEmbedder {
    fn is_available(&self) -> bool {
        false
    }

    fn embed(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Err(MatcherError::Embedding(
            "no embedding model configured".to_string(),
        ))
    }

    fn name(&self) -> &str {
        "none"
    }
}

/// Model2Vec-backed provider loading a static model from a local directory.
pub struct Model2VecEmbedder {
    model: StaticModel,
    model_name: String,
}

impl Model2VecEmbedder {
    pub async fn new(model_path: &Path, model_name: &str) -> Result<Self> {
        let start_time = Instant::now();
        log::info!(
            "Loading Model2Vec embedding model from: {}",
            model_path.display()
        );

        let model = StaticModel::from_pretrained(
            model_path,
            None, // token
            None, // normalize
            None, // subfolder
        )
        .map_err(|e| MatcherError::ModelLoading(format!("Failed to load model: {}", e)))?;

        log::info!("Model loaded in {:.2?}", start_time.elapsed());

        Ok(Self {
            model,
            model_name: model_name.to_string(),
        })
    }

    /// Load the configured model, or fall back to the [`NullEmbedder`] when
    /// the model directory is absent. Absence is not an error, so this
    /// only logs.
    pub async fn from_config_or_null(config: &Config) -> Box<dyn EmbeddingProvider> {
        let model_path = config.embedding_model_path();
        if !model_path.exists() {
            log::warn!(
                "Embedding model not found at {}; semantic scores fall back to neutral",
                model_path.display()
            );
            return Box::new(NullEmbedder);
        }
        match Self::new(&model_path, &config.models.embedding_model).await {
            Ok(embedder) => Box::new(embedder),
            Err(e) => {
                log::warn!("Failed to load embedding model ({}); using neutral fallback", e);
                Box::new(NullEmbedder)
            }
        }
    }
}

impl EmbeddingProvider for Model2VecEmbedder {
    fn is_available(&self) -> bool {
        true
    }

    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(self.model.encode(texts))
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}

/// Cosine similarity of two equal-length vectors. Zero vectors compare as 0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(MatcherError::Embedding(format!(
            "Embedding dimensions don't match: {} vs {}",
            a.len(),
            b.len()
        )));
    }
    if a.is_empty() {
        return Ok(0.0);
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot_product / (norm_a * norm_b))
    }
}
