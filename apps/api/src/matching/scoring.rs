//! Cosine-similarity scoring, behind a pluggable trait-based scorer seam for behind the
//! match endpoints.
//!
//! Default: `TfidfCosineScorer` (pure-Rust, fast, deterministic, fully
//! testable). `AppState` holds an `Arc<dyn MatchScorer>`, so a different
//! backend can be swapped in at startup without touching the handlers.

use async_trait::async_trait;

use super::tfidf::TermVector;
use super::MatchError;

/// Cosine similarity of two term vectors: `dot / (norm * norm)`.
///
/// Defined as 0.0 when either norm is zero: a vector can be all-zero when
/// its document shares no vocabulary terms with the other, even though the
/// shared vocabulary itself is non-empty. TF-IDF weights are non-negative,
/// so the result lies in [0, 1].
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    debug_assert_eq!(a.dimension(), b.dimension());
    let denominator = a.norm() * b.norm();
    if denominator == 0.0 {
        return 0.0;
    }
    a.dot(b) / denominator
}

/// Maps a raw similarity in [0, 1] to a percentage rounded to two decimals.
pub fn to_percentage(similarity: f64) -> f64 {
    (similarity * 100.0 * 100.0).round() / 100.0
}

/// The match scorer trait. Implement this to swap backends without touching
/// the endpoint, handler, or caller code.
#[async_trait]
pub trait MatchScorer: Send + Sync {
    /// Scores how well `resume_text` matches `job_text`, in [0.0, 100.0].
    async fn score(&self, resume_text: &str, job_text: &str) -> Result<f64, MatchError>;
}

/// TF-IDF + cosine similarity scorer, the default backend.
pub struct TfidfCosineScorer;

#[async_trait]
impl MatchScorer for TfidfCosineScorer {
    async fn score(&self, resume_text: &str, job_text: &str) -> Result<f64, MatchError> {
        super::score_match(resume_text, job_text)
    }
}
