//! Resume/JD match scoring: the TF-IDF + cosine-similarity pipeline.
//!
//! Extractor output (resume text) and the job description enter here
//! together; a percentage score in [0.0, 100.0] comes out. The pipeline is a
//! pure function of its two inputs: no state survives an invocation and no
//! vocabulary is reused across requests, so concurrent invocations need no
//! locking.

pub mod handlers;
pub mod scoring;
pub mod tfidf;
pub mod tokenize;

use thiserror::Error;

use scoring::{cosine_similarity, to_percentage};
use tfidf::TfidfEncoder;

/// Error cases of the scoring pipeline. Both are caller errors, reported
/// back descriptively and never retried; identical inputs fail identically.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    /// Required text is empty or whitespace-only. Raised before any
    /// vectorization is attempted.
    #[error("{0} is empty or contains no readable text")]
    EmptyInput(&'static str),

    /// Both texts reduced to nothing after stopword filtering.
    #[error("no scorable terms remain after stopword filtering")]
    EmptyVocabulary,
}

/// Scores how well a resume matches a job description.
///
/// Returns the cosine similarity of the two TF-IDF vectors as a percentage
/// rounded to two decimals.
pub fn score_match(resume_text: &str, job_text: &str) -> Result<f64, MatchError> {
    if resume_text.trim().is_empty() {
        return Err(MatchError::EmptyInput("resume text"));
    }
    if job_text.trim().is_empty() {
        return Err(MatchError::EmptyInput("job description"));
    }

    let (resume_vector, job_vector) = TfidfEncoder::new().encode_pair(resume_text, job_text)?;
    Ok(to_percentage(cosine_similarity(&resume_vector, &job_vector)))
}
