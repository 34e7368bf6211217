//! TF-IDF encoding over a fixed two-document corpus.
//!
//! The vocabulary is rebuilt from scratch for every pair of texts; nothing
//! is fitted ahead of time or shared across requests. Both output vectors are
//! dimensioned by the same sorted vocabulary, so weight `i` in one vector and
//! weight `i` in the other always refer to the same term.

use std::collections::HashMap;

use super::tokenize::{english_stop_words, tokenize};
use super::MatchError;

/// Number of documents in the corpus. Fixed: one resume, one job description.
const CORPUS_SIZE: f64 = 2.0;

/// A TF-IDF weight vector over the corpus's shared vocabulary.
/// Terms absent from the document weigh 0.
#[derive(Debug, Clone, PartialEq)]
pub struct TermVector {
    weights: Vec<f64>,
}

impl TermVector {
    pub fn dot(&self, other: &TermVector) -> f64 {
        self.weights
            .iter()
            .zip(&other.weights)
            .map(|(a, b)| a * b)
            .sum()
    }

    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn dimension(&self) -> usize {
        self.weights.len()
    }
}

/// Encodes a pair of texts as TF-IDF vectors over their combined vocabulary.
pub struct TfidfEncoder {
    stop_words: std::collections::HashSet<String>,
}

impl TfidfEncoder {
    pub fn new() -> Self {
        Self {
            stop_words: english_stop_words(),
        }
    }

    /// Tokenizes both texts, builds the shared vocabulary, and weights each
    /// document with `tf * idf`, where `tf` is the raw term count and
    /// `idf = ln((1 + N) / (1 + df)) + 1` (N = 2). The smoothing keeps terms
    /// present in both documents at a positive weight.
    ///
    /// Fails with `MatchError::EmptyVocabulary` when both texts reduce to
    /// nothing after stopword filtering.
    pub fn encode_pair(
        &self,
        first: &str,
        second: &str,
    ) -> Result<(TermVector, TermVector), MatchError> {
        let counts_first = term_counts(&tokenize(first, &self.stop_words));
        let counts_second = term_counts(&tokenize(second, &self.stop_words));

        // Shared vocabulary, sorted for a deterministic term ordering.
        let mut vocabulary: Vec<&String> =
            counts_first.keys().chain(counts_second.keys()).collect();
        vocabulary.sort();
        vocabulary.dedup();

        if vocabulary.is_empty() {
            return Err(MatchError::EmptyVocabulary);
        }

        let mut weights_first = Vec::with_capacity(vocabulary.len());
        let mut weights_second = Vec::with_capacity(vocabulary.len());

        for term in vocabulary {
            let tf_first = counts_first.get(term).copied().unwrap_or(0) as f64;
            let tf_second = counts_second.get(term).copied().unwrap_or(0) as f64;

            let df = (tf_first > 0.0) as u32 + (tf_second > 0.0) as u32;
            let idf = ((1.0 + CORPUS_SIZE) / (1.0 + df as f64)).ln() + 1.0;

            weights_first.push(tf_first * idf);
            weights_second.push(tf_second * idf);
        }

        Ok((
            TermVector {
                weights: weights_first,
            },
            TermVector {
                weights: weights_second,
            },
        ))
    }
}

impl Default for TfidfEncoder {
    fn default() -> Self {
        Self::new()
    }
}

fn term_counts(tokens: &[String]) -> HashMap<String, u32> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    counts
}
