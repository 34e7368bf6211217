use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// Builds the fixed English stopword set from the `stop-words` crate.
///
/// Rebuilt per scoring invocation: the pipeline carries no state between
/// requests, and the set is cheap to construct.
pub fn english_stop_words() -> HashSet<String> {
    get(LANGUAGE::English).into_iter().collect()
}

/// Tokenizes `text` for TF-IDF: case-fold, split on non-alphanumeric
/// boundaries, drop stopwords. No stemming or lemmatization.
pub fn tokenize(text: &str, stop_words: &HashSet<String>) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_lowercase())
        .filter(|token| !stop_words.contains(token))
        .collect()
}
