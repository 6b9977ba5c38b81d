use crate::models::{KeywordMatches, Vocabulary, WeightVector};

/// Default number of keywords reported per match
pub const DEFAULT_KEYWORD_LIMIT: usize = 10;

/// Terms with a strictly positive weight in both vectors
///
/// Keywords are returned in vocabulary-index order and truncated to `limit`;
/// `total` counts every match before truncation.
pub fn extract(
    vocabulary: &Vocabulary,
    vec_a: &WeightVector,
    vec_b: &WeightVector,
    limit: usize,
) -> KeywordMatches {
    let mut keywords: Vec<String> = vocabulary
        .terms()
        .iter()
        .zip(vec_a.weights().iter().zip(vec_b.weights()))
        .filter(|(_, (a, b))| **a > 0.0 && **b > 0.0)
        .map(|(term, _)| term.clone())
        .collect();

    let total = keywords.len();
    keywords.truncate(limit);

    KeywordMatches { keywords, total }
}
