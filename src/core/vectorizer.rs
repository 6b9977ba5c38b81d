use crate::models::{Vectorized, Vocabulary, WeightVector};
use std::collections::HashMap;

/// Number of documents in the corpus: the résumé and the job description
const CORPUS_SIZE: f64 = 2.0;

/// Build a shared vocabulary and L2-normalized TF-IDF vectors for a document pair
///
/// Weighting:
/// tf(t, d) = count(t, d) / |d|
/// idf(t)   = ln((1 + N) / (1 + df(t))) + 1
/// w(t, d)  = tf(t, d) * idf(t)
///
/// If either document is empty the vocabulary and both vectors are empty.
pub fn vectorize(doc_a: &[String], doc_b: &[String]) -> Vectorized {
    if doc_a.is_empty() || doc_b.is_empty() {
        return Vectorized::default();
    }

    let counts_a = term_counts(doc_a);
    let counts_b = term_counts(doc_b);

    let vocabulary = Vocabulary::from_terms(
        counts_a
            .keys()
            .chain(counts_b.keys())
            .map(|term| term.to_string()),
    );

    let idf: Vec<f64> = vocabulary
        .terms()
        .iter()
        .map(|term| {
            let df = [&counts_a, &counts_b]
                .iter()
                .filter(|counts| counts.contains_key(term.as_str()))
                .count();
            inverse_document_frequency(df)
        })
        .collect();

    let left = weigh(&vocabulary, &idf, &counts_a, doc_a.len());
    let right = weigh(&vocabulary, &idf, &counts_b, doc_b.len());

    Vectorized {
        vocabulary,
        left,
        right,
    }
}

/// Smoothed inverse document frequency for a term found in `df` documents
#[inline]
pub fn inverse_document_frequency(df: usize) -> f64 {
    ((1.0 + CORPUS_SIZE) / (1.0 + df as f64)).ln() + 1.0
}

fn term_counts(doc: &[String]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for token in doc {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts
}

fn weigh(
    vocabulary: &Vocabulary,
    idf: &[f64],
    counts: &HashMap<&str, usize>,
    total_tokens: usize,
) -> WeightVector {
    let total = total_tokens as f64;

    let weights = vocabulary
        .terms()
        .iter()
        .zip(idf)
        .map(|(term, idf)| {
            let count = counts.get(term.as_str()).copied().unwrap_or(0) as f64;
            (count / total) * idf
        })
        .collect();

    let mut vector = WeightVector::new(weights);
    vector.l2_normalize();
    vector
}
