use crate::core::{
    keywords::{self, DEFAULT_KEYWORD_LIMIT},
    normalizer::normalize,
    similarity,
    stop_words::StopWords,
    vectorizer::vectorize,
};
use crate::models::{MatchOutcome, MatchResult};
use std::sync::Arc;

/// Résumé/job matching orchestrator
///
/// # Pipeline Stages
/// 1. Normalization of both documents
/// 2. Shared vocabulary and TF-IDF vectors
/// 3. Cosine similarity scoring
/// 4. Keyword overlap extraction
///
/// Holds only read-only state, so clones can be handed to every worker.
#[derive(Debug, Clone)]
pub struct Matcher {
    stop_words: Arc<StopWords>,
    keyword_limit: usize,
}

impl Matcher {
    pub fn new(stop_words: Arc<StopWords>, keyword_limit: usize) -> Self {
        Self {
            stop_words,
            keyword_limit,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(Arc::new(StopWords::english()), DEFAULT_KEYWORD_LIMIT)
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Score how well a résumé matches a job description
    ///
    /// Returns [`MatchOutcome::InsufficientText`] when either document has no
    /// tokens left after normalization, or when the score is not a finite number.
    pub fn match_documents(&self, resume_text: &str, job_description: &str) -> MatchOutcome {
        let resume_tokens = normalize(resume_text, &self.stop_words);
        let job_tokens = normalize(job_description, &self.stop_words);

        if resume_tokens.is_empty() || job_tokens.is_empty() {
            tracing::debug!(
                "Insufficient text: resume_tokens={}, job_tokens={}",
                resume_tokens.len(),
                job_tokens.len()
            );
            return MatchOutcome::InsufficientText;
        }

        let vectors = vectorize(&resume_tokens, &job_tokens);
        let match_percentage = similarity::score(&vectors.left, &vectors.right);

        if !match_percentage.is_finite() {
            tracing::warn!(
                "Non-finite match score over {} terms, reporting insufficient text",
                vectors.vocabulary.len()
            );
            return MatchOutcome::InsufficientText;
        }

        let matches = keywords::extract(
            &vectors.vocabulary,
            &vectors.left,
            &vectors.right,
            self.keyword_limit,
        );

        tracing::debug!(
            resume_tokens = resume_tokens.len(),
            job_tokens = job_tokens.len(),
            vocabulary = vectors.vocabulary.len(),
            total_matches = matches.total,
            match_percentage,
            "Computed match"
        );

        MatchOutcome::Matched(MatchResult {
            match_percentage,
            matched_keywords: matches.keywords,
            total_matches: matches.total,
        })
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_basic() {
        let matcher = Matcher::with_defaults();
        let outcome = matcher.match_documents(
            "Backend engineer with Python, SQL and AWS experience",
            "We need a Python engineer who knows SQL",
        );

        match outcome {
            MatchOutcome::Matched(result) => {
                assert!(result.match_percentage > 0.0 && result.match_percentage < 100.0);
                assert_eq!(result.matched_keywords, vec!["engineer", "python", "sql"]);
                assert_eq!(result.total_matches, 3);
            }
            MatchOutcome::InsufficientText => panic!("expected a scored match"),
        }
    }

    #[test]
    fn test_identical_documents() {
        let matcher = Matcher::with_defaults();
        let text = "Senior Rust developer building distributed systems";
        let outcome = matcher.match_documents(text, text);
        assert_eq!(outcome.match_percentage(), 100.0);
    }

    #[test]
    fn test_empty_resume() {
        let matcher = Matcher::with_defaults();
        let outcome = matcher.match_documents("", "Engineer Python SQL");
        assert!(outcome.is_insufficient());
        assert_eq!(outcome.match_percentage(), 0.0);
    }

    #[test]
    fn test_keyword_limit_respected() {
        let matcher = Matcher::new(Arc::new(StopWords::english()), 2);
        let outcome = matcher.match_documents("go rust java python", "python java rust go");
        assert_eq!(outcome.matched_keywords(), &["go", "java"]);
        assert_eq!(outcome.total_matches(), 4);
    }

    #[test]
    fn test_custom_stop_words() {
        let matcher = Matcher::new(Arc::new(StopWords::with_extra(["engineer"])), 10);
        let outcome = matcher.match_documents("engineer", "engineer");
        assert!(outcome.is_insufficient());
    }
}
