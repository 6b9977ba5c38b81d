use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Explanation reported when either document has no extractable content
pub const INSUFFICIENT_TEXT_EXPLANATION: &str = "Insufficient text to analyze.";

/// Distinct terms of a résumé/job pair with a stable index per term
///
/// Terms are indexed in ascending lexicographic order, so the assignment
/// does not depend on which document is the résumé and which is the job.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build a vocabulary from any collection of terms (duplicates collapse)
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut terms: Vec<String> = terms.into_iter().map(Into::into).collect();
        terms.sort_unstable();
        terms.dedup();

        let index = terms
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();

        Self { terms, index }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

/// TF-IDF weights aligned with a [`Vocabulary`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    pub fn new(weights: Vec<f64>) -> Self {
        Self(weights)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn weights(&self) -> &[f64] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        self.0.iter().map(|w| w * w).sum::<f64>().sqrt()
    }

    /// Dot product over aligned indices
    pub fn dot(&self, other: &WeightVector) -> f64 {
        self.0.iter().zip(&other.0).map(|(a, b)| a * b).sum()
    }

    /// Divide every component by the norm; all-zero vectors are left untouched
    pub fn l2_normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 && norm.is_finite() {
            for w in &mut self.0 {
                *w /= norm;
            }
        }
    }
}

/// Vocabulary plus one weight vector per document
#[derive(Debug, Clone, Default)]
pub struct Vectorized {
    pub vocabulary: Vocabulary,
    pub left: WeightVector,
    pub right: WeightVector,
}

/// Terms weighted in both documents, truncated for display
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordMatches {
    pub keywords: Vec<String>,
    pub total: usize,
}

/// Scored outcome of a résumé/job comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_percentage: f64,
    pub matched_keywords: Vec<String>,
    pub total_matches: usize,
}

impl MatchResult {
    pub fn explanation(&self) -> String {
        format!("Found {} common relevant keywords.", self.total_matches)
    }
}

/// Result of a match computation
///
/// `InsufficientText` shares the numeric score of a genuine zero match and is
/// told apart only through its explanation.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    Matched(MatchResult),
    InsufficientText,
}

impl MatchOutcome {
    pub fn match_percentage(&self) -> f64 {
        match self {
            MatchOutcome::Matched(result) => result.match_percentage,
            MatchOutcome::InsufficientText => 0.0,
        }
    }

    pub fn matched_keywords(&self) -> &[String] {
        match self {
            MatchOutcome::Matched(result) => &result.matched_keywords,
            MatchOutcome::InsufficientText => &[],
        }
    }

    pub fn total_matches(&self) -> usize {
        match self {
            MatchOutcome::Matched(result) => result.total_matches,
            MatchOutcome::InsufficientText => 0,
        }
    }

    pub fn explanation(&self) -> String {
        match self {
            MatchOutcome::Matched(result) => result.explanation(),
            MatchOutcome::InsufficientText => INSUFFICIENT_TEXT_EXPLANATION.to_string(),
        }
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, MatchOutcome::InsufficientText)
    }
}

/// Skill-set comparison between a résumé and a job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub skill_coverage_percent: f64,
}

/// Education level used by the salary estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationLevel {
    Bachelor,
    Master,
    Phd,
}

impl EducationLevel {
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(EducationLevel::Bachelor),
            1 => Some(EducationLevel::Master),
            2 => Some(EducationLevel::Phd),
            _ => None,
        }
    }

    pub fn rank(self) -> u8 {
        match self {
            EducationLevel::Bachelor => 0,
            EducationLevel::Master => 1,
            EducationLevel::Phd => 2,
        }
    }
}

/// Yearly salary estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryEstimate {
    pub predicted_salary: f64,
    pub currency: String,
    pub period: String,
}

/// Linear salary coefficients
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryWeights {
    pub base: f64,
    pub per_year: f64,
    pub per_skill: f64,
    pub per_education_level: f64,
}

impl Default for SalaryWeights {
    fn default() -> Self {
        Self {
            base: 30000.0,
            per_year: 5000.0,
            per_skill: 1000.0,
            per_education_level: 10000.0,
        }
    }
}

/// Per-check explanation of an ATS score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsBreakdown {
    pub length: String,
    pub sections: String,
    pub format: String,
    pub content_quality: String,
}

/// Heuristic ATS readability report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsReport {
    pub ats_score: u32,
    pub breakdown: AtsBreakdown,
    pub sections_found: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_sorted_and_deduplicated() {
        let vocabulary = Vocabulary::from_terms(["sql", "python", "sql", "aws"]);
        assert_eq!(vocabulary.terms(), &["aws", "python", "sql"]);
        assert_eq!(vocabulary.index_of("python"), Some(1));
        assert_eq!(vocabulary.index_of("java"), None);
        assert_eq!(vocabulary.term(2), Some("sql"));
    }

    #[test]
    fn test_weight_vector_normalize() {
        let mut vector = WeightVector::new(vec![3.0, 4.0]);
        vector.l2_normalize();
        assert!((vector.norm() - 1.0).abs() < 1e-12);
        assert!((vector.weights()[0] - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_zero_vector_left_untouched() {
        let mut vector = WeightVector::new(vec![0.0, 0.0]);
        vector.l2_normalize();
        assert_eq!(vector.weights(), &[0.0, 0.0]);
    }

    #[test]
    fn test_insufficient_outcome() {
        let outcome = MatchOutcome::InsufficientText;
        assert_eq!(outcome.match_percentage(), 0.0);
        assert!(outcome.matched_keywords().is_empty());
        assert_eq!(outcome.explanation(), INSUFFICIENT_TEXT_EXPLANATION);
    }

    #[test]
    fn test_education_level_mapping() {
        assert_eq!(EducationLevel::from_level(1), Some(EducationLevel::Master));
        assert_eq!(EducationLevel::from_level(3), None);
        assert_eq!(EducationLevel::Phd.rank(), 2);
    }
}
