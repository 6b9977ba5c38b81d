use crate::models::{AtsBreakdown, AtsReport};

/// Section headings an ATS expects to find
pub const REQUIRED_SECTIONS: [&str; 4] = ["experience", "education", "skills", "projects"];

const IDEAL_LENGTH_POINTS: u32 = 10;
const OTHER_LENGTH_POINTS: u32 = 5;
const SECTION_POINTS: u32 = 5;
const FORMAT_POINTS: u32 = 10;
const CONTENT_BASELINE_POINTS: u32 = 40;
const MAX_SCORE: u32 = 100;

/// Points-based readability checklist
///
/// Checks, summed and capped at 100:
/// - length: 400-1000 words scores 10, anything else 5
/// - sections: 5 per heading found among [`REQUIRED_SECTIONS`]
/// - format: 10, the text was extracted so it is readable
/// - content quality: 40 baseline
#[derive(Debug, Clone, Copy)]
pub struct AtsChecker {
    min_words: usize,
    max_words: usize,
}

impl AtsChecker {
    pub fn new(min_words: usize, max_words: usize) -> Self {
        Self {
            min_words,
            max_words,
        }
    }

    pub fn score(&self, resume_text: &str) -> AtsReport {
        let text = resume_text.to_lowercase();
        let mut score = 0;

        let word_count = text.split_whitespace().count();
        let length = if (self.min_words..=self.max_words).contains(&word_count) {
            score += IDEAL_LENGTH_POINTS;
            "Ideal"
        } else {
            score += OTHER_LENGTH_POINTS;
            "Too short or too long"
        };

        let sections_found: Vec<String> = REQUIRED_SECTIONS
            .iter()
            .filter(|section| text.contains(*section))
            .map(|section| section.to_string())
            .collect();
        score += sections_found.len() as u32 * SECTION_POINTS;

        score += FORMAT_POINTS;
        score += CONTENT_BASELINE_POINTS;

        AtsReport {
            ats_score: cap_score(score),
            breakdown: AtsBreakdown {
                length: length.to_string(),
                sections: format!(
                    "Found {}/{} essential sections",
                    sections_found.len(),
                    REQUIRED_SECTIONS.len()
                ),
                format: "Readable text".to_string(),
                content_quality: "Standard content analysis passed".to_string(),
            },
            sections_found,
        }
    }
}

/// Clamp a checklist total to the maximum score
#[inline]
fn cap_score(total: u32) -> u32 {
    total.min(MAX_SCORE)
}

impl Default for AtsChecker {
    fn default() -> Self {
        Self::new(400, 1000)
    }
}
