// Core algorithm exports
pub mod ats;
pub mod error;
pub mod keywords;
pub mod matcher;
pub mod normalizer;
pub mod salary;
pub mod similarity;
pub mod skills;
pub mod stop_words;
pub mod vectorizer;

pub use ats::AtsChecker;
pub use error::AnalysisError;
pub use keywords::extract;
pub use matcher::Matcher;
pub use normalizer::normalize;
pub use salary::SalaryModel;
pub use similarity::score;
pub use skills::skill_gap;
pub use stop_words::{StopWords, StopWordsError};
pub use vectorizer::vectorize;
