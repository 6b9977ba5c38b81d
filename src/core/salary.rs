use crate::core::error::AnalysisError;
use crate::models::{EducationLevel, SalaryEstimate, SalaryWeights};

pub const CURRENCY: &str = "USD";
pub const PERIOD: &str = "yearly";

/// Linear salary estimator
///
/// salary = base + years * per_year + skills * per_skill + education * per_education_level
#[derive(Debug, Clone, Copy, Default)]
pub struct SalaryModel {
    weights: SalaryWeights,
}

impl SalaryModel {
    pub fn new(weights: SalaryWeights) -> Self {
        Self { weights }
    }

    pub fn estimate(
        &self,
        years_experience: f64,
        skill_count: u32,
        education: EducationLevel,
    ) -> Result<SalaryEstimate, AnalysisError> {
        if !years_experience.is_finite() || years_experience < 0.0 {
            return Err(AnalysisError::InvalidInput(format!(
                "years_experience must be a non-negative number, got {}",
                years_experience
            )));
        }

        let predicted_salary = self.weights.base
            + years_experience * self.weights.per_year
            + skill_count as f64 * self.weights.per_skill
            + education.rank() as f64 * self.weights.per_education_level;

        if !predicted_salary.is_finite() {
            return Err(AnalysisError::NonFinite("predicted_salary".to_string()));
        }

        Ok(SalaryEstimate {
            predicted_salary,
            currency: CURRENCY.to_string(),
            period: PERIOD.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_formula() {
        let model = SalaryModel::default();
        let estimate = model.estimate(3.0, 5, EducationLevel::Master).unwrap();
        // 30000 + 15000 + 5000 + 10000
        assert_eq!(estimate.predicted_salary, 60000.0);
        assert_eq!(estimate.currency, "USD");
        assert_eq!(estimate.period, "yearly");
    }

    #[test]
    fn test_baseline() {
        let model = SalaryModel::default();
        let estimate = model.estimate(0.0, 0, EducationLevel::Bachelor).unwrap();
        assert_eq!(estimate.predicted_salary, 30000.0);
    }

    #[test]
    fn test_fractional_years() {
        let model = SalaryModel::default();
        let estimate = model.estimate(1.5, 0, EducationLevel::Phd).unwrap();
        assert_eq!(estimate.predicted_salary, 57500.0);
    }

    #[test]
    fn test_negative_years_rejected() {
        let model = SalaryModel::default();
        assert!(matches!(
            model.estimate(-1.0, 0, EducationLevel::Bachelor),
            Err(AnalysisError::InvalidInput(_))
        ));
        assert!(model.estimate(f64::NAN, 0, EducationLevel::Bachelor).is_err());
    }

    #[test]
    fn test_custom_weights() {
        let model = SalaryModel::new(SalaryWeights {
            base: 50000.0,
            per_year: 2000.0,
            per_skill: 0.0,
            per_education_level: 0.0,
        });
        let estimate = model.estimate(10.0, 20, EducationLevel::Phd).unwrap();
        assert_eq!(estimate.predicted_salary, 70000.0);
    }

    #[test]
    fn test_overflow_rejected() {
        let model = SalaryModel::new(SalaryWeights {
            base: f64::MAX,
            per_year: f64::MAX,
            per_skill: 0.0,
            per_education_level: 0.0,
        });
        assert!(matches!(
            model.estimate(2.0, 0, EducationLevel::Bachelor),
            Err(AnalysisError::NonFinite(_))
        ));
    }
}
