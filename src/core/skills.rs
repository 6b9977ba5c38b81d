use crate::core::similarity::round_percentage;
use crate::models::SkillGap;
use std::collections::BTreeSet;

/// Compare résumé skills against job skills
///
/// Skills are compared case-insensitively after trimming; blank entries are
/// ignored. Coverage is |matched| / |job skills| * 100, or 0 when the job
/// lists no skills.
pub fn skill_gap<S: AsRef<str>>(resume_skills: &[S], job_skills: &[S]) -> SkillGap {
    let resume_set = skill_set(resume_skills);
    let job_set = skill_set(job_skills);

    let matched_skills: Vec<String> = job_set.intersection(&resume_set).cloned().collect();
    let missing_skills: Vec<String> = job_set.difference(&resume_set).cloned().collect();

    let skill_coverage_percent = if job_set.is_empty() {
        0.0
    } else {
        round_percentage(matched_skills.len() as f64 / job_set.len() as f64 * 100.0)
    };

    SkillGap {
        matched_skills,
        missing_skills,
        skill_coverage_percent,
    }
}

fn skill_set<S: AsRef<str>>(skills: &[S]) -> BTreeSet<String> {
    skills
        .iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
