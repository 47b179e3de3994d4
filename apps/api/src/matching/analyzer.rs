//! Match analysis — scores a CV against a job description.
//!
//! Default: `KeywordMatcher` (pure-Rust, deterministic, no I/O).
//! `AppState` holds an `Arc<dyn MatchingService>` so other backends can be swapped in.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::matching::skills::{content_words, extract_skills};

/// Share of `overall_score` driven by skill coverage; the rest is vocabulary overlap.
const SKILL_WEIGHT: f64 = 0.7;
const MAX_SKILL_SUGGESTIONS: usize = 3;
/// Decimal places kept on every reported score.
const SCORE_PRECISION: i32 = 3;

/// Result of comparing one CV with one job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub match_score: f64,   // 0.0 – 1.0, skill coverage
    pub overall_score: f64, // 0.0 – 1.0, coverage blended with vocabulary overlap
    pub coverage_ratio: f64, // 0.0 – 1.0
    pub cv_skills: Vec<String>,
    pub jd_skills: Vec<String>,
    pub covered_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub suggestions: Vec<String>,
}

/// The matching service. Implement this to swap scoring backends without
/// touching the endpoint or persistence code. Scores are fractions in `0.0..=1.0`.
pub trait MatchingService: Send + Sync {
    fn analyze_match(&self, cv_text: &str, jd_text: &str) -> Result<MatchOutcome>;
}

/// Skill-vocabulary matcher.
///
/// Algorithm:
/// 1. Extract known skills from both texts.
/// 2. coverage_ratio = |JD skills found in CV| / |JD skills| (0 when the JD names none)
/// 3. match_score = coverage_ratio
/// 4. overall_score = 0.7 × coverage + 0.3 × share of JD content words present in the CV;
///    pure vocabulary overlap when the JD names no known skills
pub struct KeywordMatcher;

impl MatchingService for KeywordMatcher {
    fn analyze_match(&self, cv_text: &str, jd_text: &str) -> Result<MatchOutcome> {
        Ok(analyze_match(cv_text, jd_text))
    }
}

pub fn analyze_match(cv_text: &str, jd_text: &str) -> MatchOutcome {
    let cv_skills = extract_skills(cv_text);
    let jd_skills = extract_skills(jd_text);

    let (covered_skills, missing_skills): (Vec<String>, Vec<String>) = jd_skills
        .iter()
        .cloned()
        .partition(|skill| cv_skills.contains(skill));

    let coverage_ratio = if jd_skills.is_empty() {
        0.0
    } else {
        covered_skills.len() as f64 / jd_skills.len() as f64
    };

    let overlap = vocabulary_overlap(cv_text, jd_text);
    let overall = if jd_skills.is_empty() {
        overlap
    } else {
        SKILL_WEIGHT * coverage_ratio + (1.0 - SKILL_WEIGHT) * overlap
    };

    let strengths = covered_skills
        .iter()
        .map(|s| format!("{s} appears in both your CV and the job description"))
        .collect();
    let gaps = missing_skills
        .iter()
        .map(|s| format!("The job description asks for {s}, which your CV does not mention"))
        .collect();
    let suggestions = build_suggestions(&cv_skills, &jd_skills, &missing_skills);

    MatchOutcome {
        match_score: to_score(coverage_ratio),
        overall_score: to_score(overall),
        coverage_ratio: to_score(coverage_ratio),
        cv_skills,
        jd_skills,
        covered_skills,
        missing_skills,
        strengths,
        gaps,
        suggestions,
    }
}

/// Share of distinct JD content words that also occur in the CV.
fn vocabulary_overlap(cv_text: &str, jd_text: &str) -> f64 {
    let jd_words = content_words(jd_text);
    if jd_words.is_empty() {
        return 0.0;
    }
    let cv_words = content_words(cv_text);
    jd_words.intersection(&cv_words).count() as f64 / jd_words.len() as f64
}

/// Clamps to `0.0..=1.0` and rounds to `SCORE_PRECISION` decimals.
fn to_score(ratio: f64) -> f64 {
    let scale = 10_f64.powi(SCORE_PRECISION);
    (ratio.clamp(0.0, 1.0) * scale).round() / scale
}

/// Builds human-readable next steps from the skill comparison.
fn build_suggestions(cv_skills: &[String], jd_skills: &[String], missing: &[String]) -> Vec<String> {
    let mut suggestions = Vec::new();

    if jd_skills.is_empty() {
        suggestions.push(
            "The job description names no recognizable skills; compare its responsibilities with your experience directly.".to_string(),
        );
    } else if missing.is_empty() {
        suggestions.push(
            "Your CV covers every listed skill. Quantify your impact with each of them to stand out.".to_string(),
        );
    }

    if cv_skills.is_empty() {
        suggestions.push("List your technical skills explicitly so they can be recognized.".to_string());
    }

    suggestions.extend(
        missing
            .iter()
            .take(MAX_SKILL_SUGGESTIONS)
            .map(|s| format!("If you have worked with {s}, add a concrete example to your CV.")),
    );

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_backend_pair_is_full_coverage() {
        let outcome = analyze_match(
            "Python, SQL, 3 years backend",
            "Looking for backend engineer, Python required",
        );
        assert_eq!(outcome.jd_skills, vec!["Python", "Backend"]);
        assert_eq!(outcome.covered_skills, vec!["Python", "Backend"]);
        assert!(outcome.missing_skills.is_empty());
        assert!((outcome.match_score - 1.0).abs() < f64::EPSILON);
        assert!((outcome.coverage_ratio - 1.0).abs() < f64::EPSILON);
        assert!(outcome.overall_score > 0.0 && outcome.overall_score <= 1.0);
        assert_eq!(outcome.strengths.len(), 2);
    }

    #[test]
    fn test_missing_skill_creates_gap_and_suggestion() {
        let outcome = analyze_match("Python developer", "Python and Docker required");
        assert_eq!(outcome.covered_skills, vec!["Python"]);
        assert_eq!(outcome.missing_skills, vec!["Docker"]);
        assert!((outcome.match_score - 0.5).abs() < f64::EPSILON);
        assert_eq!(outcome.gaps.len(), 1);
        assert!(outcome.suggestions.iter().any(|s| s.contains("Docker")));
    }

    #[test]
    fn test_jd_without_known_skills_has_zero_coverage() {
        let outcome = analyze_match("Python developer", "Friendly person wanted");
        assert!(outcome.jd_skills.is_empty());
        assert_eq!(outcome.match_score, 0.0);
        assert_eq!(outcome.coverage_ratio, 0.0);
        assert!(!outcome.suggestions.is_empty());
    }

    #[test]
    fn test_empty_inputs_do_not_panic() {
        let outcome = analyze_match("", "");
        assert_eq!(outcome.match_score, 0.0);
        assert_eq!(outcome.overall_score, 0.0);
    }

    #[test]
    fn test_scores_are_fractions() {
        let outcome = analyze_match(
            "Rust Golang Python Docker Kubernetes AWS",
            "Rust Golang Python Docker Kubernetes AWS Terraform",
        );
        for score in [outcome.match_score, outcome.overall_score, outcome.coverage_ratio] {
            assert!((0.0..=1.0).contains(&score), "score {score} out of range");
        }
        // 6 of 7 skills, rounded to three decimals
        assert!((outcome.match_score - 0.857).abs() < f64::EPSILON);
    }

    #[test]
    fn test_to_score_clamps_and_rounds() {
        assert_eq!(to_score(1.7), 1.0);
        assert_eq!(to_score(-0.2), 0.0);
        assert!((to_score(2.0 / 3.0) - 0.667).abs() < f64::EPSILON);
    }

    #[test]
    fn test_suggestions_capped_at_three_missing_skills() {
        let outcome = analyze_match("", "Rust, Kafka, Redis, Docker, Terraform");
        let skill_suggestions = outcome
            .suggestions
            .iter()
            .filter(|s| s.starts_with("If you have worked with"))
            .count();
        assert_eq!(skill_suggestions, MAX_SKILL_SUGGESTIONS);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let cv = "Senior engineer: Rust, PostgreSQL, Kubernetes";
        let jd = "We need Rust and Kafka on Kubernetes";
        assert_eq!(analyze_match(cv, jd), analyze_match(cv, jd));
    }

    #[test]
    fn test_keyword_matcher_delegates_to_analyze_match() {
        let cv = "Java Spring";
        let jd = "Spring Boot developer";
        assert_eq!(
            KeywordMatcher.analyze_match(cv, jd).unwrap(),
            analyze_match(cv, jd)
        );
    }
}
