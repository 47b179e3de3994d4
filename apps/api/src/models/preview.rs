use serde::{Deserialize, Serialize};

use crate::matching::analyzer::MatchOutcome;

/// Body of `POST /match/preview`. Both fields are required; empty strings are allowed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchPreviewRequest {
    pub cv_text: String,
    pub job_description: String,
}

/// Response of `POST /match/preview`, shaped after the matching outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchPreviewResponse {
    pub match_score: f64,
    pub overall_score: f64,
    pub coverage_ratio: f64,
    pub cv_skills: Vec<String>,
    pub jd_skills: Vec<String>,
    pub covered_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub suggestions: Vec<String>,
}

impl From<MatchOutcome> for MatchPreviewResponse {
    fn from(outcome: MatchOutcome) -> Self {
        let MatchOutcome {
            match_score,
            overall_score,
            coverage_ratio,
            cv_skills,
            jd_skills,
            covered_skills,
            missing_skills,
            strengths,
            gaps,
            suggestions,
        } = outcome;
        Self {
            match_score,
            overall_score,
            coverage_ratio,
            cv_skills,
            jd_skills,
            covered_skills,
            missing_skills,
            strengths,
            gaps,
            suggestions,
        }
    }
}
