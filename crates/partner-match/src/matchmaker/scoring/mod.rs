mod config;
mod rules;

pub use config::ScoringConfig;

use serde::{Deserialize, Serialize};

use super::domain::{AssessmentAnswers, ProgramRecord};

/// Stateless scorer that ranks catalog programs against an answer set.
pub struct MatchEngine {
    config: ScoringConfig,
}

impl MatchEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Fit score for one program, with the per-criterion audit trail.
    pub fn score(&self, answers: &AssessmentAnswers, program: &ProgramRecord) -> MatchScore {
        let (components, score) = rules::score_program(answers, program, &self.config);
        MatchScore { score, components }
    }

    /// Ranked shortlist: every program scored, low fits dropped, sorted by
    /// score descending. The sort is stable, so equal scores keep catalog
    /// order. At most `max_results` entries are returned.
    pub fn rank(&self, answers: &AssessmentAnswers, programs: &[ProgramRecord]) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = programs
            .iter()
            .map(|program| {
                let outcome = self.score(answers, program);
                MatchResult {
                    program: program.clone(),
                    score: outcome.score,
                    score_components: outcome.components,
                }
            })
            .filter(|result| result.score > self.config.minimum_score)
            .collect();

        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(self.config.max_results);
        results
    }
}

/// Named criteria behind each scoring bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchCriterion {
    GeographyOverlap,
    PartnerTypeOverlap,
    ComplianceOverlap,
    BusinessFocusAlignment,
    EnterpriseSegment,
    FastStartTimeline,
}

/// Discrete contribution to a fit score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub criterion: MatchCriterion,
    pub bonus: f32,
    pub note: String,
}

/// Score for one program in isolation.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchScore {
    pub score: f32,
    pub components: Vec<ScoreComponent>,
}

/// One ranked entry: the full program record plus its fit score and the
/// criteria that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub program: ProgramRecord,
    pub score: f32,
    pub score_components: Vec<ScoreComponent>,
}
