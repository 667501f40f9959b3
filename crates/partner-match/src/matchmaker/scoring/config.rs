use serde::{Deserialize, Serialize};

/// Weights and limits applied when ranking catalog programs against an
/// answer set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub base_score: f32,
    pub geography_bonus: f32,
    pub partner_type_bonus: f32,
    pub compliance_bonus: f32,
    pub business_focus_bonus: f32,
    pub enterprise_bonus: f32,
    pub fast_start_bonus: f32,
    /// Results at or below this score are dropped from rankings.
    pub minimum_score: f32,
    pub max_results: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 0.5,
            geography_bonus: 0.1,
            partner_type_bonus: 0.1,
            compliance_bonus: 0.1,
            business_focus_bonus: 0.15,
            enterprise_bonus: 0.1,
            fast_start_bonus: 0.05,
            minimum_score: 0.3,
            max_results: 10,
        }
    }
}
