use serde::{Deserialize, Serialize};

/// Gap-analysis input. Fields are optional so an absent field surfaces as a
/// validation error instead of an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillGapRequest {
    pub role: Option<String>,
    pub skills: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapResult {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub match_percentage: u8, // 0 – 100
    pub recommendations: Vec<String>,
    /// Same as `missing_skills`: required-skill table order is the learning order.
    pub suggested_learning_order: Vec<String>,
}

/// One row of the role directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSummary {
    pub role: String,
    pub required_skills: Vec<String>,
    pub has_roadmap: bool,
}
