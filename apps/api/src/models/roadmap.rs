use serde::{Deserialize, Serialize};

/// A named stage of a learning plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub phase: String,
    pub duration: String, // free-text range, e.g. "1-2 months"
    pub topics: Vec<String>,
    pub description: String,
}

impl RoadmapPhase {
    pub fn new(
        phase: impl Into<String>,
        duration: &str,
        topics: &[&str],
        description: &str,
    ) -> Self {
        Self {
            phase: phase.into(),
            duration: duration.to_string(),
            topics: topics.iter().map(|t| t.to_string()).collect(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoadmapRequest {
    pub role: Option<String>,
}

/// Resolved roadmap. `role` is the canonical key when the role resolved,
/// otherwise the caller's raw input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadmapResult {
    pub role: String,
    pub phases: Vec<RoadmapPhase>,
}
