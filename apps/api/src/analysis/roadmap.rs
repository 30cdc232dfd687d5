//! Roadmap resolution — canned learning plans keyed by role.

use tracing::debug;

use crate::catalog::SkillCatalog;
use crate::models::roadmap::{RoadmapPhase, RoadmapResult};

/// Resolves a role to its learning roadmap.
///
/// Resolved roles return the catalog key and its phases. Anything else gets
/// the three-phase generic plan, labelled with the caller's raw role string.
pub fn resolve_roadmap(catalog: &SkillCatalog, role: &str) -> RoadmapResult {
    match catalog.roadmaps.resolve(role) {
        Some((key, phases)) => {
            debug!("Roadmap for '{role}' resolved to '{key}'");
            RoadmapResult {
                role: key.to_string(),
                phases: phases.clone(),
            }
        }
        None => {
            debug!("No roadmap for '{role}', generating generic plan");
            RoadmapResult {
                role: role.to_string(),
                phases: generic_roadmap(role),
            }
        }
    }
}

pub fn generic_roadmap(role: &str) -> Vec<RoadmapPhase> {
    vec![
        RoadmapPhase::new(
            format!("Phase 1: {role} Basics"),
            "1-2 months",
            &["Core Language Syntax", "Basic Tools", "Environment Setup", "Version Control"],
            "Start with the absolute fundamentals.",
        ),
        RoadmapPhase::new(
            "Phase 2: Intermediate Skills",
            "2 months",
            &["Frameworks", "Database Interaction", "API usage", "Debugging"],
            "Start building small, functional applications.",
        ),
        RoadmapPhase::new(
            "Phase 3: Advanced Concepts",
            "2 months",
            &["Performance", "Security", "Deployment", "Best Practices"],
            "Refine your code for professional standards.",
        ),
    ]
}
