//! GapResolver — the entry point for gap analysis and roadmap lookup.
//!
//! Owns the shared, read-only catalog. Cheap to clone; safe to call from any
//! number of handlers concurrently.

use std::sync::Arc;

use crate::analysis::gap::compute_skill_gap;
use crate::analysis::roadmap::resolve_roadmap;
use crate::catalog::SkillCatalog;
use crate::errors::AppError;
use crate::models::roadmap::{RoadmapRequest, RoadmapResult};
use crate::models::skill_gap::{RoleSummary, SkillGapRequest, SkillGapResult};

#[derive(Debug, Clone)]
pub struct GapResolver {
    catalog: Arc<SkillCatalog>,
}

impl GapResolver {
    pub fn new(catalog: Arc<SkillCatalog>) -> Self {
        Self { catalog }
    }

    /// Gap analysis. Requires a non-blank `role` and a `skills` list (which may be empty).
    pub fn analyze(&self, request: &SkillGapRequest) -> Result<SkillGapResult, AppError> {
        let role = require_role(request.role.as_deref())?;
        let skills = request
            .skills
            .as_deref()
            .ok_or_else(|| AppError::Validation("skills is required".to_string()))?;

        Ok(compute_skill_gap(&self.catalog, role, skills))
    }

    /// Roadmap lookup. Requires a non-blank `role`.
    pub fn roadmap(&self, request: &RoadmapRequest) -> Result<RoadmapResult, AppError> {
        let role = require_role(request.role.as_deref())?;
        Ok(resolve_roadmap(&self.catalog, role))
    }

    /// Every catalog role in table order.
    pub fn roles(&self) -> Vec<RoleSummary> {
        self.catalog
            .role_skills
            .iter()
            .map(|(role, skills)| RoleSummary {
                role: role.to_string(),
                required_skills: skills.clone(),
                has_roadmap: self.catalog.roadmaps.get(role).is_some(),
            })
            .collect()
    }
}

fn require_role(role: Option<&str>) -> Result<&str, AppError> {
    match role {
        Some(role) if !role.trim().is_empty() => Ok(role),
        _ => Err(AppError::Validation("role is required".to_string())),
    }
}
