//! Skill gap — compares a user's skills with a role's required-skill list.
//!
//! Algorithm:
//! 1. Resolve the role against the role-skill table (exact, then contained key).
//!    Unknown roles fall back to `GENERIC_REQUIRED_SKILLS`.
//! 2. Normalize both sides through the alias table and compare lower-cased.
//! 3. Matched/missing keep the required-skill table order and display strings.
//! 4. match_percentage = round(matched / required × 100), 0 for an empty list
//! 5. Pick a recommendation tier from the percentage.

use std::collections::HashSet;

use tracing::debug;

use crate::analysis::normalizer::SkillNormalizer;
use crate::catalog::SkillCatalog;
use crate::models::skill_gap::SkillGapResult;

/// Required skills for a role that is not in the catalog.
pub const GENERIC_REQUIRED_SKILLS: [&str; 4] = ["HTML", "JavaScript", "Git", "Problem Solving"];

const FULLY_QUALIFIED: &str = "You are fully qualified! Focus on building unique projects.";
const SECOND_FOCUS_FALLBACK: &str = "advanced concepts";

// ────────────────────────────────────────────────────────────────────────────
// Recommendation tiers
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationTier {
    /// 100%
    Qualified,
    /// 51 – 99%
    Advancing,
    /// 0 – 50%
    Foundational,
}

impl RecommendationTier {
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            100 => RecommendationTier::Qualified,
            51..=99 => RecommendationTier::Advancing,
            _ => RecommendationTier::Foundational,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Runs the gap analysis. `role` must already be validated as non-blank.
pub fn compute_skill_gap(catalog: &SkillCatalog, role: &str, skills: &[String]) -> SkillGapResult {
    let normalizer = SkillNormalizer::new(&catalog.aliases);

    let fallback: Vec<String>;
    let required: &[String] = match catalog.role_skills.resolve(role) {
        Some((key, required)) => {
            debug!("Role '{role}' resolved to '{key}'");
            required.as_slice()
        }
        None => {
            debug!("Role '{role}' not in catalog, using generic skill list");
            fallback = GENERIC_REQUIRED_SKILLS.iter().map(|s| s.to_string()).collect();
            fallback.as_slice()
        }
    };

    let user_skills: HashSet<String> = skills.iter().map(|s| normalizer.match_key(s)).collect();

    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = required
        .iter()
        .cloned()
        .partition(|skill| user_skills.contains(&normalizer.match_key(skill)));

    let match_percentage = match_percentage(matched_skills.len(), required.len());
    let recommendations = build_recommendations(match_percentage, &missing_skills);

    SkillGapResult {
        matched_skills,
        suggested_learning_order: missing_skills.clone(),
        missing_skills,
        match_percentage,
        recommendations,
    }
}

/// Rounded percentage; an empty required list scores 0 instead of NaN.
pub fn match_percentage(matched: usize, required: usize) -> u8 {
    if required == 0 {
        return 0;
    }
    ((matched as f64 / required as f64) * 100.0).round() as u8
}

/// Builds the tiered recommendation messages from score and missing skills.
pub fn build_recommendations(percentage: u8, missing: &[String]) -> Vec<String> {
    match RecommendationTier::from_percentage(percentage) {
        RecommendationTier::Qualified => vec![FULLY_QUALIFIED.to_string()],
        RecommendationTier::Advancing => {
            let first = missing.first().map(String::as_str).unwrap_or_default();
            let second = missing
                .get(1)
                .map(String::as_str)
                .unwrap_or(SECOND_FOCUS_FALLBACK);
            vec![format!("Focus on {first} and {second}.")]
        }
        RecommendationTier::Foundational => {
            let first_two: Vec<&str> = missing.iter().take(2).map(String::as_str).collect();
            vec![
                format!("Start with foundational topics: {}", first_two.join(", ")),
                format!("Focus on {} missing core skills", missing.len()),
            ]
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
