//! Skill-name normalization against the alias table.

use crate::catalog::AliasTable;

/// Maps raw skill tokens to canonical display names.
///
/// Only recognised aliases are rewritten; unknown tokens come back trimmed
/// with their original casing.
#[derive(Debug, Clone, Copy)]
pub struct SkillNormalizer<'a> {
    aliases: &'a AliasTable,
}

impl<'a> SkillNormalizer<'a> {
    pub fn new(aliases: &'a AliasTable) -> Self {
        Self { aliases }
    }

    pub fn normalize(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        match self.aliases.canonical(&trimmed.to_lowercase()) {
            Some(canonical) => canonical.to_string(),
            None => trimmed.to_string(),
        }
    }

    /// Normalized and lower-cased, for membership comparisons.
    pub fn match_key(&self, raw: &str) -> String {
        self.normalize(raw).to_lowercase()
    }
}
