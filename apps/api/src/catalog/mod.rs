//! Skill catalog — the static reference tables behind gap analysis.
//!
//! Loaded once at startup, either from the catalog compiled into the binary
//! or from an operator-supplied JSON file (`CATALOG_PATH`). Read-only after load.

pub mod role_table;

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::models::roadmap::RoadmapPhase;

pub use role_table::RoleTable;

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{table} table contains an empty role name")]
    EmptyRoleName { table: &'static str },

    #[error("{table} table lists role '{role}' more than once")]
    DuplicateRole { table: &'static str, role: String },
}

// ────────────────────────────────────────────────────────────────────────────
// On-disk format
// ────────────────────────────────────────────────────────────────────────────

// Roles and roadmaps are arrays, not objects, so table order survives parsing.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    aliases: HashMap<String, String>,
    #[serde(default)]
    roles: Vec<RoleSkillsEntry>,
    #[serde(default)]
    roadmaps: Vec<RoleRoadmapEntry>,
}

#[derive(Debug, Deserialize)]
struct RoleSkillsEntry {
    name: String,
    skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RoleRoadmapEntry {
    role: String,
    phases: Vec<RoadmapPhase>,
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory tables
// ────────────────────────────────────────────────────────────────────────────

/// Lower-case alias → canonical display name (e.g. `"js"` → `"JavaScript"`).
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    aliases: HashMap<String, String>,
}

impl AliasTable {
    /// Keys are trimmed and lower-cased so lookups match normalized input.
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            aliases: pairs
                .into_iter()
                .map(|(alias, canonical)| (alias.as_ref().trim().to_lowercase(), canonical.into()))
                .collect(),
        }
    }

    /// Looks up an already trimmed, lower-cased token.
    pub fn canonical(&self, lowered: &str) -> Option<&str> {
        self.aliases.get(lowered).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }
}

/// All reference tables used by the resolver.
#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    pub aliases: AliasTable,
    /// Role → required skills, in display/priority order.
    pub role_skills: RoleTable<Vec<String>>,
    pub roadmaps: RoleTable<Vec<RoadmapPhase>>,
}

impl SkillCatalog {
    /// Builds a catalog from already-constructed tables, validating role keys.
    /// `RoleTable` keys arrive trimmed.
    pub fn new(
        aliases: AliasTable,
        role_skills: RoleTable<Vec<String>>,
        roadmaps: RoleTable<Vec<RoadmapPhase>>,
    ) -> Result<Self, CatalogError> {
        check_role_keys("role skills", role_skills.keys())?;
        check_role_keys("roadmap", roadmaps.keys())?;
        Ok(Self {
            aliases,
            role_skills,
            roadmaps,
        })
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let role_skills = RoleTable::new(
            file.roles
                .into_iter()
                .map(|entry| (entry.name, entry.skills))
                .collect(),
        );
        let roadmaps = RoleTable::new(
            file.roadmaps
                .into_iter()
                .map(|entry| (entry.role, entry.phases))
                .collect(),
        );

        Self::new(AliasTable::new(file.aliases), role_skills, roadmaps)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Loads the operator catalog when a path is configured, the builtin one otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog = match path {
            Some(path) => {
                info!("Loading skill catalog from {}", path.display());
                Self::from_path(path)?
            }
            None => Self::builtin()?,
        };

        info!(
            "Skill catalog ready: {} aliases, {} roles, {} roadmaps",
            catalog.aliases.len(),
            catalog.role_skills.len(),
            catalog.roadmaps.len()
        );
        Ok(catalog)
    }
}

fn check_role_keys<'a>(
    table: &'static str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for key in keys {
        if key.is_empty() {
            return Err(CatalogError::EmptyRoleName { table });
        }
        if !seen.insert(key.to_lowercase()) {
            return Err(CatalogError::DuplicateRole {
                table,
                role: key.to_string(),
            });
        }
    }
    Ok(())
}
