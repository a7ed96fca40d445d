use crate::utils::error::{ResearchError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// One entry of the regional dex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesDescriptor {
    pub id: String,
    pub name: String,
    pub dex_national: u16,
    pub dex_hisui: u16,
}

/// Ordered, read-only species catalog. Names are unique within a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    species: Vec<SpeciesDescriptor>,
}

impl Catalog {
    pub fn new(species: Vec<SpeciesDescriptor>) -> Result<Self> {
        if species.is_empty() {
            return Err(ResearchError::CatalogError {
                message: "catalog contains no species".to_string(),
            });
        }

        let mut seen = HashSet::with_capacity(species.len());
        for entry in &species {
            if !seen.insert(entry.name.as_str()) {
                return Err(ResearchError::CatalogError {
                    message: format!("species name '{}' appears more than once", entry.name),
                });
            }
        }

        Ok(Self { species })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SpeciesDescriptor> {
        self.species.iter()
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    pub fn as_slice(&self) -> &[SpeciesDescriptor] {
        &self.species
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a SpeciesDescriptor;
    type IntoIter = std::slice::Iter<'a, SpeciesDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.species.iter()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchRecord {
    #[serde(default)]
    pub level10: bool,
    #[serde(default)]
    pub perfect: bool,
}

/// Decoded research state of one save, keyed by national dex number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResearchSnapshot {
    pub shinycharm: bool,
    pub research_entries: HashMap<u16, ResearchRecord>,
}

/// Roll count per species name.
pub type RollResult = BTreeMap<String, u8>;

/// Body of `POST /api/read-research`: either the rolls or a single error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReadResearchResponse {
    Rolls { shinycharm: bool, rolls: RollResult },
    Error { error: String },
}

impl ReadResearchResponse {
    pub fn error(message: impl Into<String>) -> Self {
        ReadResearchResponse::Error {
            error: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ReadResearchResponse::Error { .. })
    }
}
