//! Workshop registry.
//!
//! A contiguous arena of workshops plus an ID index. Allocation passes hold
//! plain `usize` handles into the arena, so aliasing questions reduce to
//! ordinary slice borrows. Iteration preserves insertion order, which keeps
//! the fallback scan deterministic.

use std::collections::HashMap;

use thiserror::Error;

use super::{Discipline, Workshop};

/// Registry construction error.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two workshops share the same ID.
    #[error("duplicate workshop ID: {0}")]
    DuplicateId(String),
}

/// ID-indexed arena of workshops.
#[derive(Debug, Clone, Default)]
pub struct WorkshopRegistry {
    workshops: Vec<Workshop>,
    index: HashMap<String, usize>,
}

impl WorkshopRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a workshop, returning its arena index.
    pub fn insert(&mut self, workshop: Workshop) -> Result<usize, RegistryError> {
        if self.index.contains_key(&workshop.id) {
            return Err(RegistryError::DuplicateId(workshop.id.clone()));
        }
        let idx = self.workshops.len();
        self.index.insert(workshop.id.clone(), idx);
        self.workshops.push(workshop);
        Ok(idx)
    }

    /// Resolves a workshop ID to its arena index.
    pub fn lookup(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Workshop at an arena index.
    pub fn get(&self, idx: usize) -> &Workshop {
        &self.workshops[idx]
    }

    /// Mutable workshop at an arena index.
    pub fn get_mut(&mut self, idx: usize) -> &mut Workshop {
        &mut self.workshops[idx]
    }

    /// All workshops in insertion order.
    pub fn workshops(&self) -> &[Workshop] {
        &self.workshops
    }

    /// Arena indices of one discipline's workshops, in insertion order.
    pub fn indices_for(&self, discipline: Discipline) -> Vec<usize> {
        self.workshops
            .iter()
            .enumerate()
            .filter(|(_, w)| w.discipline == discipline)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Number of registered workshops.
    pub fn len(&self) -> usize {
        self.workshops.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.workshops.is_empty()
    }
}
