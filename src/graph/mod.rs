use ahash::AHashMap;

use crate::error::CompileError;
use crate::workflow::{WorkflowDefinition, WorkflowItem};

pub mod traversal;

pub use traversal::*;

/// A validated, id-indexed view over a workflow definition.
///
/// Construction enforces the invariants the rest of the pipeline relies on:
/// ids are unique and a start boundary exists. Dangling successor references
/// are tolerated here; traversal and routing treat them as the walk ending
/// and log them where they surface.
#[derive(Debug, Clone)]
pub struct WorkflowGraph {
    items: Vec<WorkflowItem>,
    index: AHashMap<String, usize>,
    start: usize,
    switch_ids: Vec<String>,
}

impl WorkflowGraph {
    pub fn new(definition: &WorkflowDefinition) -> Result<Self, CompileError> {
        let mut index = AHashMap::with_capacity(definition.items.len());
        for (idx, item) in definition.items.iter().enumerate() {
            if index.insert(item.id.clone(), idx).is_some() {
                return Err(CompileError::DuplicateItemId(item.id.clone()));
            }
        }

        let start = definition
            .items
            .iter()
            .position(|item| item.kind.is_start_boundary())
            .ok_or(CompileError::MissingStartBoundary)?;

        let switch_ids = definition.switch_ids();

        Ok(Self {
            items: definition.items.clone(),
            index,
            start,
            switch_ids,
        })
    }

    pub fn get(&self, id: &str) -> Option<&WorkflowItem> {
        self.index.get(id).map(|&idx| &self.items[idx])
    }

    pub fn start(&self) -> &WorkflowItem {
        &self.items[self.start]
    }

    pub fn items(&self) -> &[WorkflowItem] {
        &self.items
    }

    /// Switch ids in declaration order; this order fixes the bit positions
    /// used by assignment enumeration.
    pub fn switch_ids(&self) -> &[String] {
        &self.switch_ids
    }
}
