//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the flowgrid crate.
//! Import this module to get access to the core functionality without having to import
//! each type individually.
//!
//! # Example
//!
//! ```rust
//! // Use the prelude to get easy access to all the core types.
//! use flowgrid::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let workflow = WorkflowDefinition::new(vec![
//!     WorkflowItem::sequential(
//!         "start",
//!         "Start",
//!         ItemKind::Boundary { is_start: true, trigger_type: None },
//!         Some("end".to_string()),
//!     ),
//!     WorkflowItem::sequential(
//!         "end",
//!         "End",
//!         ItemKind::Boundary { is_start: false, trigger_type: None },
//!         None,
//!     ),
//! ]);
//!
//! let diagram = DiagramCompiler::builder(workflow).build().compile()?;
//! println!("{} tiles placed", diagram.connected_map_points.len());
//! # Ok(())
//! # }
//! ```

// Core compilation
pub use crate::compiler::{DiagramCompiler, DiagramCompilerBuilder};

// Workflow model
pub use crate::workflow::{
    IntoWorkflow, ItemKind, RenderPreferences, WorkflowDefinition, WorkflowDiagram, WorkflowItem,
};

// Grid map types
pub use crate::map::{
    BranchMarker, BranchTag, Connector, ConnectorKind, MapPoint, SwitchTopology, Tile,
};

// Traversal types
pub use crate::graph::WorkflowGraph;
pub use crate::graph::traversal::{SwitchAssignment, Traversal, VisitedItem};

// Error types
pub use crate::error::{CompileError, TraversalError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
