//! # Flowgrid - Workflow Diagram Compilation Engine
//!
//! **Flowgrid** transforms branching workflow definitions into collision-free
//! flowchart layouts on an integer grid. Every decision branch is enumerated,
//! every reachable node receives a fixed cell, and every edge is routed as a
//! chain of orthogonal connector tiles that a renderer can draw directly.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical internal model
//! of a workflow definition. The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your custom workflow format into your own Rust structs.
//! 2.  **Convert to Flowgrid's Model**: Implement the [`IntoWorkflow`](workflow::IntoWorkflow)
//!     trait for your structs to provide a translation layer into a
//!     [`WorkflowDefinition`](workflow::WorkflowDefinition).
//! 3.  **Compile**: Use [`DiagramCompiler::builder`](compiler::DiagramCompiler::builder) to
//!     create a compiler for the definition. Compilation enumerates every switch outcome,
//!     tallies how often each node is visited across the resulting paths, places nodes on
//!     the grid and routes the connectors between them.
//! 4.  **Render**: Walk the [`WorkflowDiagram`](workflow::WorkflowDiagram)'s connected map
//!     points and draw each tile at its cell.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowgrid::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // A workflow with one decision: check a condition, run one of two
//! // actions, then finish.
//! let workflow = WorkflowDefinition::new(vec![
//!     WorkflowItem::sequential(
//!         "start",
//!         "Start",
//!         ItemKind::Boundary { is_start: true, trigger_type: Some("manual".to_string()) },
//!         Some("check".to_string()),
//!     ),
//!     WorkflowItem::switch(
//!         "check",
//!         "Temperature above limit?",
//!         "threshold",
//!         Some("cool_down".to_string()),
//!         Some("log".to_string()),
//!     ),
//!     WorkflowItem::sequential(
//!         "cool_down",
//!         "Activate cooling",
//!         ItemKind::Action { option_id: "cooling".to_string() },
//!         Some("end".to_string()),
//!     ),
//!     WorkflowItem::sequential(
//!         "log",
//!         "Write log entry",
//!         ItemKind::Action { option_id: "log".to_string() },
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
//!
//! // Every authored node has a grid position; the connected map adds the
//! // routed connector and marker tiles.
//! let check = diagram.item_point("check").ok_or("check not placed")?;
//! assert_eq!(check.position(), (0, 2));
//! assert!(diagram.connected_map_points.len() > diagram.map_points.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Determinism
//!
//! Compilation is pure: no clocks, no randomness, no I/O. The same
//! definition and builder settings always produce an identical diagram,
//! which makes layouts diffable and safe to cache.

pub mod compiler;
pub mod error;
pub mod graph;
pub mod map;
pub mod prelude;
pub mod workflow;
