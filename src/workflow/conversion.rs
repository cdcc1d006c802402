use super::definition::WorkflowDefinition;
use crate::error::WorkflowConversionError;

/// A trait for custom data models that can be converted into a `WorkflowDefinition`.
///
/// The textual workflow format and its parser live outside this crate. By
/// implementing this trait on your parsed representation you provide the
/// translation layer that lets the diagram compiler process your format.
///
/// # Example
///
/// ```rust
/// use flowgrid::prelude::*;
/// use flowgrid::error::WorkflowConversionError;
///
/// // 1. Your parser's output structs.
/// struct MyStep { id: String, label: String, next: Option<String> }
/// struct MyWorkflow { steps: Vec<MyStep> }
///
/// // 2. Implement `IntoWorkflow` for the top-level struct.
/// impl IntoWorkflow for MyWorkflow {
///     fn into_workflow(self) -> std::result::Result<WorkflowDefinition, WorkflowConversionError> {
///         let items = self
///             .steps
///             .into_iter()
///             .map(|step| {
///                 WorkflowItem::sequential(
///                     step.id,
///                     step.label,
///                     ItemKind::Action { option_id: "default".to_string() },
///                     step.next,
///                 )
///             })
///             .collect();
///         Ok(WorkflowDefinition::new(items))
///     }
/// }
/// ```
pub trait IntoWorkflow {
    /// Consumes the object and converts it into a compilable workflow definition.
    fn into_workflow(self) -> Result<WorkflowDefinition, WorkflowConversionError>;
}

impl IntoWorkflow for WorkflowDefinition {
    fn into_workflow(self) -> Result<WorkflowDefinition, WorkflowConversionError> {
        Ok(self)
    }
}
