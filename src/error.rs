use thiserror::Error;

/// Errors that can occur while replaying a workflow traversal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraversalError {
    #[error(
        "Traversal exceeded {limit} steps without reaching an end boundary (last visited node '{node_id}')"
    )]
    InfiniteLoop { node_id: String, limit: usize },
}

/// Errors that can occur during the diagram compilation phase.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error(transparent)]
    Traversal(#[from] TraversalError),

    #[error("Workflow has no start boundary item")]
    MissingStartBoundary,

    #[error("Item id '{0}' is declared more than once in the workflow")]
    DuplicateItemId(String),

    #[error("Workflow has {count} switches, exceeding the enumeration limit of {limit}")]
    TooManySwitches { count: usize, limit: usize },
}

/// Errors that can occur when converting a custom user format into a `WorkflowDefinition`.
#[derive(Error, Debug, Clone)]
pub enum WorkflowConversionError {
    #[error("Invalid workflow data: {0}")]
    ValidationError(String),
}
