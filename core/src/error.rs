use thiserror::Error;

/// Errors raised while populating a [`GraphStore`](crate::GraphStore).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("person '{0}' is already registered")]
    DuplicatePerson(String),

    #[error("work '{0}' is already registered")]
    DuplicateWork(String),

    #[error("unknown person '{0}'")]
    UnknownPerson(String),

    #[error("unknown work '{0}'")]
    UnknownWork(String),
}

/// `remove()` was called on a frontier with nothing left in it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierError {
    #[error("frontier is empty")]
    Empty,
}

/// Internal search failures. Both variants indicate a logic defect in the
/// engine; "no path" is never an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error(transparent)]
    Frontier(#[from] FrontierError),

    #[error("search tree parent chain is broken at node {node}")]
    BrokenParentChain { node: usize },
}
