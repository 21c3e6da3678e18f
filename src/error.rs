use crate::node::{Node, NumNodes};

/// Errors raised while building or solving.
///
/// The first group rejects malformed input before any phase runs. The second group reports
/// a broken internal invariant of the solver; they never occur for well-formed input and a
/// solve that hits one returns no (partial) matching.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("self-loop at node {0}")]
    SelfLoop(Node),

    #[error("parallel edge between nodes {0} and {1}")]
    ParallelEdge(Node, Node),

    #[error("node {0} lists {1} as neighbor, but not vice versa")]
    AsymmetricAdjacency(Node, Node),

    #[error("node {node} is out of range for a graph with {n} nodes")]
    NodeOutOfRange { node: Node, n: NumNodes },

    #[error("unknown node label: {0}")]
    UnknownLabel(String),

    #[error("no cycle of half-edges closes at node {0}")]
    MissingHalfCycle(Node),

    #[error("predecessor chain starting at node {0} does not reach a root")]
    BrokenForest(Node),

    #[error("capacity of node {node} exceeded: incident values sum to {halves}/2")]
    CapacityExceeded { node: Node, halves: u32 },

    #[error("augmentation in phase {phase} did not increase the matching value")]
    NoProgress { phase: usize },

    #[error("solver exceeded {phases} augmenting phases")]
    PhaseLimitExceeded { phases: usize },
}

impl Error {
    /// Returns *true* if the error reports malformed input rather than a solver defect
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Error::SelfLoop(_)
                | Error::ParallelEdge(..)
                | Error::AsymmetricAdjacency(..)
                | Error::NodeOutOfRange { .. }
                | Error::UnknownLabel(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
