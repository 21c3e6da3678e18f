use log::{debug, trace};

use super::*;

/// Progress notifications emitted by [`FractionalMatchingSolver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverEvent {
    /// A phase starts from a matching of value `total_halves / 2` with `roots` unsaturated
    /// vertices
    PhaseStarted {
        phase: usize,
        total_halves: u64,
        roots: NumNodes,
    },
    /// The forest grew by `from -> minus -> plus`
    ForestExtended {
        phase: usize,
        from: Node,
        minus: Node,
        plus: Node,
    },
    /// The phase augmented the matching to value `total_halves / 2`
    Augmented {
        phase: usize,
        kind: AugmentationKind,
        total_halves: u64,
    },
    /// A phase ended without augmentation: the matching is maximum
    Finished { phases: usize, total_halves: u64 },
}

/// Receives [`SolverEvent`]s while solving.
///
/// Implemented for all closures `FnMut(&SolverEvent)`, so a recording observer is simply
/// `|e: &SolverEvent| events.push(*e)`.
pub trait SolverObserver {
    fn on_event(&mut self, event: &SolverEvent);
}

impl<F> SolverObserver for F
where
    F: FnMut(&SolverEvent),
{
    fn on_event(&mut self, event: &SolverEvent) {
        self(event)
    }
}

/// Default observer: forwards phases and augmentations to `log::debug!` and forest
/// extensions to `log::trace!`
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEvents;

impl SolverObserver for LogEvents {
    fn on_event(&mut self, event: &SolverEvent) {
        match *event {
            SolverEvent::PhaseStarted {
                phase,
                total_halves,
                roots,
            } => debug!(
                "Phase {phase}: value {}, {roots} unsaturated vertices",
                total_halves as f64 / 2.0
            ),
            SolverEvent::ForestExtended {
                phase,
                from,
                minus,
                plus,
            } => trace!("Phase {phase}: extend forest {from} -> {minus} -> {plus}"),
            SolverEvent::Augmented {
                phase,
                kind,
                total_halves,
            } => debug!(
                "Phase {phase}: {kind:?} augmentation, value now {}",
                total_halves as f64 / 2.0
            ),
            SolverEvent::Finished {
                phases,
                total_halves,
            } => debug!(
                "Maximum fractional matching of value {} after {phases} phases",
                total_halves as f64 / 2.0
            ),
        }
    }
}

/// Observer discarding all events
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEvents;

impl SolverObserver for NoEvents {
    fn on_event(&mut self, _: &SolverEvent) {}
}
