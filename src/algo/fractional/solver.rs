use super::*;

/// Outcome of a single phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseOutcome {
    /// The matching was augmented; another phase may follow
    Augmented(AugmentationKind),
    /// No augmenting structure exists: the matching is maximum
    Maximum,
}

/// Computes a maximum half-integral fractional matching by label propagation.
///
/// Every phase labels the unsaturated vertices as roots and grows an alternating forest
/// from them until an augmenting path or cycle is found. The matching is maximum once a
/// phase finds nothing. The solver is configured via setters before solving:
///
/// ```
/// use fracmatch::{algo::*, prelude::*};
///
/// let graph = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2), (0, 2)]);
/// let matching = FractionalMatchingSolver::new(&graph)
///     .with_observer(NoEvents)
///     .solve()
///     .unwrap();
/// assert_eq!(matching.total_value(), 1.5);
/// ```
#[derive(Debug)]
pub struct FractionalMatchingSolver<'a, G, O = LogEvents> {
    graph: &'a G,
    observer: O,
    validate: bool,
    state: MatchingState,
    labeling: Labeling,
    phases: usize,
    augmentations: usize,
    finished: bool,
}

impl<'a, G> FractionalMatchingSolver<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a solver starting from the empty matching; events go to the `log` facade
    pub fn new(graph: &'a G) -> Self {
        let n = graph.number_of_nodes();
        Self {
            graph,
            observer: LogEvents,
            validate: true,
            state: MatchingState::new(n),
            labeling: Labeling::new(n),
            phases: 0,
            augmentations: 0,
            finished: false,
        }
    }
}

impl<'a, G, O> FractionalMatchingSolver<'a, G, O>
where
    G: AdjacencyList,
    O: SolverObserver,
{
    /// Replaces the observer receiving [`SolverEvent`]s
    pub fn with_observer<P>(self, observer: P) -> FractionalMatchingSolver<'a, G, P>
    where
        P: SolverObserver,
    {
        FractionalMatchingSolver {
            graph: self.graph,
            observer,
            validate: self.validate,
            state: self.state,
            labeling: self.labeling,
            phases: self.phases,
            augmentations: self.augmentations,
            finished: self.finished,
        }
    }

    /// Skips the check that the input is a simple undirected graph.
    /// Only use this if the graph is known to be simple; otherwise results are unspecified.
    pub fn skip_validation(mut self) -> Self {
        self.validate = false;
        self
    }

    /// Runs a single phase: rebuilds the forest from the current matching and scans until
    /// either an augmentation happened or no augmenting structure remains.
    ///
    /// Once [`PhaseOutcome::Maximum`] was returned, further calls return it again without
    /// doing any work.
    pub fn run_phase(&mut self) -> Result<PhaseOutcome> {
        if self.finished {
            return Ok(PhaseOutcome::Maximum);
        }

        if self.validate {
            validate_simple_graph(self.graph)?;
            self.validate = false;
        }

        let phase = self.phases;
        self.phases += 1;

        let before = self.state.total_halves();
        let roots = self.labeling.reset(&self.state);
        self.observer.on_event(&SolverEvent::PhaseStarted {
            phase,
            total_halves: before,
            roots,
        });

        let kind = loop {
            match scan(self.graph, &self.labeling, &self.state) {
                None => {
                    self.finished = true;
                    self.observer.on_event(&SolverEvent::Finished {
                        phases: self.phases,
                        total_halves: before,
                    });
                    return Ok(PhaseOutcome::Maximum);
                }
                Some(ScanHit::Plus(u, v)) => {
                    break augment(&self.labeling, &mut self.state, u, v)?;
                }
                Some(ScanHit::Unlabeled(u, v)) => {
                    let step =
                        label_or_augment(self.graph, &mut self.labeling, &mut self.state, u, v)?;
                    match step {
                        LabelStep::Extended { minus, plus } => {
                            self.observer.on_event(&SolverEvent::ForestExtended {
                                phase,
                                from: u,
                                minus,
                                plus,
                            })
                        }
                        LabelStep::Augmented(kind) => break kind,
                    }
                }
            }
        };

        self.state.check_capacity()?;

        let after = self.state.total_halves();
        if after <= before {
            return Err(Error::NoProgress { phase });
        }

        // every augmentation gains at least one half and the total is at most `n` halves
        self.augmentations += 1;
        let limit = self.graph.len();
        if self.augmentations > limit {
            return Err(Error::PhaseLimitExceeded { phases: limit });
        }

        self.observer.on_event(&SolverEvent::Augmented {
            phase,
            kind,
            total_halves: after,
        });

        Ok(PhaseOutcome::Augmented(kind))
    }

    /// Runs phases until the matching is maximum and returns it
    pub fn solve(&mut self) -> Result<FractionalMatching> {
        while self.run_phase()? != PhaseOutcome::Maximum {}
        Ok(self.state.to_matching())
    }

    /// Returns the current matching state
    pub fn state(&self) -> &MatchingState {
        &self.state
    }

    /// Returns the number of phases run so far, including the final one without augmentation
    pub fn phases(&self) -> usize {
        self.phases
    }

    /// Returns the number of augmenting phases run so far
    pub fn augmentations(&self) -> usize {
        self.augmentations
    }

    /// Returns *true* if the current matching is known to be maximum
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens::*, testing::*};

    fn solve_recording(graph: &AdjArrayUndir) -> (FractionalMatching, Vec<SolverEvent>) {
        let mut events = Vec::new();
        let matching = FractionalMatchingSolver::new(graph)
            .with_observer(|e: &SolverEvent| events.push(*e))
            .solve()
            .unwrap();
        (matching, events)
    }

    #[test]
    fn triangle() {
        let _ = env_logger::builder().is_test(true).try_init();

        let graph = graph_from_one_based(3, [(1, 2), (1, 3), (2, 3)]);
        let mut solver = FractionalMatchingSolver::new(&graph);
        let matching = solver.solve().unwrap();

        assert_eq!(
            matching,
            matching_from_one_based([
                ((1, 2), EdgeValue::Half),
                ((1, 3), EdgeValue::Half),
                ((2, 3), EdgeValue::Half)
            ])
        );
        assert_eq!(matching.total_value(), 1.5);
        assert_eq!(solver.augmentations(), 2);
        assert_eq!(solver.phases(), 3);
    }

    #[test]
    fn triangle_with_pendant() {
        let graph = graph_from_one_based(4, [(1, 2), (1, 3), (2, 3), (3, 4)]);
        let (matching, events) = solve_recording(&graph);

        assert_eq!(
            matching,
            matching_from_one_based([((1, 2), EdgeValue::One), ((3, 4), EdgeValue::One)])
        );
        assert_eq!(matching.total_value(), 2.0);

        let kinds = events
            .iter()
            .filter_map(|e| match e {
                SolverEvent::Augmented { kind, .. } => Some(*kind),
                _ => None,
            })
            .collect_vec();
        assert_eq!(
            kinds,
            vec![
                AugmentationKind::Path,
                AugmentationKind::RootCycle,
                AugmentationKind::HalfCycle
            ]
        );
    }

    #[test]
    fn seven_vertices() {
        let graph = graph_from_one_based(
            7,
            [(1, 2), (1, 3), (2, 4), (3, 5), (4, 5), (5, 6), (6, 7)],
        );
        let matching = FractionalMatchingSolver::new(&graph).solve().unwrap();

        let mut expected = [(1, 2), (1, 3), (2, 4), (3, 5), (4, 5)]
            .map(|e| (e, EdgeValue::Half))
            .to_vec();
        expected.push(((6, 7), EdgeValue::One));

        assert_eq!(matching, matching_from_one_based(expected));
        assert_eq!(matching.total_halves(), 7);
        assert_eq!(matching.total_value(), 3.5);
        assert_eq!(matching.num_half_edges(), 5);
    }

    #[test]
    fn trivial_graphs() {
        for n in [0, 1, 5] {
            let graph = AdjArrayUndir::new(n);
            let mut solver = FractionalMatchingSolver::new(&graph).with_observer(NoEvents);
            assert!(solver.solve().unwrap().is_empty());
            assert_eq!(solver.phases(), 1);
        }

        let graph = AdjArrayUndir::from_edges(2, [(0, 1)]);
        let matching = FractionalMatchingSolver::new(&graph).solve().unwrap();
        assert_eq!(matching.value_of(0, 1), EdgeValue::One);
    }

    #[test]
    fn phases_increase_value() {
        let mut rng = Pcg64Mcg::seed_from_u64(1234);
        for _ in 0..30 {
            let graph: AdjArrayUndir = RandomGraph::gnp(&mut rng, 25, 0.15);
            let mut solver = FractionalMatchingSolver::new(&graph).with_observer(NoEvents);

            let mut value = solver.state().total_halves();
            while let PhaseOutcome::Augmented(_) = solver.run_phase().unwrap() {
                let next = solver.state().total_halves();
                assert!(next > value);
                assert_eq!(solver.state().check_capacity(), Ok(()));
                value = next;
            }

            assert!(solver.is_finished());
            assert!(solver.augmentations() <= graph.len());
            assert_eq!(solver.run_phase(), Ok(PhaseOutcome::Maximum));
            assert_eq!(solver.phases(), solver.augmentations() + 1);
        }
    }

    #[test]
    fn events_report_progress() {
        let mut rng = Pcg64Mcg::seed_from_u64(42);
        let graph: AdjArrayUndir = RandomGraph::gnp(&mut rng, 40, 0.1);
        let (matching, events) = solve_recording(&graph);

        let values = events
            .iter()
            .filter_map(|e| match e {
                SolverEvent::Augmented { total_halves, .. } => Some(*total_halves),
                _ => None,
            })
            .collect_vec();
        assert!(values.windows(2).all(|w| w[0] < w[1]));

        assert_eq!(
            events.last(),
            Some(&SolverEvent::Finished {
                phases: values.len() + 1,
                total_halves: matching.total_halves()
            })
        );
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, SolverEvent::PhaseStarted { .. }))
                .count(),
            values.len() + 1
        );
    }

    #[test]
    fn repeated_solves_agree() {
        let mut rng = Pcg64Mcg::seed_from_u64(7);
        for _ in 0..20 {
            let graph: AdjArrayUndir = RandomGraph::gnp(&mut rng, 20, 0.2);
            let first = FractionalMatchingSolver::new(&graph).solve().unwrap();
            let second = FractionalMatchingSolver::new(&graph).solve().unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn rejects_non_simple_input() {
        let mut graph = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2)]);
        graph.add_edge_unchecked(0, 1);

        let result = FractionalMatchingSolver::new(&graph).solve();
        assert_eq!(result, Err(Error::ParallelEdge(0, 1)));
        assert!(result.unwrap_err().is_precondition());

        let mut graph = AdjArrayUndir::from_edges(2, [(0, 1)]);
        graph.add_edge(1, 1);
        assert_eq!(
            FractionalMatchingSolver::new(&graph).solve(),
            Err(Error::SelfLoop(1))
        );
    }

    #[test]
    fn internal_errors_abort_solve() {
        // 1 is saturated by two half-edges on the path 0 - 1 - 2, which is not a cycle
        let graph = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2)]);
        let mut solver = FractionalMatchingSolver::new(&graph).with_observer(NoEvents);
        solver.state.set_value(1, 2, EdgeValue::Half);
        solver.state.set_value(1, 0, EdgeValue::Half);

        let err = solver.solve().unwrap_err();
        assert_eq!(err, Error::MissingHalfCycle(1));
        assert!(!err.is_precondition());
        assert_eq!(solver.augmentations(), 0);
    }
}
