use smallvec::SmallVec;

use super::*;

/// Label of a vertex in the alternating forest of a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Label {
    /// Root or an even-depth vertex: its forest edge towards the root has value `1`
    Plus,
    /// Odd-depth vertex: reached from a `Plus`-vertex over an edge with value `< 1`
    Minus,
    #[default]
    Unlabeled,
}

/// A path of vertices stored inline for short forests
pub type ForestPath = SmallVec<[Node; 16]>;

/// Labels and predecessor pointers of the alternating forest.
///
/// Every vertex has a label; labeled non-root vertices additionally store their predecessor.
/// Following predecessors from any labeled vertex reaches a root (an unsaturated
/// `Plus`-vertex) in fewer than `n` steps.
#[derive(Debug, Clone)]
pub struct Labeling {
    labels: Vec<Label>,
    predecessors: Vec<Option<OptionalNode>>,
}

impl Labeling {
    /// Creates a labeling with every vertex unlabeled
    pub fn new(n: NumNodes) -> Self {
        Self {
            labels: vec![Label::Unlabeled; n as usize],
            predecessors: vec![None; n as usize],
        }
    }

    /// Starts a new forest: unsaturated vertices become `Plus`-roots, all others are
    /// unlabeled. Returns the number of roots.
    pub fn reset(&mut self, state: &MatchingState) -> NumNodes {
        let mut roots = 0;
        for (u, (label, pred)) in self
            .labels
            .iter_mut()
            .zip(self.predecessors.iter_mut())
            .enumerate()
        {
            *pred = None;
            *label = if state.is_saturated(u as Node) {
                Label::Unlabeled
            } else {
                roots += 1;
                Label::Plus
            };
        }
        roots
    }

    /// ** Panics if `u >= n` **
    pub fn label(&self, u: Node) -> Label {
        self.labels[u as usize]
    }

    /// Returns the predecessor of `u`; roots and unlabeled vertices have none
    /// ** Panics if `u >= n` **
    pub fn predecessor(&self, u: Node) -> Option<Node> {
        self.predecessors[u as usize].map(|p| p.get())
    }

    /// Returns *true* if `u` is a root of the forest
    pub fn is_root(&self, u: Node) -> bool {
        self.label(u) == Label::Plus && self.predecessor(u).is_none()
    }

    /// Grows the forest by `parent -> minus -> plus`
    pub fn extend(&mut self, parent: Node, minus: Node, plus: Node) {
        debug_assert_eq!(self.label(parent), Label::Plus);
        debug_assert_eq!(self.label(minus), Label::Unlabeled);
        debug_assert_eq!(self.label(plus), Label::Unlabeled);

        self.labels[minus as usize] = Label::Minus;
        self.labels[plus as usize] = Label::Plus;
        self.predecessors[minus as usize] = OptionalNode::new(parent);
        self.predecessors[plus as usize] = OptionalNode::new(minus);
    }

    /// Returns the vertices from `u` up to and including its root.
    ///
    /// Fails with [`Error::BrokenForest`] if the predecessor chain does not end in a root
    /// within `n` steps.
    pub fn path_to_root(&self, u: Node) -> Result<ForestPath> {
        let mut path = ForestPath::new();
        path.push(u);

        let mut current = u;
        while let Some(pred) = self.predecessor(current) {
            if path.len() >= self.labels.len() {
                return Err(Error::BrokenForest(u));
            }
            path.push(pred);
            current = pred;
        }

        if !self.is_root(current) {
            return Err(Error::BrokenForest(u));
        }

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_labels_unsaturated_as_roots() {
        let mut state = MatchingState::new(4);
        state.set_value(0, 1, EdgeValue::One);
        state.set_value(2, 3, EdgeValue::Half);

        let mut labeling = Labeling::new(4);
        assert_eq!(labeling.reset(&state), 2);
        assert_eq!(labeling.label(0), Label::Unlabeled);
        assert_eq!(labeling.label(2), Label::Plus);
        assert!(labeling.is_root(3));
    }

    #[test]
    fn path_to_root_follows_predecessors() {
        let mut state = MatchingState::new(5);
        state.set_value(1, 2, EdgeValue::One);
        state.set_value(3, 4, EdgeValue::One);

        let mut labeling = Labeling::new(5);
        labeling.reset(&state);
        labeling.extend(0, 1, 2);
        labeling.extend(2, 3, 4);

        assert_eq!(labeling.path_to_root(4).unwrap().as_slice(), &[4, 3, 2, 1, 0]);
        assert_eq!(labeling.path_to_root(0).unwrap().as_slice(), &[0]);
        assert_eq!(labeling.label(3), Label::Minus);
        assert_eq!(labeling.predecessor(1), Some(0));
    }

    #[test]
    fn cyclic_predecessors_are_detected() {
        let mut labeling = Labeling::new(3);
        labeling.predecessors[0] = OptionalNode::new(1);
        labeling.predecessors[1] = OptionalNode::new(2);
        labeling.predecessors[2] = OptionalNode::new(0);

        assert_eq!(labeling.path_to_root(0), Err(Error::BrokenForest(0)));
    }

    #[test]
    fn chain_ending_outside_the_forest_is_detected() {
        let state = MatchingState::new(3);
        let mut labeling = Labeling::new(3);
        labeling.reset(&state);
        labeling.labels[1] = Label::Unlabeled;
        labeling.predecessors[2] = OptionalNode::new(1);

        assert_eq!(labeling.path_to_root(2), Err(Error::BrokenForest(2)));
        assert_eq!(labeling.path_to_root(1), Err(Error::BrokenForest(1)));
        assert_eq!(labeling.path_to_root(0).unwrap().as_slice(), &[0]);
    }
}
