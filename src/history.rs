use crate::graph::{Edge, Node, WorkflowGraph};
use log::{debug, trace};

/// Default cap on retained undo states. Oldest entries are evicted first.
pub const MAX_HISTORY: usize = 100;

/// Deep copy of the graph at one instant. Mutating the live graph after
/// capture never alters a stored snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Snapshot {
    fn capture(nodes: &[Node], edges: &[Edge]) -> Self {
        Self {
            nodes: nodes.to_vec(),
            edges: edges.to_vec(),
        }
    }

    fn apply(&self, graph: &mut WorkflowGraph) {
        graph.replace_nodes(self.nodes.clone());
        graph.replace_edges(self.edges.clone());
    }
}

/// Bounded snapshot history for undo/redo.
///
/// `current` holds the state captured just before the most recent action;
/// it shuttles between the past and future stacks as the user steps
/// through history.
#[derive(Clone, Debug)]
pub struct History {
    history: Vec<Snapshot>,
    future: Vec<Snapshot>,
    current: Option<Snapshot>,
    max_records: usize,
}

impl Default for History {
    fn default() -> Self {
        Self {
            history: Vec::new(),
            future: Vec::new(),
            current: None,
            max_records: MAX_HISTORY,
        }
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(max_records: usize) -> Self {
        Self {
            max_records,
            ..Self::default()
        }
    }

    /// Call this with the state just before a mutation is applied, once
    /// per logical action.
    pub fn take_snapshot(&mut self, nodes: &[Node], edges: &[Edge]) {
        if let Some(prev) = self.current.take() {
            self.history.push(prev);
            if self.history.len() > self.max_records {
                trace!("history full, evicting oldest snapshot");
                self.history.remove(0);
            }
        }
        // A new action invalidates any redo states.
        self.future.clear();
        self.current = Some(Snapshot::capture(nodes, edges));
    }

    /// Reverts the store to the state before the last action. Returns
    /// `false`, touching nothing, when there is nothing to undo.
    pub fn undo(&mut self, graph: &mut WorkflowGraph) -> bool {
        let Some(prev) = self.history.pop() else {
            return false;
        };
        if let Some(current) = self.current.take() {
            self.future.push(current);
        }
        prev.apply(graph);
        debug!(
            "undo: restored {} nodes, {} edges",
            prev.nodes.len(),
            prev.edges.len()
        );
        self.current = Some(prev);
        true
    }

    /// Re-applies the last undone state. Returns `false` when there is
    /// nothing to redo.
    pub fn redo(&mut self, graph: &mut WorkflowGraph) -> bool {
        let Some(next) = self.future.pop() else {
            return false;
        };
        if let Some(current) = self.current.take() {
            self.history.push(current);
        }
        next.apply(graph);
        debug!(
            "redo: restored {} nodes, {} edges",
            next.nodes.len(),
            next.edges.len()
        );
        self.current = Some(next);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }
}
