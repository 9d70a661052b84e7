//! Editor-surface controller.
//!
//! [`WorkflowEditor`] sits between the hosting canvas widget and the graph
//! store. The canvas owns rendering, hit-testing and pointer decoding; this
//! controller owns the history protocol: state is captured exactly once per
//! logical action (add, duplicate, delete, a whole drag gesture, a finished
//! connection), never per input event.

use crate::graph::{Edge, EdgeId, Node, NodeId, WorkflowGraph};
use crate::history::History;
use crate::node_types::{EdgeKind, NodeTemplate};
use log::debug;
use std::collections::HashSet;

/// Drag gesture phase. Only the `Idle` -> `Dragging` transition captures
/// history; intermediate move events never do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
}

/// One entry of a node change batch delivered by the hosting canvas.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeChange {
    /// A node moved. `dragging` is true for every event of an in-flight
    /// gesture and false for the settling event that ends it.
    Position {
        id: NodeId,
        position: (f32, f32),
        dragging: bool,
    },
    Remove {
        id: NodeId,
    },
    Select {
        id: NodeId,
        selected: bool,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum EdgeChange {
    Remove { id: EdgeId },
    Select { id: EdgeId, selected: bool },
}

/// Interaction state for one editor surface. Hosts create one instance per
/// open canvas and pass the graph store into each call.
pub struct WorkflowEditor {
    history: History,
    drag: DragPhase,
    pub selected_nodes: HashSet<NodeId>,
    pub selected_edges: HashSet<EdgeId>,
}

impl Default for WorkflowEditor {
    fn default() -> Self {
        Self {
            history: History::new(),
            drag: DragPhase::Idle,
            selected_nodes: HashSet::new(),
            selected_edges: HashSet::new(),
        }
    }
}

impl WorkflowEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history_capacity(max_records: usize) -> Self {
        Self {
            history: History::with_capacity(max_records),
            ..Self::default()
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn drag_phase(&self) -> DragPhase {
        self.drag
    }

    /// Inserts a node built from `template` at `position`.
    pub fn add_node(
        &mut self,
        graph: &mut WorkflowGraph,
        template: &NodeTemplate,
        position: (f32, f32),
    ) -> NodeId {
        self.history.take_snapshot(&graph.nodes, &graph.edges);
        let node = Node::new(template.data(), position);
        let id = node.id;
        debug!("add node {} ({})", id, template.label);
        graph.add_node(node);
        id
    }

    /// Copies an existing node, placed below the original.
    pub fn duplicate_node(&mut self, graph: &mut WorkflowGraph, id: NodeId) -> Option<NodeId> {
        let original = graph.node(id)?.clone();
        self.history.take_snapshot(&graph.nodes, &graph.edges);
        let copy = Node::new(
            original.data,
            (original.position.0, original.position.1 + 200.0),
        );
        let copy_id = copy.id;
        debug!("duplicate node {} -> {}", id, copy_id);
        graph.add_node(copy);
        Some(copy_id)
    }

    /// Removes a node and its incident edges.
    pub fn remove_node(&mut self, graph: &mut WorkflowGraph, id: NodeId) -> bool {
        if graph.node(id).is_none() {
            return false;
        }
        self.history.take_snapshot(&graph.nodes, &graph.edges);
        graph.remove_node(id);
        self.selected_nodes.remove(&id);
        self.selected_edges.retain(|e| graph.edge(*e).is_some());
        true
    }

    pub fn remove_edge(&mut self, graph: &mut WorkflowGraph, id: EdgeId) -> bool {
        if graph.edge(id).is_none() {
            return false;
        }
        self.history.take_snapshot(&graph.nodes, &graph.edges);
        graph.remove_edge(id);
        self.selected_edges.remove(&id);
        true
    }

    /// Appends an edge for a finished connection gesture. Rejects dangling
    /// endpoints without touching graph or history; anything beyond that
    /// (port compatibility, cycles) is the canvas's concern.
    pub fn connect(
        &mut self,
        graph: &mut WorkflowGraph,
        source: NodeId,
        target: NodeId,
        kind: EdgeKind,
    ) -> Option<EdgeId> {
        if graph.node(source).is_none() || graph.node(target).is_none() {
            return None;
        }
        self.history.take_snapshot(&graph.nodes, &graph.edges);
        let edge = Edge::new(source, target, kind);
        let id = edge.id;
        debug!("connect {} -> {}", source, target);
        graph.add_edge(edge);
        Some(id)
    }

    /// Applies a node change batch from the canvas.
    ///
    /// Each action type captures history on its own: a drag start and a
    /// removal arriving in the same batch produce two entries, and a
    /// removal mid-drag still gets its own.
    pub fn apply_node_changes(&mut self, graph: &mut WorkflowGraph, changes: &[NodeChange]) {
        let drag_started = self.drag == DragPhase::Idle
            && changes
                .iter()
                .any(|c| matches!(c, NodeChange::Position { dragging: true, .. }));
        let removes_nodes = changes
            .iter()
            .any(|c| matches!(c, NodeChange::Remove { .. }));

        if drag_started {
            self.history.take_snapshot(&graph.nodes, &graph.edges);
            self.drag = DragPhase::Dragging;
        }
        if removes_nodes {
            self.history.take_snapshot(&graph.nodes, &graph.edges);
        }

        for change in changes {
            match change {
                NodeChange::Position {
                    id,
                    position,
                    dragging,
                } => {
                    graph.move_node(*id, *position);
                    if !dragging {
                        self.drag = DragPhase::Idle;
                    }
                }
                NodeChange::Remove { id } => {
                    graph.remove_node(*id);
                    self.selected_nodes.remove(id);
                }
                NodeChange::Select { id, selected } => {
                    if *selected {
                        self.selected_nodes.insert(*id);
                    } else {
                        self.selected_nodes.remove(id);
                    }
                }
            }
        }

        if removes_nodes {
            // Removing a node cascades to its edges; drop stale selections.
            self.selected_edges.retain(|e| graph.edge(*e).is_some());
        }
    }

    /// Applies an edge change batch from the canvas. Edge removals capture
    /// history once per batch; selection changes never do.
    pub fn apply_edge_changes(&mut self, graph: &mut WorkflowGraph, changes: &[EdgeChange]) {
        let removes_edges = changes
            .iter()
            .any(|c| matches!(c, EdgeChange::Remove { .. }));
        if removes_edges {
            self.history.take_snapshot(&graph.nodes, &graph.edges);
        }

        for change in changes {
            match change {
                EdgeChange::Remove { id } => {
                    graph.remove_edge(*id);
                    self.selected_edges.remove(id);
                }
                EdgeChange::Select { id, selected } => {
                    if *selected {
                        self.selected_edges.insert(*id);
                    } else {
                        self.selected_edges.remove(id);
                    }
                }
            }
        }
    }

    pub fn undo(&mut self, graph: &mut WorkflowGraph) -> bool {
        self.history.undo(graph)
    }

    pub fn redo(&mut self, graph: &mut WorkflowGraph) -> bool {
        self.history.redo(graph)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}
