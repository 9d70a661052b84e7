use crate::node_types::{EdgeKind, HandleSpec, NodeData, WorkflowData};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type NodeId = Uuid;
pub type EdgeId = Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub data: NodeData,
    pub position: (f32, f32),
}

impl Node {
    pub fn new(data: NodeData, position: (f32, f32)) -> Self {
        Self {
            id: Uuid::new_v4(),
            data,
            position,
        }
    }

    pub fn label(&self) -> &str {
        match &self.data {
            NodeData::Workflow(data) => &data.label,
        }
    }

    pub fn handles(&self) -> HandleSpec {
        match &self.data {
            NodeData::Workflow(data) => data.handles,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub kind: EdgeKind,
}

impl Edge {
    pub fn new(source: NodeId, target: NodeId, kind: EdgeKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            source,
            target,
            kind,
        }
    }
}

/// Live node and edge lists of one diagram. The editor and the history
/// manager both operate on this store; neither owns it.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct WorkflowGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl WorkflowGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn add_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Removes a node together with every edge touching it.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != id);
        if self.nodes.len() == before {
            return false;
        }
        self.edges.retain(|e| e.source != id && e.target != id);
        true
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn remove_edge(&mut self, id: EdgeId) -> bool {
        let before = self.edges.len();
        self.edges.retain(|e| e.id != id);
        self.edges.len() != before
    }

    pub fn move_node(&mut self, id: NodeId, position: (f32, f32)) -> bool {
        if let Some(node) = self.node_mut(id) {
            node.position = position;
            true
        } else {
            false
        }
    }

    pub fn replace_nodes(&mut self, nodes: Vec<Node>) {
        self.nodes = nodes;
    }

    pub fn replace_edges(&mut self, edges: Vec<Edge>) {
        self.edges = edges;
    }

    /// The six-node demo diagram shown on a fresh canvas.
    pub fn sample_workflow() -> Self {
        fn workflow(
            label: &str,
            description: &str,
            position: (f32, f32),
            handles: HandleSpec,
        ) -> Node {
            Node::new(
                NodeData::Workflow(WorkflowData {
                    label: label.to_string(),
                    description: description.to_string(),
                    handles,
                }),
                position,
            )
        }

        let both = HandleSpec {
            source: true,
            target: true,
        };
        let start = workflow(
            "Start",
            "Initialize workflow",
            (0.0, 0.0),
            HandleSpec {
                source: true,
                target: false,
            },
        );
        let process = workflow("Process Data", "Transform input", (500.0, 0.0), both);
        let decision = workflow(
            "Decision Point",
            "Route based on conditions",
            (1000.0, 0.0),
            both,
        );
        let success = workflow("Success Path", "Handle success case", (1500.0, -100.0), both);
        let error = workflow("Error Path", "Handle error case", (1500.0, 100.0), both);
        let complete = workflow(
            "Complete",
            "Finalize workflow",
            (2000.0, 0.0),
            HandleSpec {
                source: false,
                target: true,
            },
        );

        let edges = vec![
            Edge::new(start.id, process.id, EdgeKind::Animated),
            Edge::new(process.id, decision.id, EdgeKind::Animated),
            Edge::new(decision.id, success.id, EdgeKind::Animated),
            Edge::new(decision.id, error.id, EdgeKind::Temporary),
            Edge::new(success.id, complete.id, EdgeKind::Animated),
            Edge::new(error.id, complete.id, EdgeKind::Temporary),
        ];

        Self {
            nodes: vec![start, process, decision, success, error, complete],
            edges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(label: &str) -> Node {
        Node::new(
            NodeData::Workflow(WorkflowData {
                label: label.to_string(),
                description: String::new(),
                handles: HandleSpec {
                    source: true,
                    target: true,
                },
            }),
            (0.0, 0.0),
        )
    }

    #[test]
    fn remove_node_drops_incident_edges() {
        let mut graph = WorkflowGraph::new();
        let a = node("A");
        let b = node("B");
        let c = node("C");
        let (a_id, b_id, c_id) = (a.id, b.id, c.id);
        graph.add_node(a);
        graph.add_node(b);
        graph.add_node(c);
        graph.add_edge(Edge::new(a_id, b_id, EdgeKind::Animated));
        graph.add_edge(Edge::new(b_id, c_id, EdgeKind::Animated));
        graph.add_edge(Edge::new(a_id, c_id, EdgeKind::Temporary));

        assert!(graph.remove_node(b_id));

        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].source, a_id);
        assert_eq!(graph.edges[0].target, c_id);
    }

    #[test]
    fn remove_missing_node_is_noop() {
        let mut graph = WorkflowGraph::sample_workflow();
        let snapshot = graph.clone();
        assert!(!graph.remove_node(Uuid::new_v4()));
        assert_eq!(graph, snapshot);
    }

    #[test]
    fn move_node_updates_position() {
        let mut graph = WorkflowGraph::new();
        let n = node("A");
        let id = n.id;
        graph.add_node(n);

        assert!(graph.move_node(id, (42.0, -7.5)));
        assert_eq!(graph.node(id).unwrap().position, (42.0, -7.5));
        assert!(!graph.move_node(Uuid::new_v4(), (0.0, 0.0)));
    }

    #[test]
    fn sample_workflow_shape() {
        let graph = WorkflowGraph::sample_workflow();
        assert_eq!(graph.nodes.len(), 6);
        assert_eq!(graph.edges.len(), 6);

        let start = &graph.nodes[0];
        assert_eq!(start.label(), "Start");
        assert!(!start.handles().target);

        let complete = &graph.nodes[5];
        assert!(!complete.handles().source);

        // Every edge endpoint resolves to a node in the store.
        for edge in &graph.edges {
            assert!(graph.node(edge.source).is_some());
            assert!(graph.node(edge.target).is_some());
        }
    }
}
