use serde::{Deserialize, Serialize};

/// Which connection handles a node exposes on the canvas.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandleSpec {
    pub source: bool,
    pub target: bool,
}

/// Per-node payload, keyed by the node's type tag.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum NodeData {
    Workflow(WorkflowData),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkflowData {
    pub label: String,
    pub description: String,
    pub handles: HandleSpec,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum EdgeKind {
    Animated,
    Temporary,
}

impl Default for EdgeKind {
    fn default() -> Self {
        EdgeKind::Animated
    }
}

/// Palette entry the editor builds new nodes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeTemplate {
    pub label: &'static str,
    pub description: &'static str,
    pub handles: HandleSpec,
}

impl NodeTemplate {
    pub fn data(&self) -> NodeData {
        NodeData::Workflow(WorkflowData {
            label: self.label.to_string(),
            description: self.description.to_string(),
            handles: self.handles,
        })
    }
}

pub const NODE_TEMPLATES: [NodeTemplate; 3] = [
    NodeTemplate {
        label: "Start",
        description: "Initialize workflow",
        handles: HandleSpec {
            source: true,
            target: false,
        },
    },
    NodeTemplate {
        label: "Process",
        description: "Process data",
        handles: HandleSpec {
            source: true,
            target: true,
        },
    },
    NodeTemplate {
        label: "Decision",
        description: "Route based on conditions",
        handles: HandleSpec {
            source: true,
            target: true,
        },
    },
];
