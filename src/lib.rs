//! # Workflow Canvas
//!
//! Editor core for a node-based workflow diagram: the graph data model,
//! a bounded snapshot history for undo/redo, and the editor-surface
//! controller that decides *when* history is captured.
//!
//! Rendering, hit-testing and pointer decoding belong to the hosting
//! canvas widget. The host feeds this crate node/edge change batches and
//! high-level actions; the controller guarantees exactly one history
//! entry per logical action (an add, a delete, a finished connection, or
//! an entire drag gesture), never one entry per move event.
//!
//! ## Modules
//! - [`graph`]: [`WorkflowGraph`] store plus the [`Node`]/[`Edge`] model
//! - [`history`]: [`History`], the bounded undo/redo snapshot stacks
//! - [`editor`]: [`WorkflowEditor`], the surface controller
//! - [`node_types`]: payload types and the built-in node palette
//!
//! ## Example
//!
//! ```
//! use workflow_canvas::{EdgeKind, WorkflowEditor, WorkflowGraph, NODE_TEMPLATES};
//!
//! let mut graph = WorkflowGraph::new();
//! let mut editor = WorkflowEditor::new();
//!
//! let a = editor.add_node(&mut graph, &NODE_TEMPLATES[0], (0.0, 0.0));
//! let b = editor.add_node(&mut graph, &NODE_TEMPLATES[1], (250.0, 0.0));
//! editor.connect(&mut graph, a, b, EdgeKind::Animated);
//!
//! editor.undo(&mut graph);
//! assert!(graph.edges.is_empty());
//! assert!(graph.node(b).is_none());
//!
//! editor.undo(&mut graph);
//! assert!(graph.node(a).is_none());
//!
//! editor.redo(&mut graph);
//! assert!(graph.node(a).is_some());
//! ```

pub mod editor;
pub mod graph;
pub mod history;
pub mod node_types;

pub use editor::{DragPhase, EdgeChange, NodeChange, WorkflowEditor};
pub use graph::{Edge, EdgeId, Node, NodeId, WorkflowGraph};
pub use history::{History, MAX_HISTORY, Snapshot};
pub use node_types::{
    EdgeKind, HandleSpec, NODE_TEMPLATES, NodeData, NodeTemplate, WorkflowData,
};
