//! gw-graph: graph model layer for graphwalk.
//!
//! Provides:
//! - Edge-list text parsing (`u v [w]` per line)
//! - Core graph data structures (Node, Edge, Graph)
//! - Incremental graph builder with validation
//! - Derived adjacency view for traversal
//!
//! # Example
//!
//! ```
//! use gw_graph::{AdjacencyView, Graph, parse_edge_lines};
//!
//! let records = parse_edge_lines("A B\nB C 4\n").unwrap();
//! let graph = Graph::from_records(&records).unwrap();
//!
//! assert_eq!(graph.nodes().len(), 3);
//! assert_eq!(graph.edges()[1].key, "B-C-1");
//!
//! let adj = AdjacencyView::build(&graph);
//! let b = graph.node_by_name("B").unwrap().id;
//! assert_eq!(adj.neighbors(b).len(), 2);
//! ```

pub mod adjacency;
pub mod builder;
pub mod error;
pub mod graph;
pub mod parse;
pub(crate) mod validate;

pub use adjacency::AdjacencyView;
pub use builder::GraphBuilder;
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, Graph, Node};
pub use parse::{EdgeRecord, parse_edge_lines};
