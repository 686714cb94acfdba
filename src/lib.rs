//! DotGraph - 以值为键的有向图
//!
//! - 顶点按值去重，插入相等的值返回已有顶点
//! - 边只引用目标顶点句柄，允许自环和平行边
//! - 导出为 Graphviz DOT 文本用于可视化
//!
//! ```
//! use dotgraph::Graph;
//!
//! let mut graph = Graph::new();
//! let x = graph.add_vertex("X");
//! let y = graph.add_vertex("Y");
//! graph.add_edge(x, y);
//!
//! assert_eq!(
//!     graph.to_dot(),
//!     "digraph {\n    0 [label=\"X\"]\n    1 [label=\"Y\"]\n\n    0 -> 1\n}"
//! );
//! ```

pub mod dot;
pub mod error;
pub mod graph;

// 重导出常用类型
pub use dot::{Dot, DotConfig};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Vertex, VertexId, Vertices};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
