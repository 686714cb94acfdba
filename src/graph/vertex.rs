//! 顶点定义
//!
//! 顶点由其值唯一确定；图内以 `VertexId` 句柄引用

use crate::graph::edge::Edge;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点句柄（图内顶点存储的位置）
///
/// 句柄只在创建它的图中有意义，不携带所有权。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(usize);

impl VertexId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 顶点（只读视图）
#[derive(Debug)]
pub struct Vertex<'g, T> {
    /// 顶点句柄
    id: VertexId,
    /// 顶点值
    value: &'g T,
    /// 出边，按添加顺序
    edges: &'g [Edge],
}

// 派生会给 T 加上多余的 Clone/Copy 约束
impl<T> Clone for Vertex<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Vertex<'_, T> {}

impl<'g, T> Vertex<'g, T> {
    pub(crate) fn new(id: VertexId, value: &'g T, edges: &'g [Edge]) -> Self {
        Self { id, value, edges }
    }

    /// 获取顶点句柄
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 获取顶点值
    pub fn value(&self) -> &'g T {
        self.value
    }

    /// 获取所有出边
    pub fn edges(&self) -> &'g [Edge] {
        self.edges
    }

    /// 获取出度
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }
}

impl<T: fmt::Display> fmt::Display for Vertex<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_id() {
        let id = VertexId::new(3);

        assert_eq!(id.index(), 3);
        assert_eq!(id.to_string(), "#3");
        assert!(VertexId::new(1) < id);
    }

    #[test]
    fn test_vertex_view() {
        let value = String::from("X");
        let edges = [Edge::new(VertexId::new(0)), Edge::new(VertexId::new(1))];
        let v = Vertex::new(VertexId::new(0), &value, &edges);

        assert_eq!(v.id(), VertexId::new(0));
        assert_eq!(v.value(), "X");
        assert_eq!(v.out_degree(), 2);
        assert_eq!(v.edges()[1].dst(), VertexId::new(1));
        assert_eq!(v.to_string(), "X");
    }

    #[test]
    fn test_vertex_id_serialization() {
        let id = VertexId::new(42);

        let json = serde_json::to_string(&id).unwrap();
        let restored: VertexId = serde_json::from_str(&json).unwrap();

        assert_eq!(json, "42");
        assert_eq!(id, restored);
    }
}
