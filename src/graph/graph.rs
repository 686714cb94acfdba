//! 图数据结构
//!
//! 以顶点值为键的有向图。顶点按值去重，存储位置即顶点句柄；
//! 不支持删除，句柄在图的生命周期内保持有效。

use super::edge::Edge;
use super::vertex::{Vertex, VertexId};
use crate::error::{Error, Result};
use indexmap::map::{self, Entry};
use indexmap::{Equivalent, IndexMap};
use std::fmt;
use std::hash::Hash;
use std::iter::{Enumerate, FusedIterator};
use tracing::{debug, trace, warn};

/// 有向图
///
/// 非线程安全：并发修改需要调用方自行加锁。
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// 顶点值 -> 出边列表
    vertices: IndexMap<T, Vec<Edge>>,
}

impl<T: Hash + Eq> Graph<T> {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            vertices: IndexMap::new(),
        }
    }

    /// 创建预分配顶点容量的空图
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: IndexMap::with_capacity(capacity),
        }
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    ///
    /// 已存在相等的值时返回已有顶点的句柄，不会创建重复顶点。
    pub fn add_vertex(&mut self, value: T) -> VertexId {
        match self.vertices.entry(value) {
            Entry::Occupied(entry) => {
                let id = VertexId::new(entry.index());
                trace!(vertex = %id, "顶点已存在");
                id
            }
            Entry::Vacant(entry) => {
                let id = VertexId::new(entry.index());
                entry.insert(Vec::new());
                debug!(vertex = %id, "添加顶点");
                id
            }
        }
    }

    /// 获取顶点
    pub fn vertex(&self, id: VertexId) -> Option<Vertex<'_, T>> {
        self.vertices
            .get_index(id.index())
            .map(|(value, edges)| Vertex::new(id, value, edges))
    }

    /// 按值查找顶点
    pub fn find<Q>(&self, value: &Q) -> Option<Vertex<'_, T>>
    where
        Q: ?Sized + Hash + Equivalent<T>,
    {
        self.vertices
            .get_full(value)
            .map(|(index, value, edges)| Vertex::new(VertexId::new(index), value, edges))
    }

    /// 是否包含某个值
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<T>,
    {
        self.vertices.contains_key(value)
    }

    // ==================== 边操作 ====================

    /// 添加边 `src -> dst`
    ///
    /// 两个句柄都必须来自本图的 [`Graph::add_vertex`]，这里不做校验；
    /// 来自其他图的句柄可能连到错误的顶点。需要校验时使用 [`Graph::try_add_edge`]。
    /// 允许自环和重复的平行边。
    pub fn add_edge(&mut self, src: VertexId, dst: VertexId) {
        debug_assert!(
            src.index() < self.vertices.len(),
            "源顶点 {} 不属于该图",
            src
        );

        match self.vertices.get_index_mut(src.index()) {
            Some((_, edges)) => {
                edges.push(Edge::new(dst));
                debug!(src = %src, dst = %dst, "添加边");
            }
            None => warn!(src = %src, dst = %dst, "源顶点不存在，忽略该边"),
        }
    }

    /// 添加边，先检查两个句柄是否在本图顶点范围内
    ///
    /// 只做越界检查：来自其他图但编号在范围内的句柄仍会被接受。
    pub fn try_add_edge(&mut self, src: VertexId, dst: VertexId) -> Result<()> {
        for id in [src, dst] {
            if id.index() >= self.vertices.len() {
                return Err(Error::VertexNotFound(id));
            }
        }
        self.add_edge(src, dst);
        Ok(())
    }

    // ==================== 邻居查询 ====================

    /// 获取顶点出边指向的顶点，按添加顺序，可能重复
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertex(id)
            .map(|v| v.edges())
            .unwrap_or_default()
            .iter()
            .map(Edge::dst)
    }
}

impl<T> Graph<T> {
    /// 按迭代顺序遍历所有顶点
    ///
    /// 未修改图时多次遍历顺序一致。
    pub fn vertices(&self) -> Vertices<'_, T> {
        Vertices {
            inner: self.vertices.iter().enumerate(),
        }
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl<T: Hash + Eq> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> Extend<T> for Graph<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_vertex(value);
        }
    }
}

impl<T: Hash + Eq> FromIterator<T> for Graph<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

/// 调试输出：逐个顶点列出值和出边
impl<T: fmt::Display> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in self.vertices() {
            write!(f, "Vertex: {}\n  Edges: [", vertex)?;
            for (i, edge) in vertex.edges().iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                match self.vertices.get_index(edge.dst().index()) {
                    Some((value, _)) => write!(f, "Edge to: {}", value)?,
                    None => write!(f, "Edge to: {}", edge.dst())?,
                }
            }
            f.write_str("]\n\n")?;
        }
        Ok(())
    }
}

/// 顶点迭代器，见 [`Graph::vertices`]
pub struct Vertices<'g, T> {
    inner: Enumerate<map::Iter<'g, T, Vec<Edge>>>,
}

impl<'g, T> Iterator for Vertices<'g, T> {
    type Item = Vertex<'g, T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(index, (value, edges))| Vertex::new(VertexId::new(index), value, edges))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Vertices<'_, T> {}

impl<T> FusedIterator for Vertices<'_, T> {}
