//! 边定义

use crate::graph::vertex::VertexId;

/// 有向边，只记录目标顶点句柄
///
/// 边归源顶点所有，目标顶点仍归图所有。创建后不可修改。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// 目标顶点
    dst: VertexId,
}

impl Edge {
    pub(crate) fn new(dst: VertexId) -> Self {
        Self { dst }
    }

    /// 获取目标顶点
    pub fn dst(&self) -> VertexId {
        self.dst
    }
}
