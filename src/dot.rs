//! DOT 导出
//!
//! 将图导出为 Graphviz 可识别的 `digraph` 文档：
//!
//! ```text
//! digraph {
//!     0 [label="X"]
//!     1 [label="Y"]
//!
//!     0 -> 1
//! }
//! ```
//!
//! 节点编号在每次导出时按顶点迭代顺序从 0 开始分配。

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{self, Write};
use tracing::{trace, warn};

/// 缩进上限
pub const MAX_INDENT: usize = 16;

/// 导出配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotConfig {
    /// 每行缩进的空格数，超过 [`MAX_INDENT`] 时按上限输出
    pub indent: usize,
    /// 是否转义标签中的 `"` 和 `\`；默认原样输出
    pub escape_labels: bool,
    /// 图名称，加引号并转义后输出；`None` 时输出匿名图
    pub name: Option<String>,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            indent: 4,
            escape_labels: false,
            name: None,
        }
    }
}

impl DotConfig {
    /// 从 JSON 加载配置，缺省字段取默认值
    pub fn from_json(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        if config.indent > MAX_INDENT {
            return Err(Error::ConfigError(format!(
                "缩进 {} 超过上限 {}",
                config.indent, MAX_INDENT
            )));
        }
        Ok(config)
    }
}

/// DOT 格式化适配器，见 [`Graph::dot`]
///
/// 两次遍历之间图不可修改，借用规则保证了这一点。
pub struct Dot<'g, T> {
    graph: &'g Graph<T>,
    config: DotConfig,
}

impl<'g, T> Dot<'g, T> {
    pub fn new(graph: &'g Graph<T>, config: DotConfig) -> Self {
        Self { graph, config }
    }
}

impl<T: fmt::Display> fmt::Display for Dot<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.config.indent.min(MAX_INDENT);
        trace!(
            vertices = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            "导出 DOT"
        );

        match &self.config.name {
            Some(name) => {
                f.write_str("digraph \"")?;
                write_escaped(f, name)?;
                f.write_str("\" {\n")?;
            }
            None => f.write_str("digraph {\n")?,
        }

        // 第一遍：分配编号并输出节点
        let mut indexes: HashMap<VertexId, usize> =
            HashMap::with_capacity(self.graph.vertex_count());
        for (index, vertex) in self.graph.vertices().enumerate() {
            indexes.insert(vertex.id(), index);
            write!(f, "{:w$}{} [label=\"", "", index, w = width)?;
            if self.config.escape_labels {
                write_escaped(f, &vertex.value().to_string())?;
            } else {
                write!(f, "{}", vertex.value())?;
            }
            f.write_str("\"]\n")?;
        }
        if indexes.is_empty() {
            f.write_char('\n')?;
        }

        f.write_char('\n')?;

        // 第二遍：输出边，目标查不到编号时跳过
        for (index, vertex) in self.graph.vertices().enumerate() {
            for edge in vertex.edges() {
                match indexes.get(&edge.dst()) {
                    Some(dst) => writeln!(f, "{:w$}{} -> {}", "", index, dst, w = width)?,
                    None => warn!(src = %vertex.id(), dst = %edge.dst(), "目标顶点无编号，跳过该边"),
                }
            }
        }

        f.write_char('}')
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, label: &str) -> fmt::Result {
    for c in label.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}

impl<T: fmt::Display> Graph<T> {
    /// 以默认配置导出 DOT
    pub fn dot(&self) -> Dot<'_, T> {
        Dot::new(self, DotConfig::default())
    }

    /// 以指定配置导出 DOT
    pub fn dot_with(&self, config: DotConfig) -> Dot<'_, T> {
        Dot::new(self, config)
    }

    /// 导出为 DOT 文本
    pub fn to_dot(&self) -> String {
        self.dot().to_string()
    }

    /// 将 DOT 文本写入 `out`
    pub fn write_dot<W: Write>(&self, out: &mut W) -> Result<()> {
        write!(out, "{}", self.dot())?;
        Ok(())
    }
}
