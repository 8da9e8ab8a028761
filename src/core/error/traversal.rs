//! 遍历错误类型
//!
//! 涵盖路径检查和最短路径求解过程中的错误

use std::fmt::Debug;
use thiserror::Error;

/// 遍历操作结果类型别名
pub type GraphResult<T, V> = Result<T, GraphError<V>>;

/// 检测到的负权弧 `head -> tail`
///
/// `head` 是弧的出发顶点，`tail` 是到达顶点，与权重函数的参数顺序一致。
#[derive(Error, Debug, Clone, PartialEq)]
#[error("检测到负权弧: {head:?} -> {tail:?}, 权重 {weight}")]
pub struct NegativeWeightError<V: Debug> {
    pub head: V,
    pub tail: V,
    pub weight: f64,
}

/// 图算法错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError<V: Debug> {
    /// Dijkstra 路径检查遇到负权弧，整个调用中止
    #[error("Dijkstra 路径检查失败 ({from:?} -> {to:?}): {source}")]
    NegativeWeight {
        from: V,
        to: V,
        #[source]
        source: NegativeWeightError<V>,
    },

    /// Bellman-Ford 检测到从起点可达的负权环
    #[error("检测到负权环 (起点 {origin:?})")]
    NegativeCycle { origin: V },
}

impl<V: Debug> GraphError<V> {
    /// 用调用的起止顶点包装负权弧错误
    pub fn negative_weight(from: V, to: V, source: NegativeWeightError<V>) -> Self {
        GraphError::NegativeWeight { from, to, source }
    }

    pub fn is_negative_weight(&self) -> bool {
        matches!(self, GraphError::NegativeWeight { .. })
    }

    pub fn is_negative_cycle(&self) -> bool {
        matches!(self, GraphError::NegativeCycle { .. })
    }
}
