//! 图读取能力接口
//!
//! 算法只依赖这些只读能力，不关心底层存储结构：
//! - 有向图：`accessors` 返回出边邻居
//! - 无向图：`neighbours` 返回相邻顶点
//! - 混合图：同时具备以上两种能力
//! - 完整有向图读取器：额外提供顶点枚举和弧枚举（Bellman-Ford 需要）

use std::fmt::Debug;
use std::hash::Hash;
use std::rc::Rc;
use std::sync::Arc;

/// 顶点标识
///
/// 不假设任何内部结构，只要求可比较、可哈希、可克隆。
pub trait VertexId: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> VertexId for T {}

/// 一条弧，方向为 `tail -> head`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Connection<V> {
    pub tail: V,
    pub head: V,
}

impl<V> Connection<V> {
    pub fn new(tail: V, head: V) -> Self {
        Self { tail, head }
    }
}

/// 有向图的出边读取能力
pub trait DirectedGraphArcsReader {
    type Vertex: VertexId;

    /// 从 `node` 出发一步可达的顶点
    fn accessors(&self, node: &Self::Vertex) -> impl Iterator<Item = Self::Vertex> + '_;
}

/// 无向图的邻接读取能力
pub trait UndirectedGraphEdgesReader {
    type Vertex: VertexId;

    fn neighbours(&self, node: &Self::Vertex) -> impl Iterator<Item = Self::Vertex> + '_;
}

/// 混合图：同一顶点集合上既有弧也有边
pub trait MixedGraphConnectionsReader:
    DirectedGraphArcsReader + UndirectedGraphEdgesReader<Vertex = <Self as DirectedGraphArcsReader>::Vertex>
{
}

impl<G> MixedGraphConnectionsReader for G where
    G: DirectedGraphArcsReader
        + UndirectedGraphEdgesReader<Vertex = <G as DirectedGraphArcsReader>::Vertex>
{
}

/// 完整的有向图读取器
pub trait DirectedGraphReader: DirectedGraphArcsReader {
    fn vertexes_iter(&self) -> impl Iterator<Item = Self::Vertex> + '_;

    fn vertexes_cnt(&self) -> usize;

    fn arcs_iter(&self) -> impl Iterator<Item = Connection<Self::Vertex>> + '_;
}

// ==================== 引用与共享句柄的转发实现 ====================

macro_rules! forward_readers {
    ($($handle:ty),* $(,)?) => {
        $(
            impl<G: DirectedGraphArcsReader + ?Sized> DirectedGraphArcsReader for $handle {
                type Vertex = G::Vertex;

                fn accessors(&self, node: &Self::Vertex) -> impl Iterator<Item = Self::Vertex> + '_ {
                    (**self).accessors(node)
                }
            }

            impl<G: UndirectedGraphEdgesReader + ?Sized> UndirectedGraphEdgesReader for $handle {
                type Vertex = G::Vertex;

                fn neighbours(&self, node: &Self::Vertex) -> impl Iterator<Item = Self::Vertex> + '_ {
                    (**self).neighbours(node)
                }
            }

            impl<G: DirectedGraphReader + ?Sized> DirectedGraphReader for $handle {
                fn vertexes_iter(&self) -> impl Iterator<Item = Self::Vertex> + '_ {
                    (**self).vertexes_iter()
                }

                fn vertexes_cnt(&self) -> usize {
                    (**self).vertexes_cnt()
                }

                fn arcs_iter(&self) -> impl Iterator<Item = Connection<Self::Vertex>> + '_ {
                    (**self).arcs_iter()
                }
            }
        )*
    };
}

forward_readers!(&G, Arc<G>, Rc<G>, Box<G>);
