//! 邻居提取模块
//!
//! 把三种图能力（有向、无向、混合）统一成一个 "获取全部邻居" 操作，
//! 供路径检查和路径枚举算法使用

use crate::core::graph::{
    DirectedGraphArcsReader, MixedGraphConnectionsReader, UndirectedGraphEdgesReader, VertexId,
};

/// 统一的邻居提取接口
pub trait NeighbourExtractor {
    type Vertex: VertexId;

    /// `node` 的全部可达邻居，顺序由底层图决定
    fn all_neighbours(&self, node: &Self::Vertex) -> impl Iterator<Item = Self::Vertex> + '_;
}

impl<E: NeighbourExtractor + ?Sized> NeighbourExtractor for &E {
    type Vertex = E::Vertex;

    fn all_neighbours(&self, node: &Self::Vertex) -> impl Iterator<Item = Self::Vertex> + '_ {
        (**self).all_neighbours(node)
    }
}

/// 有向图邻居：只沿出边
#[derive(Debug, Clone)]
pub struct DirectedNeighbours<G> {
    graph: G,
}

impl<G: DirectedGraphArcsReader> DirectedNeighbours<G> {
    pub fn new(graph: G) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }
}

impl<G: DirectedGraphArcsReader> NeighbourExtractor for DirectedNeighbours<G> {
    type Vertex = G::Vertex;

    fn all_neighbours(&self, node: &Self::Vertex) -> impl Iterator<Item = Self::Vertex> + '_ {
        self.graph.accessors(node)
    }
}

/// 无向图邻居
#[derive(Debug, Clone)]
pub struct UndirectedNeighbours<G> {
    graph: G,
}

impl<G: UndirectedGraphEdgesReader> UndirectedNeighbours<G> {
    pub fn new(graph: G) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }
}

impl<G: UndirectedGraphEdgesReader> NeighbourExtractor for UndirectedNeighbours<G> {
    type Vertex = G::Vertex;

    fn all_neighbours(&self, node: &Self::Vertex) -> impl Iterator<Item = Self::Vertex> + '_ {
        self.graph.neighbours(node)
    }
}

/// 混合图邻居：先出边邻居，再无向邻居
///
/// 不去重。同时经弧和边可达的顶点会出现两次，
/// 路径枚举会因此产出重复（但仍是简单路径）的结果。
#[derive(Debug, Clone)]
pub struct MixedNeighbours<G> {
    graph: G,
}

impl<G: MixedGraphConnectionsReader> MixedNeighbours<G> {
    pub fn new(graph: G) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }
}

impl<G: MixedGraphConnectionsReader> NeighbourExtractor for MixedNeighbours<G> {
    type Vertex = <G as DirectedGraphArcsReader>::Vertex;

    fn all_neighbours(&self, node: &Self::Vertex) -> impl Iterator<Item = Self::Vertex> + '_ {
        self.graph
            .accessors(node)
            .chain(self.graph.neighbours(node))
    }
}

pub fn new_directed_neighbours_extractor<G: DirectedGraphArcsReader>(
    graph: G,
) -> DirectedNeighbours<G> {
    DirectedNeighbours::new(graph)
}

pub fn new_undirected_neighbours_extractor<G: UndirectedGraphEdgesReader>(
    graph: G,
) -> UndirectedNeighbours<G> {
    UndirectedNeighbours::new(graph)
}

pub fn new_mixed_neighbours_extractor<G: MixedGraphConnectionsReader>(
    graph: G,
) -> MixedNeighbours<G> {
    MixedNeighbours::new(graph)
}
