//! 集成测试共享工具模块
//!
//! 提供内存图实现和测试数据，供所有集成测试使用

#![allow(dead_code)]

pub mod assertions;
pub mod data_fixtures;

use std::collections::HashMap;

use graphsearch::core::graph::{
    Connection, DirectedGraphArcsReader, DirectedGraphReader, UndirectedGraphEdgesReader,
};

/// 内存中的带权混合图
///
/// 弧按插入顺序保存，邻居顺序即插入顺序；无向边在两个端点上各登记一次。
#[derive(Debug, Clone, Default)]
pub struct MemoryGraph {
    vertexes: Vec<i64>,
    arcs: Vec<(i64, i64)>,
    accessors: HashMap<i64, Vec<i64>>,
    neighbours: HashMap<i64, Vec<i64>>,
    weights: HashMap<(i64, i64), f64>,
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按 `(弧尾, 弧头, 权重)` 构建有向图
    pub fn directed(arcs: &[(i64, i64, f64)]) -> Self {
        let mut graph = Self::new();
        for &(tail, head, weight) in arcs {
            graph.add_arc(tail, head, weight);
        }
        graph
    }

    /// 按 `(端点, 端点, 权重)` 构建无向图
    pub fn undirected(edges: &[(i64, i64, f64)]) -> Self {
        let mut graph = Self::new();
        for &(a, b, weight) in edges {
            graph.add_edge(a, b, weight);
        }
        graph
    }

    pub fn add_vertex(&mut self, node: i64) {
        if !self.vertexes.contains(&node) {
            self.vertexes.push(node);
        }
    }

    pub fn add_arc(&mut self, tail: i64, head: i64, weight: f64) {
        self.add_vertex(tail);
        self.add_vertex(head);
        self.arcs.push((tail, head));
        self.accessors.entry(tail).or_default().push(head);
        self.weights.insert((tail, head), weight);
    }

    pub fn add_edge(&mut self, a: i64, b: i64, weight: f64) {
        self.add_vertex(a);
        self.add_vertex(b);
        self.neighbours.entry(a).or_default().push(b);
        self.neighbours.entry(b).or_default().push(a);
        self.weights.insert((a, b), weight);
        self.weights.insert((b, a), weight);
    }

    /// 权重函数，未登记的顶点对视为不连通
    pub fn weight(&self, tail: &i64, head: &i64) -> f64 {
        self.weights
            .get(&(*tail, *head))
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    /// 路径上各段权重之和
    pub fn path_weight(&self, path: &[i64]) -> f64 {
        path.windows(2).map(|pair| self.weight(&pair[0], &pair[1])).sum()
    }

    pub fn vertexes(&self) -> &[i64] {
        &self.vertexes
    }
}

impl DirectedGraphArcsReader for MemoryGraph {
    type Vertex = i64;

    fn accessors(&self, node: &i64) -> impl Iterator<Item = i64> + '_ {
        self.accessors.get(node).into_iter().flatten().copied()
    }
}

impl UndirectedGraphEdgesReader for MemoryGraph {
    type Vertex = i64;

    fn neighbours(&self, node: &i64) -> impl Iterator<Item = i64> + '_ {
        self.neighbours.get(node).into_iter().flatten().copied()
    }
}

impl DirectedGraphReader for MemoryGraph {
    fn vertexes_iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.vertexes.iter().copied()
    }

    fn vertexes_cnt(&self) -> usize {
        self.vertexes.len()
    }

    fn arcs_iter(&self) -> impl Iterator<Item = Connection<i64>> + '_ {
        self.arcs
            .iter()
            .map(|&(tail, head)| Connection::new(tail, head))
    }
}
