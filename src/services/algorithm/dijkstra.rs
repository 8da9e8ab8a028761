//! Dijkstra算法模块
//!
//! 通用的路径存在性检查：按累计权重从小到大扩展，目标第一次出队即返回。
//!
//! 与教科书版本不同，这里没有已定顶点集合：同一顶点可以带着不同的累计权重
//! 多次入队、多次扩展。只要权重非负，目标第一次出队时的累计权重就是最小值。
//! 代价是在含正权环且目标不可达的图上，如果不提供停止函数，队列会无限增长；
//! 在这类图上调用方应通过停止函数限制搜索范围。

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::core::error::{GraphError, GraphResult, NegativeWeightError};
use crate::core::graph::{
    DirectedGraphArcsReader, MixedGraphConnectionsReader, UndirectedGraphEdgesReader,
};
use crate::services::algorithm::neighbours::{
    DirectedNeighbours, MixedNeighbours, NeighbourExtractor, UndirectedNeighbours,
};

/// 停止函数：返回 `true` 表示不再从该顶点继续扩展
pub type StopFn<'a, V> = &'a dyn Fn(&V, f64) -> bool;

/// 单位权重，所有弧权重均为 1
pub fn simple_weight<V>(_head: &V, _tail: &V) -> f64 {
    1.0
}

/// 队列项，按累计权重构成最小堆
#[derive(Debug, Clone)]
struct NodeDistance<T> {
    node: T,
    distance: f64,
}

impl<T> PartialEq for NodeDistance<T> {
    fn eq(&self, other: &Self) -> bool {
        self.distance.total_cmp(&other.distance) == Ordering::Equal
    }
}

impl<T> Eq for NodeDistance<T> {}

impl<T> Ord for NodeDistance<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.distance.total_cmp(&self.distance)
    }
}

impl<T> PartialOrd for NodeDistance<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 检查 `from` 到 `to` 的路径是否存在，存在时返回路径总权重
///
/// # 参数
/// - `extractor`: 邻居提取器，决定按有向、无向还是混合方式遍历
/// - `stop`: 可选的停止函数，用于按自定义条件剪枝
/// - `weight`: 权重函数 `(出发顶点, 到达顶点) -> 权重`
///
/// # 返回
/// - `Ok(Some(weight))`: 路径存在
/// - `Ok(None)`: 路径不存在
/// - `Err(GraphError::NegativeWeight)`: 遍历中遇到负权弧
///
/// `from == to` 时直接返回 `Some(0.0)`，不调用权重函数。
pub fn check_path_dijkstra<E, W>(
    extractor: &E,
    from: &E::Vertex,
    to: &E::Vertex,
    stop: Option<StopFn<'_, E::Vertex>>,
    weight: W,
) -> GraphResult<Option<f64>, E::Vertex>
where
    E: NeighbourExtractor + ?Sized,
    W: Fn(&E::Vertex, &E::Vertex) -> f64,
{
    if from == to {
        return Ok(Some(0.0));
    }

    log::debug!("Dijkstra 路径检查开始: {:?} -> {:?}", from, to);

    let mut to_visit: BinaryHeap<NodeDistance<E::Vertex>> = BinaryHeap::with_capacity(10);
    to_visit.push(NodeDistance {
        node: from.clone(),
        distance: 0.0,
    });

    let mut expanded = 0usize;
    while let Some(NodeDistance { node, distance }) = to_visit.pop() {
        // 权重非负时，目标第一次出队的累计权重就是最小值
        if node == *to {
            log::debug!(
                "Dijkstra 路径检查完成: 找到路径, 权重 {}, 扩展 {} 次",
                distance,
                expanded
            );
            return Ok(Some(distance));
        }

        expanded += 1;
        log::trace!("扩展顶点 {:?}, 累计权重 {}", node, distance);

        for next in extractor.all_neighbours(&node) {
            let arc_weight = weight(&node, &next);
            if arc_weight < 0.0 {
                log::warn!(
                    "Dijkstra 路径检查遇到负权弧 {:?} -> {:?} ({})",
                    node,
                    next,
                    arc_weight
                );
                return Err(GraphError::negative_weight(
                    from.clone(),
                    to.clone(),
                    NegativeWeightError {
                        head: node.clone(),
                        tail: next,
                        weight: arc_weight,
                    },
                ));
            }

            let next_distance = distance + arc_weight;
            // 目标顶点不受停止函数影响
            let pruned = next != *to && stop.is_some_and(|stop| stop(&next, next_distance));
            if !pruned {
                to_visit.push(NodeDistance {
                    node: next,
                    distance: next_distance,
                });
            }
        }
    }

    log::debug!("Dijkstra 路径检查完成: 路径不存在, 扩展 {} 次", expanded);
    Ok(None)
}

/// 与 [`check_path_dijkstra`] 相同，结果以 `(权重, 是否存在)` 形式返回
///
/// 路径不存在时权重为 `-1.0`。
pub fn check_path_weight<E, W>(
    extractor: &E,
    from: &E::Vertex,
    to: &E::Vertex,
    stop: Option<StopFn<'_, E::Vertex>>,
    weight: W,
) -> GraphResult<(f64, bool), E::Vertex>
where
    E: NeighbourExtractor + ?Sized,
    W: Fn(&E::Vertex, &E::Vertex) -> f64,
{
    let found = check_path_dijkstra(extractor, from, to, stop, weight)?;
    Ok(match found {
        Some(total) => (total, true),
        None => (-1.0, false),
    })
}

/// 有向图路径存在性检查
pub fn check_directed_path_dijkstra<G, W>(
    graph: &G,
    from: &G::Vertex,
    to: &G::Vertex,
    stop: Option<StopFn<'_, G::Vertex>>,
    weight: W,
) -> GraphResult<bool, G::Vertex>
where
    G: DirectedGraphArcsReader,
    W: Fn(&G::Vertex, &G::Vertex) -> f64,
{
    let extractor = DirectedNeighbours::new(graph);
    Ok(check_path_dijkstra(&extractor, from, to, stop, weight)?.is_some())
}

/// 无向图路径存在性检查
pub fn check_undirected_path_dijkstra<G, W>(
    graph: &G,
    from: &G::Vertex,
    to: &G::Vertex,
    stop: Option<StopFn<'_, G::Vertex>>,
    weight: W,
) -> GraphResult<bool, G::Vertex>
where
    G: UndirectedGraphEdgesReader,
    W: Fn(&G::Vertex, &G::Vertex) -> f64,
{
    let extractor = UndirectedNeighbours::new(graph);
    Ok(check_path_dijkstra(&extractor, from, to, stop, weight)?.is_some())
}

/// 混合图路径存在性检查
pub fn check_mixed_path_dijkstra<G, W>(
    graph: &G,
    from: &<G as DirectedGraphArcsReader>::Vertex,
    to: &<G as DirectedGraphArcsReader>::Vertex,
    stop: Option<StopFn<'_, <G as DirectedGraphArcsReader>::Vertex>>,
    weight: W,
) -> GraphResult<bool, <G as DirectedGraphArcsReader>::Vertex>
where
    G: MixedGraphConnectionsReader,
    W: Fn(&<G as DirectedGraphArcsReader>::Vertex, &<G as DirectedGraphArcsReader>::Vertex) -> f64,
{
    let extractor = MixedNeighbours::new(graph);
    Ok(check_path_dijkstra(&extractor, from, to, stop, weight)?.is_some())
}
