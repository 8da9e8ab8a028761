//! Bellman-Ford算法模块
//!
//! 单源最短路径，支持负权弧，检测从起点可达的负权环

use std::collections::HashMap;

use crate::core::error::{GraphError, GraphResult};
use crate::core::graph::{DirectedGraphReader, VertexId};

/// 计算从 `source` 出发到图中所有顶点的最短距离
///
/// # 参数
/// - `graph`: 完整的有向图读取器（需要顶点枚举和弧枚举）
/// - `source`: 起点
/// - `weight`: 权重函数 `(弧尾, 弧头) -> 权重`，允许为负
///
/// # 返回
/// 包含图中所有顶点的距离表，不可达顶点的距离为 `f64::INFINITY`。
/// 存在从起点可达的负权环时返回 `GraphError::NegativeCycle`。
pub fn bellman_ford_single_source<G, W>(
    graph: &G,
    source: &G::Vertex,
    weight: W,
) -> GraphResult<HashMap<G::Vertex, f64>, G::Vertex>
where
    G: DirectedGraphReader + ?Sized,
    W: Fn(&G::Vertex, &G::Vertex) -> f64,
{
    let mut distances: HashMap<G::Vertex, f64> = graph
        .vertexes_iter()
        .map(|node| (node, f64::INFINITY))
        .collect();
    distances.insert(source.clone(), 0.0);

    let nodes_cnt = graph.vertexes_cnt();
    log::debug!(
        "Bellman-Ford 开始: 起点 {:?}, 顶点数 {}",
        source,
        nodes_cnt
    );

    // 松弛操作，固定执行 nodes_cnt 轮
    for _ in 0..nodes_cnt {
        for conn in graph.arcs_iter() {
            let candidate = distance_of(&distances, &conn.tail) + weight(&conn.tail, &conn.head);
            if candidate < distance_of(&distances, &conn.head) {
                distances.insert(conn.head, candidate);
            }
        }
    }

    // 再做一轮，仍能松弛说明存在负权环
    for conn in graph.arcs_iter() {
        let candidate = distance_of(&distances, &conn.tail) + weight(&conn.tail, &conn.head);
        if candidate < distance_of(&distances, &conn.head) {
            log::warn!(
                "Bellman-Ford 检测到负权环: 弧 {:?} -> {:?} 仍可松弛",
                conn.tail,
                conn.head
            );
            return Err(GraphError::NegativeCycle {
                origin: source.clone(),
            });
        }
    }

    log::debug!("Bellman-Ford 完成: {} 个顶点", distances.len());
    Ok(distances)
}

/// 距离表中距离有限的顶点
pub fn reachable_vertexes<V: VertexId>(distances: &HashMap<V, f64>) -> Vec<V> {
    distances
        .iter()
        .filter(|(_, d)| d.is_finite())
        .map(|(node, _)| node.clone())
        .collect()
}

fn distance_of<V: VertexId>(distances: &HashMap<V, f64>, node: &V) -> f64 {
    distances.get(node).copied().unwrap_or(f64::INFINITY)
}
