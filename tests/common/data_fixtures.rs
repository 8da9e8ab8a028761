//! 测试数据生成模块
//!
//! 提供各种测试图的生成函数

use super::MemoryGraph;

/// 基准有向图: 1→2:1, 2→3:1, 1→3:5, 3→4:1, 2→4:10
pub fn reference_graph() -> MemoryGraph {
    MemoryGraph::directed(&[
        (1, 2, 1.0),
        (2, 3, 1.0),
        (1, 3, 5.0),
        (3, 4, 1.0),
        (2, 4, 10.0),
    ])
}

/// 在基准图上追加 2→3:-1, 3→1:-1，形成总权重为 -1 的负权环 1→2→3→1
pub fn negative_cycle_graph() -> MemoryGraph {
    let mut graph = reference_graph();
    graph.add_arc(1, 2, 1.0);
    graph.add_arc(2, 3, -1.0);
    graph.add_arc(3, 1, -1.0);
    graph
}

/// 含负权弧但无负权环的有向图
pub fn negative_arc_graph() -> MemoryGraph {
    MemoryGraph::directed(&[
        (1, 2, 4.0),
        (1, 3, 2.0),
        (3, 2, -1.0),
        (2, 4, 2.0),
        (3, 4, 6.0),
    ])
}

/// `width x height` 网格，向右和向下的弧，权重由坐标决定
pub fn grid_graph(width: i64, height: i64) -> MemoryGraph {
    let mut graph = MemoryGraph::new();
    let id = |x: i64, y: i64| y * width + x;
    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                graph.add_arc(id(x, y), id(x + 1, y), ((x * 7 + y * 3) % 5 + 1) as f64);
            }
            if y + 1 < height {
                graph.add_arc(id(x, y), id(x, y + 1), ((x * 2 + y * 5) % 4 + 1) as f64);
            }
        }
    }
    graph
}

/// 含正权环的有向图，用于比较各算法
pub fn cyclic_graph() -> MemoryGraph {
    MemoryGraph::directed(&[
        (1, 2, 2.0),
        (2, 3, 2.0),
        (3, 1, 1.0),
        (2, 4, 7.0),
        (3, 4, 3.0),
        (4, 5, 1.0),
        (5, 3, 1.0),
        (1, 5, 9.0),
    ])
}

/// 无向环 1-2-3-4-1 加一条弦 1-3
pub fn undirected_ring() -> MemoryGraph {
    MemoryGraph::undirected(&[
        (1, 2, 1.0),
        (2, 3, 1.0),
        (3, 4, 1.0),
        (4, 1, 1.0),
        (1, 3, 3.0),
    ])
}
