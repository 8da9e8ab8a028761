//! 算法模块
//!
//! 包含路径检查、全路径枚举和单源最短路径算法实现

pub mod all_paths;
pub mod bellman_ford;
pub mod dijkstra;
pub mod neighbours;

// 重新导出常用算法
pub use all_paths::{
    find_all_paths, get_all_directed_paths, get_all_mixed_paths, get_all_paths,
    get_all_paths_with, get_all_undirected_paths, PathStream, PathStreamOptions,
};
pub use bellman_ford::{bellman_ford_single_source, reachable_vertexes};
pub use dijkstra::{
    check_directed_path_dijkstra, check_mixed_path_dijkstra, check_path_dijkstra,
    check_path_weight, check_undirected_path_dijkstra, simple_weight, StopFn,
};
pub use neighbours::{
    new_directed_neighbours_extractor, new_mixed_neighbours_extractor,
    new_undirected_neighbours_extractor, DirectedNeighbours, MixedNeighbours,
    NeighbourExtractor, UndirectedNeighbours,
};
