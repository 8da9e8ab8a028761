pub mod error;
pub mod graph;

// 错误和结果类型
pub use error::{ConfigError, ConfigResult, GraphError, GraphResult, NegativeWeightError};

// 图读取能力
pub use graph::{
    Connection, DirectedGraphArcsReader, DirectedGraphReader, MixedGraphConnectionsReader,
    UndirectedGraphEdgesReader, VertexId,
};
