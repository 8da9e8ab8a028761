//! 错误处理
//!
//! - 遍历错误（负权弧、负权环）使用结构化设计，保留顶点上下文和错误链
//! - 配置错误使用枚举设计，外部错误通过 `#[from]` 自动转换

pub mod config;
pub mod traversal;

pub use config::{ConfigError, ConfigResult};
pub use traversal::{GraphError, GraphResult, NegativeWeightError};
