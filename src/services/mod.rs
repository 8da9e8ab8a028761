//! 服务层模块
//!
//! 包含图算法服务

pub mod algorithm;

pub use algorithm::*;
