//! GraphSearch - path search algorithms over read-only graph capability traits
//!
//! The crate does not store graphs. Callers implement the reader traits in
//! [`core::graph`] for their own representation and get:
//!
//! - path existence and minimum weight with a Dijkstra-style search
//!   ([`services::algorithm::dijkstra`]),
//! - lazy enumeration of every simple path between two vertices
//!   ([`services::algorithm::all_paths`]),
//! - single-source shortest paths with negative weights and negative-cycle
//!   detection ([`services::algorithm::bellman_ford`]).

pub mod config;
pub mod core;
pub mod services;
pub mod utils;
