//! The constraint-satisfaction core: per-slot candidate domains, the
//! consistency passes that prune them, and the backtracking search that
//! turns pruned domains into a complete assignment.

pub mod assignment;
pub mod consistency;
pub mod domains;
pub mod engine;
pub mod heuristics;
pub mod stats;
pub mod work_list;
