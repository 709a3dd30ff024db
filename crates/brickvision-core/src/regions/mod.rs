mod accumulator;
pub mod aggregate;
pub mod types;

pub use aggregate::{compute_stats, compute_stats_parallel, compute_stats_with_order};
pub use types::{Centroid, RegionStats, RegionStatsSet, TraversalOrder};
