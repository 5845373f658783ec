pub mod dependency;
pub mod walk_stats;

pub use dependency::Dependency;
pub use walk_stats::WalkStats;
