pub mod aggregate;
pub mod grid;
pub mod render;

pub use aggregate::{calc_offset, count_days_since, process_repositories, CommitCounts};
pub use grid::{build_columns, Column};
pub use render::render_graph;

/// Length of the trailing activity window, in whole days.
pub const DAYS_IN_WINDOW: i64 = 183;

/// Number of fully rendered week columns in the graph.
pub const WEEKS_IN_WINDOW: i64 = 26;
