// Board coordinate types
pub mod position;

// Re-export main types for convenience
pub use position::{BoardCoordinate, File, Rank};
