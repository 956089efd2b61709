//! Subnet planning logic.
//!
//! - [`allocator`] - Recursive division of a block among weighted children
//! - [`merger`] - Flattening the allocated tree into subnet records

mod allocator;
mod merger;

// Re-export public functions
pub use allocator::{allocate, AllocatedNode};
pub use merger::{merge, unused_metadata, MergeOptions};
