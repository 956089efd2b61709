//! Domain models for the subnet planner.
//!
//! - [`NetworkBlock`] - normalized IPv4 network in CIDR notation
//! - [`StructureNode`] - nested structure tree parsed from the document
//! - [`MetadataRecord`] and [`SubnetRecord`] - per-subnet input and output
//! - [`NetworkDocument`] - the whole input document

mod document;
mod ipv4;
mod path;
mod structure;
mod subnet;

// Re-export public types
pub use document::{DocumentFormat, NetworkDocument};
pub use ipv4::{
    broadcast_addr, cover_range, cut_addr, get_cidr_mask, lo_mask, NetworkBlock, CIDR_PATTERN,
    MAX_LENGTH,
};
pub use path::{NodePath, PathSegment};
pub use structure::{parse_structure, StructureNode, PLACEHOLDER};
pub use subnet::{MetadataRecord, SubnetRecord, RESERVED_NAME};
