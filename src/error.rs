//! Error types for the planning pipeline.
//!
//! Every hard failure aborts the whole computation; nothing here is retried.

use crate::models::{NetworkBlock, NodePath};
use std::net::Ipv4Addr;
use std::path::PathBuf;
use thiserror::Error;

/// Problems with CIDR text or with carving a child block out of a parent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CidrError {
    #[error("invalid CIDR format: '{0}'")]
    Format(String),
    #[error("invalid IPv4 address: '{0}'")]
    Address(String),
    #[error("network length /{0} is too long")]
    PrefixTooLong(u8),
    #[error("{addr}/{prefix} has host bits set (network address is {network})")]
    HostBitsSet {
        addr: Ipv4Addr,
        prefix: u8,
        network: Ipv4Addr,
    },
    #[error("span of {0} addresses is not a power of two")]
    SpanNotPowerOfTwo(u64),
    #[error("span of {span} addresses is not aligned at offset {offset}")]
    Misaligned { offset: u64, span: u64 },
    #[error("span of {span} addresses at offset {offset} does not fit in {block}")]
    OutOfRange {
        block: NetworkBlock,
        offset: u64,
        span: u64,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StructureErrorKind {
    #[error("structure must be a list")]
    RootNotList,
    #[error("expected a list, an identifier or a single-entry mapping of identifier to weight, found {0}")]
    UnexpectedShape(&'static str),
    #[error("a weighted entry must have exactly one identifier, found {0}")]
    WeightedEntryKeys(usize),
    #[error("weight of '{identifier}' must be an integer between 1 and {max}, found {found}")]
    InvalidWeight {
        identifier: String,
        found: String,
        max: u32,
    },
    #[error("identifier must not be empty")]
    EmptyIdentifier,
    #[error("identifier '{identifier}' is already used at {first}")]
    DuplicateIdentifier { identifier: String, first: NodePath },
}

/// The nested structure does not follow the grammar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid structure at {path}: {kind}")]
pub struct StructureError {
    pub path: NodePath,
    pub kind: StructureErrorKind,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AllocationErrorKind {
    #[error("{addr_count} addresses cannot be split into {total_weight} equal units")]
    NotDivisible { addr_count: u64, total_weight: u64 },
    #[error("weight {weight} gives a span of {span} addresses, which is not a power of two")]
    SpanNotPowerOfTwo { weight: u64, span: u64 },
    #[error("weight {weight} gives a span of {span} addresses at offset {offset}, which is not a CIDR boundary")]
    Misaligned { weight: u64, span: u64, offset: u64 },
    #[error(transparent)]
    Block(CidrError),
}

/// A block cannot be tiled exactly by the weights declared beneath it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot allocate {block} at {path}: {kind}")]
pub struct AllocationError {
    pub path: NodePath,
    pub block: NetworkBlock,
    pub kind: AllocationErrorKind,
}

/// The input document could not be deserialized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid document at '{path}': {message}")]
pub struct DocumentError {
    pub path: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum PlanError {
    #[error(transparent)]
    Cidr(#[from] CidrError),
    #[error(transparent)]
    Structure(#[from] StructureError),
    #[error(transparent)]
    Allocation(#[from] AllocationError),
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("error serializing output: {0}")]
    Export(String),
}

impl PlanError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> PlanError {
        PlanError::Io {
            path: path.into(),
            source,
        }
    }
}
