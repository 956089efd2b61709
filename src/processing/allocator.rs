//! Recursive subnet allocation.
//!
//! Each group splits its block into `W` equal units, `W` being the sum of its
//! children's weights, and hands every child a contiguous run of units in
//! sibling order. A child that becomes a subnet or a nested group must land on
//! a single aligned CIDR block; reserved runs only have to fit.

use crate::error::{AllocationError, AllocationErrorKind, CidrError};
use crate::models::{NetworkBlock, NodePath, StructureNode};
use std::net::Ipv4Addr;

/// Structure tree annotated with the address space each node received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocatedNode {
    /// `block` is `None` for an empty group, which takes no space.
    Group {
        block: Option<NetworkBlock>,
        children: Vec<AllocatedNode>,
    },
    Leaf {
        identifier: String,
        block: NetworkBlock,
    },
    /// Reserved run of `addr_count` addresses starting at `first`.
    Reserved { first: Ipv4Addr, addr_count: u64 },
}

/// Allocate `block` to the structure rooted at `node`.
///
/// Pure and deterministic: the same inputs always give the same tree.
pub fn allocate(block: NetworkBlock, node: &StructureNode) -> Result<AllocatedNode, AllocationError> {
    log::info!("Allocating {block}");
    allocate_node(block, node, &NodePath::root())
}

fn allocate_node(
    block: NetworkBlock,
    node: &StructureNode,
    path: &NodePath,
) -> Result<AllocatedNode, AllocationError> {
    match node {
        StructureNode::Group(children) => allocate_group(block, children, path),
        StructureNode::NamedLeaf(identifier) | StructureNode::WeightedEntry { identifier, .. } => {
            Ok(AllocatedNode::Leaf {
                identifier: identifier.clone(),
                block,
            })
        }
        StructureNode::Reserved { .. } => Ok(AllocatedNode::Reserved {
            first: block.first(),
            addr_count: block.addr_count(),
        }),
    }
}

fn allocate_group(
    block: NetworkBlock,
    children: &[StructureNode],
    path: &NodePath,
) -> Result<AllocatedNode, AllocationError> {
    let total_weight: u64 = children.iter().map(StructureNode::weight).sum();
    log::debug!(
        "{path}: splitting {block} across {} children, total weight {total_weight}",
        children.len()
    );

    if total_weight == 0 {
        // Only empty groups below; nothing to hand out.
        let children = children.iter().map(|_| empty_group()).collect();
        return Ok(AllocatedNode::Group {
            block: Some(block),
            children,
        });
    }

    let addr_count = block.addr_count();
    if addr_count % total_weight != 0 {
        return Err(AllocationError {
            path: path.clone(),
            block,
            kind: AllocationErrorKind::NotDivisible {
                addr_count,
                total_weight,
            },
        });
    }
    let unit = addr_count / total_weight;

    let mut offset = 0u64;
    let mut allocated = Vec::with_capacity(children.len());
    for (i, child) in children.iter().enumerate() {
        let child_path = match child.identifier() {
            Some(identifier) if matches!(child, StructureNode::WeightedEntry { .. }) => {
                path.index(i).key(identifier)
            }
            _ => path.index(i),
        };
        let weight = child.weight();
        let span = weight * unit;

        let node = match child {
            StructureNode::Group(grandchildren) if grandchildren.is_empty() => empty_group(),
            StructureNode::Reserved { .. } => {
                let first = Ipv4Addr::from((u32::from(block.first()) as u64 + offset) as u32);
                log::trace!("{child_path}: reserved {span} addresses from {first}");
                AllocatedNode::Reserved {
                    first,
                    addr_count: span,
                }
            }
            _ => {
                let child_block =
                    block
                        .subdivide(offset, span)
                        .map_err(|e| AllocationError {
                            path: child_path.clone(),
                            block,
                            kind: span_error(e, weight),
                        })?;
                log::trace!("{child_path}: {child_block}");
                allocate_node(child_block, child, &child_path)?
            }
        };
        allocated.push(node);
        offset += span;
    }

    Ok(AllocatedNode::Group {
        block: Some(block),
        children: allocated,
    })
}

fn empty_group() -> AllocatedNode {
    AllocatedNode::Group {
        block: None,
        children: Vec::new(),
    }
}

fn span_error(e: CidrError, weight: u64) -> AllocationErrorKind {
    match e {
        CidrError::SpanNotPowerOfTwo(span) => AllocationErrorKind::SpanNotPowerOfTwo { weight, span },
        CidrError::Misaligned { offset, span } => AllocationErrorKind::Misaligned {
            weight,
            span,
            offset,
        },
        other => AllocationErrorKind::Block(other),
    }
}
