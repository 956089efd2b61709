//! Flatten an allocated tree into subnet records with metadata attached.

use super::AllocatedNode;
use crate::models::{cover_range, MetadataRecord, StructureNode, SubnetRecord};
use itertools::Itertools;
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOptions {
    /// Emit reserved ranges as rows, split into aligned CIDR blocks.
    pub include_reserved: bool,
}

/// Walk the tree in pre-order and emit one record per leaf.
///
/// Groups never emit records. A leaf without metadata gets its identifier as
/// name and an empty description.
pub fn merge(
    tree: &AllocatedNode,
    metadata: &BTreeMap<String, MetadataRecord>,
    options: MergeOptions,
) -> Vec<SubnetRecord> {
    let mut records = Vec::new();
    let mut stack = vec![tree];

    while let Some(node) = stack.pop() {
        match node {
            AllocatedNode::Group { children, .. } => stack.extend(children.iter().rev()),
            AllocatedNode::Leaf { identifier, block } => {
                let record = SubnetRecord::new(identifier, *block, metadata.get(identifier));
                log::trace!("{} -> {}", record.id, record.cidr);
                records.push(record);
            }
            AllocatedNode::Reserved { first, addr_count } if options.include_reserved => {
                records.extend(
                    cover_range(*first, *addr_count)
                        .into_iter()
                        .map(SubnetRecord::reserved),
                );
            }
            AllocatedNode::Reserved { .. } => {}
        }
    }

    log::info!("Merged {} subnet records", records.len());
    records
}

/// Metadata keys that no subnet in the structure uses, in key order.
pub fn unused_metadata<'a>(
    structure: &StructureNode,
    metadata: &'a BTreeMap<String, MetadataRecord>,
) -> Vec<&'a str> {
    let used: HashSet<&str> = structure.identifiers().into_iter().collect();
    let unused = metadata
        .keys()
        .map(String::as_str)
        .filter(|key| !used.contains(key))
        .collect::<Vec<_>>();
    if !unused.is_empty() {
        log::warn!(
            "Metadata defined for unknown subnet ids: {}",
            unused.iter().join(", ")
        );
    }
    unused
}
