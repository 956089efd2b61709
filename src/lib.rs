//! Split an IPv4 network into named subnets following a nested structure.
//!
//! The pipeline is: document -> [`StructureNode`] tree -> [`allocate`] ->
//! [`merge`] -> ordered [`SubnetRecord`]s. Any error aborts the whole run;
//! there are no partial results.

pub mod cli;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use std::path::Path;

pub use error::{
    AllocationError, AllocationErrorKind, CidrError, DocumentError, PlanError, StructureError,
    StructureErrorKind,
};
pub use models::{
    DocumentFormat, MetadataRecord, NetworkBlock, NetworkDocument, NodePath, StructureNode,
    SubnetRecord,
};
pub use processing::{allocate, merge, AllocatedNode, MergeOptions};

/// Read a YAML or JSON document from disk.
pub fn load_document(path: &Path) -> Result<NetworkDocument, PlanError> {
    NetworkDocument::load(path)
}

pub fn parse_document_str(text: &str, format: DocumentFormat) -> Result<NetworkDocument, PlanError> {
    Ok(NetworkDocument::parse(text, format)?)
}

/// Parse the structure, allocate the network and attach metadata.
pub fn plan(document: &NetworkDocument, options: MergeOptions) -> Result<Vec<SubnetRecord>, PlanError> {
    let structure = document.structure_tree()?;
    processing::unused_metadata(&structure, &document.metadata);
    let tree = allocate(document.network_cidr, &structure)?;
    Ok(merge(&tree, &document.metadata, options))
}
