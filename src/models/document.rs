//! The input document: network, metadata and nested structure.

use super::{parse_structure, MetadataRecord, NetworkBlock, StructureNode};
use crate::error::{DocumentError, PlanError, StructureError};
use schemars::gen::SchemaGenerator;
use schemars::schema::Schema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// `.json` files are read as JSON, everything else as YAML.
    pub fn from_path(path: &Path) -> DocumentFormat {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// Network structure configuration.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
#[schemars(rename = "NetworkStructureConfiguration")]
pub struct NetworkDocument {
    /// Top-level subnet CIDR.
    pub network_cidr: NetworkBlock,
    /// Metadata describing the subnets by ids.
    #[serde(default)]
    pub metadata: BTreeMap<String, MetadataRecord>,
    /// Subnet structure.
    #[schemars(schema_with = "structure_schema")]
    pub structure: Value,
}

impl NetworkDocument {
    pub fn parse(text: &str, format: DocumentFormat) -> Result<NetworkDocument, DocumentError> {
        match format {
            DocumentFormat::Yaml => {
                let de = serde_yaml::Deserializer::from_str(text);
                serde_path_to_error::deserialize(de).map_err(|e| DocumentError {
                    path: e.path().to_string(),
                    message: e.inner().to_string(),
                })
            }
            DocumentFormat::Json => {
                let mut de = serde_json::Deserializer::from_str(text);
                let document = serde_path_to_error::deserialize(&mut de).map_err(|e| {
                    DocumentError {
                        path: e.path().to_string(),
                        message: e.inner().to_string(),
                    }
                })?;
                de.end().map_err(|e| DocumentError {
                    path: ".".to_string(),
                    message: e.to_string(),
                })?;
                Ok(document)
            }
        }
    }

    pub fn load(path: &Path) -> Result<NetworkDocument, PlanError> {
        log::info!("Reading network document: {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|e| PlanError::io(path, e))?;
        Ok(NetworkDocument::parse(&text, DocumentFormat::from_path(path))?)
    }

    /// Parse `structure` into a tree.
    pub fn structure_tree(&self) -> Result<StructureNode, StructureError> {
        parse_structure(&self.structure)
    }
}

/// Schema of the recursive `structure` grammar, registered as `StructureItem`.
fn structure_schema(gen: &mut SchemaGenerator) -> Schema {
    let item = json!({
        "description": "A nested list, a subnet identifier, or a single-entry mapping of identifier to weight. \
                        `__placeholder__` (or null) reserves space without creating a subnet.",
        "anyOf": [
            { "type": "string", "minLength": 1 },
            { "type": "null" },
            { "type": "array", "items": { "$ref": "#/definitions/StructureItem" } },
            {
                "type": "object",
                "minProperties": 1,
                "maxProperties": 1,
                "additionalProperties": { "type": "integer", "minimum": 1, "maximum": u32::MAX }
            }
        ]
    });
    let list = json!({
        "description": "Subnet structure.",
        "type": "array",
        "items": { "$ref": "#/definitions/StructureItem" }
    });
    if let Ok(item) = serde_json::from_value::<Schema>(item) {
        gen.definitions_mut().insert("StructureItem".to_string(), item);
    }
    serde_json::from_value(list).unwrap_or(Schema::Bool(true))
}
