//! Subnet metadata (input) and subnet records (output).

use super::NetworkBlock;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Display name used for reserved ranges.
pub const RESERVED_NAME: &str = "-reserved-";

/// Descriptive fields attached to a subnet identifier.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MetadataRecord {
    /// Subnet name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Subnet description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Subnet tier, e.g. public, private or data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
}

/// One allocated subnet, ready for output.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetRecord {
    /// Identifier from the structure.
    pub id: String,
    /// Display name, the identifier unless metadata names it.
    pub name: String,
    pub cidr: NetworkBlock,
    pub addr_count: u64,
    pub first_addr: Ipv4Addr,
    pub last_addr: Ipv4Addr,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    /// Set for rows describing reserved (unallocated) space.
    #[serde(default, skip_serializing_if = "is_false")]
    pub reserved: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl SubnetRecord {
    /// Build the record for `id`, falling back to the identifier when the
    /// metadata is missing or has an empty name.
    pub fn new(id: &str, cidr: NetworkBlock, metadata: Option<&MetadataRecord>) -> SubnetRecord {
        let name = metadata
            .and_then(|m| m.name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or(id);
        SubnetRecord {
            id: id.to_string(),
            name: name.to_string(),
            cidr,
            addr_count: cidr.addr_count(),
            first_addr: cidr.first(),
            last_addr: cidr.last(),
            description: metadata
                .and_then(|m| m.description.clone())
                .unwrap_or_default(),
            tier: metadata.and_then(|m| m.tier.clone()),
            reserved: false,
        }
    }

    pub fn reserved(cidr: NetworkBlock) -> SubnetRecord {
        SubnetRecord {
            id: super::PLACEHOLDER.to_string(),
            name: RESERVED_NAME.to_string(),
            cidr,
            addr_count: cidr.addr_count(),
            first_addr: cidr.first(),
            last_addr: cidr.last(),
            description: String::new(),
            tier: None,
            reserved: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_without_metadata() {
        let cidr: NetworkBlock = "10.1.0.0/18".parse().unwrap();
        let record = SubnetRecord::new("public", cidr, None);
        assert_eq!(record.name, "public");
        assert_eq!(record.description, "");
        assert_eq!(record.tier, None);
        assert_eq!(record.addr_count, 16384);
        assert_eq!(record.first_addr, Ipv4Addr::new(10, 1, 0, 0));
        assert_eq!(record.last_addr, Ipv4Addr::new(10, 1, 63, 255));
    }

    #[test]
    fn test_record_with_metadata() {
        let cidr: NetworkBlock = "10.1.64.0/18".parse().unwrap();
        let metadata = MetadataRecord {
            name: Some("PRIVATE".to_string()),
            description: Some("Hosts compute resources.".to_string()),
            tier: Some("private".to_string()),
        };
        let record = SubnetRecord::new("private", cidr, Some(&metadata));
        assert_eq!(record.id, "private");
        assert_eq!(record.name, "PRIVATE");
        assert_eq!(record.description, "Hosts compute resources.");
        assert_eq!(record.tier.as_deref(), Some("private"));
    }

    #[test]
    fn test_empty_name_falls_back() {
        let cidr: NetworkBlock = "10.1.64.0/18".parse().unwrap();
        let metadata = MetadataRecord {
            name: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(SubnetRecord::new("data", cidr, Some(&metadata)).name, "data");
    }

    #[test]
    fn test_serialized_fields() {
        let cidr: NetworkBlock = "10.1.0.0/18".parse().unwrap();
        let value = serde_json::to_value(SubnetRecord::new("public", cidr, None)).unwrap();
        assert_eq!(value["cidr"], "10.1.0.0/18");
        assert_eq!(value["first_addr"], "10.1.0.0");
        assert_eq!(value["last_addr"], "10.1.63.255");
        assert_eq!(value["addr_count"], 16384);
        assert!(value.get("tier").is_none());
        assert!(value.get("reserved").is_none());

        let value = serde_json::to_value(SubnetRecord::reserved(cidr)).unwrap();
        assert_eq!(value["reserved"], true);
        assert_eq!(value["name"], RESERVED_NAME);
    }

    #[test]
    fn test_metadata_rejects_unknown_fields() {
        assert!(serde_yaml::from_str::<MetadataRecord>("name: A\ncolour: red\n").is_err());
        let record: MetadataRecord = serde_yaml::from_str("tier: data\n").unwrap();
        assert_eq!(record.tier.as_deref(), Some("data"));
        assert_eq!(record.name, None);
    }
}
