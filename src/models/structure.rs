//! Nested structure tree parsed from the document's `structure` list.
//!
//! The concrete syntax is resolved once here:
//! - list: [`StructureNode::Group`]
//! - string: [`StructureNode::NamedLeaf`]
//! - `{identifier: n}`: [`StructureNode::WeightedEntry`]
//! - `__placeholder__`, `{__placeholder__: n}` or `null`: [`StructureNode::Reserved`]

use super::NodePath;
use crate::error::{StructureError, StructureErrorKind};
use serde_json::Value;
use std::collections::HashMap;

/// Identifier that reserves address space without producing a subnet.
pub const PLACEHOLDER: &str = "__placeholder__";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureNode {
    /// Ordered children sharing the parent block.
    Group(Vec<StructureNode>),
    /// One allocation unit, not subdivided further.
    NamedLeaf(String),
    /// `weight` allocation units under one identifier.
    WeightedEntry { identifier: String, weight: u32 },
    /// `weight` allocation units kept free.
    Reserved { weight: u32 },
}

impl StructureNode {
    /// Number of allocation units this node takes from its parent.
    ///
    /// An empty group takes none.
    pub fn weight(&self) -> u64 {
        match self {
            StructureNode::Group(children) if children.is_empty() => 0,
            StructureNode::Group(_) | StructureNode::NamedLeaf(_) => 1,
            StructureNode::WeightedEntry { weight, .. } | StructureNode::Reserved { weight } => {
                *weight as u64
            }
        }
    }

    /// Identifier of a node that produces a subnet.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            StructureNode::NamedLeaf(identifier)
            | StructureNode::WeightedEntry { identifier, .. } => Some(identifier),
            StructureNode::Group(_) | StructureNode::Reserved { .. } => None,
        }
    }

    /// Identifiers of every subnet-producing node, in pre-order.
    pub fn identifiers(&self) -> Vec<&str> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                StructureNode::Group(children) => stack.extend(children.iter().rev()),
                other => out.extend(other.identifier()),
            }
        }
        out
    }
}

/// Parse the document's `structure` value into a tree rooted at a group.
pub fn parse_structure(value: &Value) -> Result<StructureNode, StructureError> {
    if !value.is_array() {
        return Err(StructureError {
            path: NodePath::root(),
            kind: StructureErrorKind::RootNotList,
        });
    }
    let mut parser = Parser::default();
    parser.node(value, NodePath::root())
}

#[derive(Default)]
struct Parser {
    seen: HashMap<String, NodePath>,
}

impl Parser {
    fn node(&mut self, value: &Value, path: NodePath) -> Result<StructureNode, StructureError> {
        match value {
            Value::Array(items) => {
                let children = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| self.node(item, path.index(i)))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(StructureNode::Group(children))
            }
            Value::Null => Ok(StructureNode::Reserved { weight: 1 }),
            Value::String(identifier) if identifier == PLACEHOLDER => {
                Ok(StructureNode::Reserved { weight: 1 })
            }
            Value::String(identifier) => {
                self.claim(identifier, &path)?;
                Ok(StructureNode::NamedLeaf(identifier.clone()))
            }
            Value::Object(entry) => {
                let mut entries = entry.iter();
                let (identifier, weight) = match (entries.next(), entries.next()) {
                    (Some(only), None) => only,
                    _ => {
                        return Err(StructureError {
                            path,
                            kind: StructureErrorKind::WeightedEntryKeys(entry.len()),
                        })
                    }
                };
                let path = path.key(identifier);
                let weight = parse_weight(identifier, weight, &path)?;
                if identifier == PLACEHOLDER {
                    return Ok(StructureNode::Reserved { weight });
                }
                self.claim(identifier, &path)?;
                Ok(StructureNode::WeightedEntry {
                    identifier: identifier.clone(),
                    weight,
                })
            }
            Value::Bool(_) => Err(StructureError {
                path,
                kind: StructureErrorKind::UnexpectedShape("a boolean"),
            }),
            Value::Number(_) => Err(StructureError {
                path,
                kind: StructureErrorKind::UnexpectedShape("a number"),
            }),
        }
    }

    /// Record an identifier, rejecting empty and repeated ones.
    fn claim(&mut self, identifier: &str, path: &NodePath) -> Result<(), StructureError> {
        if identifier.is_empty() {
            return Err(StructureError {
                path: path.clone(),
                kind: StructureErrorKind::EmptyIdentifier,
            });
        }
        if let Some(first) = self.seen.get(identifier) {
            return Err(StructureError {
                path: path.clone(),
                kind: StructureErrorKind::DuplicateIdentifier {
                    identifier: identifier.to_string(),
                    first: first.clone(),
                },
            });
        }
        self.seen.insert(identifier.to_string(), path.clone());
        Ok(())
    }
}

fn parse_weight(identifier: &str, value: &Value, path: &NodePath) -> Result<u32, StructureError> {
    value
        .as_u64()
        .filter(|w| *w >= 1)
        .and_then(|w| u32::try_from(w).ok())
        .ok_or_else(|| StructureError {
            path: path.clone(),
            kind: StructureErrorKind::InvalidWeight {
                identifier: identifier.to_string(),
                found: value.to_string(),
                max: u32::MAX,
            },
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_shapes() {
        let value = json!(["public", {"data": 2}, ["a", "b"], "__placeholder__", null, {"__placeholder__": 4}, []]);
        let tree = parse_structure(&value).unwrap();
        assert_eq!(
            tree,
            StructureNode::Group(vec![
                StructureNode::NamedLeaf("public".to_string()),
                StructureNode::WeightedEntry {
                    identifier: "data".to_string(),
                    weight: 2
                },
                StructureNode::Group(vec![
                    StructureNode::NamedLeaf("a".to_string()),
                    StructureNode::NamedLeaf("b".to_string()),
                ]),
                StructureNode::Reserved { weight: 1 },
                StructureNode::Reserved { weight: 1 },
                StructureNode::Reserved { weight: 4 },
                StructureNode::Group(vec![]),
            ])
        );
    }

    #[test]
    fn test_weights() {
        let tree = parse_structure(&json!([[], ["x"], "y", {"z": 8}, {"__placeholder__": 3}])).unwrap();
        let StructureNode::Group(children) = tree else {
            panic!("root is not a group");
        };
        let weights: Vec<u64> = children.iter().map(|c| c.weight()).collect();
        assert_eq!(weights, vec![0, 1, 1, 8, 3]);
    }

    #[test]
    fn test_identifiers_pre_order() {
        let tree = parse_structure(&json!([["a", ["b"]], "c", {"d": 2}, "__placeholder__"])).unwrap();
        assert_eq!(tree.identifiers(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_root_must_be_list() {
        let err = parse_structure(&json!("public")).unwrap_err();
        assert_eq!(err.kind, StructureErrorKind::RootNotList);
        assert_eq!(err.path, NodePath::root());
    }

    #[test]
    fn test_bad_shape_reports_path() {
        let err = parse_structure(&json!(["a", ["b", 7]])).unwrap_err();
        assert_eq!(err.path.to_string(), "structure[1][1]");
        assert_eq!(err.kind, StructureErrorKind::UnexpectedShape("a number"));

        let err = parse_structure(&json!([true])).unwrap_err();
        assert_eq!(err.kind, StructureErrorKind::UnexpectedShape("a boolean"));
    }

    #[test]
    fn test_weighted_entry_must_have_one_key() {
        let err = parse_structure(&json!([{"a": 1, "b": 1}])).unwrap_err();
        assert_eq!(err.path.to_string(), "structure[0]");
        assert_eq!(err.kind, StructureErrorKind::WeightedEntryKeys(2));

        let err = parse_structure(&json!([{}])).unwrap_err();
        assert_eq!(err.kind, StructureErrorKind::WeightedEntryKeys(0));
    }

    #[test]
    fn test_invalid_weights() {
        for bad in [json!(0), json!(-1), json!(1.5), json!("2"), json!([1]), json!(1u64 << 40)] {
            let err = parse_structure(&json!([{"data": bad}])).unwrap_err();
            assert_eq!(err.path.to_string(), "structure[0].data");
            assert!(
                matches!(err.kind, StructureErrorKind::InvalidWeight { .. }),
                "unexpected {:?}",
                err.kind
            );
        }
    }

    #[test]
    fn test_empty_and_duplicate_identifiers() {
        let err = parse_structure(&json!(["a", [""]])).unwrap_err();
        assert_eq!(err.kind, StructureErrorKind::EmptyIdentifier);
        assert_eq!(err.path.to_string(), "structure[1][0]");

        let err = parse_structure(&json!(["a", ["b", {"a": 2}]])).unwrap_err();
        assert_eq!(err.path.to_string(), "structure[1][1].a");
        assert_eq!(
            err.kind,
            StructureErrorKind::DuplicateIdentifier {
                identifier: "a".to_string(),
                first: NodePath::root().index(0),
            }
        );
    }

    #[test]
    fn test_placeholders_may_repeat() {
        let tree = parse_structure(&json!(["__placeholder__", "__placeholder__", null])).unwrap();
        assert!(tree.identifiers().is_empty());
    }
}
