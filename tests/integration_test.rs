//! Integration tests for subnet-planner
//!
//! These tests drive the complete pipeline from a document on disk to records.

use std::net::Ipv4Addr;
use std::path::Path;
use subnet_planner::{
    load_document, parse_document_str, plan, DocumentFormat, MergeOptions, PlanError,
    StructureErrorKind,
};

const TEST_DATA: &str = "src/tests/test_data";

fn fixture(name: &str) -> subnet_planner::NetworkDocument {
    load_document(&Path::new(TEST_DATA).join(name)).expect("Failed to load test document")
}

#[test]
fn test_two_halves() {
    let document = fixture("two_halves.yaml");
    let records = plan(&document, MergeOptions::default()).expect("Failed to plan");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "PUBLIC");
    assert_eq!(records[0].cidr.to_string(), "10.1.0.0/18");
    assert_eq!(records[0].first_addr, Ipv4Addr::new(10, 1, 0, 0));
    assert_eq!(records[0].last_addr, Ipv4Addr::new(10, 1, 63, 255));
    assert_eq!(records[0].addr_count, 16384);
    assert_eq!(records[1].name, "PRIVATE");
    assert_eq!(records[1].cidr.to_string(), "10.1.64.0/18");
    assert_eq!(records[1].first_addr, Ipv4Addr::new(10, 1, 64, 0));
    assert_eq!(records[1].last_addr, Ipv4Addr::new(10, 1, 127, 255));
    assert_eq!(records[1].addr_count, 16384);
    assert!(records.iter().all(|r| r.description.is_empty()));
}

#[test]
fn test_json_document_with_metadata() {
    let document = fixture("landing_zone.json");
    let records = plan(&document, MergeOptions::default()).expect("Failed to plan");

    let rows: Vec<(&str, &str, String)> = records
        .iter()
        .map(|r| (r.id.as_str(), r.name.as_str(), r.cidr.to_string()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("hub", "HUB", "10.20.0.0/18".to_string()),
            ("web-1", "WEB-1", "10.20.64.0/20".to_string()),
            ("web-2", "web-2", "10.20.80.0/20".to_string()),
            ("db-1", "db-1", "10.20.96.0/20".to_string()),
            ("db-2", "db-2", "10.20.112.0/20".to_string()),
            ("spoke", "spoke", "10.20.128.0/17".to_string()),
        ]
    );
    assert_eq!(records[0].description, "Shared services");
    assert_eq!(records[3].description, "Databases in AZ1");
    assert_eq!(records[3].tier.as_deref(), Some("data"));

    // Exact tiling: sorted by address, records are contiguous and fill the block.
    let total: u64 = records.iter().map(|r| r.addr_count).sum();
    assert_eq!(total, document.network_cidr.addr_count());
    for pair in records.windows(2) {
        assert_eq!(
            u32::from(pair[0].last_addr) + 1,
            u32::from(pair[1].first_addr)
        );
    }
}

#[test]
fn test_three_way_split_is_rejected() {
    let document = fixture("three_way.yaml");
    let err = plan(&document, MergeOptions::default()).unwrap_err();
    assert!(matches!(err, PlanError::Allocation(_)), "{err}");
    assert_eq!(
        err.to_string(),
        "cannot allocate 10.1.0.0/24 at structure: 256 addresses cannot be split into 3 equal units"
    );
}

#[test]
fn test_bad_shape_reports_path() {
    let document = fixture("bad_shape.yaml");
    match plan(&document, MergeOptions::default()) {
        Err(PlanError::Structure(e)) => {
            assert_eq!(e.path.to_string(), "structure[1][1]");
            assert_eq!(e.kind, StructureErrorKind::WeightedEntryKeys(2));
        }
        other => panic!("expected a structure error, got {other:?}"),
    }
}

#[test]
fn test_deterministic_output() {
    let document = fixture("landing_zone.json");
    let options = MergeOptions {
        include_reserved: true,
    };
    let first = plan(&document, options).unwrap();
    let second = plan(&document, options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_reserved_rows() {
    let text = "network_cidr: 192.168.0.0/24
structure:
  - mgmt
  - __placeholder__: 2
  - ~
";
    let document = parse_document_str(text, DocumentFormat::Yaml).unwrap();
    let hidden = plan(&document, MergeOptions::default()).unwrap();
    assert_eq!(hidden.len(), 1);
    assert_eq!(hidden[0].cidr.to_string(), "192.168.0.0/26");

    let shown = plan(
        &document,
        MergeOptions {
            include_reserved: true,
        },
    )
    .unwrap();
    let cidrs: Vec<String> = shown.iter().map(|r| r.cidr.to_string()).collect();
    assert_eq!(
        cidrs,
        vec!["192.168.0.0/26", "192.168.0.64/26", "192.168.0.128/26", "192.168.0.192/26"]
    );
}

#[test]
fn test_missing_file() {
    let err = load_document(Path::new("src/tests/test_data/no_such_file.yaml")).unwrap_err();
    assert!(matches!(err, PlanError::Io { .. }));
}
