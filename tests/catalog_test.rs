//! Integration tests for the rule catalog and CLI surface

use clap::Parser;
use std::fs;
use tehran_rules::cli::Cli;
use tehran_rules::commands;
use tehran_rules::{RuleCatalog, TimeRestriction, TransportationRule, VehicleType, TEHRAN_RULES};
use tempfile::tempdir;

#[test]
fn test_catalog_exposes_ten_rules_in_order() {
    let rules = TEHRAN_RULES.all_rules();
    assert_eq!(rules.len(), 10);

    let ids: Vec<_> = rules.iter().map(|r| r.rule_id.as_str()).collect();
    let expected: Vec<String> = (1..=10).map(|n| format!("TEH-{:03}", n)).collect();
    assert_eq!(ids, expected.iter().map(String::as_str).collect::<Vec<_>>());
}

#[test]
fn test_independent_catalog_matches_shared_instance() {
    let own = RuleCatalog::new();
    let shared_ids: Vec<_> = TEHRAN_RULES.all_rules().iter().map(|r| r.rule_id.clone()).collect();
    let own_ids: Vec<_> = own.all_rules().iter().map(|r| r.rule_id.clone()).collect();
    assert_eq!(shared_ids, own_ids);
}

#[test]
fn test_vehicle_type_queries() {
    let tanker_rules = TEHRAN_RULES.rules_by_vehicle_type(VehicleType::Tanker);
    assert_eq!(tanker_rules.len(), 1);
    assert_eq!(tanker_rules[0].rule_id, "TEH-008");
    assert_eq!(tanker_rules[0].max_weight, Some(25.0));

    let refrigerated = TEHRAN_RULES.rules_by_vehicle_type(VehicleType::Refrigerated);
    assert_eq!(refrigerated.len(), 1);
    assert_eq!(refrigerated[0].time_restriction, TimeRestriction::DaytimeOnly);
}

#[test]
fn test_area_query_includes_city_wide_rules() {
    let downtown = TEHRAN_RULES.rules_by_area("Downtown");
    let ids: Vec<_> = downtown.iter().map(|r| r.rule_id.as_str()).collect();
    // TEH-001 lists Downtown; TEH-004 and TEH-008 list "All Tehran"
    assert_eq!(ids, vec!["TEH-001", "TEH-004", "TEH-008"]);
}

#[test]
fn test_unknown_area_returns_only_city_wide_rules() {
    let rules = TEHRAN_RULES.rules_by_area("Mars Colony");
    assert_eq!(rules.len(), 2);
    assert!(rules.iter().all(|r| r.areas.iter().any(|a| a == "All Tehran")));
}

#[test]
fn test_rules_round_trip_through_json() {
    let rules = TEHRAN_RULES.all_rules();
    let json = serde_json::to_string(&rules).unwrap();
    let back: Vec<TransportationRule> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.len(), 10);
    assert_eq!(back[3].rule_id, "TEH-004");
    let dims = back[3].max_dimensions.unwrap();
    assert_eq!((dims.length, dims.width, dims.height), (12.0, 2.5, 4.5));
}

#[test]
fn test_cli_parses_vehicle_type() {
    let cli = Cli::try_parse_from(["tehran-rules", "by-vehicle", "heavy-truck"]).unwrap();
    assert!(commands::execute(cli).is_ok());
}

#[test]
fn test_cli_show_unknown_rule_fails() {
    let cli = Cli::try_parse_from(["tehran-rules", "show", "TEH-999"]).unwrap();
    let err = commands::execute(cli).unwrap_err();
    assert!(err.to_string().contains("TEH-999"));
}

#[test]
fn test_export_writes_full_catalog() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rules.json");

    commands::cmd_export(Some(path.clone())).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let rules: Vec<TransportationRule> = serde_json::from_str(&content).unwrap();
    assert_eq!(rules.len(), 10);
    assert!(content.contains("\"heavy_truck\""));
    assert!(content.contains("Weekend Truck Ban"));
}
