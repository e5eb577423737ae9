// SPDX-License-Identifier: PMPL-1.0-or-later

//! Strategy diagnostics against sample calculator output

use anyhow::anyhow;
use serde_json::{json, Value};
use upways::diagnostics::{
    check_ui_compatibility, compare_strategies, debug_strategy, run_smoke_check,
    validate_structure, Level, MemorySink, Record, StrategySchema,
};

fn sample_strategy() -> Value {
    json!({
        "method": "markov",
        "waypoints": [12.5, 30.25, 4.0],
        "totalTrials": 46.75,
        "totalCost": 12345,
        "intervals": {
            "total": {"mean": 46.75, "std": 9.1, "ci95": [30, 64]},
            "byLevel": []
        },
        "path": [
            {"level": 1, "name": "Parchemin de bénédiction", "rate": 0.8, "totalCost": 120},
            {"level": 2, "name": "Pierre magique", "rate": 0.5, "totalCost": 300}
        ],
        "markov": {"calculateTrialsProbabilities": true}
    })
}

#[test]
fn test_valid_strategy_passes_everything() {
    let strategy = sample_strategy();
    let mut sink = MemorySink::new();

    assert!(validate_structure(&strategy, "Sample", &mut sink));
    assert!(sink.messages(Level::Error).is_empty());
    assert!(sink.messages(Level::Ok).contains(&"All required fields present"));

    let compat = check_ui_compatibility(&strategy, &mut sink);
    assert!(compat.all_passed(), "{:?}", compat);
    assert_eq!(compat.analysis.len(), 5);
    assert_eq!(compat.chart.len(), 3);
}

#[test]
fn test_missing_fields_are_named() {
    let mut strategy = sample_strategy();
    let object = strategy.as_object_mut().unwrap();
    object.remove("path");
    object.remove("totalCost");

    let mut sink = MemorySink::new();
    assert!(!validate_structure(&strategy, "Broken", &mut sink));

    let errors = sink.messages(Level::Error);
    assert_eq!(errors, vec!["Missing required fields: totalCost, path"]);
    assert_eq!(sink.records.first(), Some(&Record::Group("Validating Broken".to_string())));
    assert_eq!(sink.records.last(), Some(&Record::EndGroup));
}

#[test]
fn test_null_field_is_present_but_not_type_checked() {
    let mut strategy = sample_strategy();
    strategy["intervals"] = Value::Null;

    let schema = StrategySchema::STRATEGY;
    assert!(schema.missing_required(&strategy).is_empty());
    assert!(schema.kind_mismatches(&strategy).is_empty());

    strategy["waypoints"] = json!("not a list");
    let mismatches = schema.kind_mismatches(&strategy);
    assert_eq!(mismatches.len(), 1);
    assert_eq!(mismatches[0].name, "waypoints");
}

#[test]
fn test_ui_checks_fail_individually() {
    let strategy = json!({
        "totalTrials": 0,
        "totalCost": 50,
        "path": [{"level": 1, "rate": null}],
        "extendedWaypoints": [1]
    });
    let mut sink = MemorySink::new();
    let compat = check_ui_compatibility(&strategy, &mut sink);

    let failed: Vec<&str> = compat
        .analysis
        .iter()
        .chain(&compat.chart)
        .filter(|(_, passed)| !passed)
        .map(|(label, _)| *label)
        .collect();
    assert_eq!(
        failed,
        vec![
            "Can display total trials",
            "Can display intervals",
            "Can calculate probabilities",
            "Has total trials for mean line",
            "Has path with rates",
        ]
    );
    assert!(!compat.all_passed());
}

#[test]
fn test_debug_dump_tables() {
    let mut sink = MemorySink::new();
    debug_strategy(&sample_strategy(), &mut sink);

    let tables = sink.tables();
    assert_eq!(tables.len(), 2);

    let (headers, rows) = tables[0];
    assert_eq!(headers, ["level", "waypoint", "trials"]);
    assert_eq!(rows[1], vec!["2".to_string(), "30.25".to_string(), "30.3".to_string()]);

    let (_, path_rows) = tables[1];
    assert_eq!(path_rows.len(), 2);
    assert_eq!(path_rows[1][1], "Pierre magique");
}

#[test]
fn test_compare_reports_both_costs() {
    let old = json!({
        "expectedTotalCost": 15000,
        "expectedVisits": [3, 4],
        "strategy": {"path": ["a", "b"]}
    });
    let mut sink = MemorySink::new();
    compare_strategies(&old, &sample_strategy(), &mut sink);

    let info = sink.messages(Level::Info);
    assert!(info.contains(&"Old total cost: 15000"));
    assert!(info.contains(&"New total cost: 12345"));
    assert!(info.iter().any(|line| line.starts_with("Old visits:")));
    assert!(info.iter().any(|line| line.starts_with("Old path:")));
}

#[test]
fn test_smoke_check_reports_failure_without_propagating() {
    let mut sink = MemorySink::new();
    let outcome = run_smoke_check(
        || Err(anyhow!("inner").context("calculation failed")),
        &mut sink,
    );

    assert!(outcome.is_none());
    assert_eq!(
        sink.messages(Level::Error),
        vec!["Test failed: calculation failed", "caused by: inner"]
    );
}

#[test]
fn test_smoke_check_validates_result() {
    let mut sink = MemorySink::new();
    let outcome = run_smoke_check(|| Ok(sample_strategy()), &mut sink);

    assert_eq!(outcome, Some(sample_strategy()));
    assert!(sink.messages(Level::Ok).contains(&"Test completed successfully"));
    assert!(sink.messages(Level::Error).is_empty());
}

#[test]
fn test_inspection_does_not_mutate() {
    let strategy = sample_strategy();
    let before = strategy.clone();
    let mut sink = MemorySink::new();

    validate_structure(&strategy, "Sample", &mut sink);
    check_ui_compatibility(&strategy, &mut sink);
    debug_strategy(&strategy, &mut sink);

    assert_eq!(strategy, before);
}
