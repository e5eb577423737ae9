// SPDX-License-Identifier: PMPL-1.0-or-later

//! Developer diagnostics for strategy results.
//!
//! The strategy service hands the UI a JSON object. These helpers check it
//! against a declared schema and report what they find to a
//! [`DiagnosticSink`]. Nothing here mutates the inspected value or affects
//! the calculator; the only return values are booleans and check lists.

use colored::*;
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn tag(&self) -> &'static str {
        match self {
            Level::Ok => "OK",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERR",
        }
    }
}

/// Where diagnostic output goes: grouped messages and tables.
pub trait DiagnosticSink {
    fn group(&mut self, title: &str);
    fn entry(&mut self, level: Level, message: &str);
    fn table(&mut self, headers: &[&str], rows: &[Vec<String>]);
    fn end_group(&mut self);
}

/// Colored terminal output, indented per open group.
#[derive(Debug, Default)]
pub struct ConsoleSink {
    depth: usize,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn indent(&self) -> String {
        "  ".repeat(self.depth)
    }
}

impl DiagnosticSink for ConsoleSink {
    fn group(&mut self, title: &str) {
        println!("{}{}", self.indent(), title.bold().cyan());
        self.depth += 1;
    }

    fn entry(&mut self, level: Level, message: &str) {
        let tag = match level {
            Level::Ok => level.tag().green(),
            Level::Info => level.tag().blue(),
            Level::Warn => level.tag().yellow(),
            Level::Error => level.tag().red().bold(),
        };
        println!("{}[{}] {}", self.indent(), tag, message);
    }

    fn table(&mut self, headers: &[&str], rows: &[Vec<String>]) {
        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(width) = widths.get_mut(i) {
                    *width = (*width).max(cell.chars().count());
                }
            }
        }

        let indent = self.indent();
        let header: Vec<String> = headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| format!("{:<width$}", h, width = *w))
            .collect();
        println!("{}{}", indent, header.join(" | ").bold());
        for row in rows {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
                .collect();
            println!("{}{}", indent, cells.join(" | "));
        }
    }

    fn end_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Group(String),
    Entry { level: Level, message: String },
    Table { headers: Vec<String>, rows: Vec<Vec<String>> },
    EndGroup,
}

/// Collects output in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub records: Vec<Record>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self, wanted: Level) -> Vec<&str> {
        self.records
            .iter()
            .filter_map(|record| match record {
                Record::Entry { level, message } if *level == wanted => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn tables(&self) -> Vec<(&[String], &[Vec<String>])> {
        self.records
            .iter()
            .filter_map(|record| match record {
                Record::Table { headers, rows } => Some((headers.as_slice(), rows.as_slice())),
                _ => None,
            })
            .collect()
    }
}

impl DiagnosticSink for MemorySink {
    fn group(&mut self, title: &str) {
        self.records.push(Record::Group(title.to_string()));
    }

    fn entry(&mut self, level: Level, message: &str) {
        self.records.push(Record::Entry {
            level,
            message: message.to_string(),
        });
    }

    fn table(&mut self, headers: &[&str], rows: &[Vec<String>]) {
        self.records.push(Record::Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows.to_vec(),
        });
    }

    fn end_group(&mut self) {
        self.records.push(Record::EndGroup);
    }
}

// ─── Schema ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Number,
    Array,
    Object,
    Text,
    Any,
}

impl FieldKind {
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldKind::Number => value.is_number(),
            FieldKind::Array => value.is_array(),
            FieldKind::Object => value.is_object(),
            FieldKind::Text => value.is_string(),
            FieldKind::Any => true,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            FieldKind::Number => "a number",
            FieldKind::Array => "an array",
            FieldKind::Object => "an object",
            FieldKind::Text => "a string",
            FieldKind::Any => "any value",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

const fn field(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { name, kind }
}

#[derive(Debug, Clone, Copy)]
pub struct StrategySchema {
    pub required: &'static [FieldSpec],
    pub optional: &'static [FieldSpec],
}

const STRATEGY_REQUIRED: &[FieldSpec] = &[
    field("method", FieldKind::Any),
    field("waypoints", FieldKind::Array),
    field("totalTrials", FieldKind::Number),
    field("totalCost", FieldKind::Number),
    field("intervals", FieldKind::Object),
    field("path", FieldKind::Array),
];

const STRATEGY_OPTIONAL: &[FieldSpec] = &[
    field("extendedWaypoints", FieldKind::Array),
    field("fullPath", FieldKind::Array),
    field("rates", FieldKind::Any),
    field("flags", FieldKind::Any),
    field("riskLevel", FieldKind::Any),
    field("markov", FieldKind::Any),
    field("strategy", FieldKind::Object),
];

impl StrategySchema {
    pub const STRATEGY: StrategySchema = StrategySchema {
        required: STRATEGY_REQUIRED,
        optional: STRATEGY_OPTIONAL,
    };

    /// Required fields absent from `value` (a `null` field counts as present).
    pub fn missing_required(&self, value: &Value) -> Vec<&'static str> {
        self.required
            .iter()
            .filter(|spec| value.get(spec.name).is_none())
            .map(|spec| spec.name)
            .collect()
    }

    /// Present, non-null fields whose JSON type does not match the schema.
    pub fn kind_mismatches(&self, value: &Value) -> Vec<FieldSpec> {
        self.required
            .iter()
            .chain(self.optional)
            .filter(|spec| match value.get(spec.name) {
                Some(Value::Null) | None => false,
                Some(field) => !spec.kind.matches(field),
            })
            .copied()
            .collect()
    }
}

impl Default for StrategySchema {
    fn default() -> Self {
        Self::STRATEGY
    }
}

// ─── Checks ─────────────────────────────────────────────────────────

/// Validate a strategy result and report findings. Returns `true` when
/// every required field is present.
pub fn validate_structure(strategy: &Value, name: &str, sink: &mut dyn DiagnosticSink) -> bool {
    validate_with_schema(&StrategySchema::STRATEGY, strategy, name, sink)
}

pub fn validate_with_schema(
    schema: &StrategySchema,
    strategy: &Value,
    name: &str,
    sink: &mut dyn DiagnosticSink,
) -> bool {
    sink.group(&format!("Validating {}", name));

    let missing = schema.missing_required(strategy);
    if missing.is_empty() {
        sink.entry(Level::Ok, "All required fields present");
    } else {
        sink.entry(
            Level::Error,
            &format!("Missing required fields: {}", missing.join(", ")),
        );
    }

    let summary = json!({
        "method": strategy.get("method"),
        "totalTrials": strategy.get("totalTrials"),
        "totalCost": strategy.get("totalCost"),
        "waypointsLength": array_len(strategy, "waypoints"),
        "pathLength": array_len(strategy, "path"),
        "hasIntervals": truthy(strategy.get("intervals")),
        "hasMarkov": truthy(strategy.get("markov")),
        "hasExtendedWaypoints": truthy(strategy.get("extendedWaypoints")),
    });
    sink.entry(Level::Info, &format!("Strategy structure: {}", summary));

    for spec in schema.kind_mismatches(strategy) {
        sink.entry(
            Level::Error,
            &format!("{} should be {}", spec.name, spec.kind.describe()),
        );
    }

    if let Some(intervals) = strategy.get("intervals").filter(|v| truthy(Some(*v))) {
        let total = intervals.get("total");
        let summary = json!({
            "hasTotal": truthy(total),
            "hasByLevel": truthy(intervals.get("byLevel")),
            "totalMean": total.and_then(|t| t.get("mean")),
            "totalStd": total.and_then(|t| t.get("std")),
        });
        sink.entry(Level::Info, &format!("Intervals structure: {}", summary));
    }

    sink.end_group();
    missing.is_empty()
}

/// Side-by-side report of a legacy strategy and its replacement.
pub fn compare_strategies(old: &Value, new: &Value, sink: &mut dyn DiagnosticSink) {
    sink.group("Comparing strategies");

    let old_cost = old
        .get("expectedTotalCost")
        .filter(|v| truthy(Some(*v)))
        .or_else(|| old.get("totalCost"));
    sink.entry(Level::Info, &format!("Old total cost: {}", display(old_cost)));
    sink.entry(
        Level::Info,
        &format!("New total cost: {}", display(new.get("totalCost"))),
    );

    if let (Some(visits), Some(waypoints)) = (
        old.get("expectedVisits").filter(|v| truthy(Some(*v))),
        new.get("waypoints").filter(|v| truthy(Some(*v))),
    ) {
        sink.entry(Level::Info, &format!("Old visits: {}", visits));
        sink.entry(Level::Info, &format!("New waypoints: {}", waypoints));
    }

    let old_path = old.pointer("/strategy/path").filter(|v| truthy(Some(*v)));
    let new_path = new.get("path").filter(|v| truthy(Some(*v)));
    if let (Some(old_path), Some(_)) = (old_path, new_path) {
        sink.entry(Level::Info, &format!("Old path: {}", old_path));
        sink.entry(
            Level::Info,
            &format!("New path (IDs): {}", display(new.pointer("/strategy/path"))),
        );
        sink.entry(
            Level::Info,
            &format!("New path (names): {}", display(new.get("fullPath"))),
        );
    }

    sink.end_group();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiCompatibility {
    pub analysis: Vec<(&'static str, bool)>,
    pub chart: Vec<(&'static str, bool)>,
}

impl UiCompatibility {
    pub fn all_passed(&self) -> bool {
        self.analysis
            .iter()
            .chain(&self.chart)
            .all(|(_, passed)| *passed)
    }
}

/// Whether the analysis panel and the chart can render this strategy.
pub fn check_ui_compatibility(strategy: &Value, sink: &mut dyn DiagnosticSink) -> UiCompatibility {
    sink.group("Checking UI compatibility");

    let path_is_array = strategy.get("path").map(Value::is_array).unwrap_or(false);
    let analysis = vec![
        ("Can display total trials", truthy(strategy.get("totalTrials"))),
        ("Can display total cost", truthy(strategy.get("totalCost"))),
        (
            "Can display intervals",
            truthy(strategy.pointer("/intervals/total/ci95")),
        ),
        ("Can display path", path_is_array),
        (
            "Can display waypoints",
            truthy(strategy.get("waypoints")) || truthy(strategy.get("extendedWaypoints")),
        ),
    ];
    report_checks(&analysis, sink);

    let chart = vec![
        (
            "Can calculate probabilities",
            truthy(strategy.pointer("/markov/calculateTrialsProbabilities"))
                || truthy(strategy.get("calculateTrialsProbabilities")),
        ),
        (
            "Has total trials for mean line",
            truthy(strategy.get("totalTrials")),
        ),
        (
            "Has path with rates",
            path_is_array
                && strategy
                    .pointer("/path/0/rate")
                    .map(|rate| !rate.is_null())
                    .unwrap_or(false),
        ),
    ];
    sink.entry(Level::Info, "Chart compatibility:");
    report_checks(&chart, sink);

    sink.end_group();
    UiCompatibility { analysis, chart }
}

/// Dump a strategy with its waypoints and path as tables.
pub fn debug_strategy(strategy: &Value, sink: &mut dyn DiagnosticSink) {
    sink.group("Debug strategy");

    let pretty = serde_json::to_string_pretty(strategy).unwrap_or_else(|_| strategy.to_string());
    sink.entry(Level::Info, &format!("Full strategy object: {}", pretty));

    if let Some(waypoints) = strategy.get("waypoints").and_then(Value::as_array) {
        let rows: Vec<Vec<String>> = waypoints
            .iter()
            .enumerate()
            .map(|(i, waypoint)| {
                let trials = waypoint
                    .as_f64()
                    .map(|w| crate::format::round_to(w, 1).to_string())
                    .unwrap_or_else(|| "-".to_string());
                vec![(i + 1).to_string(), waypoint.to_string(), trials]
            })
            .collect();
        sink.table(&["level", "waypoint", "trials"], &rows);
    }

    if let Some(path) = strategy.get("path").and_then(Value::as_array) {
        let rows: Vec<Vec<String>> = path
            .iter()
            .map(|step| {
                ["level", "name", "rate", "totalCost"]
                    .iter()
                    .map(|field| cell(step.get(*field)))
                    .collect()
            })
            .collect();
        sink.table(&["level", "name", "rate", "cost"], &rows);
    }

    sink.end_group();
}

/// Run a calculation, then validate and check the result. Failures are
/// reported to the sink and yield `None`; nothing is propagated.
pub fn run_smoke_check<F>(calculate: F, sink: &mut dyn DiagnosticSink) -> Option<Value>
where
    F: FnOnce() -> anyhow::Result<Value>,
{
    sink.group("Testing simple calculation");

    let outcome = match calculate() {
        Ok(result) => {
            validate_structure(&result, "Test Result", sink);
            check_ui_compatibility(&result, sink);
            sink.entry(Level::Ok, "Test completed successfully");
            Some(result)
        }
        Err(err) => {
            sink.entry(Level::Error, &format!("Test failed: {}", err));
            for cause in err.chain().skip(1) {
                sink.entry(Level::Error, &format!("caused by: {}", cause));
            }
            None
        }
    };

    sink.end_group();
    outcome
}

fn report_checks(checks: &[(&'static str, bool)], sink: &mut dyn DiagnosticSink) {
    for (label, passed) in checks {
        let level = if *passed { Level::Ok } else { Level::Error };
        sink.entry(level, label);
    }
}

/// JavaScript-style truthiness of an optional JSON value.
fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn array_len(value: &Value, field: &str) -> Value {
    value
        .get(field)
        .and_then(Value::as_array)
        .map(|items| json!(items.len()))
        .unwrap_or(Value::Null)
}

fn display(value: Option<&Value>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "undefined".to_string())
}

fn cell(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness_follows_js() {
        assert!(!truthy(None));
        assert!(!truthy(Some(&json!(0))));
        assert!(!truthy(Some(&json!(""))));
        assert!(truthy(Some(&json!([]))));
        assert!(truthy(Some(&json!(0.5))));
    }

    #[test]
    fn schema_null_counts_as_present_but_skips_kind() {
        let value = json!({"waypoints": null});
        let missing = StrategySchema::STRATEGY.missing_required(&value);
        assert!(!missing.contains(&"waypoints"));
        assert!(StrategySchema::STRATEGY.kind_mismatches(&value).is_empty());
    }

    #[test]
    fn non_object_is_missing_everything() {
        let missing = StrategySchema::STRATEGY.missing_required(&json!(42));
        assert_eq!(missing.len(), STRATEGY_REQUIRED.len());
    }

    #[test]
    fn console_sink_tracks_depth() {
        let mut sink = ConsoleSink::new();
        sink.group("outer");
        sink.group("inner");
        assert_eq!(sink.depth, 2);
        sink.end_group();
        sink.end_group();
        sink.end_group();
        assert_eq!(sink.depth, 0);
    }
}
