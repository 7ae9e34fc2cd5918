use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;

use crate::category::Category;
use crate::performance::RawPerformance;
use crate::scoring::{EventFailure, PerformanceInput, ScoreResult};
use crate::tables::event_label;

/// Everything needed to print one scored sheet
pub struct ScoredSheet<'a> {
    pub athlete: Option<&'a str>,
    pub category: Category,
    pub performances: &'a PerformanceInput,
    pub result: &'a ScoreResult,
    pub failures: &'a [EventFailure],
}

impl ScoredSheet<'_> {
    fn performance(&self, event: &str) -> String {
        self.performances
            .get(event)
            .map(RawPerformance::to_string)
            .unwrap_or_default()
    }

    fn failed(&self, event: &str) -> bool {
        self.failures.iter().any(|f| f.event == event)
    }
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a scored sheet as an aligned table with a total line.
/// Columns: label, performance, points. Failed events are marked with `!`.
pub fn format_score_table(sheet: &ScoredSheet, use_colors: bool) -> String {
    if sheet.result.per_event.is_empty() {
        return "No performances entered.".to_string();
    }

    let label_width = sheet
        .result
        .per_event
        .iter()
        .map(|s| event_label(&s.event).chars().count())
        .max()
        .unwrap_or(0)
        .max("Total".len());
    let perf_width = sheet
        .result
        .per_event
        .iter()
        .map(|s| sheet.performance(&s.event).chars().count())
        .max()
        .unwrap_or(0);
    let points_width = 5;

    let mut lines = Vec::new();

    let heading = match sheet.athlete {
        Some(name) if !name.is_empty() => format!("{} - {}", name, sheet.category.label()),
        _ => sheet.category.label().to_string(),
    };
    lines.push(if use_colors {
        heading.bold().to_string()
    } else {
        heading
    });

    for score in &sheet.result.per_event {
        let label = pad_right(event_label(&score.event), label_width);
        let perf = pad_right(&sheet.performance(&score.event), perf_width);
        let marker = if sheet.failed(&score.event) { "!" } else { " " };
        let points = format!("{:>width$}", score.points, width = points_width);

        if use_colors {
            let marker = if marker == "!" {
                marker.red().bold().to_string()
            } else {
                marker.to_string()
            };
            lines.push(format!("  {}  {}  {}{}", label, perf.dimmed(), points.bold(), marker));
        } else {
            lines.push(format!("  {}  {}  {}{}", label, perf, points, marker));
        }
    }

    let total_label = pad_right("Total", label_width);
    let total = format!(
        "{:>width$}",
        sheet.result.total,
        width = perf_width + 2 + points_width
    );
    if use_colors {
        lines.push(format!("  {}  {}", total_label.bold(), total.green().bold()));
    } else {
        lines.push(format!("  {}  {}", total_label, total));
    }

    lines.join("\n")
}

/// Format as tab-separated values for scripting
/// Columns: event, label, performance, points; last row is `total`
pub fn format_tsv(sheet: &ScoredSheet) -> String {
    let mut rows: Vec<String> = sheet
        .result
        .per_event
        .iter()
        .map(|score| {
            format!(
                "{}\t{}\t{}\t{}",
                score.event,
                event_label(&score.event),
                sheet.performance(&score.event),
                score.points
            )
        })
        .collect();
    rows.push(format!("total\t\t\t{}", sheet.result.total));
    rows.join("\n")
}

#[derive(Serialize)]
struct JsonSheet<'a> {
    athlete: Option<&'a str>,
    category: Category,
    per_event: Vec<JsonEvent<'a>>,
    total: u32,
    errors: Vec<JsonError<'a>>,
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    event: &'a str,
    label: &'a str,
    performance: Option<&'a RawPerformance>,
    points: u32,
}

#[derive(Serialize)]
struct JsonError<'a> {
    event: &'a str,
    message: String,
}

/// Format as pretty JSON
pub fn format_json(sheet: &ScoredSheet) -> serde_json::Result<String> {
    let doc = JsonSheet {
        athlete: sheet.athlete,
        category: sheet.category,
        per_event: sheet
            .result
            .per_event
            .iter()
            .map(|s| JsonEvent {
                event: &s.event,
                label: event_label(&s.event),
                performance: sheet.performances.get(&s.event),
                points: s.points,
            })
            .collect(),
        total: sheet.result.total,
        errors: sheet
            .failures
            .iter()
            .map(|f| JsonError {
                event: &f.event,
                message: f.error.to_string(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&doc)
}

fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}
