use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use intake_cli::logging::redact_value;
use intake_model::{GroupAction, PhiClass, Severity};

use crate::commands::{AnalyzeResult, ImportResult};

pub fn print_analyze(result: &AnalyzeResult) {
    println!(
        "Business: {}  Columns: {}  Rows: {}",
        result.business.label(),
        result.csv.headers.len(),
        result.csv.row_count()
    );

    print_mapping_table(result);
    print_finding_table(result);
    print_group_table(result);

    let summary = &result.mapping_summary;
    println!(
        "Mapped {}/{} columns, {}/{} required fields.",
        summary.mapped, summary.total_columns, summary.required_mapped, summary.required_total
    );
    let verdict = if result.report.blocks_import(result.business) {
        "BLOCKED"
    } else {
        "ready"
    };
    println!(
        "Validation: {} error(s), {} warning(s) - import {verdict}.",
        result.report.error_count(),
        result.report.warning_count()
    );
}

fn print_mapping_table(result: &AnalyzeResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Field"),
        header_cell("Confidence"),
        header_cell("Required"),
        header_cell("Type"),
        header_cell("Samples"),
    ]);
    apply_wide_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for mapping in &result.mappings {
        let field_cell = match mapping.field {
            Some(field) => Cell::new(field.label()).fg(Color::Blue),
            None => dim_cell("unmapped"),
        };
        let samples: Vec<&str> = mapping
            .samples
            .iter()
            .map(|sample| redact_value(sample))
            .collect();
        table.add_row(vec![
            Cell::new(&mapping.source_column),
            field_cell,
            confidence_cell(mapping.confidence, mapping.field.is_some()),
            Cell::new(if mapping.required { "yes" } else { "" }),
            Cell::new(mapping.data_type),
            Cell::new(samples.join(", ")),
        ]);
    }
    println!("{table}");
}

fn print_finding_table(result: &AnalyzeResult) {
    if result.report.findings.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Severity"),
        header_cell("PHI"),
        header_cell("Message"),
        header_cell("Suggestion"),
    ]);
    apply_wide_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Center);
    for finding in &result.report.findings {
        table.add_row(vec![
            Cell::new(finding.row),
            Cell::new(&finding.column),
            severity_cell(finding.severity),
            phi_cell(finding.phi),
            Cell::new(&finding.message),
            match &finding.suggestion {
                Some(suggestion) => Cell::new(suggestion),
                None => dim_cell("-"),
            },
        ]);
    }
    println!();
    println!("Findings:");
    println!("{table}");
}

fn print_group_table(result: &AnalyzeResult) {
    let Some(column) = &result.group_column else {
        return;
    };
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("Count"),
        header_cell("Action"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for value in &result.group_values {
        table.add_row(vec![
            Cell::new(&value.original_value),
            Cell::new(value.count),
            Cell::new(action_label(value.action)),
            Cell::new(row_list(&value.rows)),
        ]);
    }
    println!();
    println!("Groups (column \"{column}\"):");
    println!("{table}");
}

pub fn print_import(result: &ImportResult) {
    println!(
        "Imported for {}: {}/{} contacts, {} appointments, {} reminders.",
        result.business.label(),
        result.summary.contacts_created,
        result.summary.contacts_submitted,
        result.summary.appointments_created,
        result.summary.reminders_scheduled
    );
    for path in &result.written {
        println!("Wrote: {}", path.display());
    }
    if !result.summary.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.summary.errors {
            match error.row_number {
                Some(row) => eprintln!("- row {row}: {}", error.error),
                None => eprintln!("- {}", error.error),
            }
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_wide_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn confidence_cell(confidence: u8, mapped: bool) -> Cell {
    if !mapped {
        return dim_cell("-");
    }
    let color = match confidence {
        85..=100 => Color::Green,
        60..=84 => Color::Yellow,
        _ => Color::Red,
    };
    Cell::new(confidence).fg(color)
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
        Severity::Info => Cell::new("INFO").fg(Color::Grey),
    }
}

fn phi_cell(phi: Option<PhiClass>) -> Cell {
    match phi {
        Some(PhiClass::Direct) => Cell::new("direct")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Some(PhiClass::Quasi) => Cell::new("quasi").fg(Color::Yellow),
        Some(PhiClass::Potential) => Cell::new("potential").fg(Color::Yellow),
        None => dim_cell("-"),
    }
}

fn action_label(action: GroupAction) -> &'static str {
    match action {
        GroupAction::Create => "create",
        GroupAction::Assign => "assign",
        GroupAction::Skip => "skip",
    }
}

fn row_list(rows: &[usize]) -> String {
    const MAX_SHOWN: usize = 8;
    let shown: Vec<String> = rows.iter().take(MAX_SHOWN).map(ToString::to_string).collect();
    if rows.len() > MAX_SHOWN {
        format!("{}, ... ({} total)", shown.join(", "), rows.len())
    } else {
        shown.join(", ")
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
