use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, info_span};

use intake_cli::backend::JsonExportBackend;
use intake_groups::{detect_group_columns, extract_group_values};
use intake_import::{ImportOptions, ImportPhase, ImportSummary, run_import};
use intake_ingest::read_csv_file;
use intake_map::{generate_field_mappings, summarize_mappings};
use intake_model::{
    BusinessType, CsvFile, FieldMapping, GroupValue, MappingSummary, ValidationReport,
};
use intake_registry::BusinessConfig;
use intake_validate::validate_rows;
use intake_wizard::WizardState;

use crate::cli::{AnalyzeArgs, ImportArgs};
use crate::summary::apply_table_style;

pub fn run_fields() {
    let mut table = comfy_table::Table::new();
    let mut header = vec!["Field".to_string(), "Type".to_string()];
    header.extend(
        intake_model::BusinessType::ALL
            .iter()
            .map(|b| b.label().to_string()),
    );
    table.set_header(header);
    apply_table_style(&mut table);
    let configs: Vec<BusinessConfig> = intake_model::BusinessType::ALL
        .iter()
        .map(|b| BusinessConfig::for_type(*b))
        .collect();
    for field in intake_model::ContactField::ALL {
        let mut row = vec![field.label().to_string(), field.expected_type().to_string()];
        for config in &configs {
            row.push(if config.is_required(field) {
                "required".to_string()
            } else if config.is_restricted(field) {
                "restricted".to_string()
            } else if config.known_fields().contains(&field) {
                "optional".to_string()
            } else {
                String::new()
            });
        }
        table.add_row(row);
    }
    println!("{table}");
}

/// Everything the analyze command renders.
pub struct AnalyzeResult {
    pub business: BusinessType,
    pub csv: CsvFile,
    pub mappings: Vec<FieldMapping>,
    pub mapping_summary: MappingSummary,
    pub report: ValidationReport,
    pub group_column: Option<String>,
    pub group_values: Vec<GroupValue>,
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalyzeResult> {
    let business: BusinessType = args.business.into();
    let span = info_span!("analyze", file = %args.file.display(), business = %business);
    let _guard = span.enter();

    let config = BusinessConfig::for_type(business);
    let csv = read_csv_file(&args.file)?;
    let mappings = generate_field_mappings(&csv, &config);
    let mapping_summary = summarize_mappings(&mappings, &config);
    let report = validate_rows(&csv, &mappings, &config, Local::now().date_naive());

    let group_column = args
        .group_column
        .clone()
        .or_else(|| detect_group_columns(&csv.headers).into_iter().next());
    let group_values = match &group_column {
        Some(column) => extract_group_values(&csv, column)
            .with_context(|| format!("extract group values from {column}"))?,
        None => Vec::new(),
    };

    if let Some(path) = &args.report {
        let json = serde_json::to_vec_pretty(&report.findings).context("serialize findings")?;
        fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), "findings report written");
    }

    info!(
        columns = csv.headers.len(),
        rows = csv.row_count(),
        errors = report.error_count(),
        warnings = report.warning_count(),
        "analyze complete"
    );
    Ok(AnalyzeResult {
        business,
        csv,
        mappings,
        mapping_summary,
        report,
        group_column,
        group_values,
    })
}

/// Everything the import command renders.
pub struct ImportResult {
    pub business: BusinessType,
    pub summary: ImportSummary,
    pub written: Vec<PathBuf>,
}

pub fn run_full_import(args: &ImportArgs) -> Result<ImportResult> {
    let business: BusinessType = args.business.into();
    let span = info_span!("import", file = %args.file.display(), business = %business);
    let _guard = span.enter();

    let csv = read_csv_file(&args.file)?;
    let state = WizardState::new(business).upload(csv);
    let state = state
        .advance_to_validation(Local::now().date_naive())
        .context("mapping gate failed")?;
    let mut state = state.advance_to_groups().context("validation gate failed")?;
    if let Some(column) = &args.group_column {
        state = state
            .select_group_column(column)
            .with_context(|| format!("select group column {column}"))?;
    }
    let (state, records) = state.advance_to_import().context("enter import step")?;

    let output_dir = args.output_dir.clone().unwrap_or_else(|| {
        args.file
            .parent()
            .map(|dir| dir.join("import"))
            .unwrap_or_else(|| PathBuf::from("import"))
    });
    let mut backend = JsonExportBackend::new(&output_dir);
    let options = ImportOptions {
        now: Local::now().naive_local(),
        reminder_lead_minutes: args.reminder_lead,
    };

    let bar = phase_bar();
    let summary = run_import(&mut backend, records, &options, |phase, items| {
        if phase == ImportPhase::Complete {
            bar.finish_with_message(phase.label());
        } else {
            bar.inc(1);
            bar.set_message(format!("{} ({items})", phase.label()));
        }
    });
    state.finish().context("finish wizard")?;

    info!(
        contacts = summary.contacts_created,
        appointments = summary.appointments_created,
        reminders = summary.reminders_scheduled,
        errors = summary.errors.len(),
        "import complete"
    );
    Ok(ImportResult {
        business,
        summary,
        written: backend.written,
    })
}

fn phase_bar() -> ProgressBar {
    let bar = ProgressBar::new(3);
    if let Ok(style) = ProgressStyle::with_template("{bar:24} {pos}/{len} {msg}") {
        bar.set_style(style);
    }
    bar
}
