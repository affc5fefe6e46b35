//! Implementation of `itemcheck validate <file> --group <group>`.
//!
//! Parses a JSON document holding one item or an array of items, validates
//! every record under the requested group, and emits violations to stderr.
//!
//! Exit codes:
//! - 0 = every record is valid
//! - 1 = at least one record has violations
//! - 2 = the document is not JSON, or not an item / array of items
use std::time::Instant;

use itemcheck_core::{Group, Item, validate_all};
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::{
    FormatMode, FormatterConfig, Summary, write_summary, write_timing_human, write_violation,
};

/// Runs the `validate` command over `content`.
///
/// # Errors
///
/// - [`CliError::ParseFailed`] when `content` is not an item document.
/// - [`CliError::ValidationFailed`] when any record has violations.
/// - [`CliError::IoError`] when stderr cannot be written.
pub fn run(
    content: &str,
    group: Group,
    format: OutputFormat,
    quiet: bool,
    verbose: bool,
    no_color: bool,
) -> Result<(), CliError> {
    let items = parse_items(content)?;

    let started = Instant::now();
    let failures = validate_all(&items, group);
    let elapsed = started.elapsed();

    let summary = Summary {
        violations: failures.iter().map(|(_, r)| r.len()).sum(),
        invalid_records: failures.len(),
        records: items.len(),
    };
    tracing::info!(
        %group,
        records = summary.records,
        invalid = summary.invalid_records,
        violations = summary.violations,
        "validated item document"
    );

    let mode = match format {
        OutputFormat::Human => FormatMode::Human,
        OutputFormat::Json => FormatMode::Json,
    };
    let fmt_config = FormatterConfig::from_flags(no_color, quiet, verbose);

    let stderr = std::io::stderr();
    let mut err_out = stderr.lock();

    for (index, result) in &failures {
        for violation in result {
            write_violation(&mut err_out, *index, violation, mode, &fmt_config)
                .map_err(|e| stderr_error(&e))?;
        }
    }
    write_summary(&mut err_out, summary, mode, &fmt_config).map_err(|e| stderr_error(&e))?;
    if mode == FormatMode::Human {
        let label = format!("validated {} records under {group}", summary.records);
        write_timing_human(&mut err_out, &label, elapsed, &fmt_config)
            .map_err(|e| stderr_error(&e))?;
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(CliError::ValidationFailed {
            invalid_records: summary.invalid_records,
        })
    }
}

/// Parses `content` as either a single item object or an array of them.
///
/// # Errors
///
/// Returns [`CliError::ParseFailed`] for malformed JSON (with line and
/// column), for a top-level value that is neither an object nor an array, or
/// for a record that does not match the item shape.
pub fn parse_items(content: &str) -> Result<Vec<Item>, CliError> {
    let value: Value = serde_json::from_str(content).map_err(|e| CliError::ParseFailed {
        detail: format!("line {}, column {}: {e}", e.line(), e.column()),
    })?;

    match value {
        Value::Object(_) => {
            let item = serde_json::from_value(value).map_err(|e| CliError::ParseFailed {
                detail: format!("record 0: {e}"),
            })?;
            Ok(vec![item])
        }
        Value::Array(values) => values
            .into_iter()
            .enumerate()
            .map(|(i, v)| {
                serde_json::from_value(v).map_err(|e| CliError::ParseFailed {
                    detail: format!("record {i}: {e}"),
                })
            })
            .collect(),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            Err(CliError::ParseFailed {
                detail: "expected an item object or an array of items".to_owned(),
            })
        }
    }
}

fn stderr_error(e: &std::io::Error) -> CliError {
    CliError::IoError {
        source: "stderr".to_owned(),
        detail: e.to_string(),
    }
}
