//! Violation formatting: human-readable and JSON (NDJSON) modes.
//!
//! - **Human mode** (default): one line per violation on stderr, with the
//!   `[E]` tag colored red when colors are enabled.
//! - **JSON mode**: one JSON object per violation, then a summary object.
//!
//! `quiet` suppresses the summary; `verbose` adds timing.
use std::io::{IsTerminal as _, Write};
use std::time::Duration;

use itemcheck_core::Violation;
use serde::Serialize;

/// Returns `true` if ANSI color codes should be emitted to stderr.
///
/// Colors are off when `--no-color` is passed, when `NO_COLOR` is present in
/// the environment, or when stderr is not a TTY.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stderr().is_terminal()
}

const ANSI_RED: &str = "\x1b[31m";
const ANSI_RESET: &str = "\x1b[0m";

/// Formatter settings derived from CLI flags.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Whether ANSI colors are enabled.
    pub colors: bool,
    /// Suppress the summary.
    pub quiet: bool,
    /// Emit timing information.
    pub verbose: bool,
}

impl FormatterConfig {
    /// Constructs a [`FormatterConfig`] from the raw CLI flags.
    pub fn from_flags(no_color_flag: bool, quiet: bool, verbose: bool) -> Self {
        Self {
            colors: colors_enabled(no_color_flag),
            quiet,
            verbose,
        }
    }
}

/// Batch totals reported after the last violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Total violations across all records.
    pub violations: usize,
    /// Records with at least one violation.
    pub invalid_records: usize,
    /// Records examined.
    pub records: usize,
}

// ---------------------------------------------------------------------------
// Human mode
// ---------------------------------------------------------------------------

/// Writes one violation of record `index` in human-readable form.
///
/// Format: `[E] Range  record[0].price: must be between 1000 and 1000000`
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_violation_human<W: Write>(
    writer: &mut W,
    index: usize,
    violation: &Violation,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    let (open, close) = if config.colors {
        (ANSI_RED, ANSI_RESET)
    } else {
        ("", "")
    };
    writeln!(
        writer,
        "{open}[E]{close} {rule}  record[{index}].{field}: {message}",
        rule = violation.rule,
        field = violation.field,
        message = violation.message,
    )
}

/// Writes the summary line in human mode.
///
/// Format: `3 violations in 2 of 5 records`
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary_human<W: Write>(
    writer: &mut W,
    summary: Summary,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    writeln!(
        writer,
        "{} {} in {} of {} {}",
        summary.violations,
        pluralize(summary.violations, "violation", "violations"),
        summary.invalid_records,
        summary.records,
        pluralize(summary.records, "record", "records"),
    )
}

/// Writes timing information in verbose mode; a no-op otherwise.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_timing_human<W: Write>(
    writer: &mut W,
    label: &str,
    duration: Duration,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if !config.verbose {
        return Ok(());
    }
    writeln!(writer, "{label} in {}ms", duration.as_millis())
}

// ---------------------------------------------------------------------------
// JSON mode
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ViolationLine<'a> {
    record: usize,
    #[serde(flatten)]
    violation: &'a Violation,
}

#[derive(Serialize)]
struct SummaryLine {
    summary: Summary,
}

/// Writes one violation of record `index` as an NDJSON line.
///
/// ```json
/// {"record":0,"field":"price","rule":"Range","message":"must be between 1000 and 1000000"}
/// ```
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_violation_json<W: Write>(
    writer: &mut W,
    index: usize,
    violation: &Violation,
) -> std::io::Result<()> {
    serde_json::to_writer(
        &mut *writer,
        &ViolationLine {
            record: index,
            violation,
        },
    )?;
    writeln!(writer)
}

/// Writes `{"summary":{...}}` as the final NDJSON line unless quiet.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_summary_json<W: Write>(
    writer: &mut W,
    summary: Summary,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    serde_json::to_writer(&mut *writer, &SummaryLine { summary })?;
    writeln!(writer)
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Output format selection, mirroring the CLI `--format` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// Human-readable, optionally colored output.
    Human,
    /// NDJSON output.
    Json,
}

/// Writes a violation in the requested format.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_violation<W: Write>(
    writer: &mut W,
    index: usize,
    violation: &Violation,
    mode: FormatMode,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match mode {
        FormatMode::Human => write_violation_human(writer, index, violation, config),
        FormatMode::Json => write_violation_json(writer, index, violation),
    }
}

/// Writes the summary in the requested format.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_summary<W: Write>(
    writer: &mut W,
    summary: Summary,
    mode: FormatMode,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match mode {
        FormatMode::Human => write_summary_human(writer, summary, config),
        FormatMode::Json => write_summary_json(writer, summary, config),
    }
}

fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}
