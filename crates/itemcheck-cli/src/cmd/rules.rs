//! Implementation of `itemcheck rules [--group <group>]`.
//!
//! Prints the built-in constraint table to stdout, one rule per line.
use std::io::Write;

use itemcheck_core::{ConstraintRule, Group, RuleKind, Validator};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;

#[derive(Serialize)]
struct RuleLine<'a> {
    field: &'static str,
    rule: &'static str,
    groups: &'a [Group],
    #[serde(skip_serializing_if = "Option::is_none")]
    min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max: Option<i64>,
    message: &'static str,
}

impl<'a> From<&'a ConstraintRule> for RuleLine<'a> {
    fn from(rule: &'a ConstraintRule) -> Self {
        let (min, max) = match rule.kind {
            RuleKind::Range { min, max } => (Some(min), Some(max)),
            RuleKind::Max { max } => (None, Some(max)),
            RuleKind::NotNull | RuleKind::NotBlank => (None, None),
        };
        Self {
            field: rule.field.name(),
            rule: rule.kind.code(),
            groups: rule.groups,
            min,
            max,
            message: rule.message,
        }
    }
}

/// Runs the `rules` command, writing to stdout.
///
/// # Errors
///
/// Returns [`CliError::IoError`] if stdout cannot be written.
pub fn run(group: Option<Group>, format: OutputFormat) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_rules(&mut out, &Validator::default(), group, format).map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}

/// Writes the rules of `validator` (restricted to `group` when given).
///
/// Human format: `<field>\t<code>\t<groups>\t<message>`.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_rules<W: Write>(
    writer: &mut W,
    validator: &Validator,
    group: Option<Group>,
    format: OutputFormat,
) -> std::io::Result<()> {
    let rules = validator
        .rules()
        .iter()
        .filter(|r| group.is_none_or(|g| r.applies_to(g)));
    for rule in rules {
        match format {
            OutputFormat::Human => {
                let groups: Vec<&str> = rule.groups.iter().copied().map(Group::as_str).collect();
                writeln!(
                    writer,
                    "{}\t{}\t{}\t{}",
                    rule.field,
                    rule.kind,
                    groups.join(","),
                    rule.message
                )?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut *writer, &RuleLine::from(rule))?;
                writeln!(writer)?;
            }
        }
    }
    Ok(())
}
