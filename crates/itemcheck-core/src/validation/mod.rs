//! Violation types and group-aware rule dispatch.
//!
//! This module defines [`Violation`] and [`ValidationResult`], the values a
//! validation pass produces, and [`Validator`], which walks a static rule
//! table and evaluates every rule active under the requested [`Group`].
//!
//! A pass never fails: a missing or out-of-bounds value is reported as a
//! [`Violation`], and all violations for a record are collected before
//! returning.
pub mod rules;

use std::fmt;

use serde::Serialize;

use crate::group::Group;
use crate::item::{Field, Item};
use rules::{ConstraintRule, ITEM_RULES, RuleKind};


// ---------------------------------------------------------------------------
// Violation
// ---------------------------------------------------------------------------

/// A single failure of one rule against one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// The field that failed.
    pub field: Field,
    /// The rule that failed.
    pub rule: RuleKind,
    /// A human-readable explanation of the failure.
    pub message: String,
}

impl Violation {
    /// Constructs a new [`Violation`].
    pub fn new(field: Field, rule: RuleKind, message: impl Into<String>) -> Self {
        Self {
            field,
            rule,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.rule, self.field, self.message)
    }
}

// ---------------------------------------------------------------------------
// ValidationResult
// ---------------------------------------------------------------------------

/// The violations found by one validation pass over one record.
///
/// The order of violations follows the rule table but carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    /// All violations produced during the pass.
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    /// Creates a result from a pre-built list of violations.
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Returns `true` if no rule was violated.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns an iterator over the violations on `field`.
    pub fn by_field(&self, field: Field) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(move |v| v.field == field)
    }

    /// Returns an iterator over the violations whose rule code is `code`.
    pub fn by_rule<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Violation> {
        self.violations.iter().filter(move |v| v.rule.code() == code)
    }

    /// Returns the distinct fields with at least one violation, in record order.
    pub fn fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.violations.iter().any(|v| v.field == *f))
            .collect()
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns `true` if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl IntoIterator for ValidationResult {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

// ---------------------------------------------------------------------------
// Validator
// ---------------------------------------------------------------------------

/// Evaluates a static rule table against [`Item`] records.
///
/// The rule table is never mutated, so a `Validator` is `Copy` and may be
/// shared freely across threads.
///
/// # Default
///
/// ```
/// # use itemcheck_core::{Validator, ITEM_RULES};
/// let v = Validator::default();
/// assert_eq!(v.rules().len(), ITEM_RULES.len());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    rules: &'static [ConstraintRule],
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ITEM_RULES)
    }
}

impl Validator {
    /// Creates a validator over the given rule table.
    pub fn new(rules: &'static [ConstraintRule]) -> Self {
        Self { rules }
    }

    /// Returns the full rule table.
    pub fn rules(&self) -> &'static [ConstraintRule] {
        self.rules
    }

    /// Returns the rules active under `group`, in table order.
    pub fn rules_for(&self, group: Group) -> impl Iterator<Item = &'static ConstraintRule> {
        self.rules.iter().filter(move |r| r.applies_to(group))
    }

    /// Runs every rule active under `group` against `item`.
    pub fn validate(&self, item: &Item, group: Group) -> ValidationResult {
        let mut violations = Vec::new();
        let mut evaluated = 0usize;
        for rule in self.rules_for(group) {
            evaluated += 1;
            if !rule.kind.passes(item.value_of(rule.field)) {
                tracing::trace!(field = %rule.field, rule = rule.kind.code(), "rule violated");
                violations.push(Violation::new(rule.field, rule.kind, rule.message));
            }
        }
        tracing::debug!(
            %group,
            rules = evaluated,
            violations = violations.len(),
            "validation pass complete"
        );
        ValidationResult::from_violations(violations)
    }

    /// Validates each record in `items` under `group`.
    ///
    /// Returns `(index, result)` for every record with at least one
    /// violation; valid records are omitted.
    pub fn validate_all(&self, items: &[Item], group: Group) -> Vec<(usize, ValidationResult)> {
        items
            .iter()
            .enumerate()
            .map(|(i, item)| (i, self.validate(item, group)))
            .filter(|(_, result)| !result.is_valid())
            .collect()
    }
}

/// Validates `item` under `group` with the built-in [`ITEM_RULES`] table.
pub fn validate(item: &Item, group: Group) -> ValidationResult {
    Validator::default().validate(item, group)
}

/// Validates a batch of records with the built-in [`ITEM_RULES`] table.
///
/// See [`Validator::validate_all`].
pub fn validate_all(items: &[Item], group: Group) -> Vec<(usize, ValidationResult)> {
    Validator::default().validate_all(items, group)
}
