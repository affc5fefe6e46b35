//! Constraint rule definitions and the built-in item rule table.
//!
//! Rules are plain data. [`RuleKind::passes`] is the single interpreter that
//! evaluates a rule kind against a [`FieldValue`]; there is no per-rule code.
use std::fmt;

use serde::{Serialize, Serializer};

use crate::group::Group;
use crate::item::{Field, FieldValue};

// ---------------------------------------------------------------------------
// RuleKind
// ---------------------------------------------------------------------------

/// The predicate a [`ConstraintRule`] applies to its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// The field must be set.
    NotNull,
    /// The field must be set and, for text, contain a non-whitespace character.
    NotBlank,
    /// An integer field, when set, must lie in `min..=max`.
    Range {
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },
    /// An integer field, when set, must not exceed `max`.
    Max {
        /// Inclusive upper bound.
        max: i64,
    },
}

impl RuleKind {
    /// Returns the stable identifier used in diagnostics (e.g. `"NotNull"`).
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotNull => "NotNull",
            Self::NotBlank => "NotBlank",
            Self::Range { .. } => "Range",
            Self::Max { .. } => "Max",
        }
    }

    /// Returns `true` if `value` satisfies this rule.
    ///
    /// Bounds rules pass on an unset value; the presence check belongs to a
    /// separate `NotNull` rule. A bounds rule against a text field is not
    /// applicable and passes.
    pub fn passes(&self, value: FieldValue<'_>) -> bool {
        match (self, value) {
            (Self::NotNull, v) => v.is_set(),
            (Self::NotBlank, FieldValue::Text(v)) => v.is_some_and(|s| !trim_control(s).is_empty()),
            (Self::NotBlank, FieldValue::Int(v)) => v.is_some(),
            (Self::Range { min, max }, FieldValue::Int(v)) => {
                v.is_none_or(|n| (*min..=*max).contains(&n))
            }
            (Self::Max { max }, FieldValue::Int(v)) => v.is_none_or(|n| n <= *max),
            (Self::Range { .. } | Self::Max { .. }, FieldValue::Text(_)) => true,
        }
    }
}

/// Strips leading and trailing characters at or below U+0020 (space and the
/// ASCII control range). Other Unicode whitespace such as U+00A0 is kept.
fn trim_control(s: &str) -> &str {
    s.trim_matches(|c: char| c <= '\u{20}')
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for RuleKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

// ---------------------------------------------------------------------------
// ConstraintRule
// ---------------------------------------------------------------------------

/// One row of a rule table: a predicate over a field, active under a set of
/// groups, with the message reported when it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintRule {
    /// The field the rule inspects.
    pub field: Field,
    /// The predicate applied to the field.
    pub kind: RuleKind,
    /// Groups under which the rule is evaluated.
    pub groups: &'static [Group],
    /// Human-readable explanation of a failure.
    pub message: &'static str,
}

impl ConstraintRule {
    /// Constructs a rule. Usable in `static` tables.
    pub const fn new(
        field: Field,
        kind: RuleKind,
        groups: &'static [Group],
        message: &'static str,
    ) -> Self {
        Self {
            field,
            kind,
            groups,
            message,
        }
    }

    /// Returns `true` if this rule is active under `group`.
    pub fn applies_to(&self, group: Group) -> bool {
        self.groups.contains(&group)
    }
}

// ---------------------------------------------------------------------------
// Built-in table
// ---------------------------------------------------------------------------

const SAVE_AND_UPDATE: &[Group] = &[Group::Save, Group::Update];
const UPDATE_ONLY: &[Group] = &[Group::Update];

/// Lowest accepted item price.
pub const PRICE_MIN: i64 = 1_000;
/// Highest accepted item price.
pub const PRICE_MAX: i64 = 1_000_000;
/// Highest accepted stock quantity.
pub const QUANTITY_MAX: i64 = 9_999;

/// The constraint rules for [`crate::Item`].
pub static ITEM_RULES: &[ConstraintRule] = &[
    ConstraintRule::new(
        Field::Id,
        RuleKind::NotNull,
        UPDATE_ONLY,
        "must not be null",
    ),
    ConstraintRule::new(
        Field::Name,
        RuleKind::NotBlank,
        SAVE_AND_UPDATE,
        "must not be blank",
    ),
    ConstraintRule::new(
        Field::Price,
        RuleKind::NotNull,
        SAVE_AND_UPDATE,
        "must not be null",
    ),
    ConstraintRule::new(
        Field::Price,
        RuleKind::Range {
            min: PRICE_MIN,
            max: PRICE_MAX,
        },
        SAVE_AND_UPDATE,
        "must be between 1000 and 1000000",
    ),
    ConstraintRule::new(
        Field::Quantity,
        RuleKind::NotNull,
        SAVE_AND_UPDATE,
        "must not be null",
    ),
    ConstraintRule::new(
        Field::Quantity,
        RuleKind::Max { max: QUANTITY_MAX },
        SAVE_AND_UPDATE,
        "must be less than or equal to 9999",
    ),
];
