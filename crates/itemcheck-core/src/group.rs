//! Scenario groups that select which constraint rules are active.
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// The request context a validation pass runs under.
///
/// Each [`crate::ConstraintRule`] lists the groups it belongs to; a pass under
/// a given group evaluates only the rules that list it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Group {
    /// Creating a new item.
    Save,
    /// Modifying an existing item.
    Update,
}

impl Group {
    /// Every group, in declaration order.
    pub const ALL: [Group; 2] = [Self::Save, Self::Update];

    /// Returns the lowercase name of this group.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Save => "save",
            Self::Update => "update",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known [`Group`].
///
/// This is a caller error, not a validation outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupParseError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for GroupParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown validation group {:?}: expected \"save\" or \"update\"",
            self.input
        )
    }
}

impl std::error::Error for GroupParseError {}

impl FromStr for Group {
    type Err = GroupParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("save") {
            Ok(Self::Save)
        } else if s.eq_ignore_ascii_case("update") {
            Ok(Self::Update)
        } else {
            Err(GroupParseError {
                input: s.to_owned(),
            })
        }
    }
}
