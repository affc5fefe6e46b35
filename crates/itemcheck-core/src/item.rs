//! The catalogue item record and typed access to its fields.
//!
//! An [`Item`] is deliberately permissive: every attribute is optional and no
//! constraint is checked at construction or deserialisation time. Constraints
//! are applied only by an explicit validation pass under a chosen
//! [`crate::Group`].
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Item
// ---------------------------------------------------------------------------

/// A catalogue item as submitted by a save or update request.
///
/// Missing JSON keys and explicit `null` values both deserialise as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Item {
    /// Persistent identifier. Only required when updating an existing item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Display name of the item.
    #[serde(default, alias = "itemName", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Unit price in the smallest currency unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i32>,
    /// Units in stock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
}

impl Item {
    /// Creates a new, not-yet-persisted item with `id` unset.
    pub fn new(name: impl Into<String>, price: i32, quantity: i32) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            price: Some(price),
            quantity: Some(quantity),
        }
    }

    /// Returns the item with `id` populated.
    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Reads the given field as a [`FieldValue`].
    pub fn value_of(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Id => FieldValue::Int(self.id),
            Field::Name => FieldValue::Text(self.name.as_deref()),
            Field::Price => FieldValue::Int(self.price.map(i64::from)),
            Field::Quantity => FieldValue::Int(self.quantity.map(i64::from)),
        }
    }
}

// ---------------------------------------------------------------------------
// Field
// ---------------------------------------------------------------------------

/// Names one attribute of an [`Item`].
///
/// Variants are declared in record order; the derived `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// [`Item::id`].
    Id,
    /// [`Item::name`].
    Name,
    /// [`Item::price`].
    Price,
    /// [`Item::quantity`].
    Quantity,
}

impl Field {
    /// Every field, in record order.
    pub const ALL: [Field; 4] = [Self::Id, Self::Name, Self::Price, Self::Quantity];

    /// Returns the JSON key for this field.
    pub fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Price => "price",
            Self::Quantity => "quantity",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// FieldValue
// ---------------------------------------------------------------------------

/// A borrowed, typed view of one field's current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// An integer field; `None` when unset.
    Int(Option<i64>),
    /// A text field; `None` when unset.
    Text(Option<&'a str>),
}

impl FieldValue<'_> {
    /// Returns `true` if the field holds a value.
    pub fn is_set(&self) -> bool {
        match self {
            Self::Int(v) => v.is_some(),
            Self::Text(v) => v.is_some(),
        }
    }
}
