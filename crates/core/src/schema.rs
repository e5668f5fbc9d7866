//! The fixed 7-field record schema.
//!
//! Field order is frozen: it governs the record's internal layout and the
//! default projection order in output, independent of the order fields are
//! supplied on the wire.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of fields in a record.
pub const FIELD_COUNT: usize = 7;

/// Value kind stored in a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    /// Signed 32-bit integer, plain decimal literal.
    Int,
    /// Double-quoted bounded text.
    Text,
    /// Single-quoted plate code.
    Plate,
    /// Single-quoted `D.M.Y` calendar date.
    Date,
    /// Single-quoted status name.
    Status,
}

/// One of the 7 named record fields, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldId {
    /// Numeric unit id (free-form, not unique).
    UnitId,
    /// Unit model name.
    UnitModel,
    /// Vehicle plate code.
    CarId,
    /// Last inspection date.
    ChkDate,
    /// Inspection status.
    Status,
    /// Mechanic name.
    Mechanic,
    /// Driver name.
    Driver,
}

/// Canonical field order; index in this array is the field index 0..6.
pub const ALL_FIELDS: [FieldId; FIELD_COUNT] = [
    FieldId::UnitId,
    FieldId::UnitModel,
    FieldId::CarId,
    FieldId::ChkDate,
    FieldId::Status,
    FieldId::Mechanic,
    FieldId::Driver,
];

static FIELDS_BY_NAME: Lazy<HashMap<&'static str, FieldId>> =
    Lazy::new(|| ALL_FIELDS.iter().map(|f| (f.name(), *f)).collect());

impl FieldId {
    /// Resolve a canonical field name. Exact-match, case-sensitive.
    pub fn resolve(name: &str) -> Result<FieldId> {
        FIELDS_BY_NAME
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownField {
                name: name.to_string(),
            })
    }

    /// Canonical wire name of the field.
    pub fn name(&self) -> &'static str {
        match self {
            FieldId::UnitId => "unit_id",
            FieldId::UnitModel => "unit_model",
            FieldId::CarId => "car_id",
            FieldId::ChkDate => "chk_date",
            FieldId::Status => "status",
            FieldId::Mechanic => "mechanic",
            FieldId::Driver => "driver",
        }
    }

    /// Position of the field in the canonical record layout.
    pub fn index(&self) -> usize {
        match self {
            FieldId::UnitId => 0,
            FieldId::UnitModel => 1,
            FieldId::CarId => 2,
            FieldId::ChkDate => 3,
            FieldId::Status => 4,
            FieldId::Mechanic => 5,
            FieldId::Driver => 6,
        }
    }

    /// The value kind this field stores.
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldId::UnitId => FieldType::Int,
            FieldId::UnitModel => FieldType::Text,
            FieldId::CarId => FieldType::Plate,
            FieldId::ChkDate => FieldType::Date,
            FieldId::Status => FieldType::Status,
            FieldId::Mechanic => FieldType::Text,
            FieldId::Driver => FieldType::Text,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
