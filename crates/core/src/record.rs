//! One stored unit-check entry.

use serde::{Deserialize, Serialize};

use crate::schema::{FieldId, ALL_FIELDS, FIELD_COUNT};
use crate::types::{Date, Plate, Status};
use crate::value::FieldValue;

/// A fully validated record.
///
/// Values live in canonical field order (see [`ALL_FIELDS`]); the variant of
/// slot `i` always matches field `i`'s type. A record is only ever
/// constructed whole — insertion is all-or-nothing, so no partially built
/// record can reach the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    values: [FieldValue; FIELD_COUNT],
}

impl Record {
    /// Build a record from typed parts.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        unit_id: i32,
        unit_model: String,
        car_id: Plate,
        chk_date: Date,
        status: Status,
        mechanic: String,
        driver: String,
    ) -> Record {
        Record {
            values: [
                FieldValue::Int(unit_id),
                FieldValue::Text(unit_model),
                FieldValue::Plate(car_id),
                FieldValue::Date(chk_date),
                FieldValue::Status(status),
                FieldValue::Text(mechanic),
                FieldValue::Text(driver),
            ],
        }
    }

    /// Build a record from values already laid out in canonical order.
    ///
    /// The caller must have parsed each value against the matching field;
    /// this holds by construction for the insert parser.
    pub fn from_values(values: [FieldValue; FIELD_COUNT]) -> Record {
        debug_assert!(ALL_FIELDS
            .iter()
            .zip(values.iter())
            .all(|(f, v)| f.field_type() == v.field_type()));
        Record { values }
    }

    /// Read one field.
    pub fn get(&self, field: FieldId) -> &FieldValue {
        &self.values[field.index()]
    }

    /// Overwrite one field in place. The value must have the field's kind.
    pub fn set(&mut self, field: FieldId, value: FieldValue) {
        debug_assert_eq!(field.field_type(), value.field_type());
        self.values[field.index()] = value;
    }

    /// The record's status.
    pub fn status(&self) -> Status {
        match self.values[FieldId::Status.index()] {
            FieldValue::Status(s) => s,
            // Unreachable by the layout invariant; NotChecked is the
            // conservative answer if it is ever broken.
            _ => Status::NotChecked,
        }
    }
}
