//! The condition mini-language.
//!
//! A clause is `<field><operator><value>`. Operator tokens are tried in
//! match-priority order so longer forms win (`>=` is never read as `>`
//! followed by `=`). The parser scans forward from the start of the clause
//! for the first position where any operator token begins, splits there,
//! resolves the field name, and parses the value with the field's own
//! parser. A condition list is a conjunction: a record matches iff it
//! satisfies every clause.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use fleetdb_core::{FieldId, FieldType, FieldValue, Record, Status};

use crate::error::Error;
use crate::token::trim_spaces;
use crate::Result;

/// Relational comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl CompareOp {
    /// Whether an ordering outcome satisfies this operator.
    pub fn accepts(&self, ord: Ordering) -> bool {
        match self {
            CompareOp::Eq => ord == Ordering::Equal,
            CompareOp::Ne => ord != Ordering::Equal,
            CompareOp::Lt => ord == Ordering::Less,
            CompareOp::Le => ord != Ordering::Greater,
            CompareOp::Gt => ord == Ordering::Greater,
            CompareOp::Ge => ord != Ordering::Less,
        }
    }
}

/// What a clause tests once the field is known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum Test {
    /// Relational comparison against one typed value.
    Compare {
        op: CompareOp,
        value: FieldValue,
    },
    /// Status set membership (`/in/`, `/not_in/`).
    InSet {
        negated: bool,
        statuses: Vec<Status>,
    },
}

/// One parsed condition clause.
///
/// Ephemeral: built fresh per command invocation, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    field: FieldId,
    test: Test,
}

/// Operator token lookahead during clause splitting.
#[derive(Debug, Clone, Copy)]
enum OpToken {
    Compare(CompareOp),
    In,
    NotIn,
}

/// Operator tokens in match-priority order: longer and more specific forms
/// first.
const OPERATORS: [(&str, OpToken); 8] = [
    ("/not_in/", OpToken::NotIn),
    ("/in/", OpToken::In),
    (">=", OpToken::Compare(CompareOp::Ge)),
    ("<=", OpToken::Compare(CompareOp::Le)),
    ("==", OpToken::Compare(CompareOp::Eq)),
    ("!=", OpToken::Compare(CompareOp::Ne)),
    (">", OpToken::Compare(CompareOp::Gt)),
    ("<", OpToken::Compare(CompareOp::Lt)),
];

impl Condition {
    /// Parse one space-trimmed clause.
    pub fn parse(clause: &str) -> Result<Condition> {
        let (at, token, op) = find_operator(clause).ok_or_else(|| Error::UnknownOperator {
            clause: clause.to_string(),
        })?;
        let field = FieldId::resolve(trim_spaces(&clause[..at])).map_err(Error::Value)?;
        let raw = trim_spaces(&clause[at + token.len()..]);

        let test = match op {
            OpToken::In | OpToken::NotIn => {
                if field.field_type() != FieldType::Status {
                    return Err(Error::SetOperatorOnNonStatus { field: field.name() });
                }
                Test::InSet {
                    negated: matches!(op, OpToken::NotIn),
                    statuses: parse_status_set(raw)?,
                }
            }
            OpToken::Compare(op) => {
                if field.field_type() == FieldType::Status && raw.starts_with('[') {
                    return Err(Error::RelationalOnStatusSet {
                        clause: clause.to_string(),
                    });
                }
                Test::Compare {
                    op,
                    value: FieldValue::parse(field.field_type(), raw)?,
                }
            }
        };
        Ok(Condition { field, test })
    }

    /// The field this clause tests.
    pub fn field(&self) -> FieldId {
        self.field
    }

    /// Evaluate the clause against a record.
    pub fn matches(&self, record: &Record) -> bool {
        match &self.test {
            Test::Compare { op, value } => record
                .get(self.field)
                .compare(value)
                .map(|ord| op.accepts(ord))
                .unwrap_or(false),
            Test::InSet { negated, statuses } => {
                let hit = statuses.contains(&record.status());
                hit != *negated
            }
        }
    }
}

/// A record satisfies a condition list iff it satisfies every clause.
/// An empty list matches everything.
pub fn matches_all(conditions: &[Condition], record: &Record) -> bool {
    conditions.iter().all(|c| c.matches(record))
}

/// Find the first position where any operator token begins.
fn find_operator(clause: &str) -> Option<(usize, &'static str, OpToken)> {
    for (i, _) in clause.char_indices() {
        for (token, op) in OPERATORS {
            if clause[i..].starts_with(token) {
                return Some((i, token, op));
            }
        }
    }
    None
}

/// Parse a bracketed bare-literal list `[v1,v2,...]`. An empty list is
/// syntactically valid.
fn parse_status_set(raw: &str) -> Result<Vec<Status>> {
    let body = raw
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| Error::MalformedStatusSet {
            text: raw.to_string(),
        })?;
    if body.is_empty() {
        return Ok(Vec::new());
    }
    body.split(',')
        .map(|item| Status::from_literal(trim_spaces(item)).map_err(Error::Value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetdb_core::{Date, Plate};

    fn record(id: i32, plate: &str, date: &str, status: Status) -> Record {
        Record::new(
            id,
            "model".to_string(),
            Plate::parse(plate).unwrap(),
            Date::parse(date).unwrap(),
            status,
            "mech".to_string(),
            "drv".to_string(),
        )
    }

    fn well(id: i32) -> Record {
        record(id, "A123BC45", "1.1.2020", Status::Well)
    }

    #[test]
    fn test_parse_relational_ops() {
        for (clause, id, hit) in [
            ("unit_id==5", 5, true),
            ("unit_id==5", 6, false),
            ("unit_id!=5", 6, true),
            ("unit_id>5", 6, true),
            ("unit_id>=5", 5, true),
            ("unit_id<5", 4, true),
            ("unit_id<=5", 5, true),
            ("unit_id<=5", 6, false),
        ] {
            let cond = Condition::parse(clause).unwrap();
            assert_eq!(cond.matches(&well(id)), hit, "{clause} vs id={id}");
        }
    }

    #[test]
    fn test_longer_operators_win() {
        // ">=" must not parse as ">" with a value of "=5".
        let cond = Condition::parse("unit_id>=5").unwrap();
        assert!(cond.matches(&well(5)));
        assert!(!Condition::parse("unit_id>5").unwrap().matches(&well(5)));
    }

    #[test]
    fn test_date_ordinal_comparison() {
        let cond = Condition::parse("chk_date>'31.12.2019'").unwrap();
        assert!(cond.matches(&record(1, "A123BC45", "1.1.2020", Status::Well)));
        assert!(!cond.matches(&record(1, "A123BC45", "31.12.2019", Status::Well)));
    }

    #[test]
    fn test_plate_three_level_ordering() {
        let cond = Condition::parse("car_id<'A124BC01'").unwrap();
        // Middle digits dominate regardless of letters and region.
        assert!(cond.matches(&record(1, "A123XY99", "1.1.2020", Status::Well)));
        assert!(!cond.matches(&record(1, "A124AA01", "1.1.2020", Status::Well)));
    }

    #[test]
    fn test_plate_region_numeric_equality() {
        let cond = Condition::parse("car_id=='A123BC045'").unwrap();
        assert!(cond.matches(&record(1, "A123BC45", "1.1.2020", Status::Well)));
    }

    #[test]
    fn test_status_single_literal_is_ordinal() {
        let cond = Condition::parse("status=='well'").unwrap();
        assert!(cond.matches(&well(1)));
        assert!(!cond.matches(&record(1, "A123BC45", "1.1.2020", Status::Broken)));

        let cond = Condition::parse("status>'wearlow'").unwrap();
        assert!(cond.matches(&record(1, "A123BC45", "1.1.2020", Status::Broken)));
        assert!(!cond.matches(&well(1)));
    }

    #[test]
    fn test_status_set_membership() {
        let cond = Condition::parse("status/in/[well,broken]").unwrap();
        assert!(cond.matches(&well(1)));
        assert!(cond.matches(&record(1, "A123BC45", "1.1.2020", Status::Broken)));
        assert!(!cond.matches(&record(1, "A123BC45", "1.1.2020", Status::WearLow)));

        let cond = Condition::parse("status/not_in/[well]").unwrap();
        assert!(!cond.matches(&well(1)));
        assert!(cond.matches(&record(1, "A123BC45", "1.1.2020", Status::Broken)));
    }

    #[test]
    fn test_empty_status_set() {
        let always_false = Condition::parse("status/in/[]").unwrap();
        let always_true = Condition::parse("status/not_in/[]").unwrap();
        for status in Status::ALL {
            let r = record(1, "A123BC45", "1.1.2020", status);
            assert!(!always_false.matches(&r));
            assert!(always_true.matches(&r));
        }
    }

    #[test]
    fn test_set_operator_rejected_on_non_status() {
        assert_eq!(
            Condition::parse("unit_id/in/[well]"),
            Err(Error::SetOperatorOnNonStatus { field: "unit_id" })
        );
    }

    #[test]
    fn test_relational_rejected_on_status_set() {
        assert!(matches!(
            Condition::parse("status==[well,broken]"),
            Err(Error::RelationalOnStatusSet { .. })
        ));
    }

    #[test]
    fn test_malformed_clauses() {
        assert!(Condition::parse("unit_id=5").is_err()); // '=' alone is no operator
        assert!(Condition::parse("unit_id").is_err());
        assert!(Condition::parse("nosuch==5").is_err());
        assert!(Condition::parse("==5").is_err());
        assert!(Condition::parse("unit_id==").is_err());
        assert!(Condition::parse("status/in/well").is_err()); // missing brackets
        assert!(Condition::parse("status/in/[nope]").is_err());
    }

    #[test]
    fn test_text_byte_lexicographic() {
        let cond = Condition::parse("unit_model<\"n\"").unwrap();
        assert!(cond.matches(&well(1))); // "model" < "n"
        let cond = Condition::parse("unit_model>\"Model\"").unwrap();
        assert!(cond.matches(&well(1))); // lowercase sorts after uppercase
    }

    #[test]
    fn test_matches_all_is_conjunction() {
        let conds = vec![
            Condition::parse("unit_id>3").unwrap(),
            Condition::parse("status=='well'").unwrap(),
        ];
        assert!(matches_all(&conds, &well(5)));
        assert!(!matches_all(&conds, &well(2)));
        assert!(matches_all(&[], &well(1)));
    }
}
