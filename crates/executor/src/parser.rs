//! Line-to-command parsing.
//!
//! A line is recognized only if it starts with a literal keyword followed by
//! a single space. Argument grammar per command:
//!
//! - `insert`: comma-separated `field=value`, all 7 fields exactly once.
//! - `select`: field-name list, then optional space-separated conditions.
//! - `delete`: space-separated conditions, at least one.
//! - `update`: comma-separated `field=value` list, then optional conditions.
//! - `uniq`:   comma-separated field-name list.
//! - `sort`:   comma-separated `field=asc|desc`, status forbidden.
//!
//! Space splitting is quote-aware so quoted text values may contain spaces;
//! the comma list of `select`/`update` is therefore always the first
//! space-level token.

use fleetdb_core::{FieldId, FieldType, FieldValue, Record, ALL_FIELDS, FIELD_COUNT};

use crate::command::{Assignment, Command, SortKey, SortOrder};
use crate::condition::Condition;
use crate::error::Error;
use crate::token::{split_outside_quotes, trim_spaces};
use crate::Result;

/// Command keywords, checked in order.
const KEYWORDS: [&str; 6] = ["insert", "select", "delete", "update", "uniq", "sort"];

/// Parse one raw command line into a [`Command`].
pub fn parse_line(line: &str) -> Result<Command> {
    let (keyword, args) = split_keyword(line)?;
    let args = args.trim_start_matches(' ');
    if args.is_empty() {
        return Err(Error::EmptyArguments);
    }
    match keyword {
        "insert" => parse_insert(args),
        "select" => parse_select(args),
        "delete" => parse_delete(args),
        "update" => parse_update(args),
        "uniq" => parse_uniq(args),
        "sort" => parse_sort(args),
        _ => Err(Error::UnknownCommand),
    }
}

/// Recognize the leading keyword; it must be followed by a single space.
fn split_keyword(line: &str) -> Result<(&'static str, &str)> {
    for keyword in KEYWORDS {
        if let Some(rest) = line.strip_prefix(keyword) {
            if let Some(args) = rest.strip_prefix(' ') {
                return Ok((keyword, args));
            }
        }
    }
    Err(Error::UnknownCommand)
}

/// Split an assignment token into a resolved field and its raw value text.
fn split_assignment(token: &str) -> Result<(FieldId, &str)> {
    let malformed = || Error::MalformedAssignment {
        clause: token.to_string(),
    };
    let (name, raw) = token.split_once('=').ok_or_else(malformed)?;
    let name = trim_spaces(name);
    let raw = trim_spaces(raw);
    if name.is_empty() || raw.is_empty() {
        return Err(malformed());
    }
    Ok((FieldId::resolve(name)?, raw))
}

fn parse_insert(args: &str) -> Result<Command> {
    let mut values: [Option<FieldValue>; FIELD_COUNT] = Default::default();
    for token in split_outside_quotes(args, ',') {
        let token = trim_spaces(token);
        let (field, raw) = split_assignment(token)?;
        let slot = &mut values[field.index()];
        if slot.is_some() {
            return Err(Error::DuplicateField { name: field.name() });
        }
        *slot = Some(FieldValue::parse(field.field_type(), raw)?);
    }

    let mut ordered = Vec::with_capacity(FIELD_COUNT);
    for (field, value) in ALL_FIELDS.iter().zip(values) {
        ordered.push(value.ok_or(Error::MissingField { name: field.name() })?);
    }
    let values: [FieldValue; FIELD_COUNT] =
        ordered.try_into().map_err(|_| Error::Internal {
            reason: "insert value collection lost arity".to_string(),
        })?;
    Ok(Command::Insert {
        record: Record::from_values(values),
    })
}

fn parse_select(args: &str) -> Result<Command> {
    let mut tokens = clause_tokens(args);
    let fields = parse_field_list(tokens.next().unwrap_or(""))?;
    let conditions = tokens.map(Condition::parse).collect::<Result<Vec<_>>>()?;
    Ok(Command::Select { fields, conditions })
}

fn parse_delete(args: &str) -> Result<Command> {
    let conditions = clause_tokens(args)
        .map(Condition::parse)
        .collect::<Result<Vec<_>>>()?;
    if conditions.is_empty() {
        return Err(Error::EmptyConditionList);
    }
    Ok(Command::Delete { conditions })
}

fn parse_update(args: &str) -> Result<Command> {
    let mut tokens = clause_tokens(args);
    let list = tokens.next().unwrap_or("");
    if list.is_empty() {
        return Err(Error::EmptyFieldList);
    }

    let mut assignments: Vec<Assignment> = Vec::new();
    for token in split_outside_quotes(list, ',') {
        let (field, raw) = split_assignment(trim_spaces(token))?;
        if assignments.iter().any(|a| a.field == field) {
            return Err(Error::DuplicateField { name: field.name() });
        }
        assignments.push(Assignment {
            field,
            value: FieldValue::parse(field.field_type(), raw)?,
        });
    }

    let conditions = tokens.map(Condition::parse).collect::<Result<Vec<_>>>()?;
    Ok(Command::Update {
        assignments,
        conditions,
    })
}

fn parse_uniq(args: &str) -> Result<Command> {
    let fields = parse_field_list(trim_spaces(args))?;
    Ok(Command::Uniq { fields })
}

fn parse_sort(args: &str) -> Result<Command> {
    let mut keys: Vec<SortKey> = Vec::new();
    for token in trim_spaces(args).split(',') {
        let token = trim_spaces(token);
        let malformed = || Error::MalformedAssignment {
            clause: token.to_string(),
        };
        let (name, dir) = token.split_once('=').ok_or_else(malformed)?;
        let field = FieldId::resolve(trim_spaces(name))?;
        if field.field_type() == FieldType::Status {
            return Err(Error::StatusSortKey);
        }
        if keys.iter().any(|k| k.field == field) {
            return Err(Error::DuplicateField { name: field.name() });
        }
        let order = match trim_spaces(dir) {
            "asc" => SortOrder::Ascending,
            "desc" => SortOrder::Descending,
            other => {
                return Err(Error::InvalidSortDirection {
                    text: other.to_string(),
                })
            }
        };
        keys.push(SortKey { field, order });
    }
    Ok(Command::Sort { keys })
}

/// Space-level tokens of the argument text: quote-aware split on `' '`,
/// trimmed, empties dropped (runs of spaces collapse).
fn clause_tokens(args: &str) -> impl Iterator<Item = &str> {
    split_outside_quotes(args, ' ')
        .map(trim_spaces)
        .filter(|t| !t.is_empty())
}

/// Parse a comma-separated field-name list.
fn parse_field_list(list: &str) -> Result<Vec<FieldId>> {
    if list.is_empty() {
        return Err(Error::EmptyFieldList);
    }
    list.split(',')
        .map(|name| FieldId::resolve(trim_spaces(name)).map_err(Error::Value))
        .collect()
}
