//! Test modules for the executor crate.


use crate::Session;

/// Feed lines through a fresh session and collect the protocol output.
pub(crate) fn run_script(lines: &[&str]) -> String {
    let mut session = Session::new();
    let mut out = Vec::new();
    for line in lines {
        session.process_line(line, &mut out).unwrap();
    }
    String::from_utf8(out).unwrap()
}

/// A valid insert line with the given id and defaults elsewhere.
pub(crate) fn insert_line(id: i32) -> String {
    format!(
        "insert unit_id={id}, unit_model=\"M{id}\", car_id='A123BC45', \
         chk_date='01.01.2020', status='well', mechanic=\"Ivanov\", driver=\"Petrov\""
    )
}
