//! End-to-end protocol runs through the public crate API.

use fleetdb::Session;

fn run(script: &str) -> String {
    let mut session = Session::new();
    let mut out = Vec::new();
    session.run(script.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn full_lifecycle_script() {
    let script = "\
insert unit_id=1, unit_model=\"Kamaz 5320\", car_id='A123BC45', chk_date='10.03.2024', status='well', mechanic=\"Ivanov\", driver=\"Petrov\"
insert unit_id=2, unit_model=\"Gazel\", car_id='B777EK102', chk_date='29.02.2024', status='wearhigh', mechanic=\"Ivanov\", driver=\"Sidorov\"
insert unit_id=3, unit_model=\"Kamaz 5320\", car_id='A124BC45', chk_date='01.01.2023', status='broken', mechanic=\"Frolov\", driver=\"Petrov\"
select unit_id,status status/in/[wearhigh,broken]
update status='well' unit_id==3
sort car_id=desc
select car_id
delete mechanic==\"Ivanov\"
select unit_id
";
    let expected = "\
insert:1
insert:2
insert:3
unit_id=2 status='wearhigh'
unit_id=3 status='broken'
select:2
update:1
sort:3
car_id='B777EK102'
car_id='A124BC45'
car_id='A123BC45'
select:3
delete:2
unit_id=3
select:1
";
    assert_eq!(run(script), expected);
}

#[test]
fn malformed_lines_do_not_disturb_valid_ones() {
    let script = "\
insert unit_id=1, unit_model=\"M\", car_id='A123BC45', chk_date='01.01.2020', status='well', mechanic=\"A\", driver=\"B\"
delete
sort status=asc
uniq nosuch_field
select unit_id
";
    let expected = "\
insert:1
incorrect:'delete'
incorrect:'sort status=asc'
incorrect:'uniq nosuch_field'
unit_id=1
select:1
";
    assert_eq!(run(script), expected);
}

#[test]
fn uniq_reports_removed_and_keeps_last() {
    let mut script = String::new();
    for id in [1, 2, 1, 3, 1] {
        script.push_str(&format!(
            "insert unit_id={id}, unit_model=\"M\", car_id='A123BC45', \
             chk_date='01.01.2020', status='well', mechanic=\"A\", driver=\"B\"\n"
        ));
    }
    script.push_str("uniq unit_id\nselect unit_id\n");
    let out = run(&script);
    assert!(out.ends_with("uniq:2\nunit_id=2\nunit_id=3\nunit_id=1\nselect:3\n"));
}
