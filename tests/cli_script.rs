mod common;

use predicates::prelude::*;
use predicates::str::{contains, is_match};
use tempfile::tempdir;

use common::script_cmd;

#[test]
fn single_course_on_five_point_scale() {
    let home = tempdir().unwrap();
    script_cmd(&home)
        .write_stdin("units 1 3\ncgpa\nexit\n")
        .assert()
        .success()
        .stdout(contains("CGPA: 5.00"));
}

#[test]
fn four_point_scale_with_prior_totals() {
    let home = tempdir().unwrap();
    let input = "\
scale four
units 1 3
add Physics
grade 2 B
units 2 2
prior points 20
prior units 10
show
exit
";
    script_cmd(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Total points: 38   Total units: 15"))
        .stdout(contains("CGPA: 2.53"))
        .stdout(contains("Physics"));
}

#[test]
fn removing_all_courses_reports_no_result() {
    let home = tempdir().unwrap();
    script_cmd(&home)
        .write_stdin("units 1 4\nremove 1\nshow\n")
        .assert()
        .success()
        .stdout(contains("No courses left"))
        .stdout(contains("CGPA: 0.00 (no units entered yet)"));
}

#[test]
fn grade_outside_scale_counts_zero_after_switch() {
    let home = tempdir().unwrap();
    script_cmd(&home)
        .write_stdin("grade 1 E\nunits 1 3\nscale four\nshow\n")
        .assert()
        .success()
        .stdout(contains("1 course(s) hold a grade outside this scale"))
        .stdout(is_match(r"01\s+E\*").unwrap())
        .stdout(contains("CGPA: 0.00\n"));
}

#[test]
fn grade_entry_is_limited_to_active_scale() {
    let home = tempdir().unwrap();
    script_cmd(&home)
        .write_stdin("scale four\ngrade 1 E\n")
        .assert()
        .success()
        .stdout(contains("Grade E is not part of the 4-point scale"))
        .stdout(contains("Choose one of: A, B, C, D, F"));
}

#[test]
fn non_numeric_units_are_treated_as_blank() {
    let home = tempdir().unwrap();
    script_cmd(&home)
        .write_stdin("units 1 three\n")
        .assert()
        .success()
        .stdout(contains("`three` is not a number"))
        .stdout(contains("CGPA: 0.00 (no units entered yet)"));
}

#[test]
fn unknown_command_suggests_closest_match() {
    let home = tempdir().unwrap();
    script_cmd(&home)
        .write_stdin("sho\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `sho`"))
        .stdout(contains("Suggestion: `show`?"));
}

#[test]
fn unknown_course_reference_is_reported() {
    let home = tempdir().unwrap();
    script_cmd(&home)
        .write_stdin("remove 9\nshow\n")
        .assert()
        .success()
        .stdout(contains("No course matches `9`"))
        .stdout(is_match(r"(?m)^01\s").unwrap());
}

#[test]
fn show_json_exposes_view() {
    let home = tempdir().unwrap();
    let output = script_cmd(&home)
        .write_stdin("units 1 3\nshow --json\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let start = stdout.find('{').unwrap();
    let end = stdout.rfind('}').unwrap();
    let view: serde_json::Value = serde_json::from_str(&stdout[start..=end]).unwrap();
    assert_eq!(view["scale"], "five-point");
    assert_eq!(view["cgpa"], 5.0);
    assert_eq!(view["courses"].as_array().map(Vec::len), Some(1));
}

#[test]
fn help_lists_commands() {
    let home = tempdir().unwrap();
    script_cmd(&home)
        .write_stdin("help\nhelp grade\n")
        .assert()
        .success()
        .stdout(contains("Available commands"))
        .stdout(contains("grade <#|id> [A|B|C|D|E|F]"));
}

#[test]
fn version_prints_package_version() {
    let home = tempdir().unwrap();
    script_cmd(&home)
        .write_stdin("version\n")
        .assert()
        .success()
        .stdout(contains(format!("CGPA Calc {}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn config_set_persists_between_runs() {
    let home = tempdir().unwrap();
    script_cmd(&home)
        .write_stdin("config set default_scale four\nconfig set display_precision 3\n")
        .assert()
        .success()
        .stdout(contains("default_scale = four-point"));

    script_cmd(&home)
        .write_stdin("scale\nunits 1 3\n")
        .assert()
        .success()
        .stdout(contains("Active scale: 4-point (A=4, B=3, C=2, D=1, F=0)"))
        .stdout(contains("CGPA: 4.000"));

    assert!(home.path().join("config").join("config.json").exists());
}

#[test]
fn exit_stops_reading_input() {
    let home = tempdir().unwrap();
    script_cmd(&home)
        .write_stdin("exit\nunits 1 3\n")
        .assert()
        .success()
        .stdout(contains("CGPA").not());
}
