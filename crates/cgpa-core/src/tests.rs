use crate::{
    format::format_cgpa,
    public_api::{
        api_add_course, api_new_session, api_remove_course, api_set_prior, api_set_scale,
        api_summary, api_update_course,
    },
    AggregateResult, CgpaAggregator, CoreError, LedgerService, Session,
};
use cgpa_domain::{
    CourseEntry, CourseField, CourseLedger, CourseUpdate, GradeSymbol, GradingScale, NumericInput,
    PriorTotals,
};

fn course(grade: GradeSymbol, units: f64) -> CourseEntry {
    CourseEntry::blank(GradingScale::FivePoint)
        .with_grade(grade)
        .with_units(units)
}

#[test]
fn example_single_course_five_point() {
    let ledger = CourseLedger::from_entries(vec![course(GradeSymbol::A, 3.0)]);
    let aggregate =
        CgpaAggregator::compute(&ledger, GradingScale::FivePoint, &PriorTotals::default());
    assert_eq!(format_cgpa(aggregate.result, 2), "5.00");
}

#[test]
fn example_two_courses_four_point_with_prior() {
    let ledger = CourseLedger::from_entries(vec![
        course(GradeSymbol::A, 3.0),
        course(GradeSymbol::B, 2.0),
    ]);
    let prior = PriorTotals::new(20.0, 10.0);
    let aggregate = CgpaAggregator::compute(&ledger, GradingScale::FourPoint, &prior);
    assert_eq!(format_cgpa(aggregate.result, 2), "2.53");
}

#[test]
fn example_all_removed_is_no_result_shown_as_zero() {
    let mut session = Session::new(GradingScale::FivePoint);
    let only = session.ledger().entries()[0].id;
    session.remove_course(only);

    assert!(session.ledger().is_empty());
    assert_eq!(session.result(), AggregateResult::NoResult);
    assert_eq!(format_cgpa(session.result(), 2), "0.00");
}

#[test]
fn example_e_grade_under_four_point_counts_zero() {
    let ledger = CourseLedger::from_entries(vec![course(GradeSymbol::E, 3.0)]);
    let aggregate =
        CgpaAggregator::compute(&ledger, GradingScale::FourPoint, &PriorTotals::default());
    assert_eq!(aggregate.breakdown.current_points, 0.0);
    assert_eq!(aggregate.result, AggregateResult::Cgpa(0.0));
}

#[test]
fn scale_switch_changes_result_only_when_values_differ() {
    let only_f = CourseLedger::from_entries(vec![course(GradeSymbol::F, 4.0)]);
    let prior = PriorTotals::default();
    let five = CgpaAggregator::compute(&only_f, GradingScale::FivePoint, &prior);
    let four = CgpaAggregator::compute(&only_f, GradingScale::FourPoint, &prior);
    assert_eq!(five.result, four.result);

    let with_b = CourseLedger::from_entries(vec![course(GradeSymbol::B, 4.0)]);
    let five = CgpaAggregator::compute(&with_b, GradingScale::FivePoint, &prior);
    let four = CgpaAggregator::compute(&with_b, GradingScale::FourPoint, &prior);
    assert_ne!(five.result, four.result);
}

#[test]
fn ledger_service_round_trips_add_and_remove() {
    let ledger = CourseLedger::seeded(GradingScale::FivePoint);
    let (grown, id) = LedgerService::add(&ledger, GradingScale::FivePoint);
    assert_eq!(LedgerService::list(&grown).len(), 2);

    let shrunk = LedgerService::remove(&grown, id);
    assert_eq!(shrunk, ledger);
}

#[test]
fn ledger_service_update_keeps_other_entries() {
    let ledger = CourseLedger::from_entries(vec![
        course(GradeSymbol::A, 3.0).with_name("One"),
        course(GradeSymbol::B, 2.0).with_name("Two"),
    ]);
    let target = ledger.entries()[0].id;
    let updated = LedgerService::update(&ledger, target, CourseUpdate::Name("Uno".into()));

    assert_eq!(updated.entries()[0].name, "Uno");
    assert_eq!(updated.entries()[0].grade, GradeSymbol::A);
    assert_eq!(updated.entries()[1], ledger.entries()[1]);
}

#[test]
fn public_api_drives_a_full_session() {
    let mut session = api_new_session(GradingScale::FourPoint);
    api_update_course(&mut session, "1", CourseField::Units, "3").expect("units");
    api_update_course(&mut session, "1", CourseField::Name, "MTH 101").expect("name");

    let second = api_add_course(&mut session);
    api_update_course(&mut session, "2", CourseField::Grade, "b").expect("grade");
    api_update_course(&mut session, "2", CourseField::Units, "2").expect("units");
    api_set_prior(&mut session, "20", "10");

    let summary = api_summary(&session);
    assert_eq!(summary.course_count, 2);
    assert_eq!(summary.total_points, 38.0);
    assert_eq!(summary.total_units, 15.0);
    assert_eq!(summary.display, "2.53");

    let removed = api_remove_course(&mut session, "2").expect("remove");
    assert_eq!(removed, second);
    assert_eq!(api_summary(&session).course_count, 1);
}

#[test]
fn public_api_rejects_grades_outside_active_scale() {
    let mut session = api_new_session(GradingScale::FourPoint);
    let before = session.ledger().clone();

    let err = api_update_course(&mut session, "1", CourseField::Grade, "E").unwrap_err();
    assert_eq!(
        err,
        CoreError::GradeNotInScale {
            grade: GradeSymbol::E,
            scale: GradingScale::FourPoint,
        }
    );
    let err = api_update_course(&mut session, "1", CourseField::Grade, "Z").unwrap_err();
    assert!(matches!(err, CoreError::InvalidGrade(_)));
    assert!(session.ledger().same_snapshot(&before));
}

#[test]
fn public_api_coerces_garbage_units_to_unset() {
    let mut session = api_new_session(GradingScale::FivePoint);
    api_update_course(&mut session, "1", CourseField::Units, "abc").expect("lenient units");
    assert_eq!(session.ledger().entries()[0].units, NumericInput::Unset);
    assert_eq!(api_summary(&session).result, AggregateResult::NoResult);
}

#[test]
fn public_api_scale_switch_keeps_symbols() {
    let mut session = api_new_session(GradingScale::FivePoint);
    api_update_course(&mut session, "1", CourseField::Grade, "E").expect("grade");
    api_update_course(&mut session, "1", CourseField::Units, "2").expect("units");
    api_set_scale(&mut session, GradingScale::FourPoint);

    assert_eq!(session.ledger().entries()[0].grade, GradeSymbol::E);
    assert_eq!(api_summary(&session).display, "0.00");
    assert_eq!(api_summary(&session).result, AggregateResult::Cgpa(0.0));
}
