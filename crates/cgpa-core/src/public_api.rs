//! Stable, public-facing helpers that wrap the internal service layer.
//!
//! Frontends can drive a calculator through these calls and plain strings
//! without depending on the full session surface.

use cgpa_domain::{CourseField, CourseId, CourseUpdate, GradeSymbol, GradingScale, NumericInput};

use crate::{
    format::format_cgpa, ledger_service::LedgerService, session::Session, AggregateResult,
    CoreError,
};

/// Summarized result for a session.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiCgpaSummary {
    pub scale: GradingScale,
    pub course_count: usize,
    pub total_points: f64,
    pub total_units: f64,
    pub result: AggregateResult,
    pub display: String,
}

/// Starts a calculator session seeded with one blank course.
pub fn api_new_session(scale: GradingScale) -> Session {
    Session::new(scale)
}

/// Adds a course and returns its identifier.
pub fn api_add_course(session: &mut Session) -> CourseId {
    session.add_course()
}

/// Removes the course referenced by position or id prefix.
pub fn api_remove_course(session: &mut Session, reference: &str) -> Result<CourseId, CoreError> {
    let id = LedgerService::resolve(session.ledger(), reference)?;
    session.remove_course(id);
    Ok(id)
}

/// Applies a raw text edit to one course field.
///
/// Units are coerced leniently. Grades must parse and belong to the active
/// scale.
pub fn api_update_course(
    session: &mut Session,
    reference: &str,
    field: CourseField,
    value: &str,
) -> Result<CourseId, CoreError> {
    let id = LedgerService::resolve(session.ledger(), reference)?;
    let update = match field {
        CourseField::Name => CourseUpdate::Name(value.to_string()),
        CourseField::Units => CourseUpdate::Units(NumericInput::parse_lenient(value)),
        CourseField::Grade => {
            let grade = value
                .parse::<GradeSymbol>()
                .map_err(|err| CoreError::InvalidGrade(err.to_string()))?;
            LedgerService::ensure_grade_in_scale(grade, session.scale())?;
            CourseUpdate::Grade(grade)
        }
    };
    session.update_course(id, update);
    Ok(id)
}

/// Sets both prior totals from raw text.
pub fn api_set_prior(session: &mut Session, points: &str, units: &str) {
    session.set_prior_points(NumericInput::parse_lenient(points));
    session.set_prior_units(NumericInput::parse_lenient(units));
}

/// Switches the active grading scale.
pub fn api_set_scale(session: &mut Session, scale: GradingScale) {
    session.set_grading_scale(scale);
}

/// Provides the current result with a two-decimal display string.
pub fn api_summary(session: &Session) -> ApiCgpaSummary {
    let aggregate = session.aggregate();
    ApiCgpaSummary {
        scale: session.scale(),
        course_count: session.ledger().len(),
        total_points: aggregate.breakdown.total_points,
        total_units: aggregate.breakdown.total_units,
        result: aggregate.result,
        display: format_cgpa(aggregate.result, crate::format::DEFAULT_PRECISION),
    }
}
