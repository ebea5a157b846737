//! Session state for one calculator run.
//!
//! The session owns the current ledger snapshot, prior totals and grading
//! scale. Every mutating action is followed by an explicit call to
//! [`CgpaAggregator::compute`], so the exposed result always reflects the most
//! recent change.

use serde::{Deserialize, Serialize};
use tracing::debug;

use cgpa_domain::{
    CourseId, CourseLedger, CourseUpdate, GradeSymbol, GradingScale, NumericInput, PriorTotals,
};

use crate::{
    aggregator::{Aggregate, AggregateResult, CgpaAggregator, CgpaBreakdown},
    ledger_service::LedgerService,
};

#[derive(Debug, Clone, PartialEq)]
/// User actions accepted by a [`Session`].
pub enum SessionAction {
    Add,
    Remove(CourseId),
    Update(CourseId, CourseUpdate),
    SetPriorPoints(NumericInput),
    SetPriorUnits(NumericInput),
    SetGradingScale(GradingScale),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// What an applied action did.
pub struct ActionOutcome {
    /// Id of the course created by [`SessionAction::Add`].
    pub added: Option<CourseId>,
    /// `false` when the action was a no-op (unknown id, same value).
    pub changed: bool,
}

#[derive(Debug, Clone)]
pub struct Session {
    ledger: CourseLedger,
    prior: PriorTotals,
    scale: GradingScale,
    aggregate: Aggregate,
}

impl Session {
    /// Starts a session seeded with one blank course.
    pub fn new(scale: GradingScale) -> Self {
        Self::from_parts(CourseLedger::seeded(scale), PriorTotals::default(), scale)
    }

    pub fn from_parts(ledger: CourseLedger, prior: PriorTotals, scale: GradingScale) -> Self {
        let aggregate = CgpaAggregator::compute(&ledger, scale, &prior);
        Self {
            ledger,
            prior,
            scale,
            aggregate,
        }
    }

    pub fn ledger(&self) -> &CourseLedger {
        &self.ledger
    }

    pub fn prior(&self) -> &PriorTotals {
        &self.prior
    }

    pub fn scale(&self) -> GradingScale {
        self.scale
    }

    pub fn aggregate(&self) -> &Aggregate {
        &self.aggregate
    }

    pub fn result(&self) -> AggregateResult {
        self.aggregate.result
    }

    /// Applies `action` and recomputes the aggregate.
    pub fn apply(&mut self, action: SessionAction) -> ActionOutcome {
        let outcome = match action {
            SessionAction::Add => ActionOutcome {
                added: Some(self.push_blank()),
                changed: true,
            },
            SessionAction::Remove(id) => {
                let ledger = LedgerService::remove(&self.ledger, id);
                self.replace_ledger(ledger)
            }
            SessionAction::Update(id, update) => {
                let ledger = LedgerService::update(&self.ledger, id, update);
                self.replace_ledger(ledger)
            }
            SessionAction::SetPriorPoints(points) => {
                let changed = self.prior.points != points;
                self.prior.points = points;
                ActionOutcome {
                    added: None,
                    changed,
                }
            }
            SessionAction::SetPriorUnits(units) => {
                let changed = self.prior.units != units;
                self.prior.units = units;
                ActionOutcome {
                    added: None,
                    changed,
                }
            }
            SessionAction::SetGradingScale(scale) => {
                let changed = self.scale != scale;
                self.scale = scale;
                ActionOutcome {
                    added: None,
                    changed,
                }
            }
        };
        self.finish(outcome)
    }

    /// Appends a blank course and returns its id.
    pub fn add_course(&mut self) -> CourseId {
        let id = self.push_blank();
        self.finish(ActionOutcome {
            added: Some(id),
            changed: true,
        });
        id
    }

    pub fn remove_course(&mut self, id: CourseId) -> bool {
        self.apply(SessionAction::Remove(id)).changed
    }

    pub fn update_course(&mut self, id: CourseId, update: CourseUpdate) -> bool {
        self.apply(SessionAction::Update(id, update)).changed
    }

    pub fn set_prior_points(&mut self, points: NumericInput) -> bool {
        self.apply(SessionAction::SetPriorPoints(points)).changed
    }

    pub fn set_prior_units(&mut self, units: NumericInput) -> bool {
        self.apply(SessionAction::SetPriorUnits(units)).changed
    }

    pub fn set_grading_scale(&mut self, scale: GradingScale) -> bool {
        self.apply(SessionAction::SetGradingScale(scale)).changed
    }

    /// Grade symbols that may be entered right now.
    pub fn selectable_grades(&self) -> Vec<GradeSymbol> {
        self.scale.symbols()
    }

    /// Builds the render input for presentation layers.
    pub fn view(&self) -> SessionView {
        let courses = self
            .ledger
            .iter()
            .enumerate()
            .map(|(index, entry)| CourseRow {
                position: index + 1,
                id: entry.id,
                name: entry.name.clone(),
                grade: entry.grade,
                grade_in_scale: self.scale.contains(entry.grade),
                units: entry.units,
                grade_points: CgpaAggregator::grade_points(entry, self.scale),
                quality_points: CgpaAggregator::quality_points(entry, self.scale),
            })
            .collect();

        SessionView {
            scale: self.scale,
            courses,
            prior: self.prior,
            breakdown: self.aggregate.breakdown,
            cgpa: self.aggregate.result,
        }
    }

    fn replace_ledger(&mut self, ledger: CourseLedger) -> ActionOutcome {
        let changed = !ledger.same_snapshot(&self.ledger);
        self.ledger = ledger;
        ActionOutcome {
            added: None,
            changed,
        }
    }

    fn push_blank(&mut self) -> CourseId {
        let (ledger, id) = LedgerService::add(&self.ledger, self.scale);
        self.ledger = ledger;
        id
    }

    fn finish(&mut self, outcome: ActionOutcome) -> ActionOutcome {
        self.recompute();
        debug!(
            courses = self.ledger.len(),
            changed = outcome.changed,
            cgpa = ?self.aggregate.result.value(),
            "session action applied"
        );
        outcome
    }

    fn recompute(&mut self) {
        self.aggregate = CgpaAggregator::compute(&self.ledger, self.scale, &self.prior);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GradingScale::default())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One displayed course line.
pub struct CourseRow {
    pub position: usize,
    pub id: CourseId,
    pub name: String,
    pub grade: GradeSymbol,
    pub grade_in_scale: bool,
    pub units: NumericInput,
    pub grade_points: f64,
    pub quality_points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Everything a presentation layer needs to draw the calculator.
pub struct SessionView {
    pub scale: GradingScale,
    pub courses: Vec<CourseRow>,
    pub prior: PriorTotals,
    pub breakdown: CgpaBreakdown,
    pub cgpa: AggregateResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_has_one_blank_course_and_no_result() {
        let session = Session::new(GradingScale::FivePoint);
        assert_eq!(session.ledger().len(), 1);
        assert!(session.prior().is_blank());
        assert_eq!(session.result(), AggregateResult::NoResult);
    }

    #[test]
    fn every_action_recomputes_the_result() {
        let mut session = Session::new(GradingScale::FivePoint);
        let first = session.ledger().entries()[0].id;

        session.update_course(first, CourseUpdate::Units(NumericInput::Value(3.0)));
        assert_eq!(session.result(), AggregateResult::Cgpa(5.0));

        session.update_course(first, CourseUpdate::Grade(GradeSymbol::C));
        assert_eq!(session.result(), AggregateResult::Cgpa(3.0));

        session.set_prior_points(NumericInput::Value(15.0));
        session.set_prior_units(NumericInput::Value(3.0));
        assert_eq!(session.result(), AggregateResult::Cgpa(4.0));

        session.remove_course(first);
        assert_eq!(session.result(), AggregateResult::Cgpa(5.0));
    }

    #[test]
    fn unknown_ids_report_no_change() {
        let mut session = Session::new(GradingScale::FivePoint);
        let before = session.ledger().clone();

        assert!(!session.remove_course(CourseId::new()));
        assert!(!session.update_course(CourseId::new(), CourseUpdate::Name("X".into())));
        assert!(session.ledger().same_snapshot(&before));
    }

    #[test]
    fn added_course_uses_active_scale_top_grade() {
        let mut session = Session::new(GradingScale::FourPoint);
        let id = session.add_course();
        let entry = session.ledger().get(id).expect("added course");
        assert_eq!(entry.grade, GradeSymbol::A);
        assert!(entry.units.is_unset());
        assert_eq!(session.ledger().position(id), Some(1));
    }

    #[test]
    fn switching_scale_keeps_stored_symbols() {
        let mut session = Session::new(GradingScale::FivePoint);
        let id = session.ledger().entries()[0].id;
        session.update_course(id, CourseUpdate::Grade(GradeSymbol::E));
        session.update_course(id, CourseUpdate::Units(NumericInput::Value(2.0)));
        assert_eq!(session.result(), AggregateResult::Cgpa(1.0));

        assert!(session.set_grading_scale(GradingScale::FourPoint));
        assert_eq!(session.ledger().get(id).map(|e| e.grade), Some(GradeSymbol::E));
        assert_eq!(session.result(), AggregateResult::Cgpa(0.0));
        assert!(!session.selectable_grades().contains(&GradeSymbol::E));

        let view = session.view();
        assert!(!view.courses[0].grade_in_scale);
        assert_eq!(view.courses[0].quality_points, 0.0);
    }

    #[test]
    fn setting_same_scale_is_not_a_change() {
        let mut session = Session::new(GradingScale::FivePoint);
        assert!(!session.set_grading_scale(GradingScale::FivePoint));
    }

    #[test]
    fn view_numbers_rows_from_one() {
        let mut session = Session::new(GradingScale::FivePoint);
        session.add_course();
        session.add_course();
        let positions: Vec<usize> = session.view().courses.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }
}
