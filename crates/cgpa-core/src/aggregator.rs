//! Weighted-average reduction of a course ledger into a CGPA.

use serde::{Deserialize, Serialize};

use cgpa_domain::{CourseEntry, CourseLedger, GradingScale, PriorTotals};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
/// Outcome of an aggregation.
///
/// `NoResult` means there were no units to divide by. It is a normal outcome
/// and is kept apart from a genuine `Cgpa(0.0)`.
pub enum AggregateResult {
    Cgpa(f64),
    NoResult,
}

impl AggregateResult {
    pub fn value(self) -> Option<f64> {
        match self {
            AggregateResult::Cgpa(value) => Some(value),
            AggregateResult::NoResult => None,
        }
    }

    pub fn is_no_result(self) -> bool {
        matches!(self, AggregateResult::NoResult)
    }
}

impl From<Option<f64>> for AggregateResult {
    fn from(value: Option<f64>) -> Self {
        value.map_or(AggregateResult::NoResult, AggregateResult::Cgpa)
    }
}

impl From<AggregateResult> for Option<f64> {
    fn from(value: AggregateResult) -> Self {
        value.value()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
/// Intermediate sums behind an [`AggregateResult`].
pub struct CgpaBreakdown {
    pub current_points: f64,
    pub current_units: f64,
    pub prior_points: f64,
    pub prior_units: f64,
    pub total_points: f64,
    pub total_units: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    pub breakdown: CgpaBreakdown,
    pub result: AggregateResult,
}

/// Pure CGPA computation over a ledger snapshot.
pub struct CgpaAggregator;

impl CgpaAggregator {
    /// Computes the cumulative average for `ledger` under `scale`, folding in
    /// `prior` totals.
    ///
    /// Unset units count as zero and grades missing from `scale` are worth
    /// zero points. Units are not bounds-checked: negative or fractional
    /// values flow through the sums as entered.
    pub fn compute(ledger: &CourseLedger, scale: GradingScale, prior: &PriorTotals) -> Aggregate {
        let (current_points, current_units) =
            ledger
                .iter()
                .fold((0.0_f64, 0.0_f64), |(points, units), entry| {
                    (
                        points + Self::quality_points(entry, scale),
                        units + entry.units.resolve(),
                    )
                });

        let prior_points = prior.resolved_points();
        let prior_units = prior.resolved_units();
        let total_points = prior_points + current_points;
        let total_units = prior_units + current_units;

        let result = if total_units == 0.0 {
            AggregateResult::NoResult
        } else {
            AggregateResult::Cgpa(total_points / total_units)
        };

        Aggregate {
            breakdown: CgpaBreakdown {
                current_points,
                current_units,
                prior_points,
                prior_units,
                total_points,
                total_units,
            },
            result,
        }
    }

    /// Point value of the entry's grade under `scale`; zero when absent.
    pub fn grade_points(entry: &CourseEntry, scale: GradingScale) -> f64 {
        scale.points(entry.grade).map(f64::from).unwrap_or(0.0)
    }

    /// Grade points weighted by the entry's units.
    pub fn quality_points(entry: &CourseEntry, scale: GradingScale) -> f64 {
        Self::grade_points(entry, scale) * entry.units.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgpa_domain::{GradeSymbol, NumericInput};

    fn entry(grade: GradeSymbol, units: f64) -> CourseEntry {
        CourseEntry::blank(GradingScale::FivePoint)
            .with_grade(grade)
            .with_units(units)
    }

    #[test]
    fn single_a_on_five_point_scale_is_five() {
        let ledger = CourseLedger::from_entries(vec![entry(GradeSymbol::A, 3.0)]);
        let aggregate =
            CgpaAggregator::compute(&ledger, GradingScale::FivePoint, &PriorTotals::default());

        assert_eq!(aggregate.breakdown.current_points, 15.0);
        assert_eq!(aggregate.breakdown.current_units, 3.0);
        assert_eq!(aggregate.result, AggregateResult::Cgpa(5.0));
    }

    #[test]
    fn prior_totals_are_folded_in() {
        let ledger = CourseLedger::from_entries(vec![
            entry(GradeSymbol::A, 3.0),
            entry(GradeSymbol::B, 2.0),
        ]);
        let prior = PriorTotals::new(20.0, 10.0);
        let aggregate = CgpaAggregator::compute(&ledger, GradingScale::FourPoint, &prior);

        assert_eq!(aggregate.breakdown.current_points, 18.0);
        assert_eq!(aggregate.breakdown.current_units, 5.0);
        assert_eq!(aggregate.breakdown.total_points, 38.0);
        assert_eq!(aggregate.breakdown.total_units, 15.0);
        let value = aggregate.result.value().expect("numeric result");
        assert!((value - 38.0 / 15.0).abs() < 1e-12);
    }

    #[test]
    fn empty_ledger_without_prior_units_has_no_result() {
        let aggregate = CgpaAggregator::compute(
            &CourseLedger::new(),
            GradingScale::FivePoint,
            &PriorTotals::default(),
        );
        assert_eq!(aggregate.result, AggregateResult::NoResult);
        assert_ne!(aggregate.result, AggregateResult::Cgpa(0.0));
    }

    #[test]
    fn all_f_grades_produce_a_real_zero() {
        let ledger = CourseLedger::from_entries(vec![entry(GradeSymbol::F, 3.0)]);
        let aggregate =
            CgpaAggregator::compute(&ledger, GradingScale::FivePoint, &PriorTotals::default());
        assert_eq!(aggregate.result, AggregateResult::Cgpa(0.0));
    }

    #[test]
    fn grade_missing_from_scale_counts_zero_points() {
        let ledger = CourseLedger::from_entries(vec![
            entry(GradeSymbol::E, 2.0),
            entry(GradeSymbol::A, 2.0),
        ]);
        let aggregate =
            CgpaAggregator::compute(&ledger, GradingScale::FourPoint, &PriorTotals::default());

        assert_eq!(aggregate.breakdown.current_points, 8.0);
        assert_eq!(aggregate.breakdown.current_units, 4.0);
        assert_eq!(aggregate.result, AggregateResult::Cgpa(2.0));
    }

    #[test]
    fn unset_units_contribute_nothing() {
        let ledger = CourseLedger::from_entries(vec![
            CourseEntry::blank(GradingScale::FivePoint),
            entry(GradeSymbol::C, 4.0),
        ]);
        let aggregate =
            CgpaAggregator::compute(&ledger, GradingScale::FivePoint, &PriorTotals::default());
        assert_eq!(aggregate.breakdown.current_units, 4.0);
        assert_eq!(aggregate.result, AggregateResult::Cgpa(3.0));
    }

    #[test]
    fn negative_units_are_not_rejected() {
        let ledger = CourseLedger::from_entries(vec![
            entry(GradeSymbol::A, 3.0),
            entry(GradeSymbol::C, -1.0),
        ]);
        let aggregate =
            CgpaAggregator::compute(&ledger, GradingScale::FivePoint, &PriorTotals::default());
        assert_eq!(aggregate.breakdown.current_points, 12.0);
        assert_eq!(aggregate.breakdown.current_units, 2.0);
        assert_eq!(aggregate.result, AggregateResult::Cgpa(6.0));
    }

    #[test]
    fn units_cancelling_to_zero_yield_no_result() {
        let ledger = CourseLedger::from_entries(vec![entry(GradeSymbol::A, 3.0)]);
        let prior = PriorTotals {
            points: NumericInput::Unset,
            units: NumericInput::Value(-3.0),
        };
        let aggregate = CgpaAggregator::compute(&ledger, GradingScale::FivePoint, &prior);
        assert!(aggregate.result.is_no_result());
    }

    #[test]
    fn prior_only_session_uses_prior_average() {
        let prior = PriorTotals::new(150.0, 30.0);
        let aggregate = CgpaAggregator::compute(&CourseLedger::new(), GradingScale::FivePoint, &prior);
        assert_eq!(aggregate.result, AggregateResult::Cgpa(5.0));
    }
}
