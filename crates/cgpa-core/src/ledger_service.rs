//! Helper functions for course ledger orchestration.

use cgpa_domain::{
    CourseEntry, CourseId, CourseLedger, CourseUpdate, GradeSymbol, GradingScale,
};

use crate::CoreError;

/// Shorter all-digit references are positions, never id prefixes.
const POSITION_MAX_DIGITS: usize = 8;

/// Provides snapshot-producing mutations for [`CourseLedger`] values.
pub struct LedgerService;

impl LedgerService {
    /// Appends a blank course graded at `scale`'s top grade.
    pub fn add(ledger: &CourseLedger, scale: GradingScale) -> (CourseLedger, CourseId) {
        ledger.with_blank(scale)
    }

    /// Removes the course with `id`; unknown ids leave the ledger unchanged.
    pub fn remove(ledger: &CourseLedger, id: CourseId) -> CourseLedger {
        ledger.without(id)
    }

    /// Replaces one field of the course with `id`; unknown ids leave the
    /// ledger unchanged.
    pub fn update(ledger: &CourseLedger, id: CourseId, update: CourseUpdate) -> CourseLedger {
        ledger.with_update(id, update)
    }

    /// Returns the courses in display order.
    pub fn list(ledger: &CourseLedger) -> Vec<&CourseEntry> {
        ledger.iter().collect()
    }

    /// Resolves a user-supplied reference to a course id.
    ///
    /// Accepts a 1-based display position or a case-insensitive prefix of the
    /// course id (dashes ignored). Prefixes must be at least eight characters
    /// when they consist of digits only.
    pub fn resolve(ledger: &CourseLedger, reference: &str) -> Result<CourseId, CoreError> {
        let trimmed = reference.trim().trim_start_matches('#');
        if trimmed.is_empty() {
            return Err(CoreError::CourseNotFound(reference.to_string()));
        }

        if trimmed.len() < POSITION_MAX_DIGITS {
            if let Ok(position) = trimmed.parse::<usize>() {
                return position
                    .checked_sub(1)
                    .and_then(|index| ledger.entries().get(index))
                    .map(|entry| entry.id)
                    .ok_or_else(|| CoreError::CourseNotFound(reference.to_string()));
            }
        }

        let needle = trimmed.replace('-', "").to_ascii_lowercase();
        if needle.is_empty() || !needle.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CoreError::CourseNotFound(reference.to_string()));
        }
        let mut matches = ledger
            .iter()
            .filter(|entry| entry.id.as_uuid().simple().to_string().starts_with(&needle));
        match (matches.next(), matches.next()) {
            (Some(entry), None) => Ok(entry.id),
            (Some(_), Some(_)) => Err(CoreError::AmbiguousReference(reference.to_string())),
            (None, _) => Err(CoreError::CourseNotFound(reference.to_string())),
        }
    }

    /// Checks that `grade` may be entered under `scale`.
    pub fn ensure_grade_in_scale(grade: GradeSymbol, scale: GradingScale) -> Result<(), CoreError> {
        if scale.contains(grade) {
            Ok(())
        } else {
            Err(CoreError::GradeNotInScale { grade, scale })
        }
    }
}
