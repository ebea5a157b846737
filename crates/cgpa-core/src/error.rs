use cgpa_domain::{GradeSymbol, GradingScale};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Course not found: {0}")]
    CourseNotFound(String),
    #[error("Course reference `{0}` matches more than one course")]
    AmbiguousReference(String),
    #[error("Invalid grade: {0}")]
    InvalidGrade(String),
    #[error("Grade {grade} is not part of the {scale} scale")]
    GradeNotInScale {
        grade: GradeSymbol,
        scale: GradingScale,
    },
}
