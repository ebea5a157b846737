//! Course entries and the field updates that can be applied to them.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{common::Displayable, numeric::NumericInput, scale::GradeSymbol, scale::GradingScale};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
/// Opaque identity of a course entry. Used for lookup only, never ordering.
pub struct CourseId(Uuid);

impl CourseId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// First eight hex digits, enough to tell entries apart on screen.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for CourseId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CourseId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseEntry {
    pub id: CourseId,
    #[serde(default)]
    pub name: String,
    pub grade: GradeSymbol,
    #[serde(default)]
    pub units: NumericInput,
}

impl CourseEntry {
    /// Creates a blank entry graded at the scale's top grade with unset units.
    pub fn blank(scale: GradingScale) -> Self {
        Self {
            id: CourseId::new(),
            name: String::new(),
            grade: scale.top_grade(),
            units: NumericInput::Unset,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_grade(mut self, grade: GradeSymbol) -> Self {
        self.grade = grade;
        self
    }

    pub fn with_units(mut self, units: impl Into<NumericInput>) -> Self {
        self.units = units.into();
        self
    }

    /// Replaces the single field named by `update`, leaving the id untouched.
    pub fn apply(&mut self, update: CourseUpdate) {
        match update {
            CourseUpdate::Name(name) => self.name = name,
            CourseUpdate::Grade(grade) => self.grade = grade,
            CourseUpdate::Units(units) => self.units = units,
        }
    }
}

impl Displayable for CourseEntry {
    fn display_label(&self) -> String {
        let name = if self.name.trim().is_empty() {
            "(unnamed)"
        } else {
            self.name.as_str()
        };
        format!("{} [{} x {}]", name, self.grade, self.units)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Names the editable fields of a course entry.
pub enum CourseField {
    Name,
    Grade,
    Units,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// A replacement value for exactly one course field.
pub enum CourseUpdate {
    Name(String),
    Grade(GradeSymbol),
    Units(NumericInput),
}
