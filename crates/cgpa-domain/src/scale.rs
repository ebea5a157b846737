//! Grade symbols and the two supported grading scales.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Letter grade stored on a course entry.
///
/// A symbol is never rewritten when the active scale changes; it is only
/// reinterpreted at computation time.
pub enum GradeSymbol {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl GradeSymbol {
    pub const ALL: [GradeSymbol; 6] = [
        GradeSymbol::A,
        GradeSymbol::B,
        GradeSymbol::C,
        GradeSymbol::D,
        GradeSymbol::E,
        GradeSymbol::F,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GradeSymbol::A => "A",
            GradeSymbol::B => "B",
            GradeSymbol::C => "C",
            GradeSymbol::D => "D",
            GradeSymbol::E => "E",
            GradeSymbol::F => "F",
        }
    }
}

impl fmt::Display for GradeSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Raised when text does not name a known grade symbol.
pub struct ParseGradeError(pub String);

impl fmt::Display for ParseGradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a grade symbol", self.0)
    }
}

impl std::error::Error for ParseGradeError {}

impl FromStr for GradeSymbol {
    type Err = ParseGradeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(GradeSymbol::A),
            "B" => Ok(GradeSymbol::B),
            "C" => Ok(GradeSymbol::C),
            "D" => Ok(GradeSymbol::D),
            "E" => Ok(GradeSymbol::E),
            "F" => Ok(GradeSymbol::F),
            _ => Err(ParseGradeError(value.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
/// Selects the symbol-to-points table used by the aggregator.
pub enum GradingScale {
    /// A=5, B=4, C=3, D=2, E=1, F=0.
    #[default]
    FivePoint,
    /// A=4, B=3, C=2, D=1, F=0. Has no `E`.
    FourPoint,
}

const FIVE_POINT: &[(GradeSymbol, u8)] = &[
    (GradeSymbol::A, 5),
    (GradeSymbol::B, 4),
    (GradeSymbol::C, 3),
    (GradeSymbol::D, 2),
    (GradeSymbol::E, 1),
    (GradeSymbol::F, 0),
];

const FOUR_POINT: &[(GradeSymbol, u8)] = &[
    (GradeSymbol::A, 4),
    (GradeSymbol::B, 3),
    (GradeSymbol::C, 2),
    (GradeSymbol::D, 1),
    (GradeSymbol::F, 0),
];

impl GradingScale {
    pub const ALL: [GradingScale; 2] = [GradingScale::FivePoint, GradingScale::FourPoint];

    fn table(self) -> &'static [(GradeSymbol, u8)] {
        match self {
            GradingScale::FivePoint => FIVE_POINT,
            GradingScale::FourPoint => FOUR_POINT,
        }
    }

    /// Returns the point value for `symbol`, or `None` when the scale lacks it.
    pub fn points(self, symbol: GradeSymbol) -> Option<u8> {
        self.table()
            .iter()
            .find(|(candidate, _)| *candidate == symbol)
            .map(|(_, points)| *points)
    }

    pub fn contains(self, symbol: GradeSymbol) -> bool {
        self.points(symbol).is_some()
    }

    /// Symbols offered for entry under this scale, highest value first.
    pub fn symbols(self) -> Vec<GradeSymbol> {
        self.table().iter().map(|(symbol, _)| *symbol).collect()
    }

    /// Grade assigned to freshly added courses.
    pub fn top_grade(self) -> GradeSymbol {
        self.table()[0].0
    }

    pub fn key(self) -> &'static str {
        match self {
            GradingScale::FivePoint => "five-point",
            GradingScale::FourPoint => "four-point",
        }
    }

    /// Parses user-facing scale names (`five`, `5`, `five-point`, ...).
    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "5" | "five" | "five-point" | "fivepoint" | "5-point" | "5.0" => {
                Some(GradingScale::FivePoint)
            }
            "4" | "four" | "four-point" | "fourpoint" | "4-point" | "4.0" => {
                Some(GradingScale::FourPoint)
            }
            _ => None,
        }
    }
}

impl fmt::Display for GradingScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GradingScale::FivePoint => "5-point",
            GradingScale::FourPoint => "4-point",
        };
        f.write_str(label)
    }
}
