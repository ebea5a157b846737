use serde::{Deserialize, Serialize};

use crate::numeric::NumericInput;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
/// Quality points and units accumulated before the current term.
pub struct PriorTotals {
    #[serde(default)]
    pub points: NumericInput,
    #[serde(default)]
    pub units: NumericInput,
}

impl PriorTotals {
    pub fn new(points: impl Into<NumericInput>, units: impl Into<NumericInput>) -> Self {
        Self {
            points: points.into(),
            units: units.into(),
        }
    }

    pub fn resolved_points(&self) -> f64 {
        self.points.resolve()
    }

    pub fn resolved_units(&self) -> f64 {
        self.units.resolve()
    }

    pub fn is_blank(&self) -> bool {
        self.points.is_unset() && self.units.is_unset()
    }
}
