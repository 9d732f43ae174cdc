//! Scalar and vector physical quantities (`Quantity`, `Vec3Quantity`).

use serde::{Deserialize, Serialize};

/// A scalar physical quantity: a value, its unit, and an optional one-sigma
/// uncertainty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sigma: Option<f64>,
}

/// A three-component numeric vector quantity: a value, its unit, and an
/// optional one-sigma uncertainty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vec3Quantity {
    pub value: [f64; 3],
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sigma: Option<f64>,
}

impl Quantity {
    #[must_use]
    pub fn unit_is_present(&self) -> bool {
        !self.unit.is_empty()
    }
}

impl Vec3Quantity {
    #[must_use]
    pub fn unit_is_present(&self) -> bool {
        !self.unit.is_empty()
    }
}
