//! The world document (`World`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::body::Body;
use super::dynamic::Dynamic;
use super::frame::Frame;
use crate::error::ModelError;

/// Default step size in seconds, used when `config.dtSeconds` is absent.
pub const DEFAULT_DT_SECONDS: f64 = 60.0;

/// A declarative bundle of frames, bodies, and dynamics that, together
/// with resolved cards, fully determines a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub id: String,
    pub version: String,
    #[serde(rename = "type", default = "default_world_type")]
    pub type_tag: String,
    pub frames: Vec<Frame>,
    pub entities: Vec<Body>,
    pub dynamics: Vec<Dynamic>,
    /// Reserved for future use; unused by the default driver.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solvers: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<BTreeMap<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<serde_json::Value>,
}

fn default_world_type() -> String {
    "rg:World".to_string()
}

impl World {
    /// Parse and validate a world document. The root `type` must match
    /// `rg:World` or the legacy `gw:World`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Deserialize`] if `value` doesn't match the
    /// world schema, or [`ModelError::UnrecognizedType`] if its `type`
    /// field names neither recognized root type.
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self, ModelError> {
        let world: Self = serde_json::from_value(value.clone()).map_err(|e| ModelError::Deserialize { detail: e.to_string() })?;
        if !world.has_recognized_type() {
            return Err(ModelError::UnrecognizedType {
                expected: "rg:World",
                found: world.type_tag.clone(),
            });
        }
        Ok(world)
    }

    /// Whether `type_tag` is one of the recognized root types: `rg:World`
    /// or the legacy `gw:World`.
    #[must_use]
    pub fn has_recognized_type(&self) -> bool {
        matches!(self.type_tag.as_str(), "rg:World" | "gw:World")
    }

    /// `config.dtSeconds`, defaulting to [`DEFAULT_DT_SECONDS`].
    #[must_use]
    pub fn dt_seconds(&self) -> f64 {
        self.config
            .as_ref()
            .and_then(|c| c.get("dtSeconds"))
            .and_then(serde_json::Value::as_f64)
            .unwrap_or(DEFAULT_DT_SECONDS)
    }

    /// `config.steps`. Required to be present and `> 0` by the driver;
    /// this accessor returns `0` when absent or non-numeric, leaving the
    /// `> 0` check to the caller.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.config
            .as_ref()
            .and_then(|c| c.get("steps"))
            .and_then(serde_json::Value::as_u64)
            .unwrap_or(0)
    }

    /// Index bodies by id in declaration order.
    #[must_use]
    pub fn body_index(&self) -> BTreeMap<String, usize> {
        self.entities
            .iter()
            .enumerate()
            .map(|(i, b)| (b.id.clone(), i))
            .collect()
    }
}
