//! Reference frame (`Frame`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A reference frame. Only `kind == "inertial"` is recognized by the
/// current driver; other kinds parse but are not special-cased.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub id: String,
    #[serde(default = "default_frame_kind")]
    pub kind: String,
    /// Opaque metric identifier, never interpreted by the kernel.
    #[serde(default)]
    pub metric: String,
    /// Axis unit strings. Must contain nonempty `length`, `time`, `mass`
    /// entries to pass validation.
    pub units: BTreeMap<String, String>,
}

fn default_frame_kind() -> String {
    "inertial".to_string()
}

impl Frame {
    /// Whether `units` carries nonempty strings at `length`, `time`, `mass`.
    #[must_use]
    pub fn has_required_units(&self) -> bool {
        ["length", "time", "mass"]
            .iter()
            .all(|key| self.units.get(*key).is_some_and(|v| !v.is_empty()))
    }
}
