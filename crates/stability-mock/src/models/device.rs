//! Fixed device snapshot served by the state endpoint.

use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Snapshot of the hydraulic platform controller.
///
/// The mock has no sensor feed; every request observes the same values.
/// Status fields are strings, measurements are plain numbers.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeviceState {
    pub operation_mode: String,
    pub emergency_stop: String,
    pub oil_pump_status: String,
    pub cylinder_state: String,
    pub platform1_state: String,
    pub platform2_state: String,
    pub heater_status: String,
    pub cooling_status: String,
    pub leveling1_status: String,
    pub leveling2_status: String,
    pub cylinder_pressure: f64,
    pub lift_pressure: f64,
    pub platform1_tilt_angle: f64,
    pub platform2_tilt_angle: f64,
    pub platform1_position: f64,
    pub platform2_position: f64,
}

impl DeviceState {
    /// The static snapshot the mock answers with.
    #[must_use]
    pub fn snapshot() -> Self {
        Self {
            operation_mode: "manual".to_string(),
            emergency_stop: "normal".to_string(),
            oil_pump_status: "stopped".to_string(),
            cylinder_state: "lift-stopped".to_string(),
            platform1_state: "lift-stopped".to_string(),
            platform2_state: "lower-stopped".to_string(),
            heater_status: "stopped".to_string(),
            cooling_status: "stopped".to_string(),
            leveling1_status: "stopped".to_string(),
            leveling2_status: "stopped".to_string(),
            cylinder_pressure: 0.0,
            lift_pressure: 0.0,
            platform1_tilt_angle: 0.0,
            platform2_tilt_angle: 0.0,
            platform1_position: 0.0,
            platform2_position: 0.0,
        }
    }

    /// Flatten the snapshot into its wire field map.
    #[must_use]
    pub fn field_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            // A struct with named fields always serializes to an object.
            _ => Map::new(),
        }
    }

    /// Select the requested fields from the snapshot.
    ///
    /// Names that do not exist in the snapshot are dropped without error.
    #[must_use]
    pub fn select_fields(&self, fields: &str) -> Map<String, Value> {
        let full = self.field_map();
        let mut selected = Map::new();
        for name in fields.split(',') {
            let name = name.trim();
            if let Some(value) = full.get(name) {
                selected.insert(name.to_string(), value.clone());
            }
        }
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_has_sixteen_fields() {
        let map = DeviceState::snapshot().field_map();
        assert_eq!(map.len(), 16);
        assert!(map.contains_key("operationMode"));
        assert!(map.contains_key("platform2Position"));
    }

    #[test]
    fn test_field_names_are_camel_case() {
        let map = DeviceState::snapshot().field_map();
        assert!(map.contains_key("oilPumpStatus"));
        assert!(map.contains_key("platform1TiltAngle"));
        assert!(!map.contains_key("oil_pump_status"));
    }

    #[test]
    fn test_select_known_fields() {
        let selected = DeviceState::snapshot().select_fields("operationMode,emergencyStop");
        assert_eq!(selected.len(), 2);
        assert_eq!(selected["operationMode"], "manual");
        assert_eq!(selected["emergencyStop"], "normal");
    }

    #[test]
    fn test_select_drops_unknown_fields() {
        let selected = DeviceState::snapshot().select_fields("operationMode,bogus,alsoBogus");
        assert_eq!(selected.len(), 1);
        assert!(selected.contains_key("operationMode"));
    }

    #[test]
    fn test_select_trims_whitespace() {
        let selected = DeviceState::snapshot().select_fields(" cylinderPressure , liftPressure ");
        assert_eq!(selected.len(), 2);
    }
}
