//! Control request validation.
//!
//! Each control endpoint shares the same pipeline: required-field presence,
//! platform number range, then the endpoint's closed state enumeration.
//! Validation produces a typed command; nothing is ever executed against
//! hardware.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{ApiError, Result};

/// Support control states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SupportState {
    #[serde(rename = "rigid-support")]
    RigidSupport,
    #[serde(rename = "flexible-reset")]
    FlexibleReset,
}

impl SupportState {
    pub fn from_str(s: &str) -> Result<Self> {
        match s {
            "rigid-support" => Ok(SupportState::RigidSupport),
            "flexible-reset" => Ok(SupportState::FlexibleReset),
            _ => Err(ApiError::validation(
                "invalid state value, must be 'rigid-support' or 'flexible-reset'",
            )),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportState::RigidSupport => "rigid-support",
            SupportState::FlexibleReset => "flexible-reset",
        }
    }
}

impl std::fmt::Display for SupportState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform height control states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HeightState {
    Raise,
    Reset,
}

impl HeightState {
    pub fn from_str(s: &str) -> Result<Self> {
        match s {
            "raise" => Ok(HeightState::Raise),
            "reset" => Ok(HeightState::Reset),
            _ => Err(ApiError::validation(
                "invalid state value, must be 'raise' or 'reset'",
            )),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            HeightState::Raise => "raise",
            HeightState::Reset => "reset",
        }
    }
}

impl std::fmt::Display for HeightState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform leveling control states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum LevelState {
    #[serde(rename = "level")]
    Level,
    #[serde(rename = "level-reset")]
    LevelReset,
}

impl LevelState {
    pub fn from_str(s: &str) -> Result<Self> {
        match s {
            "level" => Ok(LevelState::Level),
            "level-reset" => Ok(LevelState::LevelReset),
            _ => Err(ApiError::validation(
                "invalid state value, must be 'level' or 'level-reset'",
            )),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            LevelState::Level => "level",
            LevelState::LevelReset => "level-reset",
        }
    }
}

impl std::fmt::Display for LevelState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the two independently controlled lift platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformNum {
    One,
    Two,
}

impl PlatformNum {
    pub fn from_i64(n: i64) -> Result<Self> {
        match n {
            1 => Ok(PlatformNum::One),
            2 => Ok(PlatformNum::Two),
            _ => Err(ApiError::validation(
                "invalid platformNum value, must be 1 or 2",
            )),
        }
    }

    #[must_use]
    pub fn as_u8(&self) -> u8 {
        match self {
            PlatformNum::One => 1,
            PlatformNum::Two => 2,
        }
    }
}

impl std::fmt::Display for PlatformNum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Wire payload of `POST /stability/support/control`.
///
/// Fields are optional at the serde layer so presence is checked by the
/// validation pipeline, which owns the error message.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupportControlRequest {
    pub task_id: Option<i64>,
    pub defect_id: Option<i64>,
    pub state: Option<String>,
}

/// Validated support command.
#[derive(Debug, Clone, Copy)]
pub struct SupportCommand {
    pub task_id: i64,
    pub defect_id: i64,
    pub state: SupportState,
}

impl SupportControlRequest {
    pub fn validate(self) -> Result<SupportCommand> {
        let (Some(task_id), Some(defect_id), Some(state)) =
            (self.task_id, self.defect_id, self.state)
        else {
            return Err(ApiError::validation(
                "incomplete request, taskId, defectId and state fields are required",
            ));
        };

        let state = SupportState::from_str(&state)?;

        Ok(SupportCommand {
            task_id,
            defect_id,
            state,
        })
    }
}

/// Wire payload shared by the two platform control endpoints.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlatformControlRequest {
    pub task_id: Option<i64>,
    pub defect_id: Option<i64>,
    pub platform_num: Option<i64>,
    pub state: Option<String>,
}

/// Validated platform height command.
#[derive(Debug, Clone, Copy)]
pub struct HeightCommand {
    pub task_id: i64,
    pub defect_id: i64,
    pub platform: PlatformNum,
    pub state: HeightState,
}

/// Validated platform leveling command.
#[derive(Debug, Clone, Copy)]
pub struct LevelCommand {
    pub task_id: i64,
    pub defect_id: i64,
    pub platform: PlatformNum,
    pub state: LevelState,
}

impl PlatformControlRequest {
    fn require_fields(self) -> Result<(i64, i64, i64, String)> {
        let (Some(task_id), Some(defect_id), Some(platform_num), Some(state)) =
            (self.task_id, self.defect_id, self.platform_num, self.state)
        else {
            return Err(ApiError::validation(
                "incomplete request, taskId, defectId, platformNum and state fields are required",
            ));
        };
        Ok((task_id, defect_id, platform_num, state))
    }

    pub fn validate_height(self) -> Result<HeightCommand> {
        let (task_id, defect_id, platform_num, state) = self.require_fields()?;
        let platform = PlatformNum::from_i64(platform_num)?;
        let state = HeightState::from_str(&state)?;

        Ok(HeightCommand {
            task_id,
            defect_id,
            platform,
            state,
        })
    }

    pub fn validate_level(self) -> Result<LevelCommand> {
        let (task_id, defect_id, platform_num, state) = self.require_fields()?;
        let platform = PlatformNum::from_i64(platform_num)?;
        let state = LevelState::from_str(&state)?;

        Ok(LevelCommand {
            task_id,
            defect_id,
            platform,
            state,
        })
    }
}

/// Fixed success acknowledgment for accepted control commands.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ControlAck {
    pub msg: &'static str,
    pub code: u16,
}

impl ControlAck {
    #[must_use]
    pub fn success() -> Self {
        Self {
            msg: "success",
            code: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_support_state_serialization() {
        let json = serde_json::to_string(&SupportState::RigidSupport).unwrap();
        assert_eq!(json, "\"rigid-support\"");

        let deserialized: SupportState = serde_json::from_str("\"flexible-reset\"").unwrap();
        assert_eq!(deserialized, SupportState::FlexibleReset);
    }

    #[test]
    fn test_level_state_serialization() {
        let json = serde_json::to_string(&LevelState::LevelReset).unwrap();
        assert_eq!(json, "\"level-reset\"");
    }

    #[test]
    fn test_state_from_str_rejects_unknown() {
        assert!(SupportState::from_str("rigid").is_err());
        assert!(HeightState::from_str("lower").is_err());
        assert!(LevelState::from_str("levelled").is_err());
    }

    #[test]
    fn test_platform_num_range() {
        assert_eq!(PlatformNum::from_i64(1).unwrap(), PlatformNum::One);
        assert_eq!(PlatformNum::from_i64(2).unwrap(), PlatformNum::Two);
        assert!(PlatformNum::from_i64(0).is_err());
        assert!(PlatformNum::from_i64(3).is_err());
    }

    #[test]
    fn test_support_validate_accepts_complete_request() {
        let req = SupportControlRequest {
            task_id: Some(125),
            defect_id: Some(91),
            state: Some("rigid-support".to_string()),
        };

        let cmd = req.validate().unwrap();
        assert_eq!(cmd.task_id, 125);
        assert_eq!(cmd.defect_id, 91);
        assert_eq!(cmd.state, SupportState::RigidSupport);
    }

    #[test]
    fn test_support_validate_rejects_missing_state() {
        let req = SupportControlRequest {
            task_id: Some(125),
            defect_id: Some(91),
            state: None,
        };

        let err = req.validate().unwrap_err();
        assert!(err.is_client_error());
        assert!(err.to_string().contains("taskId"));
    }

    #[test]
    fn test_platform_validate_checks_platform_before_state() {
        // Both platformNum and state are invalid; the platform check fires first.
        let req = PlatformControlRequest {
            task_id: Some(1),
            defect_id: Some(2),
            platform_num: Some(3),
            state: Some("bogus".to_string()),
        };

        let err = req.validate_height().unwrap_err();
        assert!(err.to_string().contains("platformNum"));
    }

    #[test]
    fn test_height_validate_accepts_platform_two() {
        let req = PlatformControlRequest {
            task_id: Some(1),
            defect_id: Some(2),
            platform_num: Some(2),
            state: Some("raise".to_string()),
        };

        let cmd = req.validate_height().unwrap();
        assert_eq!(cmd.platform, PlatformNum::Two);
        assert_eq!(cmd.state, HeightState::Raise);
    }

    #[test]
    fn test_level_validate_rejects_height_states() {
        let req = PlatformControlRequest {
            task_id: Some(1),
            defect_id: Some(2),
            platform_num: Some(1),
            state: Some("raise".to_string()),
        };

        assert!(req.validate_level().is_err());
    }

    #[test]
    fn test_control_ack_shape() {
        let json = serde_json::to_value(ControlAck::success()).unwrap();
        assert_eq!(json["msg"], "success");
        assert_eq!(json["code"], 200);
    }

    #[test]
    fn test_request_deserializes_camel_case() {
        let req: PlatformControlRequest = serde_json::from_str(
            r#"{"taskId":125,"defectId":91,"platformNum":1,"state":"raise"}"#,
        )
        .unwrap();
        assert_eq!(req.task_id, Some(125));
        assert_eq!(req.platform_num, Some(1));
    }
}
