pub mod callback;
pub mod control;
pub mod device;
pub mod report;

pub use callback::{CallbackEcho, CallbackReply, PlatformCallback, SupportCallback};
pub use control::{
    ControlAck, HeightCommand, HeightState, LevelCommand, LevelState, PlatformControlRequest,
    PlatformNum, SupportCommand, SupportControlRequest, SupportState,
};
pub use device::DeviceState;
pub use report::{ErrorReport, ReportAck};
