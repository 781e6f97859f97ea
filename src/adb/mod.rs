// ADB module - talks to an attached Android device through the external
// `adb` binary. All subprocess execution goes through the CommandRunner
// seam so the rest of the crate never spawns processes directly.

pub mod bridge;
pub mod runner;

pub use bridge::{AdbBridge, Device, parse_devices};
pub use runner::{CmdOutput, CommandRunner, SystemRunner};
