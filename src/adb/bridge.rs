use crate::adb::runner::{CmdOutput, CommandRunner, SystemRunner};
use crate::errors::{AppError, AppResult};
use std::io;

pub const CALL_LOG_URI: &str = "content://call_log/calls";
pub const CALL_LOG_PROJECTION: &str = "_id,number,date,duration,type,name";

const DEFAULT_ADB: &str = "adb";
const READY_STATE: &str = "device";

/// One row of `adb devices` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub serial: String,
    pub state: String,
}

impl Device {
    /// A device is usable only in the literal `device` state; `unauthorized`
    /// and `offline` rows are listed but never selected.
    pub fn is_ready(&self) -> bool {
        self.state == READY_STATE
    }
}

/// Handle on the external bridge binary plus the operator's selection
/// options. Construction never touches the device; `check_device` does.
pub struct AdbBridge<R = SystemRunner> {
    runner: R,
    path: String,
    serial: Option<String>,
}

impl AdbBridge<SystemRunner> {
    pub fn new(path: Option<&str>, serial: Option<&str>) -> Self {
        Self::with_runner(SystemRunner, path, serial)
    }
}

impl<R: CommandRunner> AdbBridge<R> {
    pub fn with_runner(runner: R, path: Option<&str>, serial: Option<&str>) -> Self {
        Self {
            runner,
            path: path.unwrap_or(DEFAULT_ADB).to_string(),
            serial: serial.map(str::to_string),
        }
    }

    fn exec(&self, args: &[&str]) -> io::Result<CmdOutput> {
        self.runner.run(&self.path, args)
    }

    /// Availability check: the bridge binary must be reachable and exactly
    /// one ready device must be selectable. Runs once, before any query.
    pub fn check_device(&self) -> AppResult<Device> {
        let out = match self.exec(&["devices"]) {
            Ok(out) => out,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(AppError::AdbNotFound(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };
        if !out.success() {
            return Err(AppError::DeviceListing(out.stderr.trim().to_string()));
        }

        self.select_device(parse_devices(&out.stdout))
    }

    fn select_device(&self, devices: Vec<Device>) -> AppResult<Device> {
        if let Some(serial) = &self.serial {
            return match devices.iter().find(|d| &d.serial == serial) {
                Some(d) if d.is_ready() => Ok(d.clone()),
                Some(d) => Err(AppError::NoDevice(state_hint(std::slice::from_ref(d)))),
                None => Err(AppError::DeviceNotFound(serial.clone(), serial_list(&devices))),
            };
        }

        let ready: Vec<&Device> = devices.iter().filter(|d| d.is_ready()).collect();
        match ready.as_slice() {
            [] => Err(AppError::NoDevice(state_hint(&devices))),
            [only] => Ok((*only).clone()),
            many => Err(AppError::MultipleDevices(
                many.iter()
                    .map(|d| d.serial.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            )),
        }
    }

    /// The fixed content query against the call-log provider, addressed to
    /// the selected device. The caller inspects the captured exit status.
    pub fn query_call_log(&self, device: &Device) -> AppResult<CmdOutput> {
        let args = [
            "-s",
            device.serial.as_str(),
            "shell",
            "content",
            "query",
            "--uri",
            CALL_LOG_URI,
            "--projection",
            CALL_LOG_PROJECTION,
        ];
        self.exec(&args).map_err(|e| AppError::Query(e.to_string()))
    }
}

/// Parse `adb devices` output into serial/state pairs, skipping the banner
/// line, daemon-startup noise and blanks.
pub fn parse_devices(output: &str) -> Vec<Device> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| {
            !line.is_empty() && !line.starts_with('*') && !line.starts_with("List of devices")
        })
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            let serial = parts.next()?;
            let state = parts.next()?;
            Some(Device {
                serial: serial.to_string(),
                state: state.to_string(),
            })
        })
        .collect()
}

fn serial_list(devices: &[Device]) -> String {
    if devices.is_empty() {
        "none".to_string()
    } else {
        devices
            .iter()
            .map(|d| d.serial.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// `" (serial: state, ...)"` suffix for the no-device diagnostic, so an
/// unauthorized or offline device is named instead of silently invisible.
fn state_hint(devices: &[Device]) -> String {
    if devices.is_empty() {
        String::new()
    } else {
        let states = devices
            .iter()
            .map(|d| format!("{}: {}", d.serial, d.state))
            .collect::<Vec<_>>()
            .join(", ");
        format!(" ({})", states)
    }
}
