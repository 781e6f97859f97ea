use crate::adb::{AdbBridge, CommandRunner, Device};
use crate::core::parser::parse_call_log;
use crate::models::record::CallRecord;
use crate::ui::messages;

pub struct CallLogLogic;

impl CallLogLogic {
    /// Query the device and parse the dump.
    ///
    /// Query failures are not fatal at this point of the run: the captured
    /// diagnostic is printed and an empty collection is returned, so the
    /// caller falls through to the "no data" path and still exits cleanly.
    pub fn fetch<R: CommandRunner>(bridge: &AdbBridge<R>, device: &Device) -> Vec<CallRecord> {
        match bridge.query_call_log(device) {
            Ok(out) if out.success() => parse_call_log(&out.stdout),
            Ok(out) => {
                messages::error(format!("Error querying call logs: {}", out.stderr.trim()));
                Vec::new()
            }
            Err(e) => {
                messages::error(format!("Error querying call logs: {}", e));
                Vec::new()
            }
        }
    }
}
