#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};

pub fn cdr() -> Command {
    cargo_bin_cmd!("adbcdr")
}

/// Write an executable shell stub standing in for the adb binary.
/// The file lands in the system temp dir under a unique name so parallel
/// tests don't collide; it is overwritten on re-runs.
#[cfg(unix)]
pub fn stub_adb(name: &str, body: &str) -> String {
    use std::os::unix::fs::PermissionsExt;
    use std::{env, fs, path::PathBuf};

    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_adbcdr_stub.sh", name));
    let script = format!("#!/bin/sh\n{}\n", body);
    fs::write(&path, script).expect("write stub adb");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod stub adb");
    path.to_string_lossy().to_string()
}

/// Standard stub: fixed `adb devices` listing, fixed call-log query output
/// and exit code. The query branch covers every non-`devices` invocation.
#[cfg(unix)]
pub fn stub_bridge(name: &str, devices: &str, query_out: &str, query_code: i32) -> String {
    let body = format!(
        "if [ \"$1\" = \"devices\" ]; then\ncat <<'DEVEOF'\n{}\nDEVEOF\nexit 0\nfi\ncat <<'ROWEOF'\n{}\nROWEOF\nexit {}",
        devices, query_out, query_code
    );
    stub_adb(name, &body)
}

/// Stub whose query branch fails with `err` on stderr and a non-zero exit.
#[cfg(unix)]
pub fn stub_bridge_failing_query(name: &str, devices: &str, err: &str) -> String {
    let body = format!(
        "if [ \"$1\" = \"devices\" ]; then\ncat <<'DEVEOF'\n{}\nDEVEOF\nexit 0\nfi\necho \"{}\" >&2\nexit 1",
        devices, err
    );
    stub_adb(name, &body)
}

/// Stub whose `devices` branch fails with `err` on stderr and a non-zero exit.
#[cfg(unix)]
pub fn stub_bridge_failing_devices(name: &str, err: &str) -> String {
    let body = format!(
        "if [ \"$1\" = \"devices\" ]; then\necho \"{}\" >&2\nexit 1\nfi\nexit 0",
        err
    );
    stub_adb(name, &body)
}

/// Stub that checks the query invocation argument by argument: rows are
/// emitted only for `-s <serial> shell content query --uri <calls uri>
/// --projection <columns>` exactly; anything else fails loudly.
#[cfg(unix)]
pub fn stub_bridge_strict(name: &str, devices: &str, serial: &str, query_out: &str) -> String {
    let body = format!(
        "if [ \"$1\" = \"devices\" ]; then\ncat <<'DEVEOF'\n{}\nDEVEOF\nexit 0\nfi\n\
         if [ $# -eq 9 ] && [ \"$1\" = \"-s\" ] && [ \"$2\" = \"{}\" ] \
         && [ \"$3\" = \"shell\" ] && [ \"$4\" = \"content\" ] && [ \"$5\" = \"query\" ] \
         && [ \"$6\" = \"--uri\" ] && [ \"$7\" = \"content://call_log/calls\" ] \
         && [ \"$8\" = \"--projection\" ] \
         && [ \"$9\" = \"_id,number,date,duration,type,name\" ]; then\n\
         cat <<'ROWEOF'\n{}\nROWEOF\nexit 0\nfi\n\
         echo \"unexpected arguments: $*\" >&2\nexit 1",
        devices, serial, query_out
    );
    stub_adb(name, &body)
}
