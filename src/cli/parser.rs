use clap::Parser;

/// Command-line interface definition for adbcdr.
/// There are no subcommands: a bare invocation checks the bridge, queries
/// the connected device's call log and prints it as a table.
#[derive(Parser)]
#[command(
    name = "adbcdr",
    version = env!("CARGO_PKG_VERSION"),
    about = "Dump the call log of a USB-connected Android device as a table",
    long_about = None
)]
pub struct Cli {
    /// Override the adb executable path (useful for tests or custom SDK installs)
    #[arg(long = "adb", value_name = "PATH")]
    pub adb: Option<String>,

    /// Select a device by serial when more than one is attached
    #[arg(long = "serial", short = 's', value_name = "SERIAL")]
    pub serial: Option<String>,
}
