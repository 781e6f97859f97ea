use std::io;
use std::process::Command;

/// Captured result of one external command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdOutput {
    pub stdout: String,
    pub stderr: String,
    pub code: Option<i32>,
}

impl CmdOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Synchronous external-command execution.
///
/// The bridge only talks to the outside world through this trait, so tests
/// can substitute canned outputs without spawning real processes.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<CmdOutput>;
}

/// Runs commands with `std::process::Command`, blocking until the child
/// exits. No timeout is imposed. Output is decoded as lossy UTF-8.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<CmdOutput> {
        let output = Command::new(program).args(args).output()?;
        Ok(CmdOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code: output.status.code(),
        })
    }
}
