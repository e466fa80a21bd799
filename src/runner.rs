//! Spawning the tool as a child process.

use crate::command::DeployCommand;
use std::io;
use std::process::{Command, ExitStatus, Stdio};

/// Runs a [`DeployCommand`] to completion and reports its exit code.
///
/// An `Err` means the process could not be spawned or waited on; a process
/// that ran and failed is an `Ok` with a non-zero code.
pub trait CommandRunner {
    fn run(&mut self, command: &DeployCommand) -> io::Result<i32>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &mut R {
    fn run(&mut self, command: &DeployCommand) -> io::Result<i32> {
        (**self).run(command)
    }
}

/// Runs the command for real, with the console handed straight to the child.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, command: &DeployCommand) -> io::Result<i32> {
        let status = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        Ok(exit_code(status))
    }
}

/// Exit code of a finished child. A child killed by a signal reports the
/// negated signal number.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }

    -1
}
