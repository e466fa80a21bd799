//! The deploy sequence: locate, build, execute, report, wait for the operator.

use crate::command::DeployCommand;
use crate::config::DeployConfig;
use crate::error::{DeployError, DeployResult};
use crate::locate::ToolLocator;
use crate::runner::CommandRunner;
use std::io::{self, BufRead, Write};

const PROMPT_EXIT: &str = "Press Enter to exit...";
const PROMPT_CLOSE: &str = "Press Enter to close...";

/// One-shot deployer.
///
/// `input` is only read for the final acknowledgment; `output` receives the
/// whole operator transcript. The child process writes to the real console
/// on its own.
pub struct Deployer<R, I, O> {
    config: DeployConfig,
    locator: ToolLocator,
    runner: R,
    input: I,
    output: O,
}

impl<R, I, O> Deployer<R, I, O>
where
    R: CommandRunner,
    I: BufRead,
    O: Write,
{
    pub fn new(config: DeployConfig, locator: ToolLocator, runner: R, input: I, output: O) -> Self {
        Self {
            config,
            locator,
            runner,
            input,
            output,
        }
    }

    /// Run the whole sequence once. Always ends with a single acknowledgment
    /// prompt, whatever happened before it.
    ///
    /// The returned result says which way the deployment went; it has
    /// already been reported to the operator.
    pub fn run(&mut self) -> DeployResult {
        let result = self.deploy();

        if let Err(e) = self.report(&result) {
            tracing::warn!(error = %e, "failed to write deployment report");
        }

        let prompt = match &result {
            Err(DeployError::ToolNotFound { .. }) => PROMPT_EXIT,
            _ => PROMPT_CLOSE,
        };
        if let Err(e) = self.acknowledge(prompt) {
            tracing::warn!(error = %e, "failed to read acknowledgment");
        }

        result
    }

    fn deploy(&mut self) -> DeployResult {
        writeln!(self.output, "Preparing to deploy {}...", self.config.target_label)?;

        let Some(program) = self
            .locator
            .locate(&self.config.tool_name, &self.config.local_install)
        else {
            return Err(DeployError::ToolNotFound {
                tool: self.config.tool_name.clone(),
            });
        };
        tracing::debug!(path = %program.display(), "located tool");

        writeln!(
            self.output,
            "Using {} CLI: {}",
            self.config.tool_display_name,
            program.display()
        )?;

        let command = DeployCommand::new(program, &self.config);
        writeln!(self.output, "\nRunning command: {command}\n")?;
        // The child shares the console; anything still buffered would land after its output.
        self.output.flush()?;

        tracing::info!(%command, "spawning deploy command");
        let code = self.runner.run(&command)?;
        tracing::debug!(code, "deploy command finished");

        if code != 0 {
            return Err(DeployError::NonZeroExit { code });
        }
        Ok(())
    }

    fn report(&mut self, result: &DeployResult) -> io::Result<()> {
        writeln!(self.output)?;
        match result {
            Ok(()) => writeln!(self.output, "[SUCCESS] Deployment completed successfully!")?,
            Err(err @ DeployError::ToolNotFound { .. }) => {
                writeln!(self.output, "[ERROR] {err}")?;
                for line in self.config.install_guidance() {
                    writeln!(self.output, "{line}")?;
                }
            }
            Err(err @ DeployError::NonZeroExit { .. }) => {
                writeln!(self.output, "[ERROR] {err}")?;
                writeln!(self.output, "{}", self.config.login_hint())?;
            }
            Err(err @ DeployError::Unexpected(_)) => writeln!(self.output, "[ERROR] {err}")?,
        }
        self.output.flush()
    }

    /// Print `prompt` and block until a line (or end of input) arrives.
    fn acknowledge(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.output, "\n{prompt}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        self.input.read_until(b'\n', &mut line)?;
        Ok(())
    }
}
