//! The one command this program ever runs.

use crate::config::DeployConfig;
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

/// A resolved tool path plus the fixed `functions deploy` arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl DeployCommand {
    /// `<program> functions deploy <function> --project-ref <ref>`
    #[must_use]
    pub fn new(program: PathBuf, config: &DeployConfig) -> Self {
        let args = vec![
            "functions".to_string(),
            "deploy".to_string(),
            config.function_name.clone(),
            "--project-ref".to_string(),
            config.project_ref.clone(),
        ];
        Self { program, args }
    }

    /// Full argument vector, program first.
    #[must_use]
    pub fn argv(&self) -> Vec<OsString> {
        std::iter::once(self.program.clone().into_os_string())
            .chain(self.args.iter().map(OsString::from))
            .collect()
    }
}

impl fmt::Display for DeployCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
