//! Finding the tool executable: `PATH` first, then the project-local install.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Looks for executables in an explicit search path and working directory.
///
/// Holding both values instead of reading the process environment on every
/// lookup keeps tests free of `set_var`/`set_current_dir`.
#[derive(Debug, Clone)]
pub struct ToolLocator {
    search_path: Option<OsString>,
    cwd: PathBuf,
}

impl ToolLocator {
    #[must_use]
    pub fn new(search_path: Option<OsString>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            search_path,
            cwd: cwd.into(),
        }
    }

    /// Snapshot of this process's `PATH` and working directory.
    #[must_use]
    pub fn from_env() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::new(std::env::var_os("PATH"), cwd)
    }

    /// Resolve `name` on the search path, falling back to `local_install`
    /// (relative to the working directory) when the search comes up empty.
    ///
    /// The fallback only has to exist. Whether it can actually be executed
    /// is left for the spawn to find out.
    #[must_use]
    pub fn locate(&self, name: &str, local_install: &Path) -> Option<PathBuf> {
        self.on_search_path(name)
            .or_else(|| self.local_fallback(local_install))
    }

    fn on_search_path(&self, name: &str) -> Option<PathBuf> {
        let paths = self.search_path.as_ref()?;
        which::which_in(name, Some(paths), &self.cwd).ok()
    }

    fn local_fallback(&self, local_install: &Path) -> Option<PathBuf> {
        let candidate = self.cwd.join(local_install);
        candidate.exists().then_some(candidate)
    }
}
