//! Fixed deployment target and the operator-facing wording around it.

use std::path::PathBuf;

/// Name of the external CLI looked up on `PATH`.
pub const TOOL_NAME: &str = "supabase";

/// Edge function that gets deployed.
pub const FUNCTION_NAME: &str = "whatsapp-webhook";

/// Supabase project the function is deployed to.
pub const PROJECT_REF: &str = "qxralytyrytjqizuouhz";

/// Where a project-local `npm install supabase` puts its launcher.
#[cfg(windows)]
const LOCAL_INSTALL: &str = r"node_modules\.bin\supabase.cmd";
#[cfg(not(windows))]
const LOCAL_INSTALL: &str = "node_modules/.bin/supabase";

/// Everything the deployer needs to know about what it deploys.
///
/// The binary only ever uses [`DeployConfig::default`]; the fields are
/// public so tests can point the deployer somewhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployConfig {
    pub tool_name: String,
    /// Human name of the tool, used in messages.
    pub tool_display_name: String,
    /// Human name of the function, used in the opening line.
    pub target_label: String,
    pub function_name: String,
    pub project_ref: String,
    /// Fallback location, resolved against the working directory.
    pub local_install: PathBuf,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            tool_name: TOOL_NAME.to_string(),
            tool_display_name: "Supabase".to_string(),
            target_label: "WhatsApp Webhook".to_string(),
            function_name: FUNCTION_NAME.to_string(),
            project_ref: PROJECT_REF.to_string(),
            local_install: PathBuf::from(LOCAL_INSTALL),
        }
    }
}

impl DeployConfig {
    /// Lines printed when the tool cannot be found anywhere.
    #[must_use]
    pub fn install_guidance(&self) -> Vec<String> {
        vec![
            format!("Please ensure you have installed the {} CLI.", self.tool_display_name),
            format!(
                "You can install it via 'npm install -g {tool}' or 'scoop install {tool}'.",
                tool = self.tool_name
            ),
        ]
    }

    /// Hint printed after the tool exits non-zero.
    #[must_use]
    pub fn login_hint(&self) -> String {
        format!("Check if you are logged in using '{} login'.", self.tool_name)
    }
}
