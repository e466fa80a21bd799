//! # deploy-webhook
//!
//! Runs `supabase functions deploy whatsapp-webhook --project-ref <ref>` and
//! reports the outcome. Meant to be double-clicked, so it always waits for
//! Enter before closing.

/// Entry point for the CLI tool.
fn main() {
    deploy_webhook::cli::run_cli();
}
