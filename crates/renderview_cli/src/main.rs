//! renderview CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid reference or arguments
//! - 3: Template not found or unreadable
//! - 4: Render failure (syntax error or unknown field)

use std::process::ExitCode;

use clap::Parser;
use renderview_engine::RenderError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_REFERENCE: u8 = 2;
    pub const TEMPLATE_NOT_FOUND: u8 = 3;
    pub const RENDER_FAILURE: u8 = 4;
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Rendered output owns stdout; logging goes to stderr.
    let default_level = if cli.verbose { "debug" } else { "info" };
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(
            EnvFilter::from_default_env()
                .add_directive(format!("renderview_cli={}", default_level).parse().unwrap())
                .add_directive(
                    format!("renderview_engine={}", default_level)
                        .parse()
                        .unwrap(),
                )
                .add_directive("warn".parse().unwrap()),
        )
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let result = match cli.command {
        Commands::Render(args) => commands::render::execute(args).await,
        Commands::List(args) => commands::list::execute(args).await,
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Map an error to its exit code by the concrete render failure, not by
/// message text.
fn categorize_error(e: &anyhow::Error) -> u8 {
    match e.downcast_ref::<RenderError>() {
        Some(RenderError::InvalidReference(_)) | Some(RenderError::InvalidModel(_)) => {
            ExitCodes::INVALID_REFERENCE
        }
        Some(RenderError::NotFound(_)) | Some(RenderError::AccessDenied(_)) => {
            ExitCodes::TEMPLATE_NOT_FOUND
        }
        Some(RenderError::Syntax { .. }) | Some(RenderError::UnknownField(_)) => {
            ExitCodes::RENDER_FAILURE
        }
        Some(_) | None => ExitCodes::GENERAL_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_categorize_render_errors() {
        let not_found: anyhow::Error = RenderError::NotFound(PathBuf::from("x.tpl")).into();
        assert_eq!(categorize_error(&not_found), ExitCodes::TEMPLATE_NOT_FOUND);

        let invalid: anyhow::Error = RenderError::InvalidReference("../x".to_string()).into();
        assert_eq!(categorize_error(&invalid), ExitCodes::INVALID_REFERENCE);

        let unknown: anyhow::Error = RenderError::UnknownField("missing".to_string()).into();
        assert_eq!(categorize_error(&unknown), ExitCodes::RENDER_FAILURE);

        let generic = anyhow::anyhow!("something else");
        assert_eq!(categorize_error(&generic), ExitCodes::GENERAL_ERROR);
    }

    #[test]
    fn test_categorize_survives_context_wrapping() {
        let err: anyhow::Error = RenderError::UnknownField("missing".to_string()).into();
        let wrapped = err.context("rendering views/email_template.tpl");
        assert_eq!(categorize_error(&wrapped), ExitCodes::RENDER_FAILURE);
    }
}
