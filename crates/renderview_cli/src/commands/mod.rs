//! CLI command definitions.
//!
//! Each subcommand maps to one operation: `render` performs the single
//! locate-and-render unit of work, `list` enumerates what the root offers.

use clap::{Parser, Subcommand};

pub mod list;
pub mod render;

/// renderview - render a named template with a model to a string
#[derive(Parser)]
#[command(name = "renderview")]
#[command(version, about = "Render a named template with a model to a string")]
#[command(long_about = r#"
renderview resolves a template reference under a root directory, substitutes
a model (named fields) into {{field}} placeholders, and writes the result to
standard output.

COMMANDS:
  render → Locate a template, render it against a model, print the result
  list   → List template files under the root directory

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid reference or arguments
  3 - Template not found or unreadable
  4 - Render failure (syntax error or unknown field)
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a template against a model and print the result
    Render(render::RenderArgs),

    /// List template files under the root directory
    List(list::ListArgs),
}
