//! Render command - render one template against a model.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info};

use renderview_engine::{MissingFieldPolicy, Model, TemplateLocator, TemplateRenderer};

#[derive(Args)]
pub struct RenderArgs {
    /// Template reference, relative to the root directory
    reference: String,

    /// Root directory containing template files
    #[arg(short, long, default_value = ".", env = "RENDERVIEW_ROOT")]
    root: PathBuf,

    /// Inline model as a JSON object
    #[arg(short, long, conflicts_with = "model_file")]
    model: Option<String>,

    /// Read the model from a JSON or YAML file
    #[arg(long)]
    model_file: Option<PathBuf>,

    /// Substitute the empty string for missing fields instead of failing
    #[arg(long)]
    lenient: bool,
}

pub async fn execute(args: RenderArgs) -> Result<()> {
    info!("Rendering template: {}", args.reference);

    let model = load_model(&args)?;
    if model.is_empty() {
        debug!("No model supplied, rendering with an empty model");
    }

    let locator = TemplateLocator::new(&args.root);
    let template = locator.locate(&args.reference)?;
    debug!("Loaded {} bytes of template text", template.len());

    let policy = if args.lenient {
        MissingFieldPolicy::Lenient
    } else {
        MissingFieldPolicy::Strict
    };
    let output = TemplateRenderer::with_policy(policy).render(&template, &model)?;

    print!("{}", output);
    Ok(())
}

/// Build the model from the inline JSON flag, a model file, or default to
/// empty. File format is chosen by extension; anything that is not
/// `.yaml`/`.yml` is parsed as JSON.
fn load_model(args: &RenderArgs) -> Result<Model> {
    if let Some(inline) = &args.model {
        return Model::from_json_str(inline).context("parsing inline model");
    }

    if let Some(path) = &args.model_file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading model file {:?}", path))?;
        let is_yaml = path
            .extension()
            .map_or(false, |e| e == "yaml" || e == "yml");
        let model = if is_yaml {
            Model::from_yaml_str(&content)
        } else {
            Model::from_json_str(&content)
        }
        .with_context(|| format!("parsing model file {:?}", path))?;
        return Ok(model);
    }

    Ok(Model::new())
}
