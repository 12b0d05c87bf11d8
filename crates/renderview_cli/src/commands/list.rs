//! List command - enumerate template files under the root.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use tracing::info;
use walkdir::WalkDir;

#[derive(Args)]
pub struct ListArgs {
    /// Root directory containing template files
    #[arg(short, long, default_value = ".", env = "RENDERVIEW_ROOT")]
    root: PathBuf,

    /// Only list files with this extension (e.g. `tpl`)
    #[arg(short, long)]
    extension: Option<String>,
}

pub async fn execute(args: ListArgs) -> Result<()> {
    if !args.root.is_dir() {
        bail!("Root directory not found: {:?}", args.root);
    }

    info!("Listing templates under {:?}", args.root);

    for reference in collect_references(&args) {
        println!("{}", reference);
    }

    Ok(())
}

/// Walk the root and return every matching file as a sorted, `/`-separated
/// reference usable with `render`.
fn collect_references(args: &ListArgs) -> Vec<String> {
    let wanted = args
        .extension
        .as_deref()
        .map(|e| e.trim_start_matches('.').to_string());

    let mut references = Vec::new();
    for entry in WalkDir::new(&args.root)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        if let Some(wanted) = &wanted {
            let matches = path
                .extension()
                .map_or(false, |e| e.to_string_lossy() == *wanted);
            if !matches {
                continue;
            }
        }

        let relative = path.strip_prefix(&args.root).unwrap_or(path);
        references.push(relative.to_string_lossy().replace('\\', "/"));
    }

    references.sort();
    references
}
