use anyhow::Result;
use ocdev::stories;
use std::path::PathBuf;

/// Output shape for the generated dataset file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// `export const stories = [...];`, importable by the client
    Module,
    /// Bare pretty-printed JSON array
    Json,
}

pub fn execute(output: PathBuf, format: ExportFormat) -> Result<()> {
    let stories = stories::expand();
    let contents = match format {
        ExportFormat::Module => stories::render_module(&stories)?,
        ExportFormat::Json => stories::render_json(&stories)?,
    };
    stories::write_dataset(&output, &contents)?;

    println!("✓ Wrote {} stories to {}", stories.len(), output.display());
    Ok(())
}
