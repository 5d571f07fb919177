use anyhow::{Context, Result};
use ocdev::scaffold::Scaffold;
use std::fs;
use std::path::PathBuf;

pub fn execute(base: PathBuf) -> Result<()> {
    // create() only makes the folders beneath the base
    fs::create_dir_all(&base)
        .with_context(|| format!("Failed to create base directory: {}", base.display()))?;
    Scaffold::new(&base).create()?;

    println!("✓ Project structure created: {}", base.display());
    Ok(())
}
