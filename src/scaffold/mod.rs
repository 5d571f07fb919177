//! Backend service skeleton for OpenCanvas.
//!
//! Creates the folder layout a new backend service starts from and drops a
//! one-line placeholder into each expected file that does not exist yet.
//! Safe to run repeatedly: existing files are never rewritten.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Folder layout of a backend service: folder name to the files it starts with.
pub const STRUCTURE: &[(&str, &[&str])] = &[
    ("config", &["database.js", "cloudStorage.js"]),
    ("models", &["User.js", "Post.js", "Comment.js"]),
    (
        "middlewares",
        &["auth.js", "validation.js", "rateLimit.js", "imageProcessing.js"],
    ),
    ("routes", &["auth.js", "posts.js", "users.js", "comments.js"]),
    (
        "controllers",
        &["authController.js", "postController.js", "userController.js"],
    ),
    (
        "services",
        &["imageService.js", "cacheService.js", "notificationService.js"],
    ),
    ("utils", &["responses.js", "validators.js"]),
];

pub struct Scaffold {
    base: PathBuf,
}

impl Scaffold {
    pub fn new(base: impl AsRef<Path>) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
        }
    }

    /// Create the folder tree and placeholder files beneath the base path.
    ///
    /// Folders are created with any missing parents; a folder that already
    /// exists is left alone. A file is only written when nothing exists at
    /// its path, so contents of pre-existing files survive a re-run.
    pub fn create(&self) -> Result<()> {
        for (folder, files) in STRUCTURE {
            let folder_path = self.base.join(folder);
            fs::create_dir_all(&folder_path).with_context(|| {
                format!("Failed to create directory: {}", folder_path.display())
            })?;

            for file in *files {
                let file_path = folder_path.join(file);
                if file_path.exists() {
                    continue;
                }
                fs::write(&file_path, placeholder(file)).with_context(|| {
                    format!("Failed to create placeholder: {}", file_path.display())
                })?;
            }
        }

        Ok(())
    }
}

/// Stub line written into a newly created file, named after the file up to
/// its first dot.
fn placeholder(file_name: &str) -> String {
    let stem = file_name
        .split_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(file_name);
    format!("// {stem} module\n")
}
