//! Sample story dataset for the OpenCanvas feed.
//!
//! Expands the 16 seed templates into 160 records by copy-and-renumber and
//! renders them either as the ES module the client imports
//! (`export const stories = [...];`) or as a bare JSON array.

mod templates;

pub use templates::{StoryTemplate, TEMPLATES};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;

/// Number of copy-and-renumber passes over the seed templates.
pub const ITERATIONS: u32 = 10;

/// Indent for the pretty-printed array; must match the client's checked-in
/// Stories.js for regeneration to be diff-free.
const INDENT: &[u8] = b"    ";

/// Binding emitted by the module-export form.
const EXPORT_PREFIX: &str = "export const stories = ";

/// One record in the expanded dataset.
///
/// Struct field order is the key order of the serialized output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    #[serde(rename = "type")]
    pub genre: Genre,
    pub date: String,
    pub likes: u32,
    pub saves: u32,
    pub author: String,
}

/// Writing form a story is tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    Prose,
    Poetry,
    #[serde(rename = "Short Story")]
    ShortStory,
}

/// Expand the seed templates into the full sample dataset.
///
/// Runs [`ITERATIONS`] passes over [`TEMPLATES`] in listed order, emitting a
/// copy of each template with its id rewritten to
/// `template.id + iteration * 16`. The result is iteration-major (ids 1-16,
/// then 17-32, and so on), covering 1..=160 with no gaps or duplicates.
pub fn expand() -> Vec<Story> {
    let count = TEMPLATES.len() as u32;
    let mut stories = Vec::with_capacity(TEMPLATES.len() * ITERATIONS as usize);

    for iteration in 0..ITERATIONS {
        for template in TEMPLATES {
            stories.push(template.instantiate(template.id + iteration * count));
        }
    }

    stories
}

/// Render records as the ES-module text the client imports.
pub fn render_module(stories: &[Story]) -> Result<String> {
    Ok(format!("{}{};", EXPORT_PREFIX, render_json(stories)?))
}

/// Render records as a pretty-printed JSON array with no module wrapper.
pub fn render_json(stories: &[Story]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    stories.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

/// Write rendered dataset text to `path`, creating or overwriting the file.
pub fn write_dataset(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)
        .with_context(|| format!("Failed to write stories dataset: {}", path.display()))
}
