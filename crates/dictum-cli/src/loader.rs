//! Reading translation directories.
//!
//! A directory holds one `<code>.json` file per language. Other files are
//! ignored.

use std::fs::{read_dir, read_to_string};
use std::path::{Path, PathBuf};

use dictum::{DictionaryBuilder, RawDictionary};
use miette::{miette, IntoDiagnostic, Result};
use tracing::debug;

use crate::output::JsonDiagnostic;

/// One language's file, read but not yet parsed.
pub struct SourceFile {
    pub language: String,
    pub path: PathBuf,
    pub content: String,
}

impl SourceFile {
    /// Parse the file into a raw dictionary.
    pub fn parse(&self) -> Result<RawDictionary, JsonDiagnostic> {
        serde_json::from_str(&self.content)
            .map_err(|e| JsonDiagnostic::from_json_error(&self.path, &self.content, &e))
    }
}

/// Read every `.json` file in `dir`, sorted by language code.
pub fn read_translations(dir: &Path) -> Result<Vec<SourceFile>> {
    let entries = read_dir(dir)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to read translations directory {:?}: {}", dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.into_diagnostic()?.path();
        if path.extension().is_none_or(|ext| ext != "json") {
            continue;
        }
        let Some(language) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        let language = language.to_string();
        let content = read_to_string(&path)
            .into_diagnostic()
            .map_err(|e| miette!("Failed to read translation file {:?}: {}", path, e))?;
        debug!(language, path = %path.display(), "read translation file");
        files.push(SourceFile {
            language,
            path,
            content,
        });
    }

    files.sort_by(|a, b| a.language.cmp(&b.language));
    Ok(files)
}

/// Read and parse a directory into a registry, failing on the first
/// malformed file.
pub fn load_builder(dir: &Path) -> Result<DictionaryBuilder> {
    let mut builder = DictionaryBuilder::new();
    for file in read_translations(dir)? {
        let raw = file.parse()?;
        builder.register(file.language, raw);
    }
    Ok(builder)
}
