// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub export: ExportOptions,
    pub page_size: usize,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            source: SourceOptions::default(),
            export: ExportOptions::default(),
            page_size: ITEMS_PER_PAGE,
        }
    }
}

/// Where the sheet CSV comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub url: String,
    /// Skip the network and use the local cache (or `file`) only.
    pub offline: bool,
    /// Read this CSV file instead of fetching.
    pub file: Option<PathBuf>,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            url: s!(SHEET_URL),
            offline: false,
            file: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    // TODO: Other formats?
    // Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let stem = self.out_path.file_stem.to_string_lossy();
        path.push(join!(stem, ".", self.format.ext()));
        path
    }

    /// Parse user text into dir + stem. Ignores pasted extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        let p = Path::new(s);
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_EXPORT_STEM),
        }
    }
}
