// src/file.rs

use std::{fs, path::{Path, PathBuf}};

use crate::config::options::ExportOptions;
use crate::core::csv;

/// Write the current view as one CSV/TSV file per ExportOptions (path,
/// headers policy, delimiter). Returns the final path written to.
pub fn write_export(
    export: &ExportOptions,
    headers: &[String],
    rows: &[Vec<String>],
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = csv::to_export_string(
        headers,
        rows,
        export.include_headers,
        export.format.delim(),
    );

    fs::write(&path, contents)?;
    Ok(path)
}

fn ensure_directory(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)
}
