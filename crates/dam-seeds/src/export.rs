//! Export of a generated seed graph to a JSON document on disk.
//!
//! The write is atomic: the document is staged to a uniquely named dot-file
//! in the target directory, synced, then renamed over the target. An
//! existing seed file is either fully replaced or left intact; a truncated
//! document never lands at the target path.

use std::io::{self, Write};

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, OpenOptions};
use serde_json::Value;
use uuid::Uuid;

use crate::error::ExportError;
use crate::generator::Seeds;
use crate::serialize::serialize_all;

/// Writes the full seed document as pretty-printed JSON.
///
/// The document carries one array per record kind, keyed by the kind's type
/// tag. `path` must name a file directly inside `dir`.
///
/// # Errors
///
/// Returns [`ExportError::Serialize`] if a record cannot be converted to
/// JSON, or [`ExportError::Write`] if the file cannot be written.
pub fn write_seed_document(dir: &Dir, path: &Utf8Path, seeds: &Seeds) -> Result<(), ExportError> {
    let file_name = single_file_component(path)?;
    let document = serialize_all(seeds.store())?;
    let contents =
        serde_json::to_string_pretty(&Value::Object(document)).map_err(|err| {
            ExportError::Serialize {
                kind: "document",
                message: err.to_string(),
            }
        })?;
    replace_file(dir, file_name, &contents).map_err(|err| ExportError::Write {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

/// Rejects paths that name a directory or reach outside `dir`.
fn single_file_component(path: &Utf8Path) -> Result<&str, ExportError> {
    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Utf8Component::Normal(file_name)), None) => Ok(file_name),
        _ => Err(ExportError::Write {
            path: path.to_path_buf(),
            message: "output path must be a file".to_owned(),
        }),
    }
}

/// Stages `contents` next to `file_name`, then renames over it. The staging
/// file is removed on any failure, so retries never collide with leftovers.
fn replace_file(dir: &Dir, file_name: &str, contents: &str) -> io::Result<()> {
    let tmp_name = format!(".{file_name}.{}.tmp", Uuid::new_v4().simple());
    let staged = stage_and_rename(dir, &tmp_name, file_name, contents);
    if staged.is_err() {
        // The rename may have consumed the staging file already; removal is
        // best-effort either way.
        drop(dir.remove_file(&tmp_name));
    }
    staged
}

fn stage_and_rename(dir: &Dir, tmp_name: &str, file_name: &str, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut staging = dir.open_with(tmp_name, &options)?;
    staging.write_all(contents.as_bytes())?;
    staging.sync_all()?;
    drop(staging);
    rename_over(dir, tmp_name, file_name)?;
    // Persist the rename; a failure here still leaves a complete file.
    drop(dir.open(".").and_then(|handle| handle.sync_all()));
    Ok(())
}

#[cfg(not(windows))]
fn rename_over(dir: &Dir, tmp_name: &str, file_name: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, file_name)
}

#[cfg(windows)]
fn rename_over(dir: &Dir, tmp_name: &str, file_name: &str) -> io::Result<()> {
    // Windows refuses to rename over an existing file.
    match dir.remove_file(file_name) {
        Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
        _ => dir.rename(tmp_name, dir, file_name),
    }
}
