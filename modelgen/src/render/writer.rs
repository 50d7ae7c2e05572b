//! Writes rendered files beneath the output directory using `cap_std`.
//!
//! Every path is resolved relative to a [`Dir`] handle opened on the output
//! directory, so rendered paths that are absolute or climb out with `..`
//! fail with [`ModelgenError::Write`] instead of touching other locations.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};
use tracing::info;

use super::{FileOutcome, RenderedFile};
use crate::error::{ModelgenError, Result};

pub(super) fn write_files(
    out_dir: &Utf8Path,
    files: &[RenderedFile],
    overwrite: bool,
) -> Result<Vec<FileOutcome>> {
    let dir = ensure_dir(out_dir)?;
    files
        .iter()
        .map(|file| write_file(&dir, out_dir, file, overwrite))
        .collect()
}

fn write_file(
    dir: &Dir,
    out_dir: &Utf8Path,
    file: &RenderedFile,
    overwrite: bool,
) -> Result<FileOutcome> {
    let target = out_dir.join(&file.path);
    if !overwrite && dir.exists(&file.path) {
        info!(path = %target, "file exists, skipping");
        return Ok(FileOutcome::Skipped(target));
    }

    let io_error = |source| ModelgenError::Write {
        path: target.clone(),
        source,
    };
    if let Some(parent) = file.path.parent().filter(|parent| !parent.as_str().is_empty()) {
        dir.create_dir_all(parent).map_err(io_error)?;
    }
    let mut handle = dir
        .open_with(
            &file.path,
            OpenOptions::new().write(true).create(true).truncate(true),
        )
        .map_err(io_error)?;
    handle.write_all(&file.content).map_err(io_error)?;

    info!(path = %target, template = %file.template, "file written");
    Ok(FileOutcome::Written(target))
}

fn ensure_dir(path: &Utf8Path) -> Result<Dir> {
    let io_error = |source| ModelgenError::Write {
        path: Utf8PathBuf::from(path),
        source,
    };
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(dir),
        Err(open_err) if open_err.kind() == std::io::ErrorKind::NotFound => {
            Dir::create_ambient_dir_all(path, ambient_authority()).map_err(io_error)?;
            Dir::open_ambient_dir(path, ambient_authority()).map_err(io_error)
        }
        Err(open_err) => Err(io_error(open_err)),
    }
}
