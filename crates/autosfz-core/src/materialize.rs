//! Copying recordings into the instrument's sample folder.

use crate::error::{Error, Result};
use crate::sample::SampleFile;
use std::fs::{self, File, FileTimes};
use std::path::{Path, PathBuf};

/// Copy `source` to `dest`, keeping permissions and access/modification
/// times.
pub fn copy_preserving_times(source: &Path, dest: &Path) -> Result<()> {
    let metadata = fs::metadata(source).map_err(|e| Error::io(source, e))?;
    fs::copy(source, dest).map_err(|e| Error::io(dest, e))?;

    let mut times = FileTimes::new();
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }

    // Read-only copies still accept new times through a read handle on Unix.
    let file = if cfg!(unix) {
        File::open(dest)
    } else {
        File::options().write(true).open(dest)
    }
    .map_err(|e| Error::io(dest, e))?;
    file.set_times(times).map_err(|e| Error::io(dest, e))?;
    Ok(())
}

/// Copy every sample into `dest_dir` under its original file name.
///
/// Stops at the first failure. Files copied before the failure stay in
/// place.
pub fn copy_samples(samples: &[SampleFile], dest_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut copied = Vec::with_capacity(samples.len());
    for sample in samples {
        let dest = dest_dir.join(&sample.file_name);
        log::debug!("Copying {} -> {}", sample.path.display(), dest.display());
        copy_preserving_times(&sample.path, &dest)?;
        copied.push(dest);
    }
    Ok(copied)
}
