//! Finding Auto Sampler recordings in a directory.

use crate::error::{Error, Result};
use crate::sample::{sort_samples, SampleFile};
use std::fs;
use std::path::Path;

/// Extension Auto Sampler writes by default.
pub const DEFAULT_SAMPLE_EXTENSION: &str = "aif";

/// Collect the recordings directly inside `dir`, in canonical order.
///
/// A file is a candidate when its name starts with `<prefix>-` and ends with
/// `.<extension>` (compared without case). Candidates whose names do not
/// follow the naming scheme are skipped. Subdirectories are not searched.
pub fn discover_samples(dir: &Path, prefix: &str, extension: &str) -> Result<Vec<SampleFile>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    let prefix = format!("{prefix}-");

    let mut samples = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            log::debug!("Skipping non UTF-8 file name: {}", path.display());
            continue;
        };

        let has_extension = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(extension));
        if !file_name.starts_with(&prefix) || !has_extension {
            continue;
        }

        match SampleFile::from_path(&path) {
            Some(sample) => {
                log::debug!(
                    "Found {} (note {}, velocity {})",
                    sample.file_name,
                    sample.note,
                    sample.velocity
                );
                samples.push(sample);
            }
            None => log::debug!("Skipping {}: name does not match the sample scheme", file_name),
        }
    }

    sort_samples(&mut samples);
    Ok(samples)
}
