//! The conversion pipeline.

use crate::discovery::discover_samples;
use crate::error::{Error, Result};
use crate::materialize::copy_samples;
use crate::resolve::{
    ensure_sfz_absent, prepare_samples_dir, resolve_input, resolve_output, ConvertOptions,
};
use crate::types::SfzInstrument;
use crate::writer::write_sfz_file;
use std::path::{Path, PathBuf};

/// Pipeline stages worth telling the user about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress<'a> {
    /// About to copy `count` samples into `dest`.
    Copying { count: usize, dest: &'a Path },
    /// About to write the SFZ file named `file_name`.
    Writing { file_name: &'a str },
}

/// Callback invoked at each [`Progress`] stage.
pub type ProgressCallback<'a> = &'a mut dyn FnMut(Progress<'_>);

/// What a successful run produced.
#[derive(Clone, Debug)]
pub struct ConvertReport {
    pub instrument: SfzInstrument,
    pub sfz_path: PathBuf,
    pub samples_dir: PathBuf,
    /// Paths of the copied samples, in region order.
    pub copied: Vec<PathBuf>,
}

/// Turn a directory of Auto Sampler recordings into an SFZ instrument.
///
/// Runs the whole pipeline: check the locations, find and sort the
/// recordings, copy them into `<output>/<name>/` and write
/// `<output>/<name>.sfz`. All checks happen before anything is written.
pub fn convert(options: &ConvertOptions) -> Result<ConvertReport> {
    convert_with_progress(options, &mut |_: Progress<'_>| {})
}

/// Same as [`convert`], reporting each stage to `progress` before it starts.
pub fn convert_with_progress(
    options: &ConvertOptions,
    progress: ProgressCallback,
) -> Result<ConvertReport> {
    let input = resolve_input(options)?;

    log::debug!(
        "Looking for '{}-*.{}' in {}",
        input.sample_prefix,
        options.extension,
        input.input_dir.display()
    );
    let samples = discover_samples(&input.input_dir, &input.sample_prefix, &options.extension)?;
    if samples.is_empty() {
        return Err(Error::InvalidInput(
            "The input directory does not contain any Auto Sampler-generated samples.".to_string(),
        ));
    }
    log::debug!("Found {} samples in {}", samples.len(), input.input_dir.display());

    let paths = resolve_output(options, input)?;
    ensure_sfz_absent(&paths)?;
    prepare_samples_dir(&paths.samples_dir)?;

    progress(Progress::Copying {
        count: samples.len(),
        dest: &paths.samples_dir,
    });
    let copied = copy_samples(&samples, &paths.samples_dir)?;

    let author = options.author.clone().unwrap_or_else(current_user);
    let created = options
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let instrument = SfzInstrument::from_samples(&paths.instrument_name, author, created, &samples);

    let file_name = instrument.file_name();
    progress(Progress::Writing {
        file_name: &file_name,
    });
    write_sfz_file(&instrument, &paths.sfz_path)?;

    Ok(ConvertReport {
        instrument,
        sfz_path: paths.sfz_path,
        samples_dir: paths.samples_dir,
        copied,
    })
}

/// Login name of the user running the process.
///
/// Checks `LOGNAME`, `USER`, `LNAME` and `USERNAME` in that order.
pub fn current_user() -> String {
    ["LOGNAME", "USER", "LNAME", "USERNAME"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|name| !name.trim().is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
