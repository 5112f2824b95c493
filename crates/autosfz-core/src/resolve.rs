//! Input and output location checks.

use crate::discovery::DEFAULT_SAMPLE_EXTENSION;
use crate::error::{Error, Result};
use crate::path_utils::{dir_base_name, normalize_path};
use crate::types::sfz_file_name;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for one conversion run.
#[derive(Clone, Debug)]
pub struct ConvertOptions {
    /// Directory holding the Auto Sampler recordings.
    pub input_dir: PathBuf,
    /// Instrument name. Defaults to the input directory's name.
    pub name: Option<String>,
    /// Where the SFZ file and sample folder go. Defaults to the current
    /// directory.
    pub output_dir: Option<PathBuf>,
    /// Extension of the recordings, without the dot.
    pub extension: String,
    /// Author written in the header. Defaults to the current user.
    pub author: Option<String>,
    /// Date written in the header. Defaults to today.
    pub date: Option<NaiveDate>,
}

impl ConvertOptions {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            name: None,
            output_dir: None,
            extension: DEFAULT_SAMPLE_EXTENSION.to_string(),
            author: None,
            date: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// Every location a run reads from or writes to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Normalized input directory.
    pub input_dir: PathBuf,
    /// Prefix every recording starts with: the input directory's name.
    pub sample_prefix: String,
    pub instrument_name: String,
    pub output_dir: PathBuf,
    /// `<output_dir>/<instrument_name>`
    pub samples_dir: PathBuf,
    /// `<output_dir>/<instrument_name>.sfz`
    pub sfz_path: PathBuf,
}

/// The samples directory and the prefix its recordings start with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedInput {
    /// Normalized input directory.
    pub input_dir: PathBuf,
    /// The input directory's name.
    pub sample_prefix: String,
}

/// Validate the input directory.
pub fn resolve_input(options: &ConvertOptions) -> Result<ResolvedInput> {
    if !options.input_dir.is_dir() {
        return Err(Error::InvalidInput(format!(
            "The input directory does not exist: {}",
            options.input_dir.display()
        )));
    }
    let input_dir = normalize_path(&options.input_dir);
    let sample_prefix = dir_base_name(&input_dir).ok_or_else(|| {
        Error::InvalidInput(format!(
            "Cannot determine the name of the input directory: {}",
            input_dir.display()
        ))
    })?;

    Ok(ResolvedInput {
        input_dir,
        sample_prefix,
    })
}

/// Work out the output locations for an already validated input.
///
/// Nothing is created here.
pub fn resolve_output(options: &ConvertOptions, input: ResolvedInput) -> Result<ResolvedPaths> {
    let ResolvedInput {
        input_dir,
        sample_prefix,
    } = input;

    let instrument_name = options.name.clone().unwrap_or_else(|| sample_prefix.clone());
    if instrument_name.trim().is_empty() {
        return Err(Error::InvalidInput(
            "The instrument name must not be empty".to_string(),
        ));
    }

    let output_dir = match &options.output_dir {
        None => std::env::current_dir().map_err(|e| Error::io(".", e))?,
        Some(dir) if dir.is_dir() => normalize_path(dir),
        Some(dir) => {
            return Err(Error::OutputConflict(format!(
                "The output directory does not exist: {}",
                dir.display()
            )))
        }
    };

    let samples_dir = output_dir.join(&instrument_name);
    let sfz_path = output_dir.join(sfz_file_name(&instrument_name));

    Ok(ResolvedPaths {
        input_dir,
        sample_prefix,
        instrument_name,
        output_dir,
        samples_dir,
        sfz_path,
    })
}

/// Validate the input directory and work out the output locations.
///
/// Nothing is created here.
pub fn resolve_paths(options: &ConvertOptions) -> Result<ResolvedPaths> {
    resolve_output(options, resolve_input(options)?)
}

/// Fail if the SFZ file is already there.
pub fn ensure_sfz_absent(paths: &ResolvedPaths) -> Result<()> {
    if paths.sfz_path.exists() {
        return Err(Error::OutputConflict(format!(
            "File '{}' already exists in the output directory.",
            sfz_file_name(&paths.instrument_name)
        )));
    }
    Ok(())
}

/// Make sure the sample folder exists and is empty.
///
/// An existing empty folder is reused.
pub fn prepare_samples_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        if !dir.is_dir() {
            return Err(Error::OutputConflict(format!(
                "The following path already exists and is not a directory: {}",
                dir.display()
            )));
        }
        let mut entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
        if entries.next().is_some() {
            return Err(Error::OutputConflict(format!(
                "The following directory already exists and is not empty: {}",
                dir.display()
            )));
        }
        log::debug!("Reusing empty directory {}", dir.display());
        return Ok(());
    }

    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))
}
