use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort a conversion run
///
/// Every variant is fatal. The pipeline makes a single attempt and stops at
/// the first error, leaving whatever was already written on disk in place.
///
/// - Input errors: the samples directory is missing or holds no recordings
/// - Output conflicts: a previous run (or something else) already owns the
///   destination
/// - I/O errors: copying a sample or writing the SFZ file failed
#[derive(Error, Debug)]
pub enum Error {
    /// The samples directory cannot be used
    ///
    /// Raised when the directory does not exist, is not a directory, or
    /// contains no file matching the Auto Sampler naming scheme.
    #[error("{0}")]
    InvalidInput(String),

    /// The output location is already taken
    ///
    /// Raised when an explicit output directory is missing, when the sample
    /// subfolder exists and is not empty, or when the SFZ file exists.
    #[error("{0}")]
    OutputConflict(String),

    /// Input/Output error while copying samples or writing the SFZ file
    #[error("{}: {source}", path.display())]
    Io {
        /// The file or directory being accessed
        path: PathBuf,
        /// The underlying error
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this error.
    ///
    /// Validation failures use 2, like a usage error. I/O failures use 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidInput(_) | Error::OutputConflict(_) => 2,
            Error::Io { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
