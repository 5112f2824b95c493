//! SFZ instruments from Auto Sampler recordings.
//!
//! Auto Sampler records an instrument note by note and velocity layer by
//! velocity layer, encoding both in each file name. This crate turns such a
//! directory into a playable SFZ instrument:
//! - Parse note, octave and velocity from the file names
//! - Sort the recordings by pitch and velocity
//! - Copy them into a sample folder named after the instrument
//! - Map every recording to a key range and velocity range and write the
//!   `.sfz` file
//!
//! # Example
//!
//! ```ignore
//! use autosfz_core::{convert, ConvertOptions};
//!
//! let report = convert(&ConvertOptions::new("recordings/MyPiano").with_output_dir("instruments"))?;
//! println!("{} regions written to {}", report.instrument.num_regions(), report.sfz_path.display());
//! ```

pub mod convert;
pub mod discovery;
pub mod error;
pub mod layout;
pub mod materialize;
pub mod note;
pub mod path_utils;
pub mod resolve;
pub mod sample;
pub mod types;
pub mod writer;

pub use convert::{
    convert, convert_with_progress, current_user, ConvertReport, Progress, ProgressCallback,
};
pub use discovery::{discover_samples, DEFAULT_SAMPLE_EXTENSION};
pub use error::{Error, Result};
pub use layout::{key_ranges, velocity_ranges, KeyRange, VelocityAllocator, VelocityRange};
pub use note::{Note, PitchClass};
pub use resolve::{ConvertOptions, ResolvedInput, ResolvedPaths};
pub use sample::{compare_file_names, SampleFile, SampleName};
pub use types::{SfzInstrument, SfzRegion};
pub use writer::{render_sfz, write_sfz, write_sfz_file};
