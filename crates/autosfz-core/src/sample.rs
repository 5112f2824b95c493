//! Auto Sampler file names.
//!
//! Recordings are named `<free text>-<Note><Octave>-<Velocity>-<ID>.<ext>`,
//! for example `MyPiano-C#3-064-AB12.aif`. The velocity has two or three
//! digits and the ID is four alphanumeric characters.

use crate::note::{Note, PitchClass};
use regex::Regex;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static SAMPLE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[\w,\s-]+([A-G]#?)(-?\d)-(\d{2,3})-[A-Z0-9]{4}\.([A-Z0-9]+)$")
        .expect("sample name pattern is valid")
});

/// Note and velocity encoded in a sample file name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleName {
    pub note: Note,
    pub velocity: u8,
}

impl SampleName {
    /// Parse a bare file name. Returns `None` when the name does not follow
    /// the Auto Sampler scheme, when the note is outside the MIDI range, or
    /// when the velocity is above 127.
    pub fn parse(file_name: &str) -> Option<Self> {
        let caps = SAMPLE_NAME.captures(file_name)?;

        let pitch = PitchClass::from_name(&caps[1])?;
        let octave: i8 = caps[2].parse().ok()?;
        let note = Note::new(pitch, octave);
        note.number()?;

        let velocity: u8 = caps[3].parse().ok().filter(|v| *v <= 127)?;

        Some(Self { note, velocity })
    }

    /// Canonical order: octave, then pitch class, then velocity.
    pub fn cmp_canonical(&self, other: &Self) -> Ordering {
        self.note
            .octave
            .cmp(&other.note.octave)
            .then(self.note.pitch.cmp(&other.note.pitch))
            .then(self.velocity.cmp(&other.velocity))
    }
}

/// A recording found in the samples directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleFile {
    /// Full path of the source file.
    pub path: PathBuf,
    /// File name as found on disk.
    pub file_name: String,
    pub note: Note,
    pub velocity: u8,
}

impl SampleFile {
    /// Build a sample from a path if its file name follows the naming scheme.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        let file_name = path.file_name()?.to_str()?;
        let name = SampleName::parse(file_name)?;
        Some(Self {
            path: path.to_path_buf(),
            file_name: file_name.to_string(),
            note: name.note,
            velocity: name.velocity,
        })
    }

    /// Extension of the file as found on disk.
    pub fn extension(&self) -> Option<&str> {
        self.path.extension().and_then(|e| e.to_str())
    }

    /// Canonical order, with the file name breaking ties between takes of
    /// the same note and velocity.
    pub fn cmp_canonical(&self, other: &Self) -> Ordering {
        let this = SampleName {
            note: self.note,
            velocity: self.velocity,
        };
        let that = SampleName {
            note: other.note,
            velocity: other.velocity,
        };
        this.cmp_canonical(&that)
            .then_with(|| self.file_name.cmp(&other.file_name))
    }
}

/// Compare two file names in canonical sample order.
///
/// Names that follow the naming scheme come first, in canonical order.
/// Names that do not follow it come after them, in plain string order, so
/// this is a total order on arbitrary input.
pub fn compare_file_names(a: &str, b: &str) -> Ordering {
    match (SampleName::parse(a), SampleName::parse(b)) {
        (Some(x), Some(y)) => x.cmp_canonical(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Sort samples into canonical order.
pub fn sort_samples(samples: &mut [SampleFile]) {
    samples.sort_by(SampleFile::cmp_canonical);
}
