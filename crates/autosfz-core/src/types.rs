//! SFZ instrument descriptor types.

use crate::layout::{key_ranges, KeyRange, VelocityAllocator, VelocityRange};
use crate::note::Note;
use crate::path_utils::sfz_sample_reference;
use crate::sample::SampleFile;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Complete SFZ instrument, ready to be written.
#[derive(Clone, Debug, PartialEq)]
pub struct SfzInstrument {
    /// Instrument name, also the name of the sample subfolder.
    pub name: String,
    /// User who generated the file.
    pub author: String,
    /// Date the file was generated.
    pub created: NaiveDate,
    /// All regions in the single default group, in canonical sample order.
    pub regions: Vec<SfzRegion>,
}

impl SfzInstrument {
    /// Build the instrument from samples already sorted in canonical order.
    ///
    /// Key ranges are computed per distinct note, velocity ranges per sample.
    pub fn from_samples(
        name: impl Into<String>,
        author: impl Into<String>,
        created: NaiveDate,
        samples: &[SampleFile],
    ) -> Self {
        let name = name.into();
        let ranges: HashMap<Note, KeyRange> =
            key_ranges(samples.iter().map(|s| s.note)).into_iter().collect();

        let mut velocities = VelocityAllocator::new();
        let mut regions = Vec::with_capacity(samples.len());

        for sample in samples {
            let Some(&key_range) = ranges.get(&sample.note) else {
                continue;
            };
            let vel_range = velocities.next_range(sample.velocity);
            if !vel_range.is_ordered() {
                log::warn!(
                    "{}: velocity range {}-{} is empty (lower bound carried over from the previous note)",
                    sample.file_name,
                    vel_range.lovel,
                    vel_range.hivel
                );
            }

            regions.push(SfzRegion {
                sample: sfz_sample_reference(&name, &sample.file_name),
                key_range,
                vel_range,
                pitch_keycenter: sample.note,
            });
        }

        Self {
            name,
            author: author.into(),
            created,
            regions,
        }
    }

    /// Get the number of regions in this instrument.
    pub fn num_regions(&self) -> usize {
        self.regions.len()
    }

    /// File name of the SFZ descriptor, e.g. `MyPiano.sfz`.
    pub fn file_name(&self) -> String {
        sfz_file_name(&self.name)
    }
}

/// One `<region>` block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SfzRegion {
    /// Value of the `sample` opcode, relative to the SFZ file.
    pub sample: String,
    pub key_range: KeyRange,
    pub vel_range: VelocityRange,
    pub pitch_keycenter: Note,
}

/// SFZ file name for an instrument name.
pub fn sfz_file_name(instrument: &str) -> String {
    format!("{instrument}.sfz")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(names: &[&str]) -> Vec<SampleFile> {
        names
            .iter()
            .filter_map(|n| SampleFile::from_path(format!("/in/{n}")))
            .collect()
    }

    fn note(s: &str) -> Note {
        s.parse().unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn test_from_samples_piano() {
        let samples = samples(&[
            "MyPiano-C3-064-AB12.aif",
            "MyPiano-C3-127-CD34.aif",
            "MyPiano-D3-127-EF56.aif",
        ]);
        let instrument = SfzInstrument::from_samples("MyPiano", "alice", date(), &samples);

        assert_eq!(instrument.num_regions(), 3);
        assert_eq!(instrument.file_name(), "MyPiano.sfz");

        let r = &instrument.regions;
        assert_eq!(r[0].sample, "MyPiano\\MyPiano-C3-064-AB12.aif");
        assert_eq!(r[0].vel_range, VelocityRange { lovel: 0, hivel: 64 });
        assert_eq!(r[1].vel_range, VelocityRange { lovel: 65, hivel: 127 });
        assert_eq!(r[2].vel_range, VelocityRange { lovel: 0, hivel: 127 });

        let c3 = KeyRange { lokey: note("C3"), hikey: note("C#3") };
        assert_eq!(r[0].key_range, c3);
        assert_eq!(r[1].key_range, c3);
        assert_eq!(r[2].key_range, KeyRange { lokey: note("D3"), hikey: note("D3") });

        assert_eq!(r[0].pitch_keycenter, note("C3"));
        assert_eq!(r[2].pitch_keycenter, note("D3"));
    }

    #[test]
    fn test_from_samples_uses_instrument_name_for_references() {
        let samples = samples(&["Rec-A1-100-0000.aif"]);
        let instrument = SfzInstrument::from_samples("Strings", "bob", date(), &samples);
        assert_eq!(instrument.regions[0].sample, "Strings\\Rec-A1-100-0000.aif");
    }

    #[test]
    fn test_from_samples_empty() {
        let instrument = SfzInstrument::from_samples("Empty", "bob", date(), &[]);
        assert_eq!(instrument.num_regions(), 0);
    }
}
