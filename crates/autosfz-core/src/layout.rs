//! Key and velocity layout for the generated regions.

use crate::note::Note;
use crate::sample::SampleFile;
use std::collections::BTreeSet;

/// Keys a region responds to, inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyRange {
    pub lokey: Note,
    pub hikey: Note,
}

/// Velocities a region responds to, inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VelocityRange {
    pub lovel: u8,
    pub hivel: u8,
}

impl VelocityRange {
    /// True when the range contains at least one velocity.
    pub fn is_ordered(&self) -> bool {
        self.lovel <= self.hivel
    }
}

/// Key range for every distinct note, lowest note first.
///
/// Each note covers itself up to one semitone below the next higher note.
/// The highest note covers only itself.
pub fn key_ranges<I>(notes: I) -> Vec<(Note, KeyRange)>
where
    I: IntoIterator<Item = Note>,
{
    let sorted: Vec<Note> = notes
        .into_iter()
        .filter(|n| n.number().is_some())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    sorted
        .iter()
        .enumerate()
        .map(|(i, &note)| {
            let hikey = sorted
                .get(i + 1)
                .and_then(|next| next.semitone_below())
                .unwrap_or(note);
            (note, KeyRange { lokey: note, hikey })
        })
        .collect()
}

/// Hands out velocity ranges to samples visited in canonical order.
///
/// The lower bound continues from the previous sample's upper bound and only
/// returns to 0 after a sample with velocity 127. It is not reset when the
/// note changes, so a note whose loudest layer is below 127 pushes its
/// leftover lower bound into the next note.
#[derive(Clone, Debug, Default)]
pub struct VelocityAllocator {
    lovel: u8,
}

impl VelocityAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Range for the next sample, whose file name encodes `hivel`.
    pub fn next_range(&mut self, hivel: u8) -> VelocityRange {
        let range = VelocityRange {
            lovel: self.lovel,
            hivel,
        };
        self.lovel = if hivel < 127 { hivel + 1 } else { 0 };
        range
    }
}

/// Velocity range for each sample, in the order given.
pub fn velocity_ranges(samples: &[SampleFile]) -> Vec<VelocityRange> {
    let mut allocator = VelocityAllocator::new();
    samples
        .iter()
        .map(|s| allocator.next_range(s.velocity))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::PitchClass;

    fn note(s: &str) -> Note {
        s.parse().unwrap()
    }

    #[test]
    fn test_key_ranges_fill_gaps_up_to_next_note() {
        let ranges = key_ranges([note("C3"), note("D3"), note("A3")]);
        assert_eq!(
            ranges,
            vec![
                (note("C3"), KeyRange { lokey: note("C3"), hikey: note("C#3") }),
                (note("D3"), KeyRange { lokey: note("D3"), hikey: note("G#3") }),
                (note("A3"), KeyRange { lokey: note("A3"), hikey: note("A3") }),
            ]
        );
    }

    #[test]
    fn test_key_ranges_adjacent_notes_cover_only_themselves() {
        let ranges = key_ranges([note("C3"), note("C#3")]);
        assert_eq!(ranges[0].1, KeyRange { lokey: note("C3"), hikey: note("C3") });
        assert_eq!(ranges[1].1, KeyRange { lokey: note("C#3"), hikey: note("C#3") });
    }

    #[test]
    fn test_key_ranges_ignore_order_and_duplicates() {
        let ranges = key_ranges([note("E2"), note("C2"), note("E2"), note("C2")]);
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[0].1, KeyRange { lokey: note("C2"), hikey: note("D#2") });
        assert_eq!(ranges[1].1, KeyRange { lokey: note("E2"), hikey: note("E2") });
    }

    #[test]
    fn test_key_ranges_cross_octave_boundary() {
        let ranges = key_ranges([note("A2"), note("C3")]);
        assert_eq!(ranges[0].1.hikey, note("B2"));
    }

    #[test]
    fn test_key_ranges_partition_without_gaps_or_overlap() {
        let notes: Vec<Note> = [0u8, 5, 12, 13, 40, 77, 100, 127]
            .iter()
            .filter_map(|n| Note::from_number(*n))
            .collect();
        let ranges = key_ranges(notes.iter().copied());

        let lowest = ranges.first().unwrap().1.lokey.number().unwrap();
        let highest = ranges.last().unwrap().1.hikey.number().unwrap();
        assert_eq!(lowest, 0);
        assert_eq!(highest, 127);

        for pair in ranges.windows(2) {
            let hi = pair[0].1.hikey.number().unwrap();
            let next_lo = pair[1].1.lokey.number().unwrap();
            assert_eq!(hi + 1, next_lo);
            assert!(pair[0].1.lokey.number().unwrap() <= hi);
        }
    }

    #[test]
    fn test_key_ranges_empty() {
        assert!(key_ranges(Vec::<Note>::new()).is_empty());
    }

    #[test]
    fn test_velocity_ranges_are_contiguous_within_a_note() {
        let mut allocator = VelocityAllocator::new();
        let ranges: Vec<VelocityRange> = [31u8, 63, 95, 127]
            .iter()
            .map(|v| allocator.next_range(*v))
            .collect();
        assert_eq!(
            ranges,
            vec![
                VelocityRange { lovel: 0, hivel: 31 },
                VelocityRange { lovel: 32, hivel: 63 },
                VelocityRange { lovel: 64, hivel: 95 },
                VelocityRange { lovel: 96, hivel: 127 },
            ]
        );
    }

    #[test]
    fn test_velocity_resets_after_127() {
        let mut allocator = VelocityAllocator::new();
        allocator.next_range(127);
        assert_eq!(allocator.next_range(64), VelocityRange { lovel: 0, hivel: 64 });
    }

    #[test]
    fn test_velocity_carries_across_notes_without_127() {
        let samples: Vec<SampleFile> = ["P-C3-100-AAAA.aif", "P-D3-050-AAAA.aif", "P-D3-127-AAAA.aif"]
            .iter()
            .filter_map(|p| SampleFile::from_path(p))
            .collect();
        assert_eq!(samples[1].note, Note::new(PitchClass::D, 3));

        let ranges = velocity_ranges(&samples);
        assert_eq!(ranges[0], VelocityRange { lovel: 0, hivel: 100 });
        assert_eq!(ranges[1], VelocityRange { lovel: 101, hivel: 50 });
        assert!(!ranges[1].is_ordered());
        assert_eq!(ranges[2], VelocityRange { lovel: 51, hivel: 127 });
    }
}
