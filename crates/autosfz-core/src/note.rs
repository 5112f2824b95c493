//! Note names and MIDI note numbers.
//!
//! Auto Sampler names octaves so that `C-2` is MIDI note 0 and `C3` is
//! MIDI note 60. Only sharps are used.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lowest octave that still maps into the MIDI range.
pub const MIN_OCTAVE: i8 = -2;

/// The twelve pitch classes, in ascending order within an octave.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl PitchClass {
    /// All pitch classes from C to B.
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// Semitone offset from C (C = 0, B = 11).
    pub fn semitone(self) -> u8 {
        self as u8
    }

    /// Pitch class for a semitone offset, wrapping at the octave.
    pub fn from_semitone(semitone: u8) -> Self {
        Self::ALL[(semitone % 12) as usize]
    }

    /// Upper-case name, e.g. `C#`.
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }

    /// Parse a letter with an optional sharp, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_uppercase();
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

/// Error returned when a note name cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid note name: '{0}'")]
pub struct ParseNoteError(String);

/// A pitch in a specific octave.
///
/// Ordering is by octave first, then pitch class, which matches ordering by
/// MIDI note number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Note {
    pub octave: i8,
    pub pitch: PitchClass,
}

impl Note {
    pub fn new(pitch: PitchClass, octave: i8) -> Self {
        Self { octave, pitch }
    }

    /// MIDI note number, or `None` when the note lies outside 0-127.
    pub fn number(self) -> Option<u8> {
        let n = (self.octave as i16 - MIN_OCTAVE as i16) * 12 + self.pitch.semitone() as i16;
        if (0..=127).contains(&n) {
            Some(n as u8)
        } else {
            None
        }
    }

    /// Note for a MIDI note number.
    pub fn from_number(number: u8) -> Option<Self> {
        if number > 127 {
            return None;
        }
        let octave = (number / 12) as i8 + MIN_OCTAVE;
        Some(Self::new(PitchClass::from_semitone(number), octave))
    }

    /// The note one semitone lower, if it is still a valid MIDI note.
    pub fn semitone_below(self) -> Option<Self> {
        self.number()?.checked_sub(1).and_then(Self::from_number)
    }

    /// Lower-case name as written in SFZ opcodes, e.g. `c#3` or `a-1`.
    pub fn sfz_name(self) -> String {
        self.to_string().to_ascii_lowercase()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch.name(), self.octave)
    }
}

impl FromStr for Note {
    type Err = ParseNoteError;

    /// Parse names like `C3`, `c#-1` or `G#7`. The octave is a single digit
    /// with an optional minus sign.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseNoteError(s.to_string());

        let split = if s.get(1..2) == Some("#") { 2 } else { 1 };
        let (name, octave) = (s.get(..split).ok_or_else(err)?, &s[split..]);

        let pitch = PitchClass::from_name(name).ok_or_else(err)?;

        let digits = octave.strip_prefix('-').unwrap_or(octave);
        if digits.len() != 1 || !digits.as_bytes()[0].is_ascii_digit() {
            return Err(err());
        }
        let octave: i8 = octave.parse().map_err(|_| err())?;

        let note = Note::new(pitch, octave);
        note.number().map(|_| note).ok_or_else(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_numbers() {
        assert_eq!("C-2".parse::<Note>().unwrap().number(), Some(0));
        assert_eq!("C3".parse::<Note>().unwrap().number(), Some(60));
        assert_eq!("C#3".parse::<Note>().unwrap().number(), Some(61));
        assert_eq!("A3".parse::<Note>().unwrap().number(), Some(69));
        assert_eq!("G8".parse::<Note>().unwrap().number(), Some(127));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("c#3".parse::<Note>(), "C#3".parse::<Note>());
        assert_eq!("d-1".parse::<Note>().unwrap(), Note::new(PitchClass::D, -1));
    }

    #[test]
    fn test_parse_rejects_bad_names() {
        assert!("H3".parse::<Note>().is_err());
        assert!("C".parse::<Note>().is_err());
        assert!("Cb3".parse::<Note>().is_err());
        assert!("C10".parse::<Note>().is_err());
        assert!("C--1".parse::<Note>().is_err());
        assert!("".parse::<Note>().is_err());
        // G#8 would be note 128
        assert!("G#8".parse::<Note>().is_err());
    }

    #[test]
    fn test_round_trip_through_note_number() {
        for number in 0..=127u8 {
            let note = Note::from_number(number).unwrap();
            let parsed: Note = note.to_string().parse().unwrap();
            assert_eq!(parsed, note);
            assert_eq!(parsed.number(), Some(number));
        }
    }

    #[test]
    fn test_from_number_out_of_range() {
        assert_eq!(Note::from_number(128), None);
        assert_eq!(Note::new(PitchClass::B, 9).number(), None);
        assert_eq!(Note::new(PitchClass::B, -3).number(), None);
    }

    #[test]
    fn test_semitone_below() {
        let d3 = Note::new(PitchClass::D, 3);
        assert_eq!(d3.semitone_below(), Some(Note::new(PitchClass::CSharp, 3)));

        let c3 = Note::new(PitchClass::C, 3);
        assert_eq!(c3.semitone_below(), Some(Note::new(PitchClass::B, 2)));

        let lowest = Note::new(PitchClass::C, -2);
        assert_eq!(lowest.semitone_below(), None);
    }

    #[test]
    fn test_sfz_name() {
        assert_eq!(Note::new(PitchClass::CSharp, 3).sfz_name(), "c#3");
        assert_eq!(Note::new(PitchClass::A, -1).sfz_name(), "a-1");
    }

    #[test]
    fn test_ordering_matches_note_number() {
        let mut notes: Vec<Note> = (0..=127u8).rev().filter_map(Note::from_number).collect();
        notes.sort();
        let numbers: Vec<u8> = notes.iter().filter_map(|n| n.number()).collect();
        assert_eq!(numbers, (0..=127u8).collect::<Vec<_>>());
    }
}
