//! Canonical key identity, independent of any textual notation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseKeyError;
use crate::table::KeyTable;

/// Note names for the 12 pitch classes, sharp spelling.
const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Musical key
///
/// One of the 24 canonical keys: 12 pitch classes in major or minor mode.
/// Every supported notation (Camelot, Open Key, standard, Traktor) is a
/// spelling of one of these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Major key (0 = C, 1 = C#, ..., 11 = B)
    Major(u32),
    /// Minor key (0 = C, 1 = C#, ..., 11 = B)
    Minor(u32),
}

impl Key {
    /// Get the pitch class index 0-11 (0 = C, 1 = C#, ..., 11 = B).
    pub fn pitch_class(&self) -> u32 {
        match *self {
            Key::Major(i) | Key::Minor(i) => i % 12,
        }
    }

    /// True for minor keys.
    pub fn is_minor(&self) -> bool {
        matches!(self, Key::Minor(_))
    }

    /// Get key name in short musical notation (e.g., "C", "Am", "F#", "D#m")
    ///
    /// Returns the sharp-spelled short name, which is also the Traktor code:
    /// - Major keys: note name only (e.g., "C", "C#", "F#")
    /// - Minor keys: note name + "m" (e.g., "Am", "C#m", "F#m")
    ///
    /// # Example
    ///
    /// ```
    /// use keywheel::Key;
    ///
    /// assert_eq!(Key::Major(0).name(), "C");
    /// assert_eq!(Key::Major(6).name(), "F#");
    /// assert_eq!(Key::Minor(9).name(), "Am");
    /// assert_eq!(Key::Minor(1).name(), "C#m");
    /// ```
    pub fn name(&self) -> String {
        match self {
            Key::Major(i) => NOTE_NAMES[*i as usize % 12].to_string(),
            Key::Minor(i) => format!("{}m", NOTE_NAMES[*i as usize % 12]),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Key {
    type Err = ParseKeyError;

    /// Parse a key string in any supported notation.
    ///
    /// # Example
    ///
    /// ```
    /// use keywheel::Key;
    ///
    /// assert_eq!("2B".parse::<Key>(), Ok(Key::Major(6)));      // Camelot
    /// assert_eq!("1d".parse::<Key>(), Ok(Key::Major(0)));      // Open Key
    /// assert_eq!("A♭ Minor".parse::<Key>(), Ok(Key::Minor(8)));
    /// assert!("13B".parse::<Key>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyTable::shared()
            .parse(s)
            .ok_or_else(|| ParseKeyError::new(s))
    }
}
