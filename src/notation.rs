//! Input classification for the supported key notations

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static CAMELOT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2}[ABab]$").unwrap());
static OPEN_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2}[dmDM]$").unwrap());
static TRAKTOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-gA-G][#Bb]?[mM]?$").unwrap());

/// The four supported key notations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notation {
    /// Camelot wheel codes: `1A`..`12A` (minor), `1B`..`12B` (major)
    Camelot,
    /// Open Key codes: `1m`..`12m` (minor), `1d`..`12d` (major)
    OpenKey,
    /// Conventional names: `C Major`, `A-Flat Minor`, `A♭ Minor`
    Standard,
    /// Traktor codes: sharp-spelled pitch letter, `m` suffix for minor
    Traktor,
}

impl Notation {
    /// Classify an input string by the first notation whose pattern it
    /// matches.
    ///
    /// Standard notation is the fallback: anything that is not shaped like
    /// a Camelot, Open Key, or Traktor code is treated as a standard name
    /// and either resolves against the table or does not. The numeric codes
    /// are matched on shape only; range validation (1-12) happens at table
    /// lookup.
    ///
    /// # Example
    ///
    /// ```
    /// use keywheel::Notation;
    ///
    /// assert_eq!(Notation::detect("8B"), Notation::Camelot);
    /// assert_eq!(Notation::detect("1d"), Notation::OpenKey);
    /// assert_eq!(Notation::detect("C#m"), Notation::Traktor);
    /// assert_eq!(Notation::detect("A-Flat Minor"), Notation::Standard);
    /// ```
    pub fn detect(input: &str) -> Notation {
        if CAMELOT_RE.is_match(input) {
            Notation::Camelot
        } else if OPEN_KEY_RE.is_match(input) {
            Notation::OpenKey
        } else if TRAKTOR_RE.is_match(input) {
            Notation::Traktor
        } else {
            Notation::Standard
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_camelot() {
        assert_eq!(Notation::detect("1A"), Notation::Camelot);
        assert_eq!(Notation::detect("12b"), Notation::Camelot);
        // Shape only; "13B" is still camelot-shaped and rejected at lookup
        assert_eq!(Notation::detect("13B"), Notation::Camelot);
    }

    #[test]
    fn test_detect_open_key() {
        assert_eq!(Notation::detect("1m"), Notation::OpenKey);
        assert_eq!(Notation::detect("12D"), Notation::OpenKey);
    }

    #[test]
    fn test_detect_traktor() {
        assert_eq!(Notation::detect("C"), Notation::Traktor);
        assert_eq!(Notation::detect("F#m"), Notation::Traktor);
        assert_eq!(Notation::detect("bb"), Notation::Traktor);
        // Bare pitch letters d/m are Traktor, not Open Key
        assert_eq!(Notation::detect("dm"), Notation::Traktor);
    }

    #[test]
    fn test_detect_standard_fallback() {
        assert_eq!(Notation::detect("A-Flat Minor"), Notation::Standard);
        assert_eq!(Notation::detect("A♭ Minor"), Notation::Standard);
        assert_eq!(Notation::detect("not a key"), Notation::Standard);
        assert_eq!(Notation::detect(""), Notation::Standard);
    }
}
