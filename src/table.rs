//! The 24-entry key wheel table and its lookup maps
//!
//! Holds the canonical spelling of every key in each notation and performs
//! parse (string -> [`Key`]) and render ([`Key`] -> string). The Camelot and
//! Open Key wheels are rotationally offset, not numerically identical:
//! Camelot `n` pairs with Open Key `((n + 4) mod 12) + 1` in the same mode
//! (so Camelot 8B, Open Key 1d, and C Major are the same key). The pairing
//! is stored per entry rather than computed.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::key::Key;
use crate::notation::Notation;

/// One row of the key wheel: a canonical key and its spelling in every
/// supported notation.
#[derive(Debug, Clone, Copy)]
pub struct KeyEntry {
    /// Canonical key identity.
    pub key: Key,
    /// Camelot wheel code.
    pub camelot: &'static str,
    /// Open Key code.
    pub open_key: &'static str,
    /// Traktor code, sharp spelling.
    pub traktor: &'static str,
    /// Standard name, `-Flat`/`-Sharp` spelling.
    pub standard_text: &'static str,
    /// Standard name, `♭`/`#` spelling.
    pub standard_symbol: &'static str,
}

/// The key wheel, in Camelot order.
static ENTRIES: [KeyEntry; 24] = [
    KeyEntry { key: Key::Minor(8), camelot: "1A", open_key: "6m", traktor: "G#m", standard_text: "A-Flat Minor", standard_symbol: "A♭ Minor" },
    KeyEntry { key: Key::Major(11), camelot: "1B", open_key: "6d", traktor: "B", standard_text: "B Major", standard_symbol: "B Major" },
    KeyEntry { key: Key::Minor(3), camelot: "2A", open_key: "7m", traktor: "D#m", standard_text: "E-Flat Minor", standard_symbol: "E♭ Minor" },
    KeyEntry { key: Key::Major(6), camelot: "2B", open_key: "7d", traktor: "F#", standard_text: "F-Sharp Major", standard_symbol: "F# Major" },
    KeyEntry { key: Key::Minor(10), camelot: "3A", open_key: "8m", traktor: "A#m", standard_text: "B-Flat Minor", standard_symbol: "B♭ Minor" },
    KeyEntry { key: Key::Major(1), camelot: "3B", open_key: "8d", traktor: "C#", standard_text: "D-Flat Major", standard_symbol: "D♭ Major" },
    KeyEntry { key: Key::Minor(5), camelot: "4A", open_key: "9m", traktor: "Fm", standard_text: "F Minor", standard_symbol: "F Minor" },
    KeyEntry { key: Key::Major(8), camelot: "4B", open_key: "9d", traktor: "G#", standard_text: "A-Flat Major", standard_symbol: "A♭ Major" },
    KeyEntry { key: Key::Minor(0), camelot: "5A", open_key: "10m", traktor: "Cm", standard_text: "C Minor", standard_symbol: "C Minor" },
    KeyEntry { key: Key::Major(3), camelot: "5B", open_key: "10d", traktor: "D#", standard_text: "E-Flat Major", standard_symbol: "E♭ Major" },
    KeyEntry { key: Key::Minor(7), camelot: "6A", open_key: "11m", traktor: "Gm", standard_text: "G Minor", standard_symbol: "G Minor" },
    KeyEntry { key: Key::Major(10), camelot: "6B", open_key: "11d", traktor: "A#", standard_text: "B-Flat Major", standard_symbol: "B♭ Major" },
    KeyEntry { key: Key::Minor(2), camelot: "7A", open_key: "12m", traktor: "Dm", standard_text: "D Minor", standard_symbol: "D Minor" },
    KeyEntry { key: Key::Major(5), camelot: "7B", open_key: "12d", traktor: "F", standard_text: "F Major", standard_symbol: "F Major" },
    KeyEntry { key: Key::Minor(9), camelot: "8A", open_key: "1m", traktor: "Am", standard_text: "A Minor", standard_symbol: "A Minor" },
    KeyEntry { key: Key::Major(0), camelot: "8B", open_key: "1d", traktor: "C", standard_text: "C Major", standard_symbol: "C Major" },
    KeyEntry { key: Key::Minor(4), camelot: "9A", open_key: "2m", traktor: "Em", standard_text: "E Minor", standard_symbol: "E Minor" },
    KeyEntry { key: Key::Major(7), camelot: "9B", open_key: "2d", traktor: "G", standard_text: "G Major", standard_symbol: "G Major" },
    KeyEntry { key: Key::Minor(11), camelot: "10A", open_key: "3m", traktor: "Bm", standard_text: "B Minor", standard_symbol: "B Minor" },
    KeyEntry { key: Key::Major(2), camelot: "10B", open_key: "3d", traktor: "D", standard_text: "D Major", standard_symbol: "D Major" },
    KeyEntry { key: Key::Minor(6), camelot: "11A", open_key: "4m", traktor: "F#m", standard_text: "G-Flat Minor", standard_symbol: "G♭ Minor" },
    KeyEntry { key: Key::Major(9), camelot: "11B", open_key: "4d", traktor: "A", standard_text: "A Major", standard_symbol: "A Major" },
    KeyEntry { key: Key::Minor(1), camelot: "12A", open_key: "5m", traktor: "C#m", standard_text: "D-Flat Minor", standard_symbol: "D♭ Minor" },
    KeyEntry { key: Key::Major(4), camelot: "12B", open_key: "5d", traktor: "E", standard_text: "E Major", standard_symbol: "E Major" },
];

/// Flat spellings accepted as Traktor input; the table stores sharps.
const TRAKTOR_FLAT_ALTERNATES: [(&str, &str); 10] = [
    ("ab", "g#"),
    ("bb", "a#"),
    ("db", "c#"),
    ("eb", "d#"),
    ("gb", "f#"),
    ("abm", "g#m"),
    ("bbm", "a#m"),
    ("dbm", "c#m"),
    ("ebm", "d#m"),
    ("gbm", "f#m"),
];

/// Enharmonic standard names the wheel documents under the other spelling.
const STANDARD_ALTERNATES: [(&str, &str); 2] = [
    ("g-flat major", "f-sharp major"),
    ("d-sharp minor", "e-flat minor"),
];

/// Static bidirectional mapping between canonical keys and their textual
/// representations.
///
/// Built once, immutable afterwards. Each supported input notation gets its
/// own lookup map so a parse is a single hash lookup after normalization.
///
/// # Example
///
/// ```
/// use keywheel::{Key, KeyTable, Notation};
///
/// let table = KeyTable::new();
/// let key = table.parse(" 2b ").unwrap();
/// assert_eq!(key, Key::Major(6));
/// assert_eq!(table.render(key, Notation::OpenKey, false), "7d");
/// assert_eq!(table.render(key, Notation::Standard, true), "F# Major");
/// ```
#[derive(Debug)]
pub struct KeyTable {
    by_camelot: HashMap<String, usize>,
    by_open_key: HashMap<String, usize>,
    by_traktor: HashMap<String, usize>,
    by_standard: HashMap<String, usize>,
    // Entry index per key, slot = pitch class + 12 for minor
    by_key: [usize; 24],
}

impl KeyTable {
    /// Build the table and its per-notation lookup maps.
    pub fn new() -> Self {
        let mut by_camelot = HashMap::with_capacity(ENTRIES.len());
        let mut by_open_key = HashMap::with_capacity(ENTRIES.len());
        let mut by_traktor =
            HashMap::with_capacity(ENTRIES.len() + TRAKTOR_FLAT_ALTERNATES.len());
        let mut by_standard =
            HashMap::with_capacity(ENTRIES.len() + STANDARD_ALTERNATES.len());
        let mut by_key = [0usize; 24];

        for (idx, entry) in ENTRIES.iter().enumerate() {
            by_camelot.insert(entry.camelot.to_ascii_lowercase(), idx);
            by_open_key.insert(entry.open_key.to_ascii_lowercase(), idx);
            by_traktor.insert(entry.traktor.to_ascii_lowercase(), idx);
            by_standard.insert(entry.standard_text.to_lowercase(), idx);
            by_key[Self::slot(entry.key)] = idx;
        }

        for (alt, canonical) in TRAKTOR_FLAT_ALTERNATES {
            let idx = by_traktor[canonical];
            by_traktor.insert(alt.to_string(), idx);
        }

        for (alt, canonical) in STANDARD_ALTERNATES {
            let idx = by_standard[canonical];
            by_standard.insert(alt.to_string(), idx);
        }

        Self {
            by_camelot,
            by_open_key,
            by_traktor,
            by_standard,
            by_key,
        }
    }

    /// Process-wide table, built on first use and read-only afterwards.
    pub fn shared() -> &'static KeyTable {
        static TABLE: OnceLock<KeyTable> = OnceLock::new();
        TABLE.get_or_init(KeyTable::new)
    }

    /// All 24 entries, in Camelot order.
    pub fn entries(&self) -> &'static [KeyEntry; 24] {
        &ENTRIES
    }

    /// Parse a key string in any supported notation
    ///
    /// Leading/trailing whitespace is ignored and matching is
    /// case-insensitive. Returns `None` for anything that names no valid
    /// key; malformed input is an expected case, not a fault.
    ///
    /// # Example
    ///
    /// ```
    /// use keywheel::{Key, KeyTable};
    ///
    /// let table = KeyTable::new();
    /// assert_eq!(table.parse("12A"), Some(Key::Minor(1)));
    /// assert_eq!(table.parse("a flat minor"), Some(Key::Minor(8)));
    /// assert_eq!(table.parse("13B"), None);
    /// assert_eq!(table.parse(""), None);
    /// ```
    pub fn parse(&self, input: &str) -> Option<Key> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let idx = match Notation::detect(input) {
            Notation::Camelot => self.by_camelot.get(&input.to_ascii_lowercase()),
            Notation::OpenKey => self.by_open_key.get(&input.to_ascii_lowercase()),
            Notation::Traktor => self.by_traktor.get(&input.to_ascii_lowercase()),
            Notation::Standard => self.by_standard.get(&normalize_standard(input)),
        }?;

        Some(ENTRIES[*idx].key)
    }

    /// Render a key in the requested notation
    ///
    /// Total over the 24 valid keys. `symbols` selects `♭`/`#` over
    /// `-Flat`/`-Sharp` for [`Notation::Standard`]; the other notations
    /// ignore it.
    pub fn render(&self, key: Key, notation: Notation, symbols: bool) -> &'static str {
        let entry = &ENTRIES[self.by_key[Self::slot(key)]];
        match notation {
            Notation::Camelot => entry.camelot,
            Notation::OpenKey => entry.open_key,
            Notation::Traktor => entry.traktor,
            Notation::Standard if symbols => entry.standard_symbol,
            Notation::Standard => entry.standard_text,
        }
    }

    /// Parse then render: convert a key string to the requested notation.
    pub fn convert(
        &self,
        input: &str,
        notation: Notation,
        symbols: bool,
    ) -> Option<&'static str> {
        self.parse(input)
            .map(|key| self.render(key, notation, symbols))
    }

    fn slot(key: Key) -> usize {
        let offset = if key.is_minor() { 12 } else { 0 };
        offset + key.pitch_class() as usize
    }
}

impl Default for KeyTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize a standard-notation input to its lookup form: lowercase,
/// hyphenated accidentals, single spaces ("A♭  Minor" -> "a-flat minor").
fn normalize_standard(input: &str) -> String {
    let lowered = input
        .to_lowercase()
        .replace('♭', "-flat")
        .replace('#', "-sharp")
        .replace(" flat", "-flat")
        .replace(" sharp", "-sharp");
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}
