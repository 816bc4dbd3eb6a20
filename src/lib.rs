//! # Keywheel
//!
//! Musical key notation conversion for DJ and music-library tooling,
//! covering the four common textual key formats:
//!
//! - **Camelot wheel**: `1A`..`12A` (minor), `1B`..`12B` (major)
//! - **Open Key**: `1m`..`12m` (minor), `1d`..`12d` (major)
//! - **Standard notation**: `C Major`, `A-Flat Minor` / `A♭ Minor`
//! - **Traktor**: sharp-spelled pitch letter plus `m` for minor (`C#m`, `F`)
//!
//! ## Quick Start
//!
//! ```
//! use keywheel::{key_to_camelot, key_to_standard, key_to_traktor};
//!
//! assert_eq!(key_to_camelot("1d"), "8B"); // Open Key -> Camelot
//! assert_eq!(key_to_standard("8B", false), "C Major");
//! assert_eq!(key_to_standard("2B", true), "F# Major");
//! assert_eq!(key_to_traktor("A♭ Minor"), "G#m");
//! assert_eq!(key_to_camelot("definitely not a key"), "");
//! ```
//!
//! Unrecognized input is an expected case, not a fault: the `key_to_*`
//! functions return an empty string, the documented contract for "key not
//! recognized". Callers that want a typed result instead go through
//! [`KeyTable::parse`] (`Option<Key>`) or [`str::parse`]
//! (`Result<Key, ParseKeyError>`).
//!
//! ## Architecture
//!
//! A single static table of the 24 musical keys (12 pitch classes x
//! {major, minor}) backs everything:
//!
//! ```text
//! Input String → Notation::detect → KeyTable lookup → Key → render → Output String
//! ```
//!
//! The table is built once, holds one lookup map per input notation, and is
//! read-only for the life of the process, so concurrent use needs no
//! locking.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod key;
pub mod notation;
pub mod table;

// Re-export main types
pub use error::ParseKeyError;
pub use key::Key;
pub use notation::Notation;
pub use table::{KeyEntry, KeyTable};

/// Convert a key string in any supported notation to its Camelot code
///
/// # Arguments
///
/// * `key` - Key string in any supported notation, e.g. `"6m"`, `"C"`,
///   `"A-Flat Minor"`, `"G#m"`
///
/// # Returns
///
/// The Camelot code (`"1A"`..`"12B"`), or an empty string if `key` is not
/// recognized as one of the 24 keys in a supported notation.
///
/// # Example
///
/// ```
/// use keywheel::key_to_camelot;
///
/// assert_eq!(key_to_camelot("1d"), "8B");
/// assert_eq!(key_to_camelot("A-Flat Minor"), "1A");
/// assert_eq!(key_to_camelot("G#m"), "1A");
/// assert_eq!(key_to_camelot("13B"), "");
/// ```
pub fn key_to_camelot(key: &str) -> String {
    convert_or_empty(key, Notation::Camelot, false)
}

/// Convert a key string in any supported notation to its Open Key code.
///
/// Returns the Open Key code (`"1m"`..`"12d"`), or an empty string if `key`
/// is not recognized.
///
/// # Example
///
/// ```
/// use keywheel::key_to_open_key;
///
/// assert_eq!(key_to_open_key("8B"), "1d");
/// assert_eq!(key_to_open_key("Am"), "1m");
/// ```
pub fn key_to_open_key(key: &str) -> String {
    convert_or_empty(key, Notation::OpenKey, false)
}

/// Convert a key string in any supported notation to its standard name.
///
/// With `symbols` set, accidentals are spelled `♭`/`#` rather than
/// `-Flat`/`-Sharp`. Returns an empty string if `key` is not recognized.
///
/// # Example
///
/// ```
/// use keywheel::key_to_standard;
///
/// assert_eq!(key_to_standard("1A", false), "A-Flat Minor");
/// assert_eq!(key_to_standard("1A", true), "A♭ Minor");
/// assert_eq!(key_to_standard("A-Flat Minor", false), "A-Flat Minor");
/// ```
pub fn key_to_standard(key: &str, symbols: bool) -> String {
    convert_or_empty(key, Notation::Standard, symbols)
}

/// Convert a key string in any supported notation to its Traktor code.
///
/// Returns the sharp-spelled Traktor code (`"C#"`, `"G#m"`, ...), or an
/// empty string if `key` is not recognized.
///
/// # Example
///
/// ```
/// use keywheel::key_to_traktor;
///
/// assert_eq!(key_to_traktor("C#"), "C#");
/// assert_eq!(key_to_traktor("Db"), "C#");
/// assert_eq!(key_to_traktor("1A"), "G#m");
/// ```
pub fn key_to_traktor(key: &str) -> String {
    convert_or_empty(key, Notation::Traktor, false)
}

fn convert_or_empty(input: &str, notation: Notation, symbols: bool) -> String {
    match KeyTable::shared().convert(input, notation, symbols) {
        Some(code) => code.to_string(),
        None => {
            log::debug!("Unable to match key: {:?}", input);
            String::new()
        }
    }
}
