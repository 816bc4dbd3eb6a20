//! Example: convert key strings between the supported notations
//!
//! Run with `cargo run --example convert_key`. Set `RUST_LOG=debug` to see
//! the log line emitted for unmatched inputs.

use keywheel::{key_to_camelot, key_to_open_key, key_to_standard, key_to_traktor};

fn main() {
    // Initialize logger
    env_logger::init();

    let inputs = ["8B", "1d", "C#m", "A♭ Minor", "a flat major", "2b", "not a key"];

    for input in inputs {
        println!("Input: {:?}", input);
        println!("  camelot:          {}", key_to_camelot(input));
        println!("  open key:         {}", key_to_open_key(input));
        println!("  standard:         {}", key_to_standard(input, false));
        println!("  standard symbols: {}", key_to_standard(input, true));
        println!("  traktor:          {}", key_to_traktor(input));
    }
}
