//! Fuzz target for the paste parser.
//!
//! This fuzzer tests that parsing:
//! 1. Never panics on malformed text or HTML
//! 2. Only ever returns rectangular tables
//! 3. Doesn't allocate unbounded memory

#![no_main]

use libfuzzer_sys::fuzz_target;
use pastegrid::Pastegrid;

fuzz_target!(|data: &[u8]| {
    // Only process clipboard-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(table) = Pastegrid::new().parse(input) {
        assert!(table.is_rectangular());
    }
});
