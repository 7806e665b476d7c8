//! Fuzz target for the input parser.
//!
//! Arbitrary bytes must never panic the parser, every successful parse must
//! consume at least one byte, and skipping as the stream decoder does must
//! always make progress.

#![no_main]

use editbox::input::{InputParser, ParseError};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // A small paste limit so the overflow path is reachable.
    let parser = InputParser::with_paste_limit(64);

    let mut remaining = data;
    while !remaining.is_empty() {
        let skip = match parser.parse(remaining) {
            Ok((_event, consumed)) => {
                assert!(consumed > 0, "parse consumed nothing");
                assert!(consumed <= remaining.len());
                consumed
            }
            Err(ParseError::Empty | ParseError::Incomplete | ParseError::PasteBufferOverflow) => {
                break;
            }
            Err(ParseError::UnrecognizedSequence(seq)) => seq.len().clamp(1, remaining.len()),
            Err(ParseError::InvalidUtf8) => 1,
        };
        remaining = &remaining[skip..];
    }
});
