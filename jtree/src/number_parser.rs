// SPDX-License-Identifier: Apache-2.0

use crate::slice_input_buffer::InputBuffer;

/// Trait for extracting number slices from different buffer implementations.
pub trait NumberExtractor {
    /// Extract the bytes between `start` (inclusive) and `end` (exclusive).
    fn get_number_slice(&self, start: usize, end: usize) -> Option<&[u8]>;
}

fn consume_digits<B: InputBuffer>(input: &mut B) -> usize {
    let mut count = 0;
    while matches!(input.peek(), Some(b'0'..=b'9')) {
        let _ = input.consume_byte();
        count += 1;
    }
    count
}

/// Parse the longest numeric-literal prefix at the cursor, after skipping whitespace.
///
/// Accepts an optional sign, digits with an optional decimal point on either
/// side (`5.`, `.5`), and an optional exponent. An `e` not followed by exponent digits is left unconsumed.
/// Out-of-range literals are rejected rather than saturated to infinity.
///
/// On failure the cursor is rewound to where the literal would have started.
pub fn parse_number<B: InputBuffer + NumberExtractor>(input: &mut B) -> Option<f64> {
    input.skip_whitespace();
    let start = input.current_pos();

    if matches!(input.peek(), Some(b'+' | b'-')) {
        let _ = input.consume_byte();
    }
    let mut digits = consume_digits(input);
    if input.peek() == Some(b'.') {
        let _ = input.consume_byte();
        digits += consume_digits(input);
    }
    if digits == 0 {
        input.restore(start);
        return None;
    }

    if matches!(input.peek(), Some(b'e' | b'E')) {
        let mark = input.current_pos();
        let _ = input.consume_byte();
        if matches!(input.peek(), Some(b'+' | b'-')) {
            let _ = input.consume_byte();
        }
        if consume_digits(input) == 0 {
            input.restore(mark);
        }
    }

    let end = input.current_pos();
    let parsed = input
        .get_number_slice(start, end)
        .and_then(|bytes| core::str::from_utf8(bytes).ok())
        .and_then(|text| text.parse::<f64>().ok())
        .filter(|value| value.is_finite());

    if parsed.is_none() {
        log::trace!("number literal at {} out of range", start);
        input.restore(start);
    }
    parsed
}
