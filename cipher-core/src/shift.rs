// File:    shift.rs
// Author:  apezoo
// Date:    2026-08-29
//
// Description: Fixed-shift substitution over the 26-letter ASCII alphabet.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! This module contains the fixed-shift cipher transform.

use crate::dispatch::Direction;

/// Shifts every ASCII letter in `text` by `key` positions through the
/// alphabet, wrapping at the boundary and staying within the letter's own
/// case band. Non-alphabetic characters are copied through unchanged.
///
/// Any integer key is acceptable: it is reduced modulo 26 before use, so a
/// key of -3 behaves like 23 and a key of 29 behaves like 3. Decoding with
/// the same key inverts encoding exactly.
#[must_use]
pub fn transform(text: &str, key: i64, direction: Direction) -> String {
    let normalized = key.rem_euclid(26) as u8;
    let amount = match direction {
        Direction::Encode => normalized,
        Direction::Decode => (26 - normalized) % 26,
    };
    text.chars()
        .map(|ch| {
            if ch.is_ascii_alphabetic() {
                shift_letter(ch, amount)
            } else {
                ch
            }
        })
        .collect()
}

/// Moves a single ASCII letter forward by `amount` (0..=25) within its own
/// case band.
pub(crate) fn shift_letter(ch: char, amount: u8) -> char {
    let origin = if ch.is_ascii_uppercase() { b'A' } else { b'a' };
    ((ch as u8 - origin + amount) % 26 + origin) as char
}
