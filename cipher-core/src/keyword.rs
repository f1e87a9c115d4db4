// File:    keyword.rs
// Author:  apezoo
// Date:    2026-08-29
//
// Description: Repeating-keyword polyalphabetic substitution over the 26-letter ASCII alphabet.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! This module contains the repeating-keyword cipher transform.

use crate::dispatch::Direction;
use crate::shift::shift_letter;

/// Shifts every ASCII letter in `text` by the letter value of the next
/// keyword character, cycling through the keyword. Keyword characters map
/// case-insensitively to 0..=25 ('a' or 'A' is 0); non-alphabetic keyword
/// characters are discarded during that derivation.
///
/// The keyword position advances only on alphabetic text characters:
/// digits, punctuation and whitespace are copied through without consuming
/// a keyword letter. Decoding with the same keyword inverts encoding
/// exactly, and the keyword's own casing never affects the output.
///
/// A key with no usable letters makes this transform the identity. Callers
/// that must reject such keys instead of silently passing text through go
/// through [`crate::dispatch::apply`], which validates the key first.
#[must_use]
pub fn transform(text: &str, key: &str, direction: Direction) -> String {
    let offsets: Vec<u8> = key
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|ch| ch.to_ascii_lowercase() as u8 - b'a')
        .collect();
    if offsets.is_empty() {
        return text.to_owned();
    }

    let mut position = 0;
    text.chars()
        .map(|ch| {
            if ch.is_ascii_alphabetic() {
                let offset = offsets[position % offsets.len()];
                let amount = match direction {
                    Direction::Encode => offset,
                    Direction::Decode => (26 - offset) % 26,
                };
                position += 1;
                shift_letter(ch, amount)
            } else {
                ch
            }
        })
        .collect()
}
