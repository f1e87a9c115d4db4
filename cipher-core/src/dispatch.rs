// File:    dispatch.rs
// Author:  apezoo
// Date:    2026-08-29
//
// Description: Validates raw key input and dispatches to the selected cipher transform.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! This module validates caller-supplied keys and dispatches to the cipher
//! transforms. It is the single entry point front ends are expected to use.

use std::fmt;

use log::debug;
use thiserror::Error;

use crate::{keyword, shift};

/// Which way a cipher is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Forward application of the cipher.
    Encode,
    /// Inverse application of the cipher with the same key.
    Decode,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode => write!(f, "encode"),
            Self::Decode => write!(f, "decode"),
        }
    }
}

/// Selects which cipher transform runs and which key shape is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cipher {
    /// Fixed-offset substitution, keyed by an integer shift.
    Shift,
    /// Repeating-keyword polyalphabetic substitution, keyed by letters.
    Keyword,
}

impl fmt::Display for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shift => write!(f, "shift"),
            Self::Keyword => write!(f, "keyword"),
        }
    }
}

/// Errors reported by [`apply`] before any transform runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The raw key does not match the shape the selected cipher expects.
    #[error("bad key {received:?} for the {cipher} cipher: expected {expected}")]
    InvalidKeyFormat {
        /// The cipher the key was supplied for.
        cipher: Cipher,
        /// Human-readable description of the expected key shape.
        expected: &'static str,
        /// The key exactly as the caller supplied it.
        received: String,
    },
}

/// Validates `raw_key` for the selected cipher and applies the transform.
///
/// For [`Cipher::Shift`] the key must parse as a signed base-10 integer;
/// callers are expected to trim surrounding whitespace beforehand. For
/// [`Cipher::Keyword`] the key must be non-empty and consist entirely of
/// ASCII letters. Note that the pure keyword transform tolerates a
/// degenerate key as a no-op while this layer rejects it: a silent no-op at
/// the user-facing boundary would be a usability defect.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidKeyFormat`] when the key fails the
/// shape check for the selected cipher. The transforms themselves never
/// fail.
pub fn apply(
    text: &str,
    cipher: Cipher,
    direction: Direction,
    raw_key: &str,
) -> Result<String, ValidationError> {
    debug!(
        "applying {cipher} cipher ({direction}) to {} characters",
        text.chars().count()
    );
    match cipher {
        Cipher::Shift => {
            let key: i64 = raw_key.parse().map_err(|_| ValidationError::InvalidKeyFormat {
                cipher,
                expected: "an integer shift value",
                received: raw_key.to_owned(),
            })?;
            Ok(shift::transform(text, key, direction))
        }
        Cipher::Keyword => {
            if raw_key.is_empty() || !raw_key.chars().all(|ch| ch.is_ascii_alphabetic()) {
                return Err(ValidationError::InvalidKeyFormat {
                    cipher,
                    expected: "letters A-Z only, non-empty",
                    received: raw_key.to_owned(),
                });
            }
            Ok(keyword::transform(text, raw_key, direction))
        }
    }
}
