// File:    lib.rs
// Author:  apezoo
// Date:    2026-08-29
//
// Description: The main library crate for cipher-core, the text-transformation engine behind the classical cipher utility.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Classical Cipher Core Library
//!
//! This library provides the text-transformation engine for the classical
//! cipher utility: a fixed-shift substitution cipher, a repeating-keyword
//! polyalphabetic cipher, and the validation layer that guards both.
//!
//! Transforms operate on the 26-letter ASCII alphabet only. Letter case is
//! preserved, every non-alphabetic character passes through unchanged, and
//! each call is a pure function of its inputs.

/// Key validation and dispatch to the selected cipher transform.
pub mod dispatch;
/// Repeating-keyword (Vigenere) polyalphabetic substitution.
pub mod keyword;
/// Fixed-shift (Caesar) substitution.
pub mod shift;

pub use dispatch::{Cipher, Direction, ValidationError, apply};
