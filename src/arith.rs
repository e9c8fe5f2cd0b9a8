// Copyright 2025 Glitch Storm Contributors.
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.
//
// See http://creativecommons.org/licenses/MIT/ for more information.

//! Fixed-width arithmetic shared by every equation.
//!
//! Bytebeat formulas lean on integer overflow for their timbre, so the exact
//! numeric rules matter as much as the formulas themselves. All equations
//! evaluate on [`Word`], a 32-bit unsigned value whose operators follow one
//! policy:
//!
//! - `+`, `-`, `*` and unary `-` wrap modulo 2^32.
//! - `<<` and `>>` take the shift amount modulo 32.
//! - `/` by zero saturates to [`Word::MAX`].
//! - `%` by zero returns the dividend unchanged.
//! - A word used as a condition is true when non-zero.
//!
//! Parameters are zero-extended into a `Word` before use and the produced
//! sample is the low byte of the final word.

use core::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Rem, Shl, Shr, Sub};

/// 32-bit unsigned word with wrapping semantics on every operator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(pub u32);

impl Word {
    /// Largest representable word, also the result of a division by zero.
    pub const MAX: Word = Word(u32::MAX);

    /// Returns true for any non-zero word.
    #[inline]
    pub const fn is_set(self) -> bool {
        self.0 != 0
    }

    /// Truncates the word to an 8-bit sample.
    #[inline]
    pub const fn sample(self) -> u8 {
        self.0 as u8
    }
}

impl From<u32> for Word {
    #[inline]
    fn from(value: u32) -> Self {
        Word(value)
    }
}

impl From<u8> for Word {
    #[inline]
    fn from(value: u8) -> Self {
        Word(value as u32)
    }
}

/// Lifts the raw equation inputs into words.
#[inline]
pub fn words(t: u32, a: u8, b: u8, c: u8) -> (Word, Word, Word, Word) {
    (Word(t), Word::from(a), Word::from(b), Word::from(c))
}

macro_rules! word_op {
    ($trait:ident, $method:ident, |$lhs:ident, $rhs:ident| $body:expr) => {
        impl $trait for Word {
            type Output = Word;

            #[inline]
            fn $method(self, rhs: Word) -> Word {
                let ($lhs, $rhs) = (self.0, rhs.0);
                Word($body)
            }
        }
    };
}

word_op!(Add, add, |x, y| x.wrapping_add(y));
word_op!(Sub, sub, |x, y| x.wrapping_sub(y));
word_op!(Mul, mul, |x, y| x.wrapping_mul(y));
word_op!(Div, div, |x, y| x.checked_div(y).unwrap_or(u32::MAX));
word_op!(Rem, rem, |x, y| x.checked_rem(y).unwrap_or(x));
word_op!(Shl, shl, |x, y| x.wrapping_shl(y));
word_op!(Shr, shr, |x, y| x.wrapping_shr(y));
word_op!(BitAnd, bitand, |x, y| x & y);
word_op!(BitOr, bitor, |x, y| x | y);
word_op!(BitXor, bitxor, |x, y| x ^ y);

impl Neg for Word {
    type Output = Word;

    #[inline]
    fn neg(self) -> Word {
        Word(self.0.wrapping_neg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_wraps() {
        assert_eq!(Word::MAX + Word(1), Word(0));
        assert_eq!(Word(0) - Word(2), Word(0xFFFF_FFFE));
        assert_eq!(Word(0x8000_0000) * Word(2), Word(0));
        assert_eq!(Word(30) - Word(200), Word(30u32.wrapping_sub(200)));
    }

    #[test]
    fn test_negation_is_twos_complement() {
        assert_eq!(-Word(1), Word::MAX);
        assert_eq!(-Word(0), Word(0));
        assert_eq!(-Word(65536), Word(0xFFFF_0000));
        assert_eq!((-Word(5)) >> Word(28), Word(0xF));
    }

    #[test]
    fn test_shift_amount_taken_modulo_width() {
        assert_eq!(Word(1) << Word(32), Word(1));
        assert_eq!(Word(1) << Word(33), Word(2));
        assert_eq!(Word(0x8000_0000) >> Word(63), Word(1));
        assert_eq!(Word(0xF0) >> Word(0xFFFF), Word(0));
        // 9 - 16 wraps to 0xFFFF_FFF9, which shifts by 25
        assert_eq!(Word(1 << 25) >> (Word(9) - Word(16)), Word(1));
    }

    #[test]
    fn test_division_by_zero_saturates() {
        assert_eq!(Word(7) / Word(0), Word::MAX);
        assert_eq!(Word(0) / Word(0), Word::MAX);
        assert_eq!(Word(7) / Word(2), Word(3));
    }

    #[test]
    fn test_remainder_by_zero_keeps_dividend() {
        assert_eq!(Word(1234) % Word(0), Word(1234));
        assert_eq!(Word(1234) % Word(10), Word(4));
    }

    #[test]
    fn test_sample_keeps_low_byte() {
        assert_eq!(Word(0x1234_56AB).sample(), 0xAB);
        assert!(Word(0x100).is_set());
        assert_eq!(Word(0x100).sample(), 0);
        assert!(!Word(0).is_set());
    }
}
