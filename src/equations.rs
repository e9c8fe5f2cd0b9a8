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

//! The sixteen reference bytebeat equations.
//!
//! Each function maps a time counter and three parameters to one 8-bit
//! sample. Bytebeat formulas are traditionally published in C notation and
//! rely on its operator precedence; the bodies below spell that grouping out
//! with explicit parentheses. All arithmetic goes through [`Word`] so
//! overflow, oversized shifts and zero divisors follow the policy documented
//! in [`crate::arith`].
//!
//! New equations are appended at the end of the table in
//! [`crate::registry`]; existing indices never move.

use crate::arith::{words, Word};

/// Signature shared by every equation: `(t, a, b, c) -> sample`.
pub type EquationFn = fn(u32, u8, u8, u8) -> u8;

/// Nested masks of two shifted copies of `t`.
pub fn equation_0(t: u32, a: u8, b: u8, c: u8) -> u8 {
    let (t, a, b, c) = words(t, a, b, c);
    let masked = ((t & (t >> a)) + (t | (t >> b))) & (t >> (c + Word(1)));
    (masked | ((t >> a) & (t * (t >> b)))).sample()
}

/// Shift-left by a product that grows with `t`; collapses to silence quickly
/// for large `c`.
pub fn equation_1(t: u32, a: u8, b: u8, c: u8) -> u8 {
    let (t, a, b, c) = words(t, a, b, c);
    ((t >> (a + Word(1))) << ((t % b) * t * c)).sample()
}

/// `a = 0` turns `t % a` into `t`, see [`crate::arith`].
pub fn equation_2(t: u32, a: u8, b: u8, c: u8) -> u8 {
    let (t, a, b, c) = words(t, a, b, c);
    let head = (t >> c) ^ (t & Word(37));
    let scale = if (t % a).is_set() { Word(2) } else { Word(6) };
    let body = t + (t ^ (t >> a)) - t * (scale & (t >> b));
    let tail = if (t & b).is_set() {
        t >> Word(4)
    } else {
        t >> Word(10)
    };
    (head | (body ^ ((t << Word(1)) & tail))).sample()
}

/// Variant of 2 with the modulus replaced by a `t >> 6` test.
pub fn equation_3(t: u32, a: u8, b: u8, c: u8) -> u8 {
    let (t, a, b, c) = words(t, a, b, c);
    let head = ((b * t) >> a) ^ (t & (Word(37) - c));
    let pick = if (t >> Word(6)).is_set() { Word(2) } else { a };
    let body = t + (t ^ (t >> Word(11))) - t * (pick & (t >> (c + b)));
    let tail = if (t & Word(6)).is_set() {
        t >> Word(4)
    } else {
        t >> c
    };
    (head | (body ^ ((t << Word(1)) & tail))).sample()
}

/// Variant of 3 driven by `c * t`.
pub fn equation_4(t: u32, a: u8, b: u8, c: u8) -> u8 {
    let (t, a, b, c) = words(t, a, b, c);
    let head = ((c * t) >> Word(2)) ^ (t & (Word(30) - b));
    let pick = if (t >> Word(6)).is_set() { a } else { c };
    let body = t + (t ^ (t >> b)) - t * (pick & (t >> a));
    let tail = if (t & b).is_set() { t >> Word(4) } else { t >> c };
    (head | (body ^ ((t << Word(1)) & tail))).sample()
}

/// Masked sawtooth over a stepped product.
pub fn equation_5(t: u32, a: u8, b: u8, c: u8) -> u8 {
    let (t, a, b, c) = words(t, a, b, c);
    let masked = (t >> a) & t;
    (masked - (t >> a) + masked + t * ((t >> c) & b)).sample()
}

/// Falls back to the negated counter, so the high bits of `-t` reach the
/// output once `t >> b & t` goes to zero.
pub fn equation_6(t: u32, a: u8, b: u8, c: u8) -> u8 {
    let (t, a, b, c) = words(t, a, b, c);
    let out = if ((t >> b) & t).is_set() {
        t >> a
    } else {
        (-t) >> c
    };
    out.sample()
}

/// Pins the counter to `-65536` past 2^16, which makes the output a fixed
/// tone from then on.
pub fn equation_7(t: u32, a: u8, b: u8, c: u8) -> u8 {
    let (t, a, b, c) = words(t, a, b, c);
    let t = if t > Word(65_536) { -Word(65_536) } else { t };
    (((t >> a) | c | (t >> (t >> Word(16)))) * b + (t >> (b + Word(1)))).sample()
}

/// Product of two shifted counters masked by `b` and `t >> 8`.
pub fn equation_8(t: u32, a: u8, b: u8, c: u8) -> u8 {
    let (t, a, b, c) = words(t, a, b, c);
    let product = (t * ((t >> a) | (t >> (a & c)))) & b & (t >> Word(8));
    (product ^ ((t & (t >> c)) | (t >> Word(6)))).sample()
}

/// Three shifted copies of `t` stacked as a chord, gated by `t >> 7`.
pub fn equation_9(t: u32, a: u8, b: u8, c: u8) -> u8 {
    let (t, a, b, c) = words(t, a, b, c);
    let chord = ((t >> c) * Word(7)) | ((t >> a) * Word(8)) | ((t >> b) * Word(7));
    (chord & (t >> Word(7))).sample()
}

/// The modulus shifts by `t >> (9 - c)`; for `c > 9` the subtraction wraps
/// and only the low five bits of the amount count.
pub fn equation_10(t: u32, a: u8, b: u8, c: u8) -> u8 {
    let (t, a, b, c) = words(t, a, b, c);
    let modulus = (Word(128) - b) << (t >> (Word(9) - c));
    let swept = t >> (a % modulus);
    (((swept * b * t) >> (((c * t) << Word(4)) * t)) >> Word(18)).sample()
}

/// `c / (b << 2)` divides by zero when `b == 0`; the quotient saturates, but
/// it is masked with `t * b == 0` in that case.
pub fn equation_11(t: u32, a: u8, b: u8, c: u8) -> u8 {
    let (t, a, b, c) = words(t, a, b, c);
    let quotient = c / (b << Word(2));
    let mixed = ((t * Word(12)) & (t >> a)) | ((t * b) & (t >> c)) | ((t * b) & quotient);
    (mixed - Word(2)).sample()
}

/// Three scaled counters ANDed together.
pub fn equation_12(t: u32, a: u8, b: u8, c: u8) -> u8 {
    let (t, a, b, c) = words(t, a, b, c);
    ((t * (t >> a)) & ((b * t) >> Word(7)) & ((Word(8) * t) >> c)).sample()
}

/// Like 2 and 3, but the final branch depends on `a` instead of `t`.
pub fn equation_13(t: u32, a: u8, b: u8, c: u8) -> u8 {
    let (t, a, b, c) = words(t, a, b, c);
    let head = (t >> c) ^ (t & Word(1));
    let pick = if (t >> Word(4)).is_set() { b } else { a };
    let body = t + (t ^ (t >> Word(21))) - t * (pick & (t >> (Word(12) - (a >> Word(1)))));
    let tail = if (a & Word(12)).is_set() {
        t >> Word(4)
    } else {
        t >> Word(10)
    };
    (head | (body ^ ((t << Word(1)) & tail))).sample()
}

/// `-t * (t ^ t)` is always zero; it is kept so the formula reads like the
/// published version.
pub fn equation_14(t: u32, a: u8, b: u8, c: u8) -> u8 {
    let (t, a, b, c) = words(t, a, b, c);
    let out = if (t & (Word(4) << a)).is_set() {
        (((-t) * (t ^ t)) | (t >> b)) >> c
    } else {
        let doubled = if (t & (c << b)).is_set() { t << Word(1) } else { t };
        (t >> Word(4)) | doubled
    };
    out.sample()
}

/// Equation 14 with constant shifts of 3.
pub fn equation_15(t: u32, a: u8, b: u8, c: u8) -> u8 {
    let (t, a, b, c) = words(t, a, b, c);
    let out = if (t & (Word(4) << a)).is_set() {
        (((-t) * (t ^ t)) | (t >> b)) >> Word(3)
    } else {
        let doubled = if (t & (Word(3) << b)).is_set() {
            t << Word(1)
        } else {
            t
        };
        (t >> c) | doubled
    };
    out.sample()
}
