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

//! Equation parameters and their declared domains.

use serde::{Deserialize, Serialize};

/// The three tunable inputs fed to an equation alongside `t`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameters {
    /// First parameter (`a`)
    pub a: u8,
    /// Second parameter (`b`)
    pub b: u8,
    /// Third parameter (`c`)
    pub c: u8,
}

impl Parameters {
    /// Creates a parameter triple.
    pub const fn new(a: u8, b: u8, c: u8) -> Self {
        Self { a, b, c }
    }
}

/// Inclusive `[min, max]` range for one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParamRange {
    /// Lowest intended value
    pub min: u8,
    /// Highest intended value
    pub max: u8,
}

impl ParamRange {
    /// Creates a range. No ordering check happens here, see [`ParamRange::is_valid`].
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// A range is well formed when `min <= max`.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    /// Returns true when `value` lies inside the range.
    #[inline]
    pub const fn contains(&self, value: u8) -> bool {
        self.min <= value && value <= self.max
    }

    /// Pulls `value` into the range.
    #[inline]
    pub fn clamp(&self, value: u8) -> u8 {
        value.max(self.min).min(self.max)
    }

    /// Midpoint of the range, rounded down.
    #[inline]
    pub const fn center(&self) -> u8 {
        ((self.min as u16 + self.max as u16) / 2) as u8
    }
}

/// Declared ranges for `a`, `b` and `c` of one equation.
///
/// The ranges mark where an equation sounds the way it was designed to; they
/// are not a safety limit. Every equation accepts any `u8` for each parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterDomain {
    /// Range for `a`
    pub a: ParamRange,
    /// Range for `b`
    pub b: ParamRange,
    /// Range for `c`
    pub c: ParamRange,
}

impl ParameterDomain {
    /// Builds a domain from `(aMin, aMax, bMin, bMax, cMin, cMax)`.
    pub const fn new(a_min: u8, a_max: u8, b_min: u8, b_max: u8, c_min: u8, c_max: u8) -> Self {
        Self {
            a: ParamRange::new(a_min, a_max),
            b: ParamRange::new(b_min, b_max),
            c: ParamRange::new(c_min, c_max),
        }
    }

    /// Flattens the domain to `(aMin, aMax, bMin, bMax, cMin, cMax)`.
    pub const fn as_tuple(&self) -> (u8, u8, u8, u8, u8, u8) {
        (
            self.a.min, self.a.max, self.b.min, self.b.max, self.c.min, self.c.max,
        )
    }

    /// Ranges paired with their parameter names, in `a`, `b`, `c` order.
    pub const fn ranges(&self) -> [(char, ParamRange); 3] {
        [('a', self.a), ('b', self.b), ('c', self.c)]
    }

    /// All three ranges satisfy `min <= max`.
    pub const fn is_valid(&self) -> bool {
        self.a.is_valid() && self.b.is_valid() && self.c.is_valid()
    }

    /// First range with `min > max`, if any.
    pub fn first_malformed(&self) -> Option<(char, ParamRange)> {
        self.ranges().into_iter().find(|(_, range)| !range.is_valid())
    }

    /// Returns true when every parameter lies inside its range.
    pub const fn contains(&self, params: Parameters) -> bool {
        self.a.contains(params.a) && self.b.contains(params.b) && self.c.contains(params.c)
    }

    /// Clamps each parameter into its range.
    pub fn clamp(&self, params: Parameters) -> Parameters {
        Parameters {
            a: self.a.clamp(params.a),
            b: self.b.clamp(params.b),
            c: self.c.clamp(params.c),
        }
    }

    /// Parameters at the lower end of every range.
    pub const fn lower(&self) -> Parameters {
        Parameters::new(self.a.min, self.b.min, self.c.min)
    }

    /// Parameters at the upper end of every range.
    pub const fn upper(&self) -> Parameters {
        Parameters::new(self.a.max, self.b.max, self.c.max)
    }

    /// Midpoint of every range.
    pub const fn center(&self) -> Parameters {
        Parameters::new(self.a.center(), self.b.center(), self.c.center())
    }
}
