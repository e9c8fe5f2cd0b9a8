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

//! Equation registry: the ordered table of equations and their domains.
//!
//! Indices are part of the public contract. Callers persist them, display
//! them on the indicator LEDs and use them to pick equations, so entries are
//! only ever appended to [`EQUATIONS`].

use log::debug;

use crate::equations::*;
use crate::params::{ParamRange, ParameterDomain, Parameters};

/// Number of equations in the reference table.
pub const NUM_EQUATIONS: usize = 16;

/// One registry entry: an equation and the domain its parameters are meant
/// to stay in.
#[derive(Debug, Clone, Copy)]
pub struct Equation {
    func: EquationFn,
    domain: ParameterDomain,
}

impl Equation {
    /// Pairs an equation with its declared domain.
    pub const fn new(func: EquationFn, domain: ParameterDomain) -> Self {
        Self { func, domain }
    }

    /// The equation function itself.
    #[inline]
    pub fn func(&self) -> EquationFn {
        self.func
    }

    /// Declared parameter domain.
    #[inline]
    pub const fn domain(&self) -> ParameterDomain {
        self.domain
    }

    /// Computes one sample. The parameters are not checked against the domain.
    #[inline]
    pub fn sample(&self, t: u32, a: u8, b: u8, c: u8) -> u8 {
        (self.func)(t, a, b, c)
    }

    /// Same as [`Equation::sample`] with the parameters bundled.
    #[inline]
    pub fn evaluate(&self, t: u32, params: Parameters) -> u8 {
        self.sample(t, params.a, params.b, params.c)
    }
}

const REFERENCE_TABLE: [Equation; NUM_EQUATIONS] = [
    Equation::new(equation_0, ParameterDomain::new(0, 8, 0, 12, 3, 10)),
    Equation::new(equation_1, ParameterDomain::new(0, 10, 0, 14, 0, 14)),
    Equation::new(equation_2, ParameterDomain::new(0, 12, 4, 20, 5, 12)),
    Equation::new(equation_3, ParameterDomain::new(6, 30, 0, 16, 0, 10)),
    Equation::new(equation_4, ParameterDomain::new(0, 12, 0, 16, 0, 10)),
    Equation::new(equation_5, ParameterDomain::new(0, 24, 0, 22, 0, 16)),
    Equation::new(equation_6, ParameterDomain::new(3, 10, 0, 28, 3, 10)),
    Equation::new(equation_7, ParameterDomain::new(0, 10, 10, 22, 0, 8)),
    Equation::new(equation_8, ParameterDomain::new(0, 12, 0, 20, 0, 20)),
    Equation::new(equation_9, ParameterDomain::new(0, 16, 0, 86, 0, 26)),
    Equation::new(equation_10, ParameterDomain::new(0, 8, 0, 22, 0, 16)),
    Equation::new(equation_11, ParameterDomain::new(0, 16, 0, 28, 3, 10)),
    Equation::new(equation_12, ParameterDomain::new(0, 18, 0, 28, 3, 10)),
    Equation::new(equation_13, ParameterDomain::new(0, 18, 0, 28, 3, 10)),
    Equation::new(equation_14, ParameterDomain::new(0, 8, 0, 12, 3, 10)),
    Equation::new(equation_15, ParameterDomain::new(0, 8, 0, 12, 3, 10)),
];

const fn domains_are_valid(entries: &[Equation]) -> bool {
    let mut i = 0;
    while i < entries.len() {
        if !entries[i].domain.is_valid() {
            return false;
        }
        i += 1;
    }
    true
}

// A malformed reference domain is a build error.
const _: () = assert!(domains_are_valid(&REFERENCE_TABLE));

/// The reference equations, indexed 0..15.
pub static EQUATIONS: [Equation; NUM_EQUATIONS] = REFERENCE_TABLE;

/// Errors raised by registry construction and lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Index is not in `0..len`.
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of equations in the registry
        len: usize,
    },
    /// An entry declares a range with `min > max`.
    MalformedDomain {
        /// Offending entry
        index: usize,
        /// `'a'`, `'b'` or `'c'`
        parameter: char,
        /// Declared minimum
        min: u8,
        /// Declared maximum
        max: u8,
    },
    /// A registry needs at least one equation.
    Empty,
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::IndexOutOfRange { index, len } => {
                write!(
                    f,
                    "equation index {} is out of range (registry has {} equations)",
                    index, len
                )
            }
            RegistryError::MalformedDomain {
                index,
                parameter,
                min,
                max,
            } => {
                write!(
                    f,
                    "equation {} declares an empty range for '{}': min {} > max {}",
                    index, parameter, min, max
                )
            }
            RegistryError::Empty => write!(f, "registry contains no equations"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Read-only view over a table of equations.
///
/// The view is `Copy` and borrows its table, so it can be handed to any
/// number of readers without synchronization.
#[derive(Debug, Clone, Copy)]
pub struct Registry<'a> {
    entries: &'a [Equation],
}

impl Registry<'static> {
    /// The built-in sixteen equations.
    pub fn reference() -> Self {
        Self {
            entries: &EQUATIONS,
        }
    }
}

impl Default for Registry<'static> {
    fn default() -> Self {
        Self::reference()
    }
}

impl<'a> Registry<'a> {
    /// Wraps a table after checking every declared domain.
    pub fn new(entries: &'a [Equation]) -> Result<Self, RegistryError> {
        if entries.is_empty() {
            return Err(RegistryError::Empty);
        }

        for (index, entry) in entries.iter().enumerate() {
            if let Some((parameter, ParamRange { min, max })) = entry.domain.first_malformed() {
                return Err(RegistryError::MalformedDomain {
                    index,
                    parameter,
                    min,
                    max,
                });
            }
        }

        debug!("registry built with {} equations", entries.len());

        Ok(Self { entries })
    }

    /// Number of equations.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed registry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&'a Equation, RegistryError> {
        self.entries
            .get(index)
            .ok_or(RegistryError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
    }

    /// Declared domain of an equation, exactly as written in its table entry.
    pub fn domain_of(&self, index: usize) -> Result<ParameterDomain, RegistryError> {
        self.get(index).map(Equation::domain)
    }

    /// Evaluates equation `index` at time `t`.
    ///
    /// The parameters are passed through unchanged; keeping them inside the
    /// declared domain is up to the caller.
    #[inline]
    pub fn evaluate(&self, index: usize, t: u32, a: u8, b: u8, c: u8) -> Result<u8, RegistryError> {
        self.get(index).map(|entry| entry.sample(t, a, b, c))
    }

    /// Entries with their indices, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &'a Equation)> + 'a {
        self.entries.iter().enumerate()
    }

    /// The underlying table.
    pub fn entries(&self) -> &'a [Equation] {
        self.entries
    }
}
