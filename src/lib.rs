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

//! Glitch Storm bytebeat engine.
//!
//! Each audio sample is one byte computed from a 32-bit time counter `t` and
//! three small parameters `a`, `b`, `c` by one of sixteen integer equations.
//! The [`registry`] pairs every equation with the parameter ranges it was
//! tuned for and dispatches by index; [`voice`], [`automation`], [`indicator`]
//! and [`wav`] are callers built on top of it.
//!
//! ```
//! let domain = glitchstorm::domain_of(3).unwrap();
//! let p = domain.center();
//! let sample = glitchstorm::evaluate(3, 8000, p.a, p.b, p.c).unwrap();
//! # let _ = sample;
//! assert!(glitchstorm::evaluate(16, 0, 0, 0, 0).is_err());
//! ```

#![warn(missing_docs)]

pub mod arith;
pub mod automation;
pub mod equations;
pub mod indicator;
pub mod params;
pub mod random;
pub mod registry;
pub mod sidecar;
pub mod voice;
pub mod wav;

pub use equations::EquationFn;
pub use params::{ParamRange, ParameterDomain, Parameters};
pub use registry::{Equation, Registry, RegistryError, EQUATIONS, NUM_EQUATIONS};
pub use voice::Voice;

/// Number of equations in the reference registry.
pub fn registry_size() -> usize {
    Registry::reference().len()
}

/// Declared `(aMin, aMax, bMin, bMax, cMin, cMax)` domain of a reference
/// equation.
pub fn domain_of(index: usize) -> Result<ParameterDomain, RegistryError> {
    Registry::reference().domain_of(index)
}

/// Evaluates reference equation `index` at time `t`.
pub fn evaluate(index: usize, t: u32, a: u8, b: u8, c: u8) -> Result<u8, RegistryError> {
    Registry::reference().evaluate(index, t, a, b, c)
}
