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

//! A single bytebeat voice: the caller side of the registry.
//!
//! The registry itself is stateless. A [`Voice`] owns what the registry
//! leaves to its callers: the running time counter, the selected equation
//! and the current parameter triple.

use log::{debug, trace};

use crate::params::{ParameterDomain, Parameters};
use crate::registry::{Equation, Registry, RegistryError};

/// Time counter plus equation selection.
#[derive(Debug, Clone)]
pub struct Voice<'a> {
    registry: Registry<'a>,
    index: usize,
    equation: Equation,
    params: Parameters,
    time: u32,
}

impl<'a> Voice<'a> {
    /// Selects equation `index` with parameters at the centre of its domain
    /// and the counter at zero.
    pub fn new(registry: Registry<'a>, index: usize) -> Result<Self, RegistryError> {
        let equation = *registry.get(index)?;
        let params = equation.domain().center();

        Ok(Self {
            registry,
            index,
            equation,
            params,
            time: 0,
        })
    }

    /// Switches to another equation, clamping the current parameters into
    /// its domain. On error the voice is left untouched.
    pub fn select(&mut self, index: usize) -> Result<(), RegistryError> {
        let equation = *self.registry.get(index)?;
        self.params = equation.domain().clamp(self.params);
        self.equation = equation;
        self.index = index;

        debug!(
            "voice switched to equation {} with a={} b={} c={}",
            index, self.params.a, self.params.b, self.params.c
        );

        Ok(())
    }

    /// Stores parameters as given. Use [`ParameterDomain::clamp`] first to
    /// keep them inside the declared domain.
    pub fn set_parameters(&mut self, params: Parameters) {
        if !self.equation.domain().contains(params) {
            trace!(
                "equation {} running outside its domain: {:?}",
                self.index,
                params
            );
        }
        self.params = params;
    }

    /// Current parameters.
    pub fn parameters(&self) -> Parameters {
        self.params
    }

    /// Index of the selected equation.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Domain of the selected equation.
    pub fn domain(&self) -> ParameterDomain {
        self.equation.domain()
    }

    /// Registry this voice draws equations from.
    pub fn registry(&self) -> Registry<'a> {
        self.registry
    }

    /// Value of `t` for the next sample.
    pub fn time(&self) -> u32 {
        self.time
    }

    /// Moves the counter.
    pub fn set_time(&mut self, time: u32) {
        self.time = time;
    }

    /// Evaluates the current equation at `t`, then advances `t` by one,
    /// wrapping after `u32::MAX`.
    #[inline]
    pub fn next_sample(&mut self) -> u8 {
        let sample = self.equation.evaluate(self.time, self.params);
        self.time = self.time.wrapping_add(1);
        sample
    }

    /// Fills `out` with consecutive samples.
    pub fn render(&mut self, out: &mut [u8]) {
        for slot in out.iter_mut() {
            *slot = self.next_sample();
        }
    }

    /// Renders `len` samples into a new buffer.
    pub fn render_to_vec(&mut self, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        self.render(&mut out);
        out
    }
}
