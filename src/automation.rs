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

//! Random-walk automation over equations and parameters.
//!
//! Every `step_interval` samples one parameter drifts by one step and is held
//! inside the current domain. Every `equation_interval` steps a new equation
//! is drawn from the registry.

use anyhow::{anyhow, Result};
use log::{debug, trace};

use crate::params::Parameters;
use crate::random::Random;
use crate::registry::RegistryError;
use crate::voice::Voice;

/// Random-walk driver for a [`Voice`].
#[derive(Debug, Clone)]
pub struct RandomWalk {
    rng: Random,
    step_interval: u32,
    equation_interval: u32,
    samples_until_step: u32,
    steps_until_switch: u32,
}

impl RandomWalk {
    /// Creates a walk.
    ///
    /// # Arguments
    /// * `seed` - Generator seed; equal seeds give equal renders
    /// * `step_interval` - Samples between parameter steps
    /// * `equation_interval` - Parameter steps between equation changes
    pub fn new(seed: u32, step_interval: u32, equation_interval: u32) -> Result<Self> {
        if step_interval == 0 {
            return Err(anyhow!("step_interval must be at least 1 sample"));
        }
        if equation_interval == 0 {
            return Err(anyhow!("equation_interval must be at least 1 step"));
        }

        Ok(Self {
            rng: Random::new(seed),
            step_interval,
            equation_interval,
            samples_until_step: step_interval,
            steps_until_switch: equation_interval,
        })
    }

    /// Applies one parameter step, and an equation change when one is due.
    pub fn step(&mut self, voice: &mut Voice<'_>) -> Result<(), RegistryError> {
        let domain = voice.domain();
        let mut params = voice.parameters();

        let (value, range) = match self.rng.below(3) {
            0 => (&mut params.a, domain.a),
            1 => (&mut params.b, domain.b),
            _ => (&mut params.c, domain.c),
        };
        let moved = if self.rng.coin() {
            value.saturating_add(1)
        } else {
            value.saturating_sub(1)
        };
        *value = range.clamp(moved);

        trace!("random walk step: {:?}", params);
        voice.set_parameters(params);

        self.steps_until_switch -= 1;
        if self.steps_until_switch == 0 {
            self.steps_until_switch = self.equation_interval;
            let next = self.rng.below(voice.registry().len() as u32) as usize;
            debug!("random walk moving from equation {} to {}", voice.index(), next);
            voice.select(next)?;
        }

        Ok(())
    }

    /// Renders `out` from `voice`, stepping the walk on schedule.
    pub fn render(&mut self, voice: &mut Voice<'_>, out: &mut [u8]) -> Result<(), RegistryError> {
        for slot in out.iter_mut() {
            if self.samples_until_step == 0 {
                self.step(voice)?;
                self.samples_until_step = self.step_interval;
            }
            self.samples_until_step -= 1;
            *slot = voice.next_sample();
        }
        Ok(())
    }
}

/// Parameters drawn uniformly from a voice's current domain.
pub fn random_parameters(rng: &mut Random, voice: &Voice<'_>) -> Parameters {
    let domain = voice.domain();
    let mut pick = |min: u8, max: u8| min + rng.below(max as u32 - min as u32 + 1) as u8;
    Parameters::new(
        pick(domain.a.min, domain.a.max),
        pick(domain.b.min, domain.b.max),
        pick(domain.c.min, domain.c.max),
    )
}
