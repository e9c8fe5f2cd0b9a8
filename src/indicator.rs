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

//! Binary LED readout of the selected equation.
//!
//! The hardware shows the equation index on four LEDs, which caps the
//! displayable range at 0..15. Registries may grow past that; larger indices
//! simply have no pattern.

/// Number of indicator LEDs.
pub const LED_COUNT: usize = 4;

/// Highest index count the LEDs can tell apart.
pub const DISPLAYABLE_EQUATIONS: usize = 1 << LED_COUNT;

/// LED states for `index`, most significant bit first. `None` when the index
/// does not fit in four bits.
pub fn led_pattern(index: usize) -> Option<[bool; LED_COUNT]> {
    if index >= DISPLAYABLE_EQUATIONS {
        return None;
    }

    let mut pattern = [false; LED_COUNT];
    for (led, lit) in pattern.iter_mut().enumerate() {
        *lit = (index >> (LED_COUNT - 1 - led)) & 1 == 1;
    }
    Some(pattern)
}

/// Renders a pattern as text, `#` for lit and `.` for dark.
pub fn format_pattern(pattern: &[bool; LED_COUNT]) -> String {
    pattern.iter().map(|&lit| if lit { '#' } else { '.' }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns() {
        assert_eq!(led_pattern(0), Some([false, false, false, false]));
        assert_eq!(led_pattern(1), Some([false, false, false, true]));
        assert_eq!(led_pattern(6), Some([false, true, true, false]));
        assert_eq!(led_pattern(15), Some([true, true, true, true]));
    }

    #[test]
    fn test_index_past_four_bits_has_no_pattern() {
        assert_eq!(led_pattern(16), None);
        assert_eq!(led_pattern(usize::MAX), None);
    }

    #[test]
    fn test_format() {
        assert_eq!(format_pattern(&led_pattern(9).unwrap()), "#..#");
        assert_eq!(format_pattern(&led_pattern(0).unwrap()), "....");
    }
}
