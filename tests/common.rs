use num_complex::Complex;
use rustfft::FftPlanner;

use glitchstorm::{Parameters, Registry, Voice};

/// The four counter values pinned by the golden vectors.
#[allow(dead_code)]
pub const GOLDEN_TIMES: [u32; 4] = [0, 1, 65_535, u32::MAX];

/// Renders `len` samples of a reference equation starting at `start`.
#[allow(dead_code)]
pub fn render(index: usize, params: Parameters, start: u32, len: usize) -> Vec<u8> {
    let mut voice = Voice::new(Registry::reference(), index).expect("valid equation index");
    voice.set_parameters(params);
    voice.set_time(start);
    voice.render_to_vec(len)
}

/// Magnitude spectrum of a byte stream, centred around 128 before the FFT.
#[allow(dead_code)]
pub fn magnitude_spectrum(samples: &[u8]) -> Vec<f32> {
    let mut buffer: Vec<Complex<f32>> = samples
        .iter()
        .map(|&s| Complex::new((s as f32 - 128.0) / 128.0, 0.0))
        .collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(buffer.len());
    fft.process(&mut buffer);

    buffer[..buffer.len() / 2].iter().map(|c| c.norm()).collect()
}
