//! Render sidecar describing how a WAV was produced.

use serde::{Deserialize, Serialize};

use crate::indicator::{format_pattern, led_pattern};
use crate::params::{ParameterDomain, Parameters};

/// Everything needed to reproduce a render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Equation index at the start of the render
    pub equation: usize,
    /// Parameters at the start of the render
    pub parameters: Parameters,
    /// Output sample rate in Hz
    pub sample_rate: u32,
    /// Value of `t` for the first sample
    pub start_time: u32,
    /// Number of rendered samples
    pub sample_count: usize,
    /// Random walk seed, when the render was automated
    pub seed: Option<u32>,
}

/// Formats the TOML sidecar written next to a rendered WAV.
pub fn format_toml(name: &str, settings: &RenderSettings, domain: &ParameterDomain) -> String {
    let leds = led_pattern(settings.equation)
        .map(|pattern| format_pattern(&pattern))
        .unwrap_or_else(|| "none".to_string());
    let Parameters { a, b, c } = settings.parameters;
    let (a_min, a_max, b_min, b_max, c_min, c_max) = domain.as_tuple();

    let mut ret = String::new();
    ret.push_str("# GLITCH STORM RENDER\n");
    ret.push_str("version = 0\n");
    ret.push_str(&format!("name = '{}'\n", name));
    ret.push_str(&format!("sample = \"{}.wav\"\n", name));
    ret.push_str(&format!(
        r#"sample-rate = {rate}
start-time = {start}
sample-count = {count}

[equation]
index = {index}
leds = "{leds}"
parameters = {{ a = {a}, b = {b}, c = {c} }}
domain = {{ a = [{a_min}, {a_max}], b = [{b_min}, {b_max}], c = [{c_min}, {c_max}] }}
"#,
        rate = settings.sample_rate,
        start = settings.start_time,
        count = settings.sample_count,
        index = settings.equation,
    ));

    if let Some(seed) = settings.seed {
        ret.push_str(&format!("\n[random-walk]\nseed = {}\n", seed));
    }

    ret
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(seed: Option<u32>) -> RenderSettings {
        RenderSettings {
            equation: 9,
            parameters: Parameters::new(8, 43, 13),
            sample_rate: 8000,
            start_time: 0,
            sample_count: 16000,
            seed,
        }
    }

    #[test]
    fn test_format_toml() {
        let domain = ParameterDomain::new(0, 16, 0, 86, 0, 26);
        let toml = format_toml("storm_9", &settings(None), &domain);
        assert!(toml.starts_with("# GLITCH STORM RENDER\n"));
        assert!(toml.contains("name = 'storm_9'\n"));
        assert!(toml.contains("sample = \"storm_9.wav\"\n"));
        assert!(toml.contains("sample-count = 16000\n"));
        assert!(toml.contains("leds = \"#..#\"\n"));
        assert!(toml.contains("parameters = { a = 8, b = 43, c = 13 }\n"));
        assert!(toml.contains("domain = { a = [0, 16], b = [0, 86], c = [0, 26] }\n"));
        assert!(!toml.contains("[random-walk]"));
    }

    #[test]
    fn test_seed_section() {
        let domain = ParameterDomain::new(0, 16, 0, 86, 0, 26);
        let toml = format_toml("storm", &settings(Some(42)), &domain);
        assert!(toml.ends_with("[random-walk]\nseed = 42\n"));
    }
}
