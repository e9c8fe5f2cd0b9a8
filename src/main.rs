use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};

use glitchstorm::automation::{random_parameters, RandomWalk};
use glitchstorm::indicator::{format_pattern, led_pattern};
use glitchstorm::random::Random;
use glitchstorm::sidecar::{format_toml, RenderSettings};
use glitchstorm::wav::{write_wav, DEFAULT_SAMPLE_RATE};
use glitchstorm::{ParameterDomain, Parameters, Registry, Voice};

fn parse_duration(s: &str) -> Result<Duration, std::num::ParseIntError> {
    let ms: u64 = s.parse()?;
    Ok(Duration::from_millis(ms))
}

/// Render Glitch Storm bytebeat equations to 8-bit WAV files
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Parameter overrides; anything left out starts at the domain centre.
#[derive(clap::Args, Debug)]
struct ParamArgs {
    /// Parameter a
    #[arg(short, long)]
    a: Option<u8>,

    /// Parameter b
    #[arg(short, long)]
    b: Option<u8>,

    /// Parameter c
    #[arg(short, long)]
    c: Option<u8>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every equation with its LED pattern and parameter domain
    List,
    /// Render one equation with fixed parameters
    Render {
        /// Equation index
        index: usize,

        #[command(flatten)]
        params: ParamArgs,

        /// Clamp parameters into the equation's declared domain
        #[arg(long)]
        clamp: bool,

        /// Value of t for the first sample
        #[arg(long, default_value_t = 0)]
        start_time: u32,

        /// Render length in milliseconds
        #[arg(long, default_value = "5000", value_parser = parse_duration)]
        duration: Duration,

        /// Output sample rate in Hz
        #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,

        /// Output WAV path (defaults to equation_<index>.wav)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print raw sample bytes of one equation
    Dump {
        /// Equation index
        index: usize,

        #[command(flatten)]
        params: ParamArgs,

        /// Value of t for the first sample
        #[arg(long, default_value_t = 0)]
        start_time: u32,

        /// Number of samples to print
        #[arg(long, default_value_t = 32)]
        count: usize,
    },
    /// Render a random walk across equations and parameters
    Storm {
        /// Random walk seed
        #[arg(long, default_value_t = Random::DEFAULT_SEED)]
        seed: u32,

        /// Equation to start from
        #[arg(long, default_value_t = 0)]
        start_equation: usize,

        /// Start from random parameters instead of the domain centre
        #[arg(long)]
        random_start: bool,

        /// Samples between parameter steps
        #[arg(long, default_value_t = 2000)]
        step_interval: u32,

        /// Parameter steps between equation changes
        #[arg(long, default_value_t = 16)]
        equation_interval: u32,

        /// Render length in milliseconds
        #[arg(long, default_value = "30000", value_parser = parse_duration)]
        duration: Duration,

        /// Output sample rate in Hz
        #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,

        /// Output WAV path
        #[arg(long, default_value = "storm.wav")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let registry = Registry::reference();

    match args.command {
        Commands::List => {
            for (i, equation) in registry.iter() {
                let (a_min, a_max, b_min, b_max, c_min, c_max) = equation.domain().as_tuple();
                let leds = led_pattern(i)
                    .map(|pattern| format_pattern(&pattern))
                    .unwrap_or_else(|| "----".to_string());
                println!(
                    "{:>2}  {}  a {:>2}..{:<3} b {:>2}..{:<3} c {:>2}..{:<3}",
                    i, leds, a_min, a_max, b_min, b_max, c_min, c_max
                );
            }
        }
        Commands::Render {
            index,
            params,
            clamp,
            start_time,
            duration,
            sample_rate,
            output,
        } => {
            let mut voice = Voice::new(registry, index)?;
            let parameters = resolve_parameters(&voice, &params, clamp);
            voice.set_parameters(parameters);
            voice.set_time(start_time);

            let samples = voice.render_to_vec(sample_count(duration, sample_rate));

            let output = output.unwrap_or_else(|| PathBuf::from(format!("equation_{}.wav", index)));
            let settings = RenderSettings {
                equation: index,
                parameters,
                sample_rate,
                start_time,
                sample_count: samples.len(),
                seed: None,
            };
            write_render(&output, &samples, &settings, &voice.domain())?;
        }
        Commands::Dump {
            index,
            params,
            start_time,
            count,
        } => {
            let mut voice = Voice::new(registry, index)?;
            let parameters = resolve_parameters(&voice, &params, false);
            voice.set_parameters(parameters);
            voice.set_time(start_time);

            let samples = voice.render_to_vec(count);
            for (row, chunk) in samples.chunks(16).enumerate() {
                let t = start_time.wrapping_add((row * 16) as u32);
                let bytes: Vec<String> = chunk.iter().map(|s| format!("{:3}", s)).collect();
                println!("{:>10}: {}", t, bytes.join(" "));
            }
        }
        Commands::Storm {
            seed,
            start_equation,
            random_start,
            step_interval,
            equation_interval,
            duration,
            sample_rate,
            output,
        } => {
            let mut voice = Voice::new(registry, start_equation)?;
            if random_start {
                let mut rng = Random::new(seed ^ 0xA5A5_A5A5);
                let parameters = random_parameters(&mut rng, &voice);
                voice.set_parameters(parameters);
            }

            let settings = RenderSettings {
                equation: start_equation,
                parameters: voice.parameters(),
                sample_rate,
                start_time: 0,
                sample_count: sample_count(duration, sample_rate),
                seed: Some(seed),
            };
            let domain = voice.domain();

            let mut walk = RandomWalk::new(seed, step_interval, equation_interval)?;
            let mut samples = vec![0u8; settings.sample_count];
            walk.render(&mut voice, &mut samples)?;

            info!(
                "storm ended on equation {} with {:?}",
                voice.index(),
                voice.parameters()
            );

            write_render(&output, &samples, &settings, &domain)?;
        }
    }

    Ok(())
}

fn resolve_parameters(voice: &Voice<'_>, args: &ParamArgs, clamp: bool) -> Parameters {
    let domain = voice.domain();
    let center = domain.center();
    let parameters = Parameters::new(
        args.a.unwrap_or(center.a),
        args.b.unwrap_or(center.b),
        args.c.unwrap_or(center.c),
    );

    if clamp {
        return domain.clamp(parameters);
    }

    if !domain.contains(parameters) {
        warn!(
            "parameters {:?} are outside the domain of equation {} ({:?}); rendering as given",
            parameters,
            voice.index(),
            domain.as_tuple()
        );
    }
    parameters
}

fn sample_count(duration: Duration, sample_rate: u32) -> usize {
    (duration.as_millis() * sample_rate as u128 / 1000) as usize
}

fn write_render(
    output: &Path,
    samples: &[u8],
    settings: &RenderSettings,
    domain: &ParameterDomain,
) -> Result<()> {
    write_wav(output, samples, settings.sample_rate)?;

    let name = output
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "glitchstorm".to_string());
    let toml_path = output.with_extension("toml");
    std::fs::write(&toml_path, format_toml(&name, settings, domain))
        .with_context(|| format!("unable to write sidecar '{}'", toml_path.display()))?;

    info!(
        "rendered {} samples to {} ({})",
        samples.len(),
        output.display(),
        toml_path.display()
    );

    Ok(())
}
