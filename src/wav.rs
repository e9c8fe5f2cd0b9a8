//! 8-bit PCM WAV encoding through `hound`.

use std::io::Cursor;
use std::path::Path;

use anyhow::{anyhow, Result};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

/// Classic bytebeat rate.
pub const DEFAULT_SAMPLE_RATE: u32 = 8000;

/// Mono 8-bit PCM at `sample_rate`.
pub fn wav_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 8,
        sample_format: SampleFormat::Int,
    }
}

// hound exposes 8-bit PCM as i8 and stores it offset by 128, so flipping the
// top bit keeps the byte on disk identical to the equation output.
#[inline]
fn to_pcm(sample: u8) -> i8 {
    (sample ^ 0x80) as i8
}

#[inline]
fn from_pcm(sample: i8) -> u8 {
    (sample as u8) ^ 0x80
}

/// Encodes samples into an in-memory WAV file.
pub fn encode_wav(samples: &[u8], sample_rate: u32) -> Result<Vec<u8>> {
    let mut wav = vec![];
    let mut cursor = Cursor::new(&mut wav);

    let mut wav_writer = WavWriter::new(&mut cursor, wav_spec(sample_rate))
        .map_err(|e| anyhow!("Failed to start WAV stream: {}", e))?;

    for &sample in samples {
        wav_writer
            .write_sample(to_pcm(sample))
            .map_err(|e| anyhow!("Failed to write WAV sample: {}", e))?;
    }

    wav_writer
        .finalize()
        .map_err(|e| anyhow!("Failed to finalize WAV stream: {}", e))?;

    Ok(wav)
}

/// Writes samples to a WAV file at `path`.
pub fn write_wav(path: &Path, samples: &[u8], sample_rate: u32) -> Result<()> {
    let mut wav_writer = WavWriter::create(path, wav_spec(sample_rate))
        .map_err(|e| anyhow!("Failed to create WAV file '{}': {}", path.display(), e))?;

    for &sample in samples {
        wav_writer
            .write_sample(to_pcm(sample))
            .map_err(|e| anyhow!("Failed to write WAV sample: {}", e))?;
    }

    wav_writer
        .finalize()
        .map_err(|e| anyhow!("Failed to finalize WAV file '{}': {}", path.display(), e))?;

    log::debug!("wrote {} samples to {}", samples.len(), path.display());

    Ok(())
}

/// Reads back an 8-bit mono WAV produced by [`encode_wav`] or [`write_wav`].
pub fn decode_wav(bytes: &[u8]) -> Result<(WavSpec, Vec<u8>)> {
    let mut reader =
        WavReader::new(Cursor::new(bytes)).map_err(|e| anyhow!("Failed to parse WAV: {}", e))?;
    let spec = reader.spec();

    if spec.bits_per_sample != 8 || spec.channels != 1 || spec.sample_format != SampleFormat::Int {
        return Err(anyhow!(
            "expected mono 8-bit PCM, got {} channel(s) at {} bits",
            spec.channels,
            spec.bits_per_sample
        ));
    }

    let samples = reader
        .samples::<i8>()
        .map(|s| s.map(from_pcm))
        .collect::<std::result::Result<Vec<u8>, _>>()
        .map_err(|e| anyhow!("Failed to read WAV sample: {}", e))?;

    Ok((spec, samples))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pcm_mapping() {
        assert_eq!(to_pcm(0), -128);
        assert_eq!(to_pcm(128), 0);
        assert_eq!(to_pcm(255), 127);
        for sample in 0..=255u8 {
            assert_eq!(from_pcm(to_pcm(sample)), sample);
        }
    }

    #[test]
    fn test_encoded_header() {
        let wav = encode_wav(&[0, 64, 128, 255], 8000).unwrap();
        assert_eq!(&wav[..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        // 8-bit PCM stores the unsigned bytes verbatim at the end of the data chunk
        assert_eq!(&wav[wav.len() - 4..], &[0, 64, 128, 255]);
    }

    #[test]
    fn test_decode_rejects_other_formats() {
        let spec = WavSpec {
            channels: 1,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut wav = vec![];
        {
            let mut cursor = Cursor::new(&mut wav);
            let mut writer = WavWriter::new(&mut cursor, spec).unwrap();
            writer.write_sample(0i16).unwrap();
            writer.finalize().unwrap();
        }
        assert!(decode_wav(&wav).is_err());
    }
}
