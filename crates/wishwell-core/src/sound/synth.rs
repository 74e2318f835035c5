//! Tone synthesis for sound cues.
//!
//! Each cue is one or more oscillator notes started 100 ms apart. A note
//! ramps linearly to its volume over 10 ms and then decays exponentially to
//! 0.001 by the end of its duration.

use std::f32::consts::TAU;
use std::io::Cursor;

use super::SoundKind;
use crate::{Error, Result};

/// Sample rate used for every rendered cue.
pub const CUE_SAMPLE_RATE_HZ: u32 = 22_050;

const NOTE_STAGGER_MS: u32 = 100;
const ATTACK_MS: u32 = 10;
const DECAY_FLOOR: f32 = 0.001;
const HEADROOM: f32 = 0.9;

/// Oscillator shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
}

impl Waveform {
    /// Sample the waveform at `phase` cycles (any real number).
    fn sample(self, phase: f32) -> f32 {
        let fraction = phase - phase.floor();
        match self {
            Self::Sine => (TAU * fraction).sin(),
            Self::Square => {
                if fraction < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Self::Sawtooth => 2.0 * fraction - 1.0,
        }
    }
}

/// Acoustic parameters of one cue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    /// Note frequencies in Hz, played in order
    pub frequencies: &'static [f32],
    /// Length of each note
    pub duration_ms: u32,
    pub waveform: Waveform,
    /// Peak gain per note, 0.0..=1.0
    pub volume: f32,
}

impl ToneSpec {
    pub const fn for_kind(kind: SoundKind) -> Self {
        match kind {
            SoundKind::Click => Self {
                frequencies: &[800.0],
                duration_ms: 100,
                waveform: Waveform::Square,
                volume: 0.3,
            },
            // C-E-G major triad
            SoundKind::Success => Self {
                frequencies: &[523.0, 659.0, 784.0],
                duration_ms: 600,
                waveform: Waveform::Sine,
                volume: 0.4,
            },
            SoundKind::Error => Self {
                frequencies: &[200.0],
                duration_ms: 300,
                waveform: Waveform::Sawtooth,
                volume: 0.2,
            },
            SoundKind::Coin => Self {
                frequencies: &[880.0, 1047.0],
                duration_ms: 400,
                waveform: Waveform::Sine,
                volume: 0.5,
            },
            SoundKind::Celebration => Self {
                frequencies: &[1047.0, 1319.0, 1568.0],
                duration_ms: 800,
                waveform: Waveform::Sine,
                volume: 0.3,
            },
            SoundKind::Sparkle => Self {
                frequencies: &[2093.0],
                duration_ms: 200,
                waveform: Waveform::Sine,
                volume: 0.2,
            },
        }
    }

    /// Total cue length including note staggering.
    pub fn total_duration_ms(&self) -> u32 {
        let notes = u32::try_from(self.frequencies.len()).unwrap_or(u32::MAX);
        notes.saturating_sub(1) * NOTE_STAGGER_MS + self.duration_ms
    }

    /// Render mono PCM16 samples at `sample_rate_hz`.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn render(&self, sample_rate_hz: u32) -> Vec<i16> {
        let rate = sample_rate_hz as f32;
        let total = samples_for_ms(self.total_duration_ms(), sample_rate_hz);
        let note_len = samples_for_ms(self.duration_ms, sample_rate_hz);
        let attack_len = samples_for_ms(ATTACK_MS, sample_rate_hz).max(1);
        let decay_len = note_len.saturating_sub(attack_len).max(1);

        let mut mix = vec![0.0_f32; total];
        for (index, &frequency) in self.frequencies.iter().enumerate() {
            let start = samples_for_ms(
                NOTE_STAGGER_MS * u32::try_from(index).unwrap_or(u32::MAX),
                sample_rate_hz,
            );
            for offset in 0..note_len {
                let Some(slot) = mix.get_mut(start + offset) else {
                    break;
                };
                let gain = if offset < attack_len {
                    self.volume * offset as f32 / attack_len as f32
                } else {
                    let progress = (offset - attack_len) as f32 / decay_len as f32;
                    self.volume * (DECAY_FLOOR / self.volume).powf(progress)
                };
                let phase = frequency * offset as f32 / rate;
                *slot += gain * self.waveform.sample(phase);
            }
        }

        mix.into_iter()
            .map(|value| (value.clamp(-1.0, 1.0) * HEADROOM * f32::from(i16::MAX)) as i16)
            .collect()
    }
}

fn samples_for_ms(ms: u32, sample_rate_hz: u32) -> usize {
    let samples = u64::from(ms) * u64::from(sample_rate_hz) / 1_000;
    usize::try_from(samples).unwrap_or(usize::MAX)
}

/// Render the cue for `kind` and encode it as a mono 16-bit WAV file.
pub fn render_cue_wav(kind: SoundKind, sample_rate_hz: u32) -> Result<Vec<u8>> {
    if sample_rate_hz == 0 {
        return Err(Error::InvalidInput(
            "Cue sample rate must be greater than zero".to_string(),
        ));
    }

    let samples = ToneSpec::for_kind(kind).render(sample_rate_hz);
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: sample_rate_hz,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec)
            .map_err(|error| Error::Audio(format!("Failed to initialize WAV writer: {error}")))?;

        for sample in samples {
            writer
                .write_sample(sample)
                .map_err(|error| Error::Audio(format!("Failed to write WAV sample: {error}")))?;
        }

        writer
            .finalize()
            .map_err(|error| Error::Audio(format!("Failed to finalize WAV data: {error}")))?;
    }

    Ok(cursor.into_inner())
}
