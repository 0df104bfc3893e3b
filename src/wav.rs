//! Buzzer auditions as 16-bit mono PCM WAV.
//!
//! The buzzer is driven by a PWM square wave at a low duty cycle. An audition
//! is a list of tone/silence segments; tones reproduce the PWM waveform,
//! re-centered around zero and scaled to a modest amplitude.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Audition sample rate.
pub const SAMPLE_RATE: u32 = 44_100;

/// Size of the canonical RIFF/WAVE header written by [`encode_wav`].
pub const WAV_HEADER_LEN: usize = 44;

/// Most 16-bit samples whose RIFF size still fits in a `u32`.
pub const MAX_SAMPLES: usize = ((u32::MAX - 36) / 2) as usize;

/// Highest sample rate whose byte rate still fits in a `u32`.
pub const MAX_SAMPLE_RATE: u32 = u32::MAX / 2;

/// Segment kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SegmentKind {
    Tone,
    Silence,
}

impl FromStr for SegmentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tone" => Ok(Self::Tone),
            "silence" => Ok(Self::Silence),
            other => Err(Error::UnknownSegmentKind(other.to_string())),
        }
    }
}

impl TryFrom<String> for SegmentKind {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<SegmentKind> for String {
    fn from(kind: SegmentKind) -> Self {
        kind.to_string()
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Tone => "tone",
            Self::Silence => "silence",
        })
    }
}

/// A stretch of tone or silence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub kind: SegmentKind,
    /// Duration in milliseconds
    pub ms: u32,
}

impl Segment {
    pub const fn tone(ms: u32) -> Self {
        Self {
            kind: SegmentKind::Tone,
            ms,
        }
    }

    pub const fn silence(ms: u32) -> Self {
        Self {
            kind: SegmentKind::Silence,
            ms,
        }
    }

    /// Number of samples this segment occupies at `sample_rate`.
    ///
    /// `ms * sample_rate / 1000`, rounded half to even.
    pub fn sample_count(&self, sample_rate: u32) -> usize {
        let num = u64::from(self.ms) * u64::from(sample_rate);
        let (q, r) = (num / 1000, num % 1000);
        let n = if r > 500 || (r == 500 && q % 2 == 1) {
            q + 1
        } else {
            q
        };
        n as usize
    }
}

/// PWM tone parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneSpec {
    pub sample_rate: u32,
    pub freq_hz: u32,
    /// High time per period, percent
    pub duty_pct: u8,
    /// Peak level in `[0, 1]` of full scale
    pub amplitude: f64,
}

impl Default for ToneSpec {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
            freq_hz: crate::tones::DEFAULT_FREQ_HZ,
            duty_pct: crate::tones::ACTION_DUTY_PCT,
            amplitude: 0.25,
        }
    }
}

impl ToneSpec {
    /// Set the PWM duty cycle.
    #[must_use]
    pub fn with_duty(mut self, duty_pct: u8) -> Self {
        self.duty_pct = duty_pct;
        self
    }

    /// Set the tone frequency.
    #[must_use]
    pub fn with_freq(mut self, freq_hz: u32) -> Self {
        self.freq_hz = freq_hz;
        self
    }

    /// Check that these parameters can be synthesized and written.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTone`] if the sample rate is zero or above
    /// [`MAX_SAMPLE_RATE`], the duty cycle is above 100 % or the amplitude is
    /// outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), Error> {
        if self.sample_rate == 0 || self.sample_rate > MAX_SAMPLE_RATE {
            return Err(Error::InvalidTone(format!(
                "sample rate {} Hz outside 1..={}",
                self.sample_rate, MAX_SAMPLE_RATE
            )));
        }
        if self.duty_pct > 100 {
            return Err(Error::InvalidTone(format!(
                "duty cycle {}% above 100%",
                self.duty_pct
            )));
        }
        if !(0.0..=1.0).contains(&self.amplitude) {
            return Err(Error::InvalidTone(format!(
                "amplitude {} outside [0, 1]",
                self.amplitude
            )));
        }
        Ok(())
    }

    /// Largest absolute sample value a tone can reach.
    pub fn peak(&self) -> i16 {
        (self.amplitude.clamp(0.0, 1.0) * 32767.0) as i16
    }
}

/// Render `segments` to samples.
///
/// A single sample clock runs across all segments, so a tone that follows a
/// silence starts at whatever PWM phase the clock has reached.
///
/// # Example
///
/// ```
/// use gc9307_preview::wav::{synthesize, Segment, ToneSpec};
///
/// let spec = ToneSpec::default();
/// let samples = synthesize(&[Segment::tone(30), Segment::silence(120)], &spec);
/// assert_eq!(samples.len(), 1323 + 5292);
/// assert!(samples[1323..].iter().all(|s| *s == 0));
/// ```
pub fn synthesize(segments: &[Segment], spec: &ToneSpec) -> Vec<i16> {
    let total: usize = segments.iter().map(|s| s.sample_count(spec.sample_rate)).sum();
    let duty = f64::from(spec.duty_pct) / 100.0;
    let mut samples = Vec::with_capacity(total);
    let mut t: u64 = 0;

    for seg in segments {
        let n = seg.sample_count(spec.sample_rate);
        match seg.kind {
            SegmentKind::Silence => samples.extend(std::iter::repeat(0).take(n)),
            SegmentKind::Tone => {
                for i in 0..n as u64 {
                    let phase = ((t + i) * u64::from(spec.freq_hz)) as f64
                        / f64::from(spec.sample_rate)
                        % 1.0;
                    let v = if phase < duty { 1.0 } else { 0.0 };
                    let s = (v * 2.0 - 1.0) * spec.amplitude;
                    samples.push((s.clamp(-1.0, 1.0) * 32767.0) as i16);
                }
            }
        }
        t += n as u64;
    }
    samples
}

/// Wrap samples in a canonical 44-byte PCM WAV header (mono, 16-bit).
///
/// # Errors
///
/// [`Error::InvalidTone`] if the byte rate or the data length does not fit
/// its 32-bit header field.
pub fn encode_wav(samples: &[i16], sample_rate: u32) -> Result<Vec<u8>, Error> {
    const CHANNELS: u16 = 1;
    const BITS: u16 = 16;
    let block_align = CHANNELS * BITS / 8;
    let byte_rate = sample_rate
        .checked_mul(u32::from(block_align))
        .ok_or_else(|| Error::InvalidTone(format!("sample rate {sample_rate} Hz too high")))?;
    let too_long = || Error::InvalidTone(format!("{} samples exceed the WAV size limit", samples.len()));
    let data_len = samples
        .len()
        .checked_mul(usize::from(block_align))
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(too_long)?;
    let riff_len = data_len.checked_add(36).ok_or_else(too_long)?;

    let mut out = Vec::with_capacity(WAV_HEADER_LEN + data_len as usize);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&riff_len.to_le_bytes());
    out.extend_from_slice(b"WAVE");

    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&CHANNELS.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&BITS.to_le_bytes());

    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    for s in samples {
        out.extend_from_slice(&s.to_le_bytes());
    }
    Ok(out)
}

/// Validate `spec`, synthesize `segments` and encode the result as WAV.
///
/// The clip length is checked before any sample is generated.
pub fn encode_clip(segments: &[Segment], spec: &ToneSpec) -> Result<Vec<u8>, Error> {
    spec.validate()?;
    let total = segments
        .iter()
        .try_fold(0usize, |acc, s| acc.checked_add(s.sample_count(spec.sample_rate)))
        .filter(|n| *n <= MAX_SAMPLES)
        .ok_or_else(|| {
            let ms: u64 = segments.iter().map(|s| u64::from(s.ms)).sum();
            Error::InvalidTone(format!("{ms} ms clip exceeds the WAV size limit"))
        })?;

    let samples = synthesize(segments, spec);
    tracing::debug!(
        "{} segments -> {} samples at {} Hz",
        segments.len(),
        total,
        spec.sample_rate
    );
    encode_wav(&samples, spec.sample_rate)
}

/// Synthesize `segments` and write the WAV file to `path`.
pub fn write_wav(path: &Path, segments: &[Segment], spec: &ToneSpec) -> Result<usize, Error> {
    let bytes = encode_clip(segments, spec)?;
    crate::render::write_asset(path, &bytes)?;
    Ok(bytes.len())
}
