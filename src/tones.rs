//! Buzzer pattern catalog, mirrored from the firmware's prompt tone tables.
//!
//! Firmware patterns are step lists at a fixed frequency and duty cycle; here
//! they become [`Segment`] lists plus the [`ToneSpec`] they play with.

use crate::wav::{Segment, ToneSpec};

/// Buzzer nominal frequency.
pub const DEFAULT_FREQ_HZ: u32 = 2700;

/// Duty cycle of the prompt tones ("light volume").
pub const DEFAULT_DUTY_PCT: u8 = 8;

/// Duty cycle of the action click.
pub const ACTION_DUTY_PCT: u8 = 12;

/// Length of one action click.
pub const ACTION_CLICK_MS: u32 = 30;

/// Gap between the two clicks of a deny.
pub const ACTION_DOUBLE_GAP_MS: u32 = 40;

/// Silence appended to action auditions so playback is not cut off abruptly.
pub const TAIL_MS: u32 = 120;

/// Times a looping pattern is repeated in its audition.
pub const LOOP_REPEATS: usize = 3;

/// Whether the firmware plays a pattern once or until stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Loop,
}

/// A named buzzer pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    /// Audition file stem (e.g. `action-confirm`)
    pub name: String,
    pub segments: Vec<Segment>,
    pub repeat: Repeat,
    pub spec: ToneSpec,
}

impl Pattern {
    /// Segments as they should be auditioned: loops are unrolled
    /// [`LOOP_REPEATS`] times.
    pub fn audition(&self) -> Vec<Segment> {
        match self.repeat {
            Repeat::Once => self.segments.clone(),
            Repeat::Loop => self.segments.repeat(LOOP_REPEATS),
        }
    }

    /// Total audition length in milliseconds.
    pub fn duration_ms(&self) -> u32 {
        self.audition().iter().map(|s| s.ms).sum()
    }
}

fn action_spec() -> ToneSpec {
    ToneSpec::default()
        .with_freq(DEFAULT_FREQ_HZ)
        .with_duty(ACTION_DUTY_PCT)
}

fn prompt_spec() -> ToneSpec {
    ToneSpec::default()
        .with_freq(DEFAULT_FREQ_HZ)
        .with_duty(DEFAULT_DUTY_PCT)
}

/// `count` repetitions of tone-then-silence.
fn beeps(count: usize, tone_ms: u32, gap_ms: u32) -> Vec<Segment> {
    [Segment::tone(tone_ms), Segment::silence(gap_ms)].repeat(count)
}

/// Single click: an accepted action.
pub fn action_confirm() -> Pattern {
    Pattern {
        name: "action-confirm".to_string(),
        segments: vec![Segment::tone(ACTION_CLICK_MS), Segment::silence(TAIL_MS)],
        repeat: Repeat::Once,
        spec: action_spec(),
    }
}

/// Double click: a rejected action.
pub fn action_deny() -> Pattern {
    Pattern {
        name: "action-deny".to_string(),
        segments: vec![
            Segment::tone(ACTION_CLICK_MS),
            Segment::silence(ACTION_DOUBLE_GAP_MS),
            Segment::tone(ACTION_CLICK_MS),
            Segment::silence(TAIL_MS),
        ],
        repeat: Repeat::Once,
        spec: action_spec(),
    }
}

/// Both action patterns.
pub fn action_patterns() -> Vec<Pattern> {
    vec![action_confirm(), action_deny()]
}

/// Boot, warning, error and safety prompts.
pub fn prompt_patterns() -> Vec<Pattern> {
    let once = |name: &str, segments| Pattern {
        name: name.to_string(),
        segments,
        repeat: Repeat::Once,
        spec: prompt_spec(),
    };

    vec![
        once("prompt-boot-ok", beeps(4, 250, 250)),
        once(
            "prompt-boot-warn",
            vec![
                Segment::tone(500),
                Segment::silence(250),
                Segment::tone(500),
                Segment::silence(750),
            ],
        ),
        once("prompt-boot-fail", beeps(2, 800, 200)),
        once("prompt-warning-once", beeps(5, 200, 200)),
        once("prompt-error-once", beeps(6, 150, 200)),
        Pattern {
            name: "prompt-safety-alarm".to_string(),
            segments: beeps(1, 700, 300),
            repeat: Repeat::Loop,
            spec: prompt_spec(),
        },
    ]
}
