//! Small numeric conversions used by device models: rounding, clock time
//! and pitch.

/// Reference pitch for semitone numbering: C0 in Hz.
pub const C0_HZ: f64 = 16.35;

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

/// Round to the nearest integer, halves rounding up (`-2.5` gives `-2`).
pub fn round_to_integer(x: f64) -> f64 {
    (x + 0.5).floor()
}

pub fn int_to_string(i: i64) -> String {
    i.to_string()
}

/// A duration split into clock fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hms {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
}

/// Hours, minutes and seconds to milliseconds.
pub fn hms_to_ms(hours: i64, minutes: i64, seconds: i64) -> i64 {
    hours * MS_PER_HOUR + minutes * MS_PER_MINUTE + seconds * MS_PER_SECOND
}

/// Split milliseconds into hours, minutes, seconds and milliseconds.
pub fn ms_to_hms(time_ms: i64) -> Hms {
    Hms {
        hours: time_ms / MS_PER_HOUR,
        minutes: time_ms % MS_PER_HOUR / MS_PER_MINUTE,
        seconds: time_ms % MS_PER_MINUTE / MS_PER_SECOND,
        milliseconds: time_ms % MS_PER_SECOND,
    }
}

/// Split milliseconds into hours, minutes and fractional seconds.
pub fn ms_to_hm_seconds(time_ms: i64) -> (i64, i64, f64) {
    let hms = ms_to_hms(time_ms);
    let seconds = (time_ms % MS_PER_MINUTE) as f64 / MS_PER_SECOND as f64;
    (hms.hours, hms.minutes, seconds)
}

pub fn logb2(x: f64) -> f64 {
    x.log2()
}

/// Semitones above C0 for a pitch in Hz.
pub fn pitch_to_semitones(pitch: f64) -> f64 {
    12.0 * logb2(pitch / C0_HZ)
}
