//! Closed-form generators producing signed 16-bit mono samples.

use core::f64::consts::TAU;

pub const SAMPLE_RATE: u32 = 44_100;

/// Peak magnitude of a full-volume sample.
pub const FULL_SCALE: f64 = 32767.0;

/// The power-up sweep is fixed: 0.2s from 400Hz up to 1000Hz at half volume.
pub const SWEEP_DURATION: f64 = 0.2;
pub const SWEEP_START_HZ: f64 = 400.0;
pub const SWEEP_END_HZ: f64 = 1000.0;
pub const SWEEP_VOLUME: f64 = 0.5;

/// Number of samples covering `duration` seconds, truncated.
pub fn sample_count(duration: f64) -> usize {
    (f64::from(SAMPLE_RATE) * duration) as usize
}

fn seconds_at(index: usize) -> f64 {
    index as f64 / f64::from(SAMPLE_RATE)
}

// `as` truncates toward zero, matching the integer conversion the assets were tuned with
fn quantize(value: f64) -> i16 {
    value as i16
}

/// Pure sine tone.
pub fn tone(frequency: f64, duration: f64, volume: f64) -> Vec<i16> {
    (0..sample_count(duration))
        .map(|i| quantize(volume * FULL_SCALE * (TAU * frequency * seconds_at(i)).sin()))
        .collect()
}

/// Uniform white noise, every sample drawn independently.
pub fn noise(duration: f64, volume: f64) -> Vec<i16> {
    (0..sample_count(duration))
        .map(|_| quantize(fastrand::f64().mul_add(2.0, -1.0) * volume * FULL_SCALE))
        .collect()
}

/// Rising power-up chime.
pub fn sweep() -> Vec<i16> {
    let count = sample_count(SWEEP_DURATION);
    (0..count)
        .map(|i| {
            let progress = i as f64 / count as f64;
            let frequency = progress.mul_add(SWEEP_END_HZ - SWEEP_START_HZ, SWEEP_START_HZ);
            quantize(SWEEP_VOLUME * FULL_SCALE * (TAU * frequency * seconds_at(i)).sin())
        })
        .collect()
}
