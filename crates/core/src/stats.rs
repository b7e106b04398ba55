// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::TimeUnit;

/// Five-number summary of a sample set: minimum, lower quartile, median,
/// upper quartile and maximum, in that order. `None` when the sample set
/// is empty.
///
/// Quartiles use linear interpolation between the two nearest order
/// statistics. A single sample collapses all five numbers to that sample.
pub fn quantiles(samples: &[f64]) -> Option<[f64; 5]> {
	if samples.is_empty() {
		return None;
	}

	let mut sorted = samples.to_vec();
	sorted.sort_by(|a, b| a.total_cmp(b));

	Some([
		interpolate(&sorted, 0.0),
		interpolate(&sorted, 0.25),
		interpolate(&sorted, 0.5),
		interpolate(&sorted, 0.75),
		interpolate(&sorted, 1.0),
	])
}

fn interpolate(sorted: &[f64], p: f64) -> f64 {
	let rank = p * (sorted.len() - 1) as f64;
	let lower = rank.floor() as usize;
	let upper = rank.ceil() as usize;
	if lower == upper {
		return sorted[lower];
	}
	let weight = rank - lower as f64;
	sorted[lower] * (1.0 - weight) + sorted[upper] * weight
}

/// Convert a duration in seconds to `unit`, rounding to `digits` decimal
/// places. `Raw` skips both the conversion factor and the rounding.
pub fn scale(seconds: f64, unit: TimeUnit, digits: u32) -> f64 {
	let converted = seconds * unit.factor();
	match unit {
		TimeUnit::Raw => converted,
		_ => round_decimals(converted, digits),
	}
}

fn round_decimals(value: f64, digits: u32) -> f64 {
	let factor = 10f64.powi(digits as i32);
	(value * factor).round() / factor
}
