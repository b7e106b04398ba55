// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::str::FromStr;

use crate::BenchError;

/// Unit the measured seconds are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeUnit {
	#[default]
	Millis,
	Micros,
	Nanos,
	Secs,
	/// Raw seconds, no rounding applied.
	Raw,
}

impl TimeUnit {
	/// Multiplier applied to a duration in seconds.
	pub fn factor(&self) -> f64 {
		match self {
			TimeUnit::Millis => 1e3,
			TimeUnit::Micros => 1e6,
			TimeUnit::Nanos => 1e9,
			TimeUnit::Secs => 1.0,
			TimeUnit::Raw => 1.0,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			TimeUnit::Millis => "ms",
			TimeUnit::Micros => "us",
			TimeUnit::Nanos => "ns",
			TimeUnit::Secs => "s",
			TimeUnit::Raw => "raw",
		}
	}
}

impl FromStr for TimeUnit {
	type Err = BenchError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"ms" => Ok(TimeUnit::Millis),
			"us" => Ok(TimeUnit::Micros),
			"ns" => Ok(TimeUnit::Nanos),
			"s" => Ok(TimeUnit::Secs),
			"raw" => Ok(TimeUnit::Raw),
			other => Err(BenchError::InvalidArgument {
				reason: format!("unknown time unit '{}', expected ms, us, ns, s or raw", other),
			}),
		}
	}
}

/// Knobs for a benchmark run.
#[derive(Debug, Clone, Copy)]
pub struct BenchOptions {
	/// Number of evaluations per expression.
	pub neval: u32,
	/// Reporting unit for the timing columns.
	pub unit: TimeUnit,
	/// Decimal places kept after unit conversion.
	pub digits: u32,
}

impl Default for BenchOptions {
	fn default() -> Self {
		Self {
			neval: 1,
			unit: TimeUnit::Millis,
			digits: 5,
		}
	}
}

impl BenchOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn neval(mut self, neval: u32) -> Self {
		self.neval = neval;
		self
	}

	pub fn unit(mut self, unit: TimeUnit) -> Self {
		self.unit = unit;
		self
	}

	pub fn digits(mut self, digits: u32) -> Self {
		self.digits = digits;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_unit_from_str() {
		assert_eq!("ms".parse::<TimeUnit>().unwrap(), TimeUnit::Millis);
		assert_eq!("us".parse::<TimeUnit>().unwrap(), TimeUnit::Micros);
		assert_eq!("ns".parse::<TimeUnit>().unwrap(), TimeUnit::Nanos);
		assert_eq!("s".parse::<TimeUnit>().unwrap(), TimeUnit::Secs);
		assert_eq!("raw".parse::<TimeUnit>().unwrap(), TimeUnit::Raw);
		assert!("minutes".parse::<TimeUnit>().is_err());
	}

	#[test]
	fn test_unit_factor() {
		assert_eq!(TimeUnit::Millis.factor(), 1e3);
		assert_eq!(TimeUnit::Nanos.factor(), 1e9);
		assert_eq!(TimeUnit::Raw.factor(), 1.0);
	}

	#[test]
	fn test_options_builder() {
		let options = BenchOptions::new().neval(100).unit(TimeUnit::Micros).digits(3);
		assert_eq!(options.neval, 100);
		assert_eq!(options.unit, TimeUnit::Micros);
		assert_eq!(options.digits, 3);
	}
}
