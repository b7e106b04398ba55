// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	env,
	error::Error,
	path::{Path, PathBuf},
	process::ExitCode,
};

use quickbench_census::CensusPipeline;
use quickbench_core::{BenchOptions, benchmark};
use quickbench_expr::{Environment, Value};
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
usage:
  quickbench bench [--neval N] [--unit ms|us|ns|s|raw] [--digits D] EXPR...
  quickbench census [CSV_PATH [EDUC_CSV_PATH]]

QUICKBENCH_LOG controls log output (e.g. QUICKBENCH_LOG=debug).";

fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_env("QUICKBENCH_LOG"))
		.init();

	let args: Vec<String> = env::args().skip(1).collect();
	match run(&args) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("error: {}", err);
			ExitCode::FAILURE
		}
	}
}

fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
	match args.first().map(String::as_str) {
		Some("bench") => run_bench(&args[1..]),
		Some("census") => run_census(&args[1..]),
		Some("--help") | Some("-h") | None => {
			println!("{}", USAGE);
			Ok(())
		}
		Some(other) => Err(format!("unknown command '{}'\n{}", other, USAGE).into()),
	}
}

fn run_bench(args: &[String]) -> Result<(), Box<dyn Error>> {
	let mut options = BenchOptions::default();
	let mut expressions = Vec::new();

	let mut iter = args.iter();
	while let Some(arg) = iter.next() {
		match arg.as_str() {
			"--neval" => {
				let raw = iter.next().ok_or("--neval requires a value")?;
				options = options.neval(raw.parse().map_err(|_| {
					format!("--neval expects a positive integer, got '{}'", raw)
				})?);
			}
			"--unit" => {
				let raw = iter.next().ok_or("--unit requires a value")?;
				options = options.unit(raw.parse()?);
			}
			"--digits" => {
				let raw = iter.next().ok_or("--digits requires a value")?;
				options = options.digits(raw.parse().map_err(|_| {
					format!("--digits expects a non-negative integer, got '{}'", raw)
				})?);
			}
			expr => expressions.push(expr.to_string()),
		}
	}

	info!(
		expressions = expressions.len(),
		neval = options.neval,
		unit = options.unit.as_str(),
		"running benchmark"
	);

	let env = demo_environment();
	let table = benchmark(&expressions, &env, &options)?;
	println!("{}", table);
	Ok(())
}

/// Bindings benchmark expressions may reference, standing in for live
/// pipeline results a caller would otherwise have in scope.
fn demo_environment() -> Environment {
	let mut env = Environment::new();
	env.bind("x", Value::Int(42))
		.bind("pi", Value::Float(std::f64::consts::PI))
		.bind("city", Value::Str("Chicago".to_string()))
		.bind("population", Value::Int(670212));
	env
}

fn run_census(args: &[String]) -> Result<(), Box<dyn Error>> {
	let path = args.first().map(PathBuf::from).unwrap_or_else(bundled_sample);
	let educ_path = args.get(1).map(PathBuf::from).unwrap_or_else(bundled_education);

	info!(path = %path.display(), educ_path = %educ_path.display(), "running census pipeline");
	let report = CensusPipeline::new().run(&path, &educ_path)?;

	println!("== Total population across community areas ==");
	println!("{}", report.population);
	println!("== Total households across community areas ==");
	println!("{}", report.households);

	for topic in &report.topics {
		println!("== Summary: {} ==", topic.name);
		println!("{}", topic.summary);
	}

	for chart in &report.charts {
		println!("{}", chart);
	}

	for topic in &report.topics {
		for chart in &topic.charts {
			println!("{}", chart);
		}
	}

	Ok(())
}

fn bundled_sample() -> PathBuf {
	Path::new(env!("CARGO_MANIFEST_DIR"))
		.join("../../crates/census/testdata/chi_census_2010_sample.csv")
}

fn bundled_education() -> PathBuf {
	Path::new(env!("CARGO_MANIFEST_DIR"))
		.join("../../crates/census/testdata/chi_educ_2010_sample.csv")
}
