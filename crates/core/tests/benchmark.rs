// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use quickbench_core::{BenchError, BenchOptions, TimeUnit, bench, benchmark};
use quickbench_expr::{Environment, Value};
use quickbench_table::{ColumnValues, Table};

fn timing(table: &Table, name: &str) -> f64 {
	match &table.column(name).unwrap().data {
		ColumnValues::Float8(values) => values[0],
		other => panic!("column {} is {}", name, other.type_name()),
	}
}

#[test]
fn test_timings_are_ordered() {
	let env = Environment::new();
	let options = BenchOptions::new().neval(50).unit(TimeUnit::Raw);
	let table = bench("sum(range(0, 100))", &env, &options).unwrap();

	let min = timing(&table, "min");
	let lq = timing(&table, "lq");
	let median = timing(&table, "median");
	let uq = timing(&table, "uq");
	let max = timing(&table, "max");

	assert!(min >= 0.0);
	assert!(min <= lq);
	assert!(lq <= median);
	assert!(median <= uq);
	assert!(uq <= max);
}

#[test]
fn test_single_evaluation_collapses_quartiles() {
	let env = Environment::new();
	let options = BenchOptions::new().neval(1).unit(TimeUnit::Raw);
	let table = bench("1 + 1", &env, &options).unwrap();

	let min = timing(&table, "min");
	assert_eq!(timing(&table, "lq"), min);
	assert_eq!(timing(&table, "median"), min);
	assert_eq!(timing(&table, "uq"), min);
	assert_eq!(timing(&table, "max"), min);
}

#[test]
fn test_neval_column_reflects_options() {
	let env = Environment::new();
	let table = bench("1", &env, &BenchOptions::new().neval(7)).unwrap();

	match &table.column("neval").unwrap().data {
		ColumnValues::Int8(values) => assert_eq!(values, &vec![7]),
		other => panic!("neval column is {}", other.type_name()),
	}
}

#[test]
fn test_rows_keep_input_order() {
	let mut env = Environment::new();
	env.bind("x", Value::Int(10));

	let sources = ["x + 1", "x * x", "sqrt(x)"];
	let table = benchmark(sources, &env, &BenchOptions::default()).unwrap();

	assert_eq!(table.row_count().unwrap(), 3);
	let exprs: Vec<String> =
		(0..3).map(|i| table.column("expr").unwrap().data.as_string(i)).collect();
	assert_eq!(exprs, vec!["x + 1", "x * x", "sqrt(x)"]);
}

#[test]
fn test_failure_aborts_whole_run() {
	let env = Environment::new();
	let result = benchmark(["1 + 1", "1 / 0", "2 + 2"], &env, &BenchOptions::default());
	assert!(matches!(result, Err(BenchError::Expression(_))));
}

#[test]
fn test_parse_error_aborts_whole_run() {
	let env = Environment::new();
	let result = benchmark(["1 + 1", "1 +"], &env, &BenchOptions::default());
	assert!(matches!(result, Err(BenchError::Expression(_))));
}

#[test]
fn test_empty_run_is_invalid() {
	let env = Environment::new();
	let result = benchmark(Vec::<String>::new(), &env, &BenchOptions::default());
	assert!(matches!(result, Err(BenchError::InvalidArgument { .. })));
}

#[test]
fn test_benchmark_macro() {
	let env = Environment::new();
	let options = BenchOptions::default();
	let table = quickbench_core::benchmark!(&env, &options; "1 + 1", "2 * 3").unwrap();
	assert_eq!(table.row_count().unwrap(), 2);
}

#[test]
fn test_display_renders_all_columns() {
	let env = Environment::new();
	let table = bench("1 + 1", &env, &BenchOptions::default()).unwrap();
	let rendered = table.to_string();

	for name in ["expr", "min", "lq", "median", "uq", "max", "neval"] {
		assert!(rendered.contains(name), "missing column {} in:\n{}", name, rendered);
	}
	assert!(rendered.contains("1 + 1"));
}
