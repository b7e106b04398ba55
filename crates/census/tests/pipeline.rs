// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::path::{Path, PathBuf};

use quickbench_census::{CensusError, CensusPipeline, PipelineReport};
use quickbench_table::ColumnValues;

fn sample_path() -> PathBuf {
	Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata/chi_census_2010_sample.csv")
}

fn education_path() -> PathBuf {
	Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata/chi_educ_2010_sample.csv")
}

fn run_sample() -> PipelineReport {
	CensusPipeline::new().run(&sample_path(), &education_path()).unwrap()
}

#[test]
fn test_topics_in_stage_order() {
	let report = run_sample();
	let names: Vec<&str> = report.topics.iter().map(|t| t.name).collect();
	assert_eq!(names, vec!["race", "age", "gender", "education", "housing", "occupancy"]);
}

#[test]
fn test_race_long_covers_all_area_category_pairs() {
	let report = run_sample();
	let race = &report.topics[0];

	// 10 areas x 4 race categories
	assert_eq!(race.long.row_count().unwrap(), 40);
	assert_eq!(race.summary.row_count().unwrap(), 4);
}

#[test]
fn test_age_brackets_are_combined() {
	let report = run_sample();
	let age = &report.topics[1];

	assert_eq!(age.summary.row_count().unwrap(), 3);
	let brackets: Vec<String> =
		(0..3).map(|i| age.summary.column("Age_Group").unwrap().data.as_string(i)).collect();
	assert_eq!(
		brackets,
		vec!["Age Under 18 years", "Age 18 to 64 years", "Age 65 years and over"]
	);
}

#[test]
fn test_gender_totals_match_population() {
	let report = run_sample();
	let gender = &report.topics[2];

	assert_eq!(
		gender.summary.column("Gender").unwrap().data,
		ColumnValues::utf8(["male".to_string(), "female".to_string()])
	);
	assert_eq!(
		gender.summary.column("sum").unwrap().data,
		ColumnValues::float8([341412.0, 328800.0])
	);
}

#[test]
fn test_education_levels_from_companion_csv() {
	let report = run_sample();
	let education = &report.topics[3];

	// 10 areas x 4 attainment levels
	assert_eq!(education.long.row_count().unwrap(), 40);
	assert_eq!(education.summary.row_count().unwrap(), 4);
	assert_eq!(
		education.summary.column("Education_Level").unwrap().data.as_string(0),
		"Total Less than High School Diploma"
	);
}

#[test]
fn test_population_summary() {
	let report = run_sample();

	assert_eq!(report.population.row_count().unwrap(), 1);
	assert_eq!(report.population.column("sum").unwrap().data, ColumnValues::float8([670212.0]));
	assert_eq!(report.population.column("max").unwrap().data, ColumnValues::float8([98514.0]));
}

#[test]
fn test_housing_categories() {
	let report = run_sample();
	let housing = &report.topics[4];

	assert_eq!(housing.long.row_count().unwrap(), 30);
	let statuses: Vec<String> = (0..3)
		.map(|i| housing.summary.column("Occupied_Status").unwrap().data.as_string(i))
		.collect();
	assert_eq!(
		statuses,
		vec!["Total Housing Units", "Occupied Housing Units", "Vacant Housing Units"]
	);
}

#[test]
fn test_population_chart_ranks_areas() {
	let report = run_sample();
	let chart = &report.charts[0];

	let lines: Vec<&str> = chart.lines().collect();
	assert_eq!(lines[0], "Top Ten Chicago CAs By Population");
	assert!(lines[2].starts_with("Austin"));
	assert!(lines[3].starts_with("Lake View"));
}

#[test]
fn test_each_topic_charts_every_category() {
	let report = run_sample();

	for topic in &report.topics {
		assert_eq!(
			topic.charts.len(),
			topic.summary.row_count().unwrap(),
			"topic {} should chart each category",
			topic.name
		);
	}
}

#[test]
fn test_race_category_chart_ranks_areas() {
	let report = run_sample();
	let race = &report.topics[0];
	let hispanic = race
		.charts
		.iter()
		.find(|c| c.starts_with("Top Ten Chicago CAs - Hispanic or Latino"))
		.unwrap();

	// South Lawndale has the largest Hispanic or Latino population
	let lines: Vec<&str> = hispanic.lines().collect();
	assert!(lines[2].starts_with("South Lawndale"));
}

#[test]
fn test_missing_file_is_io_error() {
	let result = CensusPipeline::new().run(Path::new("/nonexistent/census.csv"), &education_path());
	assert!(matches!(result, Err(CensusError::Io(_))));
}

#[test]
fn test_missing_education_file_is_io_error() {
	let result = CensusPipeline::new().run(&sample_path(), Path::new("/nonexistent/educ.csv"));
	assert!(matches!(result, Err(CensusError::Io(_))));
}
