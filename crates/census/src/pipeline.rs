// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::path::Path;

use quickbench_table::{Column, ColumnValues, Table, TableError};
use tracing::info;

use crate::{
	CensusError, Result,
	chart::BarChart,
	extract::{load_csv, select},
	reshape::{combine_age_brackets, melt, numeric, sum_matching},
	summarize::{aggregate, describe},
};

const ID_COLS: [&str; 2] = ["Geog", "GeogKey"];
const TOP_N: usize = 10;

/// One demographic topic carried through the pipeline: its tidy long table,
/// the per-category summary, and one top-area chart per category.
#[derive(Debug, Clone)]
pub struct TopicReport {
	pub name: &'static str,
	pub long: Table,
	pub summary: Table,
	pub charts: Vec<String>,
}

/// Everything one pipeline run produces. Nothing outlives this value.
#[derive(Debug, Clone)]
pub struct PipelineReport {
	/// One-row mean/median/min/max/sum of total population across areas.
	pub population: Table,
	/// Same summary for total households.
	pub households: Table,
	pub topics: Vec<TopicReport>,
	/// Top-area charts for the headline population and household counts.
	pub charts: Vec<String>,
}

/// Drives extract -> reshape -> summarize -> chart over a community-area
/// census CSV and its companion education CSV. Each stage takes and returns
/// explicit tables; the pipeline holds no state between runs.
#[derive(Debug, Clone)]
pub struct CensusPipeline {
	chart_width: usize,
}

impl Default for CensusPipeline {
	fn default() -> Self {
		Self {
			chart_width: 40,
		}
	}
}

impl CensusPipeline {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn chart_width(mut self, width: usize) -> Self {
		self.chart_width = width;
		self
	}

	pub fn run(&self, census_csv: &Path, education_csv: &Path) -> Result<PipelineReport> {
		let census = load_csv(census_csv)?;
		info!(areas = census.row_count()?, "extracted census table");

		let mut topics = Vec::new();

		// RACE
		let race = select(&census, "Geog|Hispanic")?;
		let race_long = melt(&race, &ID_COLS, "Race_Ethnicity", "Population")?;
		topics.push(self.topic("race", race_long, "Race_Ethnicity", "Population")?);

		// AGE: per-gender brackets first collapse into combined ones
		let age = combine_age_brackets(&select(&census, "Geog|years")?)?;
		let age_long = melt(&age, &ID_COLS, "Age_Group", "Population")?;
		topics.push(self.topic("age", age_long, "Age_Group", "Population")?);

		// GENDER: all male and all female columns summed per area
		let gender_wide = select(&census, "Geog|Male|Female")?;
		let gender = Table::new(vec![
			id_column(&census, "Geog")?,
			id_column(&census, "GeogKey")?,
			sum_matching(&gender_wide, "Male", "male")?,
			sum_matching(&gender_wide, "Female", "female")?,
		]);
		let gender_long = melt(&gender, &ID_COLS, "Gender", "Population")?;
		topics.push(self.topic("gender", gender_long, "Gender", "Population")?);

		// EDUCATION comes from the companion attainment CSV
		let education = select(&load_csv(education_csv)?, "Geog|Total")?;
		let education_long = melt(&education, &ID_COLS, "Education_Level", "Population")?;
		topics.push(self.topic("education", education_long, "Education_Level", "Population")?);

		// HOUSING
		let housing = select(&census, "Geog|Housing Units")?;
		let housing_long = melt(&housing, &ID_COLS, "Occupied_Status", "Housing_Units")?;
		topics.push(self.topic("housing", housing_long, "Occupied_Status", "Housing_Units")?);

		// OCCUPANCY
		let occupancy = select(&census, "Geog|Owned|Renter")?;
		let occupancy_long = melt(&occupancy, &ID_COLS, "Occupied_Type", "Housing_Units")?;
		topics.push(self.topic("occupancy", occupancy_long, "Occupied_Type", "Housing_Units")?);

		let population = describe(&census, "Total Population")?;
		let households = describe(&select(&census, "Geog|Household")?, "Total Households")?;

		let charts = vec![
			BarChart::new("Top Ten Chicago CAs By Population")
				.width(self.chart_width)
				.render(&census, "Geog", "Total Population", TOP_N)?,
			BarChart::new("Top Ten Chicago CAs By Households")
				.width(self.chart_width)
				.render(&census, "Geog", "Total Households", TOP_N)?,
		];

		info!(topics = topics.len(), charts = charts.len(), "census pipeline complete");

		Ok(PipelineReport {
			population,
			households,
			topics,
			charts,
		})
	}

	fn topic(
		&self,
		name: &'static str,
		long: Table,
		var_col: &str,
		value_col: &str,
	) -> Result<TopicReport> {
		Ok(TopicReport {
			name,
			summary: aggregate(&long, var_col, value_col)?,
			charts: self.category_charts(&long, var_col, value_col)?,
			long,
		})
	}

	/// One top-area chart per category of a long table, in first-appearance
	/// order.
	fn category_charts(
		&self,
		long: &Table,
		var_col: &str,
		value_col: &str,
	) -> Result<Vec<String>> {
		let geogs = utf8_column(long, "Geog")?;
		let categories = utf8_column(long, var_col)?;
		let values = numeric(&lookup(long, value_col)?.data).ok_or_else(|| {
			CensusError::Table(TableError::SchemaMismatch {
				reason: format!("column '{}' is not numeric", value_col),
			})
		})?;

		let mut order: Vec<&str> = Vec::new();
		for category in categories {
			if !order.contains(&category.as_str()) {
				order.push(category.as_str());
			}
		}

		let mut charts = Vec::with_capacity(order.len());
		for category in order {
			let mut labels = Vec::new();
			let mut cells = Vec::new();
			for ((geog, cat), value) in geogs.iter().zip(categories).zip(&values) {
				if cat.as_str() == category {
					labels.push(geog.clone());
					cells.push(*value);
				}
			}

			let table = Table::new(vec![
				Column {
					name: "Geog".to_string(),
					data: ColumnValues::Utf8(labels),
				},
				Column::float8(value_col, cells),
			]);
			charts.push(
				BarChart::new(format!("Top Ten Chicago CAs - {}", category))
					.width(self.chart_width)
					.render(&table, "Geog", value_col, TOP_N)?,
			);
		}

		Ok(charts)
	}
}

fn id_column(table: &Table, name: &str) -> Result<Column> {
	lookup(table, name).cloned()
}

fn lookup<'a>(table: &'a Table, name: &str) -> Result<&'a Column> {
	table.column(name).ok_or_else(|| CensusError::MissingColumn {
		name: name.to_string(),
	})
}

fn utf8_column<'a>(table: &'a Table, name: &str) -> Result<&'a Vec<String>> {
	match &lookup(table, name)?.data {
		ColumnValues::Utf8(values) => Ok(values),
		other => Err(CensusError::Table(TableError::SchemaMismatch {
			reason: format!("column '{}' must be utf8, got {}", name, other.type_name()),
		})),
	}
}
