// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Chicago community-area census ETL: extract topic tables from the 2010
//! census CSV, reshape them into tidy long form, summarize per category
//! and render top-area bar charts.
//!
//! [`CensusPipeline::run`] drives all stages in one invocation; the
//! individual stage functions are exported for use as benchmark targets.

pub mod chart;
pub mod extract;
pub mod reshape;
pub mod summarize;

mod error;
mod pipeline;

pub use chart::BarChart;
pub use error::CensusError;
pub use pipeline::{CensusPipeline, PipelineReport, TopicReport};

pub type Result<T> = std::result::Result<T, CensusError>;
