// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Insertion-ordered columnar result tables.
//!
//! A [`Table`] is a fixed, ordered set of named columns, each an
//! independently growable sequence of values. All public operations keep
//! the table rectangular: every column has the same length. New rows only
//! enter through [`Table::append`], which binds another table's rows onto
//! matching columns.

pub use column::{Column, ColumnValues};
pub use error::TableError;
pub use table::Table;

mod append;
mod column;
mod display;
mod error;
mod table;

pub type Result<T> = std::result::Result<T, TableError>;
