//! Read-only view over the loaded catalog frame.

use polars::prelude::*;

use crate::core::{
    constants::{CAST_COLUMN, TYPE_COLUMN, YEAR_COLUMN},
    error::EdaError,
};

/// One title per row; only `type`, `cast` and `release_year` are consumed.
///
/// Nothing hands out a mutable reference, so every aggregation works on its
/// own derived data and the frame stays as loaded.
#[derive(Debug, Clone)]
pub struct Catalog {
    frame: DataFrame,
}

impl Catalog {
    #[must_use]
    pub fn from_frame(frame: DataFrame) -> Self {
        Self { frame }
    }

    /// `(rows, columns)`.
    #[inline]
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.frame.shape()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.frame.height()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Column names paired with their inferred dtypes, in file order.
    #[must_use]
    pub fn schema(&self) -> Vec<(String, DataType)> {
        self.frame
            .get_columns()
            .iter()
            .map(|c| (c.name().to_string(), c.dtype().clone()))
            .collect()
    }

    fn column(&self, name: &str) -> Result<&Column, EdaError> {
        self.frame
            .column(name)
            .map_err(|_| EdaError::MissingColumn(name.to_owned()))
    }

    fn text(&self, name: &str) -> Result<&StringChunked, EdaError> {
        let col = self.column(name)?;
        col.str().map_err(|_| EdaError::ColumnType {
            column: name.to_owned(),
            found: col.dtype().to_string(),
            expected: "string",
        })
    }

    /// The `type` column; nulls are titles without a type.
    pub fn kinds(&self) -> Result<&StringChunked, EdaError> {
        self.text(TYPE_COLUMN)
    }

    /// The `cast` column; nulls are titles without a cast list.
    pub fn casts(&self) -> Result<&StringChunked, EdaError> {
        self.text(CAST_COLUMN)
    }

    /// The `release_year` column as integers.
    ///
    /// Numeric columns are cast; a column inferred as text (stray spaces,
    /// quoted numbers) is parsed value by value.
    pub fn release_years(&self) -> Result<Vec<Option<i32>>, EdaError> {
        let col = self.column(YEAR_COLUMN)?;
        if let Ok(text) = col.str() {
            return text
                .into_iter()
                .enumerate()
                .map(|(row, v)| v.map(|s| parse_year(row, s)).transpose())
                .collect();
        }

        let years = col
            .cast(&DataType::Int32)
            .map_err(|_| EdaError::ColumnType {
                column: YEAR_COLUMN.to_owned(),
                found: col.dtype().to_string(),
                expected: "integer",
            })?;
        Ok(years.i32()?.into_iter().collect())
    }
}

fn parse_year(row: usize, text: &str) -> Result<i32, EdaError> {
    lexical_core::parse::<i32>(text.trim().as_bytes()).map_err(|_| EdaError::BadYear {
        row,
        text: text.to_owned(),
    })
}
