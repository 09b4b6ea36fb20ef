use itertools::Itertools;

use crate::keywords::GridAutoFlow;
use crate::values::{GridLength, Length};
use crate::Rule;

fn tracks(values: impl IntoIterator<Item = GridLength>) -> String {
  values.into_iter().join(" ")
}

/// Track list, space separated.
pub fn grid_template_columns(values: impl IntoIterator<Item = GridLength>) -> Rule {
  Rule::declaration("gridTemplateColumns", tracks(values))
}

pub fn grid_template_rows(values: impl IntoIterator<Item = GridLength>) -> Rule {
  Rule::declaration("gridTemplateRows", tracks(values))
}

pub fn grid_template_areas(rows: impl IntoIterator<Item = impl AsRef<str>>) -> Rule {
  let value = rows
    .into_iter()
    .map(|row| format!("\"{}\"", row.as_ref()))
    .join(" ");
  Rule::declaration("gridTemplateAreas", value)
}

pub fn grid_auto_columns(value: GridLength) -> Rule {
  Rule::declaration("gridAutoColumns", value)
}

pub fn grid_auto_rows(value: GridLength) -> Rule {
  Rule::declaration("gridAutoRows", value)
}

pub fn grid_auto_flow(value: GridAutoFlow) -> Rule {
  Rule::declaration("gridAutoFlow", value)
}

/// `grid-column: <start> / <end>`.
pub fn grid_column(start: i32, end: i32) -> Rule {
  Rule::declaration("gridColumn", format!("{start} / {end}"))
}

pub fn grid_row(start: i32, end: i32) -> Rule {
  Rule::declaration("gridRow", format!("{start} / {end}"))
}

pub fn grid_column_start(value: i32) -> Rule {
  Rule::declaration("gridColumnStart", value)
}

pub fn grid_column_end(value: i32) -> Rule {
  Rule::declaration("gridColumnEnd", value)
}

pub fn grid_row_start(value: i32) -> Rule {
  Rule::declaration("gridRowStart", value)
}

pub fn grid_row_end(value: i32) -> Rule {
  Rule::declaration("gridRowEnd", value)
}

/// Places an item in a named area.
pub fn grid_area(name: impl AsRef<str>) -> Rule {
  Rule::declaration("gridArea", name.as_ref())
}

/// `grid-area: <row-start> / <column-start> / <row-end> / <column-end>`.
pub fn grid_area4(row_start: i32, column_start: i32, row_end: i32, column_end: i32) -> Rule {
  Rule::declaration(
    "gridArea",
    format!("{row_start} / {column_start} / {row_end} / {column_end}"),
  )
}

pub fn grid_gap(value: Length) -> Rule {
  Rule::declaration("gridGap", value)
}

pub fn grid_column_gap(value: Length) -> Rule {
  Rule::declaration("gridColumnGap", value)
}

pub fn grid_row_gap(value: Length) -> Rule {
  Rule::declaration("gridRowGap", value)
}
