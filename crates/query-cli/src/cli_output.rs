/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 * http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

// src/cli_output.rs
// Rendering of operation results. Results are free-form JSON, so tables
// are derived from the shape of the value rather than from a schema.

use clap::ValueEnum;
use prettytable::{Row, Table};
use serde_json::Value;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::errors::QueryCliResult;
use crate::{async_write_table_as_csv, async_writeln};

#[derive(Default, PartialEq, Eq, ValueEnum, Clone, Copy, Debug)]
#[clap(rename_all = "kebab_case")]
pub enum OutputFormat {
    AsciiTable,
    Csv,
    #[default]
    Json,
    Yaml,
}

// cell_text is how a single JSON value shows up inside a table cell.
// Strings lose their quotes, nested values stay compact JSON.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Turn a result into a table:
///
/// - an object becomes Field/Value rows, one per key
/// - an array of objects becomes one row per element, with a column per
///   key seen across all elements
/// - anything else becomes a single Value column
pub fn value_to_table(value: &Value) -> Table {
    let mut table = Table::new();
    match value {
        Value::Object(map) => {
            table.set_titles(Row::from(vec!["Field", "Value"]));
            for (key, v) in map {
                table.add_row(Row::from(vec![key.clone(), cell_text(v)]));
            }
        }
        Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => {
            let mut columns: Vec<&str> = Vec::new();
            for item in items.iter().filter_map(Value::as_object) {
                for key in item.keys() {
                    if !columns.contains(&key.as_str()) {
                        columns.push(key);
                    }
                }
            }
            table.set_titles(Row::from(columns.clone()));
            for item in items {
                table.add_row(Row::from(
                    columns
                        .iter()
                        .map(|c| item.get(*c).map(cell_text).unwrap_or_default())
                        .collect::<Vec<String>>(),
                ));
            }
        }
        Value::Array(items) => {
            table.set_titles(Row::from(vec!["Value"]));
            for item in items {
                table.add_row(Row::from(vec![cell_text(item)]));
            }
        }
        scalar => {
            table.set_titles(Row::from(vec!["Value"]));
            table.add_row(Row::from(vec![cell_text(scalar)]));
        }
    }
    table
}

/// Write one result value in the requested format.
pub async fn write_value<W>(
    output_file: &mut W,
    output_format: OutputFormat,
    value: &Value,
) -> QueryCliResult<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    match output_format {
        OutputFormat::Json => {
            async_writeln!(output_file, "{}", serde_json::to_string_pretty(value)?)?;
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(value)?;
            async_writeln!(output_file, "{}", yaml.trim_end())?;
        }
        OutputFormat::AsciiTable => {
            let table = value_to_table(value);
            async_writeln!(output_file, "{table}")?;
        }
        OutputFormat::Csv => {
            let table = value_to_table(value);
            async_write_table_as_csv!(output_file, table)?;
        }
    }
    output_file.flush().await?;
    Ok(())
}
