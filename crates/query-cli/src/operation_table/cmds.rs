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

use prettytable::{Row, Table};
use query_shim::{DefaultOutput, OperationDescriptor, operations};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::args::Args;
use crate::cli_output::OutputFormat;
use crate::errors::{QueryCliError, QueryCliResult};
use crate::{async_write_table_as_csv, async_writeln};

pub fn selected_operations(args: &Args) -> QueryCliResult<Vec<&'static OperationDescriptor>> {
    match args.name.as_deref() {
        None => Ok(operations::ALL.to_vec()),
        Some(name) => operations::find(name).map(|d| vec![d]).ok_or_else(|| {
            QueryCliError::GenericError(format!(
                "Unknown operation '{name}', run `query-cli operations` to list them"
            ))
        }),
    }
}

fn default_output_text(default_output: DefaultOutput) -> String {
    match default_output {
        DefaultOutput::Field(name) => name.to_string(),
        DefaultOutput::Everything => "*".to_string(),
        DefaultOutput::Nothing => "(nothing)".to_string(),
    }
}

pub fn operations_table(descriptors: &[&OperationDescriptor]) -> Table {
    let mut table = Table::new();
    table.set_titles(Row::from(vec![
        "Command",
        "Operation",
        "Parameters",
        "Default Output",
        "Destructive",
    ]));
    for d in descriptors {
        let params = d
            .params
            .iter()
            .map(|p| {
                if p.required {
                    format!("{} ({})", p.name, p.kind.describe())
                } else {
                    format!("[{}] ({})", p.name, p.kind.describe())
                }
            })
            .collect::<Vec<String>>()
            .join(", ");
        table.add_row(Row::from(vec![
            d.command.to_string(),
            d.name.to_string(),
            params,
            default_output_text(d.default_output),
            d.destructive.to_string(),
        ]));
    }
    table
}

// show only reads the static table, so it takes the output sink and
// format directly instead of a RuntimeContext with a service client.
pub async fn show<W>(
    args: Args,
    output_file: &mut W,
    output_format: OutputFormat,
) -> QueryCliResult<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let descriptors = selected_operations(&args)?;
    match output_format {
        OutputFormat::Json => {
            async_writeln!(output_file, "{}", serde_json::to_string_pretty(&descriptors)?)?;
        }
        OutputFormat::Yaml => {
            async_writeln!(output_file, "{}", serde_yaml::to_string(&descriptors)?.trim_end())?;
        }
        OutputFormat::Csv => {
            let table = operations_table(&descriptors);
            async_write_table_as_csv!(output_file, table)?;
        }
        OutputFormat::AsciiTable => {
            let table = operations_table(&descriptors);
            async_writeln!(output_file, "{table}")?;
        }
    }
    output_file.flush().await?;
    Ok(())
}
