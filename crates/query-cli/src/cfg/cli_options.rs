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

use clap::{Parser, Subcommand};

use crate::cli_output::OutputFormat;
use crate::{named_query, notebook, operation_table, query_execution, session};

#[derive(Parser, Debug)]
#[clap(name = "query-cli")]
#[clap(about = "Run query service operations from the command line")]
#[clap(rename_all = "kebab_case")]
pub struct CliOptions {
    #[clap(long, default_value = "false", help = "Print version number and exit")]
    pub version: bool,

    #[clap(
        long,
        global = true,
        env = "QUERY_CLI_ENDPOINT_URL",
        help = "Service endpoint to send requests to. Defaults to the regional public endpoint."
    )]
    pub endpoint_url: Option<String>,

    #[clap(
        long,
        global = true,
        env = "QUERY_CLI_REGION",
        help = "Region of the service, used for the default endpoint"
    )]
    pub region: Option<String>,

    #[clap(
        long,
        global = true,
        help = "Seconds to wait for the service before giving up on a request"
    )]
    pub timeout_secs: Option<u64>,

    #[clap(short, long, global = true, default_value_t, value_enum)]
    pub format: OutputFormat,

    #[clap(
        short,
        long,
        global = true,
        help = "Write output to this file instead of stdout. The file must not exist yet."
    )]
    pub output: Option<String>,

    #[clap(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity, repeat for more (-dd)"
    )]
    pub debug: u8,

    #[clap(subcommand)]
    pub commands: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
#[clap(rename_all = "kebab_case")]
pub enum CliCommand {
    #[clap(about = "Named query related handling", subcommand)]
    NamedQuery(named_query::Cmd),
    #[clap(about = "Notebook related handling", subcommand)]
    Notebook(notebook::Cmd),
    #[clap(about = "Query execution related handling", subcommand)]
    QueryExecution(query_execution::Cmd),
    #[clap(about = "Session related handling", subcommand)]
    Session(session::Cmd),
    #[clap(about = "List the operations this tool can run")]
    Operations(operation_table::Args),
}

impl CliOptions {
    pub fn load() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cmd_structure() {
        CliOptions::command().debug_assert();
    }

    // parse_global_options ensures global flags are accepted after the
    // subcommand as well as before it.
    #[test]
    fn parse_global_options() {
        let opts = CliOptions::try_parse_from([
            "query-cli",
            "--endpoint-url",
            "http://localhost:4566",
            "named-query",
            "get",
            "q-1",
            "--format",
            "yaml",
            "-dd",
        ])
        .expect("should parse global options");

        assert_eq!(opts.endpoint_url.as_deref(), Some("http://localhost:4566"));
        assert_eq!(opts.format, OutputFormat::Yaml);
        assert_eq!(opts.debug, 2);
        assert!(matches!(opts.commands, Some(CliCommand::NamedQuery(_))));
    }

    // parse_default_format ensures json is the default output format.
    #[test]
    fn parse_default_format() {
        let opts = CliOptions::try_parse_from(["query-cli", "operations"])
            .expect("should parse operations");
        assert_eq!(opts.format, OutputFormat::Json);
        assert!(opts.output.is_none());
    }

    // parse_rejects_unknown_format ensures only the known formats parse.
    #[test]
    fn parse_rejects_unknown_format() {
        let result = CliOptions::try_parse_from(["query-cli", "--format", "xml", "operations"]);
        assert!(result.is_err(), "should fail with unknown format");
    }

    #[test]
    fn parse_version_without_command() {
        let opts = CliOptions::try_parse_from(["query-cli", "--version"])
            .expect("should parse --version");
        assert!(opts.version);
        assert!(opts.commands.is_none());
    }
}
