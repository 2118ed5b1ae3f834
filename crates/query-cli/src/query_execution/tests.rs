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
//
// Command Structure - Baseline debug_assert() of the entire command.
// Argument Parsing  - Ensure required/optional arg combinations parse correctly.

use clap::{CommandFactory, Parser};
use query_shim::OutputSelector;

use super::args::*;
use super::cmds;

#[test]
fn verify_cmd_structure() {
    Cmd::command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing

// parse_runtime_statistics ensures runtime-statistics parses with
// a query execution ID and no selector.
#[test]
fn parse_runtime_statistics() {
    let cmd = Cmd::try_parse_from(["query-execution", "runtime-statistics", "qe-1"])
        .expect("should parse runtime-statistics");
    match cmd {
        Cmd::RuntimeStatistics(args) => {
            assert_eq!(args.query_execution_id.as_deref(), Some("qe-1"));
            assert_eq!(args.select.selector(), OutputSelector::Default);
        }
    }
}

// parse_runtime_statistics_field ensures a single response field
// can be selected.
#[test]
fn parse_runtime_statistics_field() {
    let cmd = Cmd::try_parse_from([
        "query-execution",
        "runtime-statistics",
        "qe-1",
        "--select",
        "QueryRuntimeStatistics",
    ])
    .expect("should parse runtime-statistics with --select");
    match cmd {
        Cmd::RuntimeStatistics(args) => assert_eq!(
            args.select.selector(),
            OutputSelector::Field("QueryRuntimeStatistics".to_string())
        ),
    }
}

#[test]
fn runtime_statistics_invocation_binds_id() {
    let args = RuntimeStatistics {
        query_execution_id: Some("qe-1".to_string()),
        select: Default::default(),
    };
    let invocation = cmds::runtime_statistics_invocation(args);
    assert_eq!(invocation.descriptor.name, "GetQueryRuntimeStatistics");
    let names: Vec<&str> = invocation.bound.iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["query_execution_id"]);
}
