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

use clap::{CommandFactory, Parser};

use super::args::Args;
use super::cmds;
use crate::cli_output::OutputFormat;
use crate::errors::QueryCliError;

#[test]
fn verify_cmd_structure() {
    Args::command().debug_assert();
}

#[test]
fn parse_without_name() {
    let args = Args::try_parse_from(["operations"]).expect("should parse operations");
    assert!(args.name.is_none());
}

// Every operation is listed when no name is given.
#[test]
fn lists_all_operations() {
    let descriptors = cmds::selected_operations(&Args::default()).unwrap();
    assert_eq!(descriptors.len(), 6);
    assert_eq!(cmds::operations_table(&descriptors).len(), 6);
}

// A name narrows the listing down to one operation, by command or
// operation name.
#[test]
fn lists_one_operation() {
    for name in ["terminate-session", "TerminateSession"] {
        let args = Args::try_parse_from(["operations", name]).unwrap();
        let descriptors = cmds::selected_operations(&args).unwrap();
        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].command, "terminate-session");
    }
}

#[test]
fn unknown_operation_is_error() {
    let args = Args {
        name: Some("drop-table".to_string()),
    };
    let err = cmds::selected_operations(&args).unwrap_err();
    assert!(matches!(err, QueryCliError::GenericError(_)));
}

#[test]
fn table_marks_destructive_operations() {
    let descriptors = cmds::selected_operations(&Args {
        name: Some("delete-named-query".to_string()),
    })
    .unwrap();
    let rendered = cmds::operations_table(&descriptors).to_string();
    assert!(rendered.contains("DeleteNamedQuery"));
    assert!(rendered.contains("true"));
    assert!(rendered.contains("(nothing)"));
}

// Listing needs nothing but an output sink, so it works without any
// service client configured.
#[tokio::test]
async fn show_writes_without_client() {
    let mut out: Vec<u8> = Vec::new();
    let args = Args::try_parse_from(["operations", "get-named-query"]).unwrap();
    cmds::show(args, &mut out, OutputFormat::Json).await.unwrap();

    let listed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(listed[0]["command"], "get-named-query");
    assert_eq!(listed[0]["destructive"], false);
}

#[tokio::test]
async fn show_rejects_unknown_name_before_writing() {
    let mut out: Vec<u8> = Vec::new();
    let args = Args {
        name: Some("drop-table".to_string()),
    };
    let err = cmds::show(args, &mut out, OutputFormat::AsciiTable)
        .await
        .unwrap_err();
    assert!(matches!(err, QueryCliError::GenericError(_)));
    assert!(out.is_empty());
}
