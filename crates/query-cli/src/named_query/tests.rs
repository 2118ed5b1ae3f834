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
// Invocations       - Parsed args bind the right operation and parameters.

use clap::{CommandFactory, Parser};
use query_shim::{OutputSelector, ParameterValue};

use super::args::*;
use super::cmds;

// verify_cmd_structure runs a baseline clap debug_assert()
// to do basic command configuration checking and validation,
// ensuring things like unique argument definitions, group
// configurations, argument references, etc. Things that would
// otherwise be missed until runtime.
#[test]
fn verify_cmd_structure() {
    Cmd::command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing
//
// This section contains tests specific to argument parsing,
// including testing required arguments, as well as optional
// flag-specific checking.

// parse_get ensures get parses with a named query ID.
#[test]
fn parse_get() {
    let cmd = Cmd::try_parse_from(["named-query", "get", "q-123"]).expect("should parse get");
    match cmd {
        Cmd::Get(args) => {
            assert_eq!(args.named_query_id.as_deref(), Some("q-123"));
            assert!(args.select.select.is_none());
        }
        _ => panic!("expected Get variant"),
    }
}

// parse_get_without_id ensures the ID is left for the shim to
// validate, instead of clap rejecting it.
#[test]
fn parse_get_without_id() {
    let cmd = Cmd::try_parse_from(["named-query", "get"]).expect("should parse get without id");
    match cmd {
        Cmd::Get(args) => assert!(args.named_query_id.is_none()),
        _ => panic!("expected Get variant"),
    }
}

// parse_get_with_select ensures --select parses into each
// selector form.
#[test]
fn parse_get_with_select() {
    for (raw, expected) in [
        ("*", OutputSelector::All),
        ("NamedQuery", OutputSelector::Field("NamedQuery".to_string())),
        (
            "^NamedQueryId",
            OutputSelector::EchoParameter("NamedQueryId".to_string()),
        ),
    ] {
        let cmd = Cmd::try_parse_from(["named-query", "get", "q-1", "--select", raw])
            .expect("should parse get with --select");
        match cmd {
            Cmd::Get(args) => assert_eq!(args.select.select, Some(expected)),
            _ => panic!("expected Get variant"),
        }
    }
}

// parse_batch_get ensures batch-get collects every ID.
#[test]
fn parse_batch_get() {
    let cmd = Cmd::try_parse_from(["named-query", "batch-get", "q-1", "q-2", "q-3"])
        .expect("should parse batch-get");
    match cmd {
        Cmd::BatchGet(args) => {
            assert_eq!(args.named_query_ids, vec!["q-1", "q-2", "q-3"]);
        }
        _ => panic!("expected BatchGet variant"),
    }
}

// parse_delete ensures delete defaults to prompting.
#[test]
fn parse_delete() {
    let cmd = Cmd::try_parse_from(["named-query", "delete", "q-1"]).expect("should parse delete");
    match cmd {
        Cmd::Delete(args) => {
            assert_eq!(args.named_query_id.as_deref(), Some("q-1"));
            assert!(!args.confirm.force);
            assert!(!args.confirm.what_if);
        }
        _ => panic!("expected Delete variant"),
    }
}

// parse_delete_with_flags ensures --force and --what-if parse.
#[test]
fn parse_delete_with_flags() {
    let cmd = Cmd::try_parse_from(["named-query", "delete", "q-1", "--force", "--what-if"])
        .expect("should parse delete with flags");
    match cmd {
        Cmd::Delete(args) => {
            assert!(args.confirm.force);
            assert!(args.confirm.what_if);
        }
        _ => panic!("expected Delete variant"),
    }
}

// parse_get_rejects_force ensures read commands do not take
// confirmation flags.
#[test]
fn parse_get_rejects_force() {
    let result = Cmd::try_parse_from(["named-query", "get", "q-1", "--force"]);
    assert!(result.is_err(), "get should not accept --force");
}

/////////////////////////////////////////////////////////////////////////////
// Invocations

#[test]
fn get_binds_named_query_id() {
    let args = GetNamedQuery {
        named_query_id: Some("q-1".to_string()),
        select: Default::default(),
    };
    let invocation = cmds::get_invocation(args);
    assert_eq!(invocation.descriptor.name, "GetNamedQuery");
    let bound: Vec<_> = invocation.bound.iter().collect();
    assert_eq!(
        bound,
        vec![("named_query_id", &ParameterValue::String("q-1".to_string()))]
    );
}

#[test]
fn batch_get_leaves_empty_list_unbound() {
    let args = BatchGetNamedQuery {
        named_query_ids: vec![],
        select: Default::default(),
    };
    let invocation = cmds::batch_get_invocation(args);
    assert_eq!(invocation.descriptor.name, "BatchGetNamedQuery");
    assert!(invocation.bound.is_empty());
}

#[test]
fn delete_carries_confirm_flags() {
    let cmd = Cmd::try_parse_from(["named-query", "delete", "q-1", "--what-if"]).unwrap();
    let Cmd::Delete(args) = cmd else {
        panic!("expected Delete variant");
    };
    let invocation = cmds::delete_invocation(args);
    assert!(invocation.descriptor.destructive);
    assert!(invocation.options.what_if);
    assert!(!invocation.options.force);
}
