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

// src/operations.rs
// The operation table. Adding a command means adding a descriptor here,
// nothing else in the shim changes.

use crate::descriptor::{DefaultOutput, OperationDescriptor, ParameterKind, ParameterSpec};

pub static GET_NAMED_QUERY: OperationDescriptor = OperationDescriptor {
    name: "GetNamedQuery",
    command: "get-named-query",
    summary: "Returns a single named query",
    params: &[ParameterSpec {
        name: "named_query_id",
        request_field: "NamedQueryId",
        required: true,
        kind: ParameterKind::String,
        aliases: &["id"],
    }],
    response_fields: &["NamedQuery"],
    default_output: DefaultOutput::Field("NamedQuery"),
    destructive: false,
    confirm_target: None,
};

pub static BATCH_GET_NAMED_QUERY: OperationDescriptor = OperationDescriptor {
    name: "BatchGetNamedQuery",
    command: "batch-get-named-query",
    summary: "Returns several named queries, plus the ids that could not be processed",
    params: &[ParameterSpec {
        name: "named_query_ids",
        request_field: "NamedQueryIds",
        required: true,
        kind: ParameterKind::StringList,
        aliases: &["ids"],
    }],
    response_fields: &["NamedQueries", "UnprocessedNamedQueryIds"],
    default_output: DefaultOutput::Everything,
    destructive: false,
    confirm_target: None,
};

pub static GET_NOTEBOOK_METADATA: OperationDescriptor = OperationDescriptor {
    name: "GetNotebookMetadata",
    command: "get-notebook-metadata",
    summary: "Returns the metadata of a notebook",
    params: &[ParameterSpec {
        name: "notebook_id",
        request_field: "NotebookId",
        required: true,
        kind: ParameterKind::String,
        aliases: &["id"],
    }],
    response_fields: &["NotebookMetadata"],
    default_output: DefaultOutput::Field("NotebookMetadata"),
    destructive: false,
    confirm_target: None,
};

pub static GET_QUERY_RUNTIME_STATISTICS: OperationDescriptor = OperationDescriptor {
    name: "GetQueryRuntimeStatistics",
    command: "get-query-runtime-statistics",
    summary: "Returns runtime statistics of a query execution",
    params: &[ParameterSpec {
        name: "query_execution_id",
        request_field: "QueryExecutionId",
        required: true,
        kind: ParameterKind::String,
        aliases: &["id"],
    }],
    response_fields: &["QueryRuntimeStatistics"],
    default_output: DefaultOutput::Everything,
    destructive: false,
    confirm_target: None,
};

pub static DELETE_NAMED_QUERY: OperationDescriptor = OperationDescriptor {
    name: "DeleteNamedQuery",
    command: "delete-named-query",
    summary: "Deletes a named query",
    params: &[ParameterSpec {
        name: "named_query_id",
        request_field: "NamedQueryId",
        required: true,
        kind: ParameterKind::String,
        aliases: &["id"],
    }],
    response_fields: &[],
    default_output: DefaultOutput::Nothing,
    destructive: true,
    confirm_target: Some("named_query_id"),
};

pub static TERMINATE_SESSION: OperationDescriptor = OperationDescriptor {
    name: "TerminateSession",
    command: "terminate-session",
    summary: "Terminates a session and returns its resulting state",
    params: &[ParameterSpec {
        name: "session_id",
        request_field: "SessionId",
        required: true,
        kind: ParameterKind::String,
        aliases: &["id"],
    }],
    response_fields: &["State"],
    default_output: DefaultOutput::Field("State"),
    destructive: true,
    confirm_target: Some("session_id"),
};

pub static ALL: &[&OperationDescriptor] = &[
    &GET_NAMED_QUERY,
    &BATCH_GET_NAMED_QUERY,
    &GET_NOTEBOOK_METADATA,
    &GET_QUERY_RUNTIME_STATISTICS,
    &DELETE_NAMED_QUERY,
    &TERMINATE_SESSION,
];

/// Looks a descriptor up by command name or remote operation name.
pub fn find(name: &str) -> Option<&'static OperationDescriptor> {
    ALL.iter()
        .copied()
        .find(|d| d.command.eq_ignore_ascii_case(name) || d.name.eq_ignore_ascii_case(name))
}
