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

// src/descriptor.rs
// Static metadata describing one remote operation.

use serde::Serialize;

/// The shape of value a parameter accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ParameterKind {
    String,
    StringList,
}

impl ParameterKind {
    pub fn describe(&self) -> &'static str {
        match self {
            ParameterKind::String => "a single string",
            ParameterKind::StringList => "a list of strings",
        }
    }
}

/// One parameter of a remote operation, and where it lands in the request.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ParameterSpec {
    /// Binding name, as callers supply it (snake_case).
    pub name: &'static str,
    /// Wire name of the request field.
    pub request_field: &'static str,
    pub required: bool,
    pub kind: ParameterKind,
    pub aliases: &'static [&'static str],
}

impl ParameterSpec {
    /// Whether `name` refers to this parameter by binding name, wire name
    /// or alias. Matching is case-insensitive.
    pub fn answers_to(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.request_field.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

/// What an operation returns when the caller does not pick a selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DefaultOutput {
    /// A single top-level field of the response.
    Field(&'static str),
    /// The full response, unmodified.
    Everything,
    /// No output at all (mutations and deletes).
    Nothing,
}

/// OperationDescriptor is defined once per remote operation and never
/// mutated at runtime.
#[derive(Debug, Serialize)]
pub struct OperationDescriptor {
    /// Remote operation name, e.g. `GetNamedQuery`.
    pub name: &'static str,
    /// Command name, e.g. `get-named-query`.
    pub command: &'static str,
    pub summary: &'static str,
    pub params: &'static [ParameterSpec],
    /// Top-level fields a response may carry; field selectors must name one.
    pub response_fields: &'static [&'static str],
    pub default_output: DefaultOutput,
    /// Destructive operations ask for confirmation unless forced.
    pub destructive: bool,
    /// Parameter whose value names the affected resource in prompts.
    pub confirm_target: Option<&'static str>,
}

impl OperationDescriptor {
    pub fn param(&self, name: &str) -> Option<&ParameterSpec> {
        self.params.iter().find(|p| p.answers_to(name))
    }

    pub fn required_params(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.params.iter().filter(|p| p.required)
    }

    /// Canonical spelling of a response field, if the operation has it.
    pub fn response_field(&self, name: &str) -> Option<&'static str> {
        self.response_fields
            .iter()
            .copied()
            .find(|f| f.eq_ignore_ascii_case(name))
    }
}
