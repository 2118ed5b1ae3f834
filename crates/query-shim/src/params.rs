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

// src/params.rs
// Bound parameter values and request construction.

use serde_json::{Map, Value};

use crate::descriptor::{OperationDescriptor, ParameterKind, ParameterSpec};
use crate::errors::ShimError;

/// RequestValue is the JSON object sent to the remote operation.
pub type RequestValue = Map<String, Value>;

/// ResponseValue is the raw JSON returned by the remote operation.
pub type ResponseValue = Value;

/// A value bound to a parameter for one invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParameterValue {
    Null,
    String(String),
    List(Vec<String>),
}

impl ParameterValue {
    /// Empty strings and empty lists count as null.
    pub fn is_empty(&self) -> bool {
        match self {
            ParameterValue::Null => true,
            ParameterValue::String(s) => s.is_empty(),
            ParameterValue::List(items) => items.is_empty(),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            ParameterValue::Null => Value::Null,
            ParameterValue::String(s) => Value::String(s.clone()),
            ParameterValue::List(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
        }
    }

    fn fits(&self, kind: ParameterKind) -> bool {
        matches!(
            (self, kind),
            (ParameterValue::Null, _)
                | (ParameterValue::String(_), ParameterKind::String)
                | (ParameterValue::List(_), ParameterKind::StringList)
        )
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        ParameterValue::String(value.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        ParameterValue::String(value)
    }
}

impl From<Vec<String>> for ParameterValue {
    fn from(value: Vec<String>) -> Self {
        ParameterValue::List(value)
    }
}

impl<T: Into<ParameterValue>> From<Option<T>> for ParameterValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(ParameterValue::Null)
    }
}

/// How a required parameter stands before the request is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    Supplied,
    Omitted,
    SuppliedEmpty,
}

/// BoundParameters keeps the caller's values in binding order. A name that
/// was never bound is absent; a name bound to null is present as
/// `ParameterValue::Null`.
#[derive(Clone, Debug, Default)]
pub struct BoundParameters {
    values: Vec<(String, ParameterValue)>,
}

impl BoundParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a value. A name differing only in case replaces the earlier
    /// binding; an alias is kept alongside it, and the later of the two
    /// wins at lookup.
    pub fn bind(&mut self, name: impl Into<String>, value: impl Into<ParameterValue>) {
        let name = name.into();
        let value = value.into();
        self.values.retain(|(n, _)| !n.eq_ignore_ascii_case(&name));
        self.values.push((name, value));
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        self.bind(name, value);
        self
    }

    /// Bind only when the caller actually supplied something.
    pub fn bind_if_supplied<T: Into<ParameterValue>>(&mut self, name: &str, value: Option<T>) {
        if let Some(value) = value {
            self.bind(name, value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
        self.values.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// The value bound for a descriptor parameter, under any of its names.
    /// The most recent binding wins.
    pub fn lookup(&self, spec: &ParameterSpec) -> Option<&ParameterValue> {
        self.values
            .iter()
            .rev()
            .find(|(n, _)| spec.answers_to(n))
            .map(|(_, v)| v)
    }

    pub fn presence(&self, spec: &ParameterSpec) -> Presence {
        match self.lookup(spec) {
            None => Presence::Omitted,
            Some(v) if v.is_empty() => Presence::SuppliedEmpty,
            Some(_) => Presence::Supplied,
        }
    }

    /// Build the request strictly from the descriptor's parameter mapping.
    /// Bound names the descriptor does not know are ignored, and null
    /// optional parameters are left out.
    pub fn to_request(&self, descriptor: &OperationDescriptor) -> Result<RequestValue, ShimError> {
        for (name, _) in self.iter() {
            if descriptor.param(name).is_none() {
                tracing::debug!(
                    operation = descriptor.name,
                    parameter = name,
                    "Ignoring parameter the operation does not declare"
                );
            }
        }

        let mut request = RequestValue::new();
        for spec in descriptor.params {
            let Some(value) = self.lookup(spec) else {
                continue;
            };
            if !value.fits(spec.kind) {
                return Err(ShimError::ParameterKindMismatch {
                    operation: descriptor.name.to_string(),
                    parameter: spec.request_field.to_string(),
                    expected: spec.kind.describe(),
                });
            }
            if value.is_empty() {
                continue;
            }
            request.insert(spec.request_field.to_string(), value.to_json());
        }
        Ok(request)
    }
}
